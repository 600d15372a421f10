// Room repositories
pub mod deal_repository;
pub mod room_repository;

pub use deal_repository::*;
pub use room_repository::*;
