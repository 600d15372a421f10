// Room domain services
pub mod deal_service;
pub mod room_service;
pub mod state;

pub use deal_service::*;
pub use room_service::*;
pub use state::*;
