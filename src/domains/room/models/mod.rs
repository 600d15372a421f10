// Room domain models
pub mod deal;
pub mod room;
pub mod search;

pub use deal::*;
pub use room::*;
pub use search::*;
