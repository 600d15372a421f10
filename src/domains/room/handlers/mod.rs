// Room domain handlers
pub mod room_handler;
