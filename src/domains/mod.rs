// Domains module
pub mod auth;
pub mod room;
