// All repositories module
pub mod auth;
pub mod room;

// Re-export all repositories for convenience
pub use auth::*;
pub use room::*;
