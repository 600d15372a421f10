// Auth domain models
pub mod auth;
pub mod member;
pub mod jwt;

pub use auth::*;
pub use member::*;
pub use jwt::*;
