// Auth repositories
pub mod member_repository;

pub use member_repository::*;
