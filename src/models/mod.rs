//! Data models for Vidrack

pub mod customer;
pub mod genre;
pub mod movie;
pub mod rental;
pub mod user;

// Re-export commonly used types
pub use customer::Customer;
pub use genre::Genre;
pub use movie::Movie;
pub use rental::{CustomerSnapshot, MovieSnapshot, Rental};
pub use user::{User, UserClaims};
