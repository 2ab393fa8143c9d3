//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization and validator
//! for input validation.

pub mod embed;
pub mod extract;
pub mod health;
pub mod preview;
pub mod thumbnail;
