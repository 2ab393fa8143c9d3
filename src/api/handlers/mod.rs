//! HTTP request handlers for API endpoints.

pub mod embed;
pub mod extract;
pub mod health;
pub mod not_found;
pub mod preview;
pub mod thumbnail;

pub use embed::embed_handler;
pub use extract::extract_handler;
pub use health::health_handler;
pub use not_found::not_found_handler;
pub use preview::preview_json_handler;
pub use thumbnail::thumbnail_handler;
