//! Business logic services for the application layer.

pub mod preview_service;
pub mod thumbnail_service;

pub use preview_service::PreviewService;
pub use thumbnail_service::{ResolvedThumbnail, ThumbnailService};
