//! Application layer services.
//!
//! Services consume the [`crate::domain::probe::ImageProbe`] contract and
//! give HTTP handlers and the CLI a small API.
//!
//! # Available Services
//!
//! - [`services::thumbnail_service::ThumbnailService`] - Video id to thumbnail URL
//! - [`services::preview_service::PreviewService`] - Preview page session state

pub mod services;
