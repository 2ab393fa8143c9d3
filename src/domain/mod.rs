//! Domain layer containing entities, the probe contract and session state.
//!
//! # Architecture
//!
//! - [`entities`] - Video ids, thumbnail URLs and the embed snippet
//! - [`probe`] - [`probe::ImageProbe`] trait implemented by the infrastructure layer
//! - [`preview_session`] - State of one interactive preview session
//!
//! # Resolution Flow
//!
//! 1. [`crate::utils::video_id::extract_video_id`] pulls a [`entities::VideoId`] out of a URL
//! 2. [`crate::application::services::ThumbnailService`] probes the max-resolution template
//! 3. The max-resolution URL is kept if it exists, otherwise the `hqdefault` URL is used

pub mod entities;
pub mod preview_session;
pub mod probe;
