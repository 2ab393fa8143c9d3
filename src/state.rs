//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::{PreviewService, ThumbnailService};
use crate::domain::probe::ImageProbe;

#[derive(Clone)]
pub struct AppState {
    pub thumbnail_service: Arc<ThumbnailService>,
    pub preview_service: Arc<PreviewService>,
    pub probe: Arc<dyn ImageProbe>,
}

impl AppState {
    /// Wires the services around a single probe.
    pub fn new(probe: Arc<dyn ImageProbe>, thumbnail_cdn: impl Into<String>) -> Self {
        let thumbnail_service = Arc::new(ThumbnailService::new(probe.clone(), thumbnail_cdn));
        let preview_service = Arc::new(PreviewService::new(thumbnail_service.clone()));

        Self {
            thumbnail_service,
            preview_service,
            probe,
        }
    }
}
