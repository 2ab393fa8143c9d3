//! HTML template rendering handlers.

mod preview;

pub use preview::{PreviewTemplate, preview_handler};
