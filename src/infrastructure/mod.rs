//! Infrastructure layer for external integrations.
//!
//! Implements the probe contract defined by the domain layer.
//!
//! # Modules
//!
//! - [`probe`] - HTTP and offline image probes

pub mod probe;
