//! Functionality for serving the question API.

pub mod api;
pub mod app;
pub mod errors;
pub mod tracing;
