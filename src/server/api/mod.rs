//! This module contains the API endpoints for the server.
pub mod questions;
pub mod routes;
pub mod state;
