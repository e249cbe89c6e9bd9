//! # Runtime Support
//!
//! Process-level infrastructure shared by the binary and the tests:
//!
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure

pub mod tracing;

pub use tracing::setup_tracing;
