//! pptflow - end-to-end verification of a presentation editor's project API
//!
//! This library provides the HTTP client, the individual verification
//! steps and the gated runner used by the `pptflow` binary.

pub mod api;
pub mod cli;
pub mod commands;
pub mod common;
pub mod flow;

// Re-export commonly used types for tests
pub use api::{ApiClient, ProjectApi};
pub use common::{Config, Error, Result};
pub use flow::{RunOptions, RunReport, Stage};
