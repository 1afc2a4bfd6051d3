//! Shared Utilities for the img-webp converter
//!
//! - Batch discovery (extension filtering, recursive walk) and result counters
//! - Path helpers (lowercase extensions, sibling output paths)
//! - Summary reporting
//! - Unified tracing-based logging
//! - Image conversion error types

pub mod batch;
pub mod common_utils;
pub mod img_errors;
pub mod logging;
pub mod report;

pub use batch::*;
pub use report::*;
