//! Infrastructure layer providing system-level integrations.
//!
//! The terminal owns stdout, so diagnostics go to a log file instead.

pub mod logging;

pub use logging::*;
