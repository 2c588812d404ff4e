//! # readwait Utilities
//!
//! Shared utilities for the readwait workspace, primarily the logging
//! infrastructure built on `tracing`.
//!
//! Everything readwait prints about itself goes to standard error: the traced
//! child owns standard output, and the monitor must never interleave its own
//! diagnostics with the child's data stream.

pub mod logging;

// Re-export commonly used logging functions for convenience
pub use logging::{LogFormat, LogLevel, init_logging, init_logging_with_level};
pub use tracing::{debug, error, info, trace, warn};
