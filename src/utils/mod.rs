//! Utilities
//!
//! Logging setup shared by the binary entry point.

mod logger;

pub use logger::init_logger;
