//! Test execution
//!
//! Runs candidate test files as isolated subprocesses.

mod runner;

pub use runner::{RunError, TestRunner, Verbosity, TEST_DIR_ENV};
