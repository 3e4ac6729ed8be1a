//! Data models
//!
//! Result types shared between the executor and the reporters.

mod test_result;

pub use test_result::{ResultSet, TestResult};
