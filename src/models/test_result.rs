//! Test result models
//!
//! Defines the per-run execution record and the ordered result collection.

#![allow(dead_code)]

use std::fmt;
use std::time::Duration;

/// Result of a single test execution.
///
/// Created name-bound right before the test is launched, completed exactly
/// once when the run finishes, and never mutated afterwards. The record is
/// owned by the run loop that launched the test and moved into the
/// [`ResultSet`] for reporting.
#[derive(Clone, Debug)]
pub struct TestResult {
    /// Path of the test, as given on the command line or discovered
    pub name: String,
    /// Captured stdout of the run (empty until completion)
    pub stdout: String,
    /// Captured stderr of the run (empty until completion)
    pub stderr: String,
    /// Wall-clock duration of the subprocess lifetime
    pub elapsed: Duration,
    /// True iff the process launched and exited with code 0
    pub passed: bool,
}

impl TestResult {
    /// Create a pending result with all outcome fields defaulted.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            stdout: String::new(),
            stderr: String::new(),
            elapsed: Duration::ZERO,
            passed: false,
        }
    }

    /// Single-character status used by the compact console mode.
    pub fn status_char(&self) -> char {
        if self.passed {
            '.'
        } else {
            'F'
        }
    }

    /// Status label used by the verbose console mode.
    pub fn status_label(&self) -> &'static str {
        if self.passed {
            "PASS"
        } else {
            "FAIL"
        }
    }
}

impl fmt::Display for TestResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} [{:.3}s]",
            self.status_label(),
            self.name,
            self.elapsed.as_secs_f64()
        )
    }
}

/// Ordered collection of test results.
///
/// Insertion order equals execution order, and the length equals the number
/// of tests actually attempted. The set is an explicit value owned by the
/// top-level run loop, not process-wide state.
#[derive(Clone, Debug, Default)]
pub struct ResultSet {
    results: Vec<TestResult>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a completed result, preserving execution order.
    pub fn push(&mut self, result: TestResult) {
        self.results.push(result);
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TestResult> {
        self.results.iter()
    }

    /// Number of results that did not pass.
    pub fn failures(&self) -> usize {
        self.results.iter().filter(|r| !r.passed).count()
    }

    pub fn any_failed(&self) -> bool {
        self.failures() > 0
    }

    /// Sum of the elapsed times of all results.
    pub fn total_time(&self) -> Duration {
        self.results.iter().map(|r| r.elapsed).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(name: &str, passed: bool, millis: u64) -> TestResult {
        let mut result = TestResult::new(name);
        result.passed = passed;
        result.elapsed = Duration::from_millis(millis);
        result
    }

    #[test]
    fn new_result_is_defaulted() {
        let result = TestResult::new("tests/smoke_test.sh");
        assert_eq!(result.name, "tests/smoke_test.sh");
        assert!(result.stdout.is_empty());
        assert!(result.stderr.is_empty());
        assert_eq!(result.elapsed, Duration::ZERO);
        assert!(!result.passed);
    }

    #[test]
    fn status_markers() {
        assert_eq!(result("a", true, 0).status_char(), '.');
        assert_eq!(result("a", false, 0).status_char(), 'F');
        assert_eq!(result("a", true, 0).status_label(), "PASS");
        assert_eq!(result("a", false, 0).status_label(), "FAIL");
    }

    #[test]
    fn result_set_counts_and_order() {
        let mut set = ResultSet::new();
        assert!(set.is_empty());

        set.push(result("first_test", true, 100));
        set.push(result("second_test", false, 50));
        set.push(result("third_test", false, 25));

        assert_eq!(set.len(), 3);
        assert_eq!(set.failures(), 2);
        assert!(set.any_failed());
        assert_eq!(set.total_time(), Duration::from_millis(175));

        let names: Vec<_> = set.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["first_test", "second_test", "third_test"]);
    }

    #[test]
    fn empty_set_has_no_failures() {
        let set = ResultSet::new();
        assert_eq!(set.failures(), 0);
        assert!(!set.any_failed());
        assert_eq!(set.total_time(), Duration::ZERO);
    }
}
