//! Console reporting
//!
//! Renders the post-run failure dump written to stderr.

use std::fmt::Write;

use crate::models::ResultSet;

/// Console reporter for a finished batch.
pub struct ConsoleReporter {
    compact: bool,
}

impl ConsoleReporter {
    /// `compact` must reflect whether the run printed `.`/`F` status
    /// characters, so the open line can be closed before the dump.
    pub fn new(compact: bool) -> Self {
        Self { compact }
    }

    /// Print the failure details for every failed test to stderr.
    pub fn print_failures(&self, results: &ResultSet) {
        if self.compact {
            eprintln!();
        }
        eprint!("{}", self.failure_report(results));
    }

    /// Render one block per failed test: a header naming the test, a rule
    /// matching the header's length, then the captured stdout and stderr.
    pub fn failure_report(&self, results: &ResultSet) -> String {
        let mut out = String::new();
        for result in results.iter().filter(|r| !r.passed) {
            let head = format!("Failed test {}", result.name);
            writeln!(out).unwrap();
            writeln!(out, "{head}").unwrap();
            writeln!(out, "{}", "-".repeat(head.len())).unwrap();
            writeln!(out, "Output:").unwrap();
            writeln!(out, "{}", result.stdout).unwrap();
            writeln!(out, "Error output:").unwrap();
            writeln!(out, "{}", result.stderr).unwrap();
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TestResult;
    use std::time::Duration;

    fn failed(name: &str, stdout: &str, stderr: &str) -> TestResult {
        let mut result = TestResult::new(name);
        result.stdout = stdout.to_string();
        result.stderr = stderr.to_string();
        result.elapsed = Duration::from_millis(5);
        result
    }

    fn passed(name: &str) -> TestResult {
        let mut result = TestResult::new(name);
        result.passed = true;
        result
    }

    #[test]
    fn passing_results_produce_no_blocks() {
        let mut set = ResultSet::new();
        set.push(passed("ok_test"));

        let report = ConsoleReporter::new(true).failure_report(&set);
        assert!(report.is_empty());
    }

    #[test]
    fn failure_block_layout() {
        let mut set = ResultSet::new();
        set.push(failed("bad_test.sh", "partial output", "assertion failed"));

        let report = ConsoleReporter::new(true).failure_report(&set);
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines[0], "");
        assert_eq!(lines[1], "Failed test bad_test.sh");
        assert_eq!(lines[2], "-".repeat(lines[1].len()));
        assert_eq!(lines[3], "Output:");
        assert_eq!(lines[4], "partial output");

        let err_pos = lines.iter().position(|l| *l == "Error output:").unwrap();
        assert!(err_pos > 4);
        assert_eq!(lines[err_pos + 1], "assertion failed");
    }

    #[test]
    fn one_block_per_failure() {
        let mut set = ResultSet::new();
        set.push(failed("first_test", "", ""));
        set.push(passed("second_test"));
        set.push(failed("third_test", "", ""));

        let report = ConsoleReporter::new(false).failure_report(&set);
        assert_eq!(report.matches("Failed test ").count(), 2);
        assert!(report.contains("Failed test first_test"));
        assert!(report.contains("Failed test third_test"));
        assert!(!report.contains("second_test"));
    }
}
