//! CLI argument parsing
//!
//! Defines the command-line interface using clap.

use std::path::PathBuf;

use clap::Parser;

use crate::executor::Verbosity;
use crate::output::DEFAULT_XML_TARGET;

/// Run executable scripts as tests and write JUnit compatible XML reports
#[derive(Parser, Debug)]
#[command(name = "shtest")]
#[command(version)]
#[command(about = "Run executable scripts as tests and write JUnit compatible XML reports")]
#[command(long_about = None)]
pub struct Args {
    /// Tests to execute. By default the current working directory is
    /// searched for executable *test[s]* files. Directories are searched
    /// recursively; explicit files are subject to the same predicate and
    /// have to be executable to count as valid tests.
    pub files: Vec<PathBuf>,

    /// Write an XML report, optionally to the given file
    #[arg(
        long,
        value_name = "FILE",
        num_args = 0..=1,
        default_missing_value = DEFAULT_XML_TARGET
    )]
    pub xml: Option<PathBuf>,

    /// Change the working directory for each test to the parent folder of
    /// the test. By default all tests run in the invoking working directory
    #[arg(long)]
    pub cwd: bool,

    /// Print a status line per test instead of compact dots
    #[arg(short, long)]
    pub verbose: bool,

    /// Kill a test that runs longer than this many seconds
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,
}

impl Args {
    /// Console feedback level selected by the flags.
    pub fn verbosity(&self) -> Verbosity {
        if self.verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Compact
        }
    }
}
