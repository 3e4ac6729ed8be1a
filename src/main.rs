//! shtest - run executable scripts as tests
//!
//! A harness that discovers executable *test[s]* files, runs each one as an
//! isolated subprocess with a private scratch directory, and reports the
//! results on the console and as a JUnit compatible XML document.
//!
//! ## Usage
//!
//! ```bash
//! # Discover and run tests under the current directory
//! shtest
//!
//! # Run a directory tree and write an XML report
//! shtest integration/ --xml report.xml
//!
//! # Run explicit files in their own directories, verbosely
//! shtest tests/smoke_test.sh --cwd --verbose
//! ```

use std::env;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing::{debug, info};

mod cli;
mod discovery;
mod executor;
mod models;
mod output;
mod utils;

use cli::Args;
use executor::TestRunner;
use models::ResultSet;
use output::{write_xml_report, ConsoleReporter};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();
    utils::init_logger(args.verbose);

    // No paths means a discovery walk of the current working directory.
    let paths = if args.files.is_empty() {
        vec![env::current_dir()?]
    } else {
        args.files.clone()
    };

    let runner = TestRunner::new()
        .change_directory(args.cwd)
        .verbosity(args.verbosity())
        .timeout(args.timeout.map(Duration::from_secs));

    let mut results = ResultSet::new();
    for path in &paths {
        if discovery::is_test_case(path) {
            results.push(runner.run(path).await);
        } else if path.is_dir() {
            for script in discovery::discover(path) {
                results.push(runner.run(&script?).await);
            }
        } else {
            // Neither a qualifying test file nor a directory: not an error.
            debug!("skipping {}", path.display());
        }
    }

    ConsoleReporter::new(!args.verbose).print_failures(&results);

    if let Some(target) = &args.xml {
        write_xml_report(&results, target)?;
    }

    info!("{} tests, {} failures", results.len(), results.failures());

    if results.any_failed() {
        std::process::exit(1);
    }
    Ok(())
}
