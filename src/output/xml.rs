//! JUnit XML report
//!
//! Serializes a result set into a JUnit compatible `testsuite` document.
//! The schema is an interop boundary consumed by CI systems; attribute
//! names and element layout must stay stable.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::models::ResultSet;

/// Default report file name.
pub const DEFAULT_XML_TARGET: &str = "shtest.xml";

/// Render the result set as a JUnit compatible document.
///
/// Times are formatted to three decimal places. `errors` and `skips` are
/// always literal 0: every test here is either pass or fail. Captured
/// output is wrapped in CDATA and otherwise left untouched, so embedded
/// `]]>` sequences break the document (known limitation).
pub fn render_xml(results: &ResultSet) -> String {
    let mut doc = String::new();
    writeln!(
        doc,
        "<testsuite failures=\"{}\" errors=\"0\" skips=\"0\" tests=\"{}\" time=\"{:.3}\">",
        results.failures(),
        results.len(),
        results.total_time().as_secs_f64()
    )
    .unwrap();

    for result in results.iter() {
        writeln!(
            doc,
            "<testcase classname=\"bash\" name=\"{}\" time=\"{:.3}\">",
            result.name,
            result.elapsed.as_secs_f64()
        )
        .unwrap();

        if !result.passed {
            writeln!(
                doc,
                "<failure message='' type=''><![CDATA[{}]]>",
                result.stderr
            )
            .unwrap();
            writeln!(doc, "</failure>").unwrap();
        }

        writeln!(doc, "<system-out>").unwrap();
        writeln!(doc, "<![CDATA[{}]]>", result.stdout).unwrap();
        writeln!(doc, "</system-out>").unwrap();
        writeln!(doc, "<system-err>").unwrap();
        writeln!(doc, "<![CDATA[{}]]>", result.stderr).unwrap();
        writeln!(doc, "</system-err>").unwrap();
        writeln!(doc, "</testcase>").unwrap();
    }

    writeln!(doc, "</testsuite>").unwrap();
    doc
}

/// Write the XML report to `target`, overwriting any existing file.
/// Write failures are fatal for the run and propagate to the caller.
pub fn write_xml_report(results: &ResultSet, target: &Path) -> Result<()> {
    fs::write(target, render_xml(results))
        .with_context(|| format!("cannot write XML report to {}", target.display()))?;
    info!("wrote XML report to {}", target.display());
    Ok(())
}
