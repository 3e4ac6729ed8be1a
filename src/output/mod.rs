//! Report output
//!
//! Console failure reporting and the JUnit compatible XML writer.

mod console;
mod xml;

pub use console::ConsoleReporter;
pub use xml::{render_xml, write_xml_report, DEFAULT_XML_TARGET};
