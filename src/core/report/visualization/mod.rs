//! Chart generation for reports
//!
//! Provides generators for Mermaid charts (for Markdown) and inline SVG (for HTML).

pub mod mermaid;
pub mod svg;

pub use mermaid::MermaidGenerator;
pub use svg::{escape_xml, SvgGenerator};
