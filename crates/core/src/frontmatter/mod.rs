//! YAML frontmatter splitting and parsing for template files.

pub mod parser;

pub use parser::{FrontmatterParseError, ParsedDocument, parse, split};
