//! Frontmatter parsing from template documents.

use serde::de::DeserializeOwned;
use thiserror::Error;

/// Errors that can occur during frontmatter parsing.
#[derive(Debug, Error)]
pub enum FrontmatterParseError {
    #[error("invalid YAML frontmatter: {0}")]
    InvalidYaml(#[from] serde_yaml::Error),
}

/// Result of splitting and parsing frontmatter from a document.
#[derive(Debug, Clone)]
pub struct ParsedDocument<T> {
    /// Parsed frontmatter (if present).
    pub frontmatter: Option<T>,
    /// Everything after the closing delimiter.
    pub body: String,
}

/// Split a document into its raw frontmatter text and body.
///
/// Frontmatter is delimited by `---` lines at the start of the document:
/// ```text
/// ---
/// key: value
/// ---
/// Document content
/// ```
/// A document without an opening delimiter, or with no closing one, has no
/// frontmatter and is returned whole as the body.
pub fn split(content: &str) -> (Option<String>, String) {
    let trimmed = content.trim_start();

    let Some(after_first) = trimmed.strip_prefix("---") else {
        return (None, content.to_string());
    };

    // The opening delimiter must be alone on its line.
    let Some(after_newline) = after_first
        .strip_prefix('\n')
        .or_else(|| after_first.strip_prefix("\r\n"))
    else {
        return (None, content.to_string());
    };

    let mut offset = 0;
    for line in after_newline.split_inclusive('\n') {
        // Indented `---` lines belong to YAML block scalars.
        if line.trim_end() == "---" {
            let yaml = &after_newline[..offset];
            let body = &after_newline[offset + line.len()..];
            return (Some(yaml.to_string()), body.to_string());
        }
        offset += line.len();
    }

    (None, content.to_string())
}

/// Split a document and deserialize its frontmatter into `T`.
///
/// Empty frontmatter (`---\n---`) deserializes from an empty mapping.
pub fn parse<T: DeserializeOwned>(
    content: &str,
) -> Result<ParsedDocument<T>, FrontmatterParseError> {
    let (yaml, body) = split(content);

    let frontmatter = match yaml {
        Some(y) if y.trim().is_empty() => {
            Some(serde_yaml::from_value(serde_yaml::Value::Mapping(Default::default()))?)
        }
        Some(y) => Some(serde_yaml::from_str(y.trim())?),
        None => None,
    };

    Ok(ParsedDocument { frontmatter, body })
}
