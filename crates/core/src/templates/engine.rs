use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use super::types::{Template, VariableMapping, VariableSpec};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateRenderError {
    /// Carries the labels of the missing variables, in declared order.
    #[error("missing required fields: {}", .0.join(", "))]
    MissingRequiredFields(Vec<String>),
}

/// Outcome of a successful document generation.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedDocument {
    pub content: String,
    pub template_name: String,
    pub variables: Vec<VariableSpec>,
}

static PLACEHOLDER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{([A-Za-z_][A-Za-z0-9_]*)\}\}").expect("valid placeholder regex")
});

/// Substitute `{{key}}` for every key in `mapping`.
///
/// Only keys present in the mapping are touched, so placeholders without a
/// value stay verbatim in the output. Values are inserted as-is. If a value
/// itself contains a `{{other}}` token, whether that token gets replaced
/// depends on the order keys are visited.
pub fn render(body: &str, mapping: &VariableMapping) -> String {
    render_pairs(body, mapping)
}

/// Same as [`render`], visiting keys in the order `pairs` yields them.
pub fn render_pairs<I, K, V>(body: &str, pairs: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut out = body.to_string();
    for (key, value) in pairs {
        let token = format!("{{{{{}}}}}", key.as_ref());
        if out.contains(&token) {
            out = out.replace(&token, value.as_ref());
        }
    }
    out
}

/// Labels of required variables that are absent or empty in `mapping`.
pub fn missing_required(variables: &[VariableSpec], mapping: &VariableMapping) -> Vec<String> {
    variables
        .iter()
        .filter(|v| v.required && mapping.get(&v.name).is_none_or(|val| val.is_empty()))
        .map(|v| v.label.clone())
        .collect()
}

/// Validate `mapping` against the template's required variables, then render.
///
/// Fails before any substitution when a required variable is missing.
pub fn generate_document(
    template: &Template,
    mapping: &VariableMapping,
) -> Result<GeneratedDocument, TemplateRenderError> {
    let missing = missing_required(&template.variables, mapping);
    if !missing.is_empty() {
        debug!(template = %template.name, missing = missing.len(), "required variables missing");
        return Err(TemplateRenderError::MissingRequiredFields(missing));
    }

    let content = render(&template.body, mapping);
    debug!(template = %template.name, vars = mapping.len(), "document rendered");

    Ok(GeneratedDocument {
        content,
        template_name: template.name.clone(),
        variables: template.variables.clone(),
    })
}

/// Unique placeholder names in `body`, in order of first appearance.
pub fn placeholder_names(body: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut names = Vec::new();

    for cap in PLACEHOLDER_RE.captures_iter(body) {
        let name = &cap[1];
        if seen.insert(name.to_string()) {
            names.push(name.to_string());
        }
    }

    names
}

/// Placeholders in the body that have no matching variable declaration.
pub fn undeclared_placeholders(template: &Template) -> Vec<String> {
    placeholder_names(&template.body)
        .into_iter()
        .filter(|name| template.variable(name).is_none())
        .collect()
}
