//! Legal template data model.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Variable values supplied for one render, keyed by variable name.
///
/// An absent key and an empty value are both treated as "not provided".
pub type VariableMapping = HashMap<String, String>;

/// Fixed set of document categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Agreement,
    Affidavit,
    Notice,
    Contract,
    Application,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Agreement => "agreement",
            Category::Affidavit => "affidavit",
            Category::Notice => "notice",
            Category::Contract => "contract",
            Category::Application => "application",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of value a variable holds. Informational only; the renderer never
/// checks values against it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariableType {
    #[default]
    Text,
    Date,
    Number,
    Address,
    Person,
}

impl VariableType {
    pub fn as_str(&self) -> &'static str {
        match self {
            VariableType::Text => "text",
            VariableType::Date => "date",
            VariableType::Number => "number",
            VariableType::Address => "address",
            VariableType::Person => "person",
        }
    }
}

/// Declared metadata for one substitutable variable of a template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableSpec {
    /// Matches a `{{name}}` placeholder in the body.
    pub name: String,
    /// Human-readable prompt, also used in missing-field errors.
    pub label: String,
    #[serde(rename = "type", default)]
    pub var_type: VariableType,
    #[serde(default)]
    pub required: bool,
}

impl VariableSpec {
    pub fn new(name: &str, label: &str, var_type: VariableType, required: bool) -> Self {
        Self { name: name.to_string(), label: label.to_string(), var_type, required }
    }
}

/// A legal document template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Template {
    pub name: String,
    pub category: Category,
    pub description: String,
    /// Raw text containing `{{identifier}}` placeholders.
    pub body: String,
    /// Declared variables, in prompt order.
    pub variables: Vec<VariableSpec>,
    pub is_active: bool,
}

impl Template {
    /// Variables declared with `required = true`, in declared order.
    pub fn required_variables(&self) -> impl Iterator<Item = &VariableSpec> {
        self.variables.iter().filter(|v| v.required)
    }

    pub fn variable(&self, name: &str) -> Option<&VariableSpec> {
        self.variables.iter().find(|v| v.name == name)
    }
}

/// Frontmatter of a template file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateFrontmatter {
    /// Overrides the logical name derived from the file path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub category: Category,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub variables: Vec<VariableSpec>,
}

fn default_active() -> bool {
    true
}
