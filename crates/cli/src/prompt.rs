//! Interactive prompts for collecting template variable values.
//!
//! Required variables with no value are asked for. Values pre-filled from a
//! transcript are shown as editable defaults so they get a human review.
//! Nothing is asked in batch mode or when stdin is not a terminal.

use dialoguer::{theme::ColorfulTheme, Input};
use lexvoice_core::templates::{Template, VariableMapping, VariableSpec};
use std::collections::HashSet;
use std::io::{self, IsTerminal};

/// Options for prompting behavior.
#[derive(Debug, Clone, Default)]
pub struct PromptOptions {
    /// If true, never prompt; missing variables are left for validation.
    pub batch_mode: bool,
}

/// Result of variable collection.
#[derive(Debug)]
pub struct CollectedVars {
    pub values: VariableMapping,
    /// Variables that were prompted for.
    pub prompted: Vec<String>,
}

/// Error type for variable collection.
#[derive(Debug)]
pub enum PromptError {
    /// IO error during prompting.
    Io(io::Error),
    /// User cancelled input.
    Cancelled,
}

impl std::fmt::Display for PromptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PromptError::Io(e) => write!(f, "IO error: {e}"),
            PromptError::Cancelled => write!(f, "input cancelled by user"),
        }
    }
}

impl std::error::Error for PromptError {}

impl From<io::Error> for PromptError {
    fn from(e: io::Error) -> Self {
        PromptError::Io(e)
    }
}

/// Fill in missing required variables and confirm pre-filled ones.
///
/// # Arguments
/// * `template` - Template whose declared variables drive the prompts
/// * `provided` - Values gathered so far (transcript extraction merged with `--var`)
/// * `prefilled` - Names whose value came from extraction rather than the user
/// * `options` - Prompting options (batch mode, etc.)
pub fn collect_variables(
    template: &Template,
    provided: &VariableMapping,
    prefilled: &HashSet<String>,
    options: &PromptOptions,
) -> Result<CollectedVars, PromptError> {
    let mut values = provided.clone();
    let mut prompted = Vec::new();

    let is_interactive = io::stdin().is_terminal() && !options.batch_mode;
    if !is_interactive {
        return Ok(CollectedVars { values, prompted });
    }

    for spec in &template.variables {
        let current = values.get(&spec.name).filter(|v| !v.is_empty()).cloned();

        let value = match current {
            Some(v) if prefilled.contains(&spec.name) => prompt_with_default(spec, &v)?,
            Some(_) => continue,
            None if spec.required => prompt_required(spec)?,
            None => continue,
        };

        prompted.push(spec.name.clone());
        values.insert(spec.name.clone(), value);
    }

    Ok(CollectedVars { values, prompted })
}

fn prompt_text(spec: &VariableSpec) -> &str {
    if spec.label.is_empty() { &spec.name } else { &spec.label }
}

/// Prompt for a required variable (no default).
fn prompt_required(spec: &VariableSpec) -> Result<String, PromptError> {
    let theme = ColorfulTheme::default();

    Input::<String>::with_theme(&theme)
        .with_prompt(format!("{} ({})", prompt_text(spec), spec.var_type.as_str()))
        .interact_text()
        .map_err(dialoguer_error_to_prompt_error)
}

/// Prompt for a variable with a suggested value.
fn prompt_with_default(spec: &VariableSpec, default: &str) -> Result<String, PromptError> {
    let theme = ColorfulTheme::default();

    Input::<String>::with_theme(&theme)
        .with_prompt(prompt_text(spec))
        .default(default.to_string())
        .allow_empty(!spec.required)
        .interact_text()
        .map_err(dialoguer_error_to_prompt_error)
}

/// Convert dialoguer error to our PromptError.
fn dialoguer_error_to_prompt_error(e: dialoguer::Error) -> PromptError {
    match e {
        dialoguer::Error::IO(io_err) => {
            if io_err.kind() == io::ErrorKind::UnexpectedEof {
                PromptError::Cancelled
            } else {
                PromptError::Io(io_err)
            }
        }
    }
}

/// Parse a `key=value` argument.
pub fn parse_var_arg(arg: &str) -> Result<(String, String), String> {
    let (key, value) = arg
        .split_once('=')
        .ok_or_else(|| format!("invalid variable '{arg}', expected key=value"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("invalid variable '{arg}', key is empty"));
    }
    Ok((key.to_string(), value.to_string()))
}
