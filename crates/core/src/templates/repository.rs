use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::frontmatter::{FrontmatterParseError, parse};
use crate::templates::discovery::{TemplateDiscoveryError, TemplateInfo, discover_templates};
use crate::templates::types::{Template, TemplateFrontmatter};

/// Errors turning the text of one template file into a [`Template`].
#[derive(Debug, Error)]
pub enum TemplateFileError {
    #[error("template has no frontmatter (expected a leading '---' block)")]
    MissingFrontmatter,

    #[error(transparent)]
    Frontmatter(#[from] FrontmatterParseError),
}

#[derive(Debug, Error)]
pub enum TemplateRepoError {
    #[error(transparent)]
    Discovery(#[from] TemplateDiscoveryError),

    #[error("template not found: {0}")]
    NotFound(String),

    #[error("failed to read template file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid template file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: TemplateFileError,
    },

    #[error("template name '{name}' is used by both {first} and {second}")]
    Duplicate { name: String, first: PathBuf, second: PathBuf },
}

/// Parse template file contents. `default_name` is used when the frontmatter
/// carries no `name`.
pub fn parse_template(default_name: &str, content: &str) -> Result<Template, TemplateFileError> {
    let doc = parse::<TemplateFrontmatter>(content)?;
    let fm = doc.frontmatter.ok_or(TemplateFileError::MissingFrontmatter)?;

    Ok(Template {
        name: fm.name.unwrap_or_else(|| default_name.to_string()),
        category: fm.category,
        description: fm.description,
        body: doc.body,
        variables: fm.variables,
        is_active: fm.is_active,
    })
}

/// Templates stored as files under a directory.
pub struct TemplateRepository {
    pub root: PathBuf,
    pub templates: Vec<TemplateInfo>,
}

impl TemplateRepository {
    pub fn new(root: &Path) -> Result<Self, TemplateDiscoveryError> {
        let templates = discover_templates(root)?;
        Ok(Self { root: root.to_path_buf(), templates })
    }

    pub fn load(&self, info: &TemplateInfo) -> Result<Template, TemplateRepoError> {
        let content = fs::read_to_string(&info.path)
            .map_err(|e| TemplateRepoError::Io { path: info.path.clone(), source: e })?;

        let template = parse_template(&info.logical_name, &content)
            .map_err(|e| TemplateRepoError::Parse { path: info.path.clone(), source: e })?;
        debug!(name = %template.name, path = %info.path.display(), "template loaded");
        Ok(template)
    }

    /// Load every template, rejecting duplicate names.
    pub fn list_all(&self) -> Result<Vec<Template>, TemplateRepoError> {
        let mut seen: HashMap<String, PathBuf> = HashMap::new();
        let mut out = Vec::with_capacity(self.templates.len());

        for info in &self.templates {
            let template = self.load(info)?;
            if let Some(first) = seen.get(&template.name) {
                return Err(TemplateRepoError::Duplicate {
                    name: template.name,
                    first: first.clone(),
                    second: info.path.clone(),
                });
            }
            seen.insert(template.name.clone(), info.path.clone());
            out.push(template);
        }

        Ok(out)
    }

    /// Templates with `is_active` set.
    pub fn list_active(&self) -> Result<Vec<Template>, TemplateRepoError> {
        Ok(self.list_all()?.into_iter().filter(|t| t.is_active).collect())
    }

    /// Load a template by name. Inactive templates are still returned.
    ///
    /// Names are resolved over the whole store so a duplicate name fails here
    /// the same way it fails in [`list_all`](Self::list_all).
    pub fn get_by_name(&self, name: &str) -> Result<Template, TemplateRepoError> {
        self.list_all()?
            .into_iter()
            .find(|t| t.name == name)
            .ok_or_else(|| TemplateRepoError::NotFound(name.to_string()))
    }
}
