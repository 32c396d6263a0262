use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;
use walkdir::WalkDir;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateInfo {
    pub logical_name: String,
    pub path: PathBuf,
}

#[derive(Debug, Error)]
pub enum TemplateDiscoveryError {
    #[error("templates directory does not exist: {0}")]
    MissingDir(String),

    #[error("failed to read templates directory {0} : {1}")]
    WalkError(String, #[source] walkdir::Error),
}

/// Find template files under `root`, sorted by logical name.
pub fn discover_templates(root: &Path) -> Result<Vec<TemplateInfo>, TemplateDiscoveryError> {
    if !root.is_dir() {
        return Err(TemplateDiscoveryError::MissingDir(root.display().to_string()));
    }

    let mut out = Vec::new();
    for entry in WalkDir::new(root).follow_links(true) {
        let entry = entry
            .map_err(|e| TemplateDiscoveryError::WalkError(root.display().to_string(), e))?;
        let path = entry.path();
        if !entry.file_type().is_file() || !is_template_file(path) {
            continue;
        }
        let Ok(rel) = path.strip_prefix(root) else { continue };
        out.push(TemplateInfo {
            logical_name: logical_name_from_relative(rel),
            path: path.to_path_buf(),
        });
    }

    out.sort_by(|a, b| a.logical_name.cmp(&b.logical_name));
    debug!(root = %root.display(), count = out.len(), "templates discovered");
    Ok(out)
}

/// `.md` and `.txt` files with a single-dot file name.
fn is_template_file(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    if name.starts_with('.') || name.matches('.').count() != 1 {
        return false;
    }
    matches!(path.extension().and_then(|e| e.to_str()), Some("md" | "txt"))
}

fn logical_name_from_relative(rel: &Path) -> String {
    let without_ext = rel.with_extension("");
    without_ext
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/")
}
