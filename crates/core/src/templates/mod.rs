//! Legal document templates: model, file store, seed data and rendering.

pub mod discovery;
pub mod engine;
pub mod repository;
pub mod seed;
pub mod types;

pub use discovery::{TemplateDiscoveryError, TemplateInfo, discover_templates};
pub use engine::{
    GeneratedDocument, TemplateRenderError, generate_document, missing_required,
    placeholder_names, render, render_pairs, undeclared_placeholders,
};
pub use repository::{TemplateFileError, TemplateRepoError, TemplateRepository, parse_template};
pub use types::{Category, Template, TemplateFrontmatter, VariableMapping, VariableSpec, VariableType};
