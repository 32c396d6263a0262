use lexvoice_core::config::loader::default_config_path;
use lexvoice_core::templates::Template;
use lexvoice_core::templates::engine::undeclared_placeholders;
use lexvoice_core::templates::repository::TemplateRepository;
use std::path::Path;
use tracing::debug;

use super::{fail, load_config};

pub fn run(config: Option<&Path>, profile: Option<&str>) {
    let rc = load_config("doctor", config, profile);
    debug!(profile = %rc.active_profile, "running doctor");

    // Load the store up front so a broken template fails before the OK banner.
    let templates: Option<Vec<Template>> = if rc.templates_dir.is_dir() {
        let repo =
            TemplateRepository::new(&rc.templates_dir).unwrap_or_else(|e| fail("doctor", e));
        Some(repo.list_all().unwrap_or_else(|e| fail("doctor", e)))
    } else {
        None
    };

    println!("OK   lexv doctor");
    println!(
        "path: {}",
        config.map_or_else(
            || default_config_path().display().to_string(),
            |p| p.display().to_string()
        )
    );
    println!("profile: {}", rc.active_profile);
    println!("data_root: {}", rc.data_root.display());
    println!("templates_dir: {}", rc.templates_dir.display());
    println!("documents_dir: {}", rc.documents_dir.display());
    println!("logging.level: {}", rc.logging.level);
    if let Some(ref file) = rc.logging.file {
        println!("logging.file: {}", file.display());
    }

    let Some(templates) = templates else {
        println!("templates: none (directory missing, run `lexv seed`)");
        return;
    };

    let active = templates.iter().filter(|t| t.is_active).count();
    println!("templates: {} ({} active)", templates.len(), active);

    for t in &templates {
        let undeclared = undeclared_placeholders(t);
        if !undeclared.is_empty() {
            println!("warn: {} has undeclared placeholders: {}", t.name, undeclared.join(", "));
        }
    }
}
