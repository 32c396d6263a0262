pub mod doctor;
pub mod extract;
pub mod generate;
pub mod list_templates;
pub mod seed;
pub mod show;

use lexvoice_core::config::loader::{ConfigLoader, default_config_path};
use lexvoice_core::config::types::ResolvedConfig;
use lexvoice_core::templates::repository::TemplateRepository;
use std::fmt::Display;
use std::path::Path;

/// Print the failure banner and exit with status 1.
pub fn fail(command: &str, err: impl Display) -> ! {
    println!("FAIL lexv {command}");
    println!("{err}");
    std::process::exit(1);
}

pub fn load_config(
    command: &str,
    config: Option<&Path>,
    profile: Option<&str>,
) -> ResolvedConfig {
    match ConfigLoader::load(config, profile) {
        Ok(rc) => rc,
        Err(e) => {
            println!("FAIL lexv {command}");
            println!("{e}");
            if config.is_none() {
                println!("looked for: {}", default_config_path().display());
            }
            std::process::exit(1);
        }
    }
}

pub fn open_repository(command: &str, cfg: &ResolvedConfig) -> TemplateRepository {
    TemplateRepository::new(&cfg.templates_dir).unwrap_or_else(|e| fail(command, e))
}
