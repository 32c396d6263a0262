use lexvoice_core::extract::{extract, merge};
use lexvoice_core::templates::{TemplateRenderError, VariableMapping, generate_document};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use super::extract::read_text;
use super::{fail, load_config, open_repository};
use crate::GenerateArgs;
use crate::prompt::{PromptOptions, collect_variables};

pub fn run(config: Option<&Path>, profile: Option<&str>, args: GenerateArgs) {
    let rc = load_config("generate", config, profile);
    let repo = open_repository("generate", &rc);
    let template = repo.get_by_name(&args.template).unwrap_or_else(|e| fail("generate", e));

    let provided: VariableMapping = args.vars.into_iter().collect();

    let (mapping, prefilled) = match args.transcript.as_deref() {
        Some(path) => {
            let text = read_text(Some(path)).unwrap_or_else(|e| fail("generate", e));
            let extracted = extract(&text);
            debug!(found = extracted.len(), "variables extracted from transcript");
            let prefilled: HashSet<String> = extracted
                .iter()
                .map(|(k, _)| k.as_str().to_string())
                .filter(|k| !provided.contains_key(k))
                .collect();
            (merge(extracted, &provided), prefilled)
        }
        None => (provided, HashSet::new()),
    };

    let options = PromptOptions { batch_mode: args.batch };
    let collected = collect_variables(&template, &mapping, &prefilled, &options)
        .unwrap_or_else(|e| fail("generate", e));
    if !collected.prompted.is_empty() {
        debug!(prompted = collected.prompted.len(), "collected variables interactively");
    }

    let doc = match generate_document(&template, &collected.values) {
        Ok(doc) => doc,
        Err(e @ TemplateRenderError::MissingRequiredFields(_)) => {
            println!("FAIL lexv generate");
            println!("{e}");
            println!("Hint: pass them with --var name=value or run without --batch");
            std::process::exit(1);
        }
    };

    let Some(output) = args.output else {
        print!("{}", doc.content);
        return;
    };

    let path =
        if output.is_absolute() { output } else { rc.documents_dir.join(output) };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap_or_else(|e| fail("generate", e));
    }
    fs::write(&path, &doc.content).unwrap_or_else(|e| fail("generate", e));
    info!(template = %doc.template_name, path = %path.display(), "document written");

    println!("OK   lexv generate");
    println!("template: {}", doc.template_name);
    println!("output: {}", path.display());
}
