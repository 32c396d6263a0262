use lexvoice_core::templates::Template;
use serde::Serialize;
use std::path::Path;
use tabled::{settings::Style, Table, Tabled};

use super::{fail, load_config, open_repository};
use crate::ListArgs;

/// Row for the template list table.
#[derive(Tabled)]
struct TemplateRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Vars")]
    vars: usize,
    #[tabled(rename = "Required")]
    required: usize,
    #[tabled(rename = "Description")]
    description: String,
}

#[derive(Serialize)]
struct TemplateSummary<'a> {
    name: &'a str,
    category: &'a str,
    description: &'a str,
    is_active: bool,
    variables: usize,
}

pub fn run(config: Option<&Path>, profile: Option<&str>, args: &ListArgs) {
    let rc = load_config("list-templates", config, profile);
    let repo = open_repository("list-templates", &rc);

    let listed = if args.all { repo.list_all() } else { repo.list_active() };
    let templates = listed.unwrap_or_else(|e| fail("list-templates", e));

    if args.json {
        print_json(&templates);
        return;
    }

    if templates.is_empty() {
        println!("(no templates found)");
        return;
    }

    let rows: Vec<TemplateRow> = templates
        .iter()
        .map(|t| TemplateRow {
            name: t.name.clone(),
            category: t.category.to_string(),
            vars: t.variables.len(),
            required: t.required_variables().count(),
            description: t.description.clone(),
        })
        .collect();

    let table = Table::new(&rows).with(Style::rounded()).to_string();
    println!("{}", table);
    println!("-- {} templates --", rows.len());
}

fn print_json(templates: &[Template]) {
    let summaries: Vec<TemplateSummary<'_>> = templates
        .iter()
        .map(|t| TemplateSummary {
            name: &t.name,
            category: t.category.as_str(),
            description: &t.description,
            is_active: t.is_active,
            variables: t.variables.len(),
        })
        .collect();

    match serde_json::to_string_pretty(&summaries) {
        Ok(json) => println!("{json}"),
        Err(e) => fail("list-templates", e),
    }
}
