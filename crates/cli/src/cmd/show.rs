use lexvoice_core::templates::engine::undeclared_placeholders;
use std::path::Path;

use super::{fail, load_config, open_repository};

pub fn run(config: Option<&Path>, profile: Option<&str>, name: &str) {
    let rc = load_config("show", config, profile);
    let repo = open_repository("show", &rc);
    let t = repo.get_by_name(name).unwrap_or_else(|e| fail("show", e));

    println!("name: {}", t.name);
    println!("category: {}", t.category);
    println!("description: {}", t.description);
    if !t.is_active {
        println!("status: inactive");
    }

    println!("variables:");
    for v in &t.variables {
        let marker = if v.required { "*" } else { " " };
        println!("  {marker} {:<20} {:<8} {}", v.name, v.var_type.as_str(), v.label);
    }
    for name in undeclared_placeholders(&t) {
        println!("  ? {name:<20} (undeclared)");
    }

    println!("---");
    print!("{}", t.body);
    if !t.body.ends_with('\n') {
        println!();
    }
}
