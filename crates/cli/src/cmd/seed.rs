use lexvoice_core::templates::seed::write_builtin;
use std::path::Path;

use super::{fail, load_config};

pub fn run(config: Option<&Path>, profile: Option<&str>, force: bool) {
    let rc = load_config("seed", config, profile);

    let written = write_builtin(&rc.templates_dir, force).unwrap_or_else(|e| fail("seed", e));

    println!("OK   lexv seed");
    for path in &written {
        println!("wrote: {}", path.display());
    }
}
