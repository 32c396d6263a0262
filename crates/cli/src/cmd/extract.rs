use lexvoice_core::extract::extract;
use std::fs;
use std::io;
use std::path::Path;

use super::fail;
use crate::ExtractArgs;

/// Read transcribed text from a file, or stdin for `None` / `-`.
pub fn read_text(path: Option<&Path>) -> io::Result<String> {
    match path {
        Some(p) if p != Path::new("-") => fs::read_to_string(p),
        _ => io::read_to_string(io::stdin()),
    }
}

pub fn run(args: &ExtractArgs) {
    let text = read_text(args.file.as_deref()).unwrap_or_else(|e| fail("extract", e));
    let result = extract(&text);

    if args.json {
        match serde_json::to_string_pretty(&result) {
            Ok(json) => println!("{json}"),
            Err(e) => fail("extract", e),
        }
        return;
    }

    if result.is_empty() {
        println!("(no variables found)");
        return;
    }
    for (key, value) in result.iter() {
        println!("{}: {}", key.as_str(), value);
    }
}
