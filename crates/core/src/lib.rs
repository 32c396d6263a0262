#![deny(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod extract;
pub mod frontmatter;
pub mod templates;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
