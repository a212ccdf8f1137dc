mod init;
mod parse;
mod render;
mod templates;
mod validate;

pub use init::init_command;
pub use parse::{ParseOptions, parse_command};
pub use render::render_command;
pub use templates::templates_command;
pub use validate::validate_command;

use anyhow::{Context, Result};
use std::io::Read;

/// Read a document from a path, or from standard input for `-`.
fn read_input(file: &str) -> Result<String> {
    if file == "-" {
        let mut input = String::new();
        std::io::stdin()
            .read_to_string(&mut input)
            .context("Failed to read standard input")?;
        return Ok(input);
    }

    std::fs::read_to_string(file).with_context(|| format!("Failed to read {file}"))
}

fn display_name(file: &str) -> &str {
    if file == "-" { "<stdin>" } else { file }
}

/// Print a diagnostic the way miette renders it.
fn report<D>(diagnostic: D)
where
    D: miette::Diagnostic + Send + Sync + 'static,
{
    eprintln!("{:?}", miette::Report::new(diagnostic));
}
