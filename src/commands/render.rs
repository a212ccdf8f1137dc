use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::info;

use ohmydoc::config::Settings;
use ohmydoc::parser::parse;
use ohmydoc::templating::{TemplateEngine, select_template};
use ohmydoc::validation::XmlDiagnostic;

use super::{read_input, report};

pub fn render_command(
    file: &str,
    template: Option<String>,
    output: Option<PathBuf>,
    config: Option<&Path>,
) -> Result<ExitCode> {
    let settings = Settings::discover(config)?;
    let input = read_input(file)?;

    let data = match parse(&input) {
        Ok(data) => data,
        Err(error) => {
            report(XmlDiagnostic::from_parse(&error, file, &input));
            return Ok(ExitCode::FAILURE);
        }
    };

    let explicit = template.as_deref().or(settings.template.as_deref());
    let name = select_template(explicit, data.format_style.as_deref());
    info!(template = name, "Selected template");

    let html = match TemplateEngine::new().render(&data, name) {
        Ok(html) => html,
        Err(error) => {
            report(error);
            return Ok(ExitCode::FAILURE);
        }
    };

    match output.or(settings.output) {
        Some(path) => {
            std::fs::write(&path, html)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("✓ Rendered {name} template to {}", path.display());
        }
        None => print!("{html}"),
    }

    Ok(ExitCode::SUCCESS)
}
