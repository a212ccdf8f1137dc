use anyhow::Result;
use std::process::ExitCode;

use ohmydoc::models::ParseOutcome;
use ohmydoc::parser::parse;
use ohmydoc::validation::XmlDiagnostic;

use super::{read_input, report};

#[derive(Debug, Clone, Copy, Default)]
pub struct ParseOptions {
    /// Print the success/data/error wire shape instead of bare data
    pub report: bool,
    /// Print the human-readable summary
    pub summary: bool,
}

pub fn parse_command(file: &str, options: ParseOptions) -> Result<ExitCode> {
    let input = read_input(file)?;
    let result = parse(&input);

    if options.report {
        let outcome = ParseOutcome::from(result);
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(ExitCode::SUCCESS);
    }

    let data = match result {
        Ok(data) => data,
        Err(error) => {
            report(XmlDiagnostic::from_parse(&error, file, &input));
            return Ok(ExitCode::FAILURE);
        }
    };

    if options.summary {
        data.pretty_print();
    } else {
        println!("{}", data.to_json_pretty()?);
    }

    Ok(ExitCode::SUCCESS)
}
