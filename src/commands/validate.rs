use anyhow::Result;
use std::process::ExitCode;

use ohmydoc::models::ValidationOutcome;
use ohmydoc::validation::{XmlDiagnostic, validate};

use super::{display_name, read_input, report};

pub fn validate_command(file: &str, json_report: bool) -> Result<ExitCode> {
    let input = read_input(file)?;
    let result = validate(&input);

    if json_report {
        let outcome = ValidationOutcome::from(result);
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(ExitCode::SUCCESS);
    }

    match result {
        Ok(()) => {
            println!("✓ {} is a valid application document", display_name(file));
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => {
            report(XmlDiagnostic::from_validation(&error, file, &input));
            Ok(ExitCode::FAILURE)
        }
    }
}
