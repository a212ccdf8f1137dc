//! Wire shapes for validation and parse results
//!
//! The library returns `Result`s. Consumers that need a flat
//! `{ success, data, error }` object (a preview pane, a JSON report) convert
//! through these types.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

use super::ParsedData;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationOutcome {
    pub valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<E: Display> From<Result<(), E>> for ValidationOutcome {
    fn from(result: Result<(), E>) -> Self {
        match result {
            Ok(()) => Self {
                valid: true,
                error: None,
            },
            Err(e) => Self {
                valid: false,
                error: Some(e.to_string()),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseOutcome {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<ParsedData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<E: Display> From<Result<ParsedData, E>> for ParseOutcome {
    fn from(result: Result<ParsedData, E>) -> Self {
        match result {
            Ok(data) => Self {
                success: true,
                data: Some(data),
                error: None,
            },
            Err(e) => Self {
                success: false,
                data: None,
                error: Some(e.to_string()),
            },
        }
    }
}
