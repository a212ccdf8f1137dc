pub mod config;
pub mod error_utils;
pub mod models;
pub mod parser;
pub mod templating;
pub mod validation;
pub mod xml;

pub use models::ParsedData;
pub use parser::{ParseError, parse};
pub use validation::{ValidationError, validate};

/// A complete, valid cover letter. `ohmydoc init` writes it out.
pub const SAMPLE_DOCUMENT: &str = include_str!("../samples/cover-letter.xml");
