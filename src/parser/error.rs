use thiserror::Error;

use crate::validation::ValidationError;

/// Context used when a lookup has no more specific owner
pub const DOCUMENT_CONTEXT: &str = "document";

/// A required element was not found while extracting a section.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Missing required element: {tag} in {context}")]
pub struct MissingElement {
    /// Tag, or space-separated descendant path, that was looked up
    pub tag: String,
    pub context: String,
    /// Offset of the element the lookup ran inside
    pub position: usize,
}

impl MissingElement {
    pub fn new(path: &[&str], context: impl Into<String>, position: usize) -> Self {
        Self {
            tag: path.join(" "),
            context: context.into(),
            position,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The validator's message, passed through unchanged
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Failed to parse XML: {0}")]
    Extraction(#[from] MissingElement),
}
