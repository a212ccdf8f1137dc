use thiserror::Error;

use crate::xml::{SyntaxError, SyntaxErrorKind};

/// Why an input failed validation. The display text is meant to be shown
/// to the author of the document as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("XML input is empty. Please provide valid XML content.")]
    EmptyInput,

    #[error(
        "XML has unclosed or mismatched tags. Please check that all opening tags have corresponding closing tags."
    )]
    UnclosedTag { position: usize },

    #[error("XML is incomplete. The document appears to end unexpectedly.")]
    Incomplete { position: usize },

    #[error(
        "XML contains invalid characters or syntax. Please check for special characters that need to be escaped."
    )]
    InvalidCharacter { position: usize },

    #[error("XML parsing error: {detail}")]
    Syntax { detail: String, position: usize },

    #[error("Invalid XML structure. Root element must be <{expected}>.")]
    WrongRoot {
        expected: &'static str,
        found: String,
        position: usize,
    },

    #[error(
        "Missing required element: {tag}. All application documents must include applicant, date, recipient, and letter sections."
    )]
    MissingSection { tag: &'static str, position: usize },
}

impl ValidationError {
    /// Byte offset in the input the error refers to, if any.
    pub fn position(&self) -> Option<usize> {
        match self {
            Self::EmptyInput => None,
            Self::UnclosedTag { position }
            | Self::Incomplete { position }
            | Self::InvalidCharacter { position }
            | Self::Syntax { position, .. }
            | Self::WrongRoot { position, .. }
            | Self::MissingSection { position, .. } => Some(*position),
        }
    }

    /// True for the well-formedness variants, false for schema failures.
    #[cfg(test)]
    pub(crate) fn is_syntax(&self) -> bool {
        matches!(
            self,
            Self::UnclosedTag { .. }
                | Self::Incomplete { .. }
                | Self::InvalidCharacter { .. }
                | Self::Syntax { .. }
        )
    }
}

impl From<SyntaxError> for ValidationError {
    fn from(error: SyntaxError) -> Self {
        let position = error.position;
        match error.kind {
            SyntaxErrorKind::UnclosedTag => Self::UnclosedTag { position },
            SyntaxErrorKind::Truncated => Self::Incomplete { position },
            SyntaxErrorKind::InvalidCharacter => Self::InvalidCharacter { position },
            SyntaxErrorKind::Unknown => Self::Syntax {
                detail: error.detail,
                position,
            },
        }
    }
}
