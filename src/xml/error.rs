//! Well-formedness failures reported by an [`XmlBackend`](super::XmlBackend)

use thiserror::Error;

/// Structural category of a well-formedness failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxErrorKind {
    /// An end tag did not match the open element, or elements were left open.
    UnclosedTag,
    /// Input stopped in the middle of markup, or never opened a root element.
    Truncated,
    /// Bad entity or character reference, attribute, or name.
    InvalidCharacter,
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{detail} (at byte {position})")]
pub struct SyntaxError {
    pub kind: SyntaxErrorKind,
    pub detail: String,
    pub position: usize,
}

impl SyntaxError {
    pub fn new(kind: SyntaxErrorKind, detail: impl Into<String>, position: usize) -> Self {
        Self {
            kind,
            detail: detail.into(),
            position,
        }
    }

    /// Map a `quick-xml` reader error onto a category by its variant.
    pub(crate) fn from_reader(error: &quick_xml::Error, position: usize) -> Self {
        use quick_xml::Error;
        use quick_xml::errors::{IllFormedError, SyntaxError as ReaderSyntax};

        let kind = match error {
            Error::IllFormed(
                IllFormedError::MismatchedEndTag { .. }
                | IllFormedError::UnmatchedEndTag(_)
                | IllFormedError::MissingEndTag(_),
            ) => SyntaxErrorKind::UnclosedTag,
            Error::Syntax(
                ReaderSyntax::UnclosedTag
                | ReaderSyntax::UnclosedComment
                | ReaderSyntax::UnclosedCData
                | ReaderSyntax::UnclosedDoctype
                | ReaderSyntax::UnclosedPIOrXmlDecl,
            ) => SyntaxErrorKind::Truncated,
            Error::Syntax(ReaderSyntax::InvalidBangMarkup)
            | Error::InvalidAttr(_)
            | Error::Escape(_)
            | Error::Encoding(_) => SyntaxErrorKind::InvalidCharacter,
            _ => SyntaxErrorKind::Unknown,
        };

        Self::new(kind, error.to_string(), position)
    }
}
