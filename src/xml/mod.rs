//! XML tree abstraction used by the validator and parser
//!
//! The validation and extraction logic only talks to [`Document`] and
//! [`Element`]. How the tree gets built is behind [`XmlBackend`], so a
//! different reader can be swapped in without touching either of them.

mod error;
mod reader;
mod tree;

pub use error::{SyntaxError, SyntaxErrorKind};
pub use reader::QuickXmlBackend;
pub use tree::{Descendants, Document, Element, NodeId};

/// Builds a [`Document`] from XML text, reporting well-formedness failures
/// as categorised [`SyntaxError`]s.
pub trait XmlBackend {
    fn parse(&self, input: &str) -> Result<Document, SyntaxError>;
}

impl<B: XmlBackend + ?Sized> XmlBackend for &B {
    fn parse(&self, input: &str) -> Result<Document, SyntaxError> {
        (**self).parse(input)
    }
}
