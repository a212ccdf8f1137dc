use tracing::debug;

use super::error::ValidationError;
use crate::xml::{Document, QuickXmlBackend, XmlBackend};

/// Tag the document element must carry
pub const ROOT_ELEMENT: &str = "applicationDocument";

/// Sections every document must contain, checked in this order
pub const REQUIRED_SECTIONS: [&str; 4] = ["applicant", "date", "recipient", "letter"];

/// Checks well-formedness and the top-level shape of an application document.
#[derive(Debug, Clone, Default)]
pub struct Validator<B = QuickXmlBackend> {
    backend: B,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<B: XmlBackend> Validator<B> {
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    pub fn validate(&self, input: &str) -> Result<(), ValidationError> {
        self.validated_document(input).map(|_| ())
    }

    /// Run every rule and hand back the tree so callers don't parse twice.
    pub(crate) fn validated_document(&self, input: &str) -> Result<Document, ValidationError> {
        if input.trim().is_empty() {
            debug!("Rejecting empty input");
            return Err(ValidationError::EmptyInput);
        }

        let document = self.backend.parse(input).map_err(|e| {
            debug!(kind = ?e.kind, detail = %e.detail, "XML is not well-formed");
            ValidationError::from(e)
        })?;

        // Backends only return documents that have a root
        let Some(root) = document.root() else {
            return Err(ValidationError::Incomplete {
                position: input.len(),
            });
        };

        if root.name() != ROOT_ELEMENT {
            debug!(found = root.name(), "Unexpected root element");
            return Err(ValidationError::WrongRoot {
                expected: ROOT_ELEMENT,
                found: root.name().to_string(),
                position: root.position(),
            });
        }

        if let Some(tag) = REQUIRED_SECTIONS
            .into_iter()
            .find(|tag| root.find_first(tag).is_none())
        {
            debug!(section = tag, "Missing required section");
            return Err(ValidationError::MissingSection {
                tag,
                position: root.position(),
            });
        }

        debug!("✓ Document structure is valid");
        Ok(document)
    }
}

/// Validate with the default backend.
pub fn validate(input: &str) -> Result<(), ValidationError> {
    Validator::new().validate(input)
}
