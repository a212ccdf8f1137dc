//! Extraction of [`ParsedData`] from a validated application document
//!
//! Fixed single-valued fields (names, addresses, letter paragraphs) are
//! required and abort the parse when missing. The experience list is
//! variable-length: a missing `<employer>` or empty `<achievement>` reads as
//! an empty string instead of failing.

mod error;
pub(crate) mod extract;


use tracing::debug;

pub use error::{DOCUMENT_CONTEXT, MissingElement, ParseError};

use crate::models::{
    Achievement, Applicant, ContactInformation, Experience, Letter, ParsedData, Recipient,
};
use crate::validation::{ROOT_ELEMENT, Validator};
use crate::xml::{Element, QuickXmlBackend, XmlBackend};
use extract::{address, optional_text, required_element, required_text, trimmed_text};

#[derive(Debug, Clone, Default)]
pub struct Parser<B = QuickXmlBackend> {
    validator: Validator<B>,
}

impl Parser {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<B: XmlBackend> Parser<B> {
    pub fn with_backend(backend: B) -> Self {
        Self {
            validator: Validator::with_backend(backend),
        }
    }

    /// Validate `input` and extract every section. Nothing partial is ever
    /// returned: either all required fields resolve or the call fails.
    pub fn parse(&self, input: &str) -> Result<ParsedData, ParseError> {
        let document = self.validator.validated_document(input)?;
        let Some(root) = document.root() else {
            return Err(MissingElement::new(&[ROOT_ELEMENT], DOCUMENT_CONTEXT, 0).into());
        };

        let data = extract_document(root)?;
        debug!(
            experiences = data.letter.experience_section.len(),
            achievements = data.achievement_count(),
            "Parsed application document"
        );
        Ok(data)
    }
}

/// Parse with the default backend.
pub fn parse(input: &str) -> Result<ParsedData, ParseError> {
    Parser::new().parse(input)
}

fn extract_document(root: Element<'_>) -> Result<ParsedData, MissingElement> {
    let format_style = root
        .attribute("formatStyle")
        .filter(|style| !style.is_empty())
        .map(str::to_string);

    let applicant = extract_applicant(required_element(root, &["applicant"], DOCUMENT_CONTEXT)?)?;
    let date = required_text(root, &["date"], DOCUMENT_CONTEXT)?;
    let recipient = extract_recipient(required_element(root, &["recipient"], DOCUMENT_CONTEXT)?)?;
    let letter = extract_letter(required_element(root, &["letter"], DOCUMENT_CONTEXT)?)?;

    Ok(ParsedData {
        format_style,
        applicant,
        date,
        recipient,
        letter,
    })
}

fn extract_applicant(element: Element<'_>) -> Result<Applicant, MissingElement> {
    const CONTEXT: &str = "applicant";

    Ok(Applicant {
        name: required_text(element, &["name"], CONTEXT)?,
        address: address(element, CONTEXT)?,
        contact_information: ContactInformation {
            phone: required_text(element, &["contactInformation", "phone"], CONTEXT)?,
            email: required_text(element, &["contactInformation", "email"], CONTEXT)?,
        },
    })
}

fn extract_recipient(element: Element<'_>) -> Result<Recipient, MissingElement> {
    const CONTEXT: &str = "recipient";

    Ok(Recipient {
        position: required_text(element, &["position"], CONTEXT)?,
        company: required_text(element, &["company"], CONTEXT)?,
        address: address(element, CONTEXT)?,
    })
}

fn extract_letter(element: Element<'_>) -> Result<Letter, MissingElement> {
    const CONTEXT: &str = "letter";

    Ok(Letter {
        salutation: required_text(element, &["salutation"], CONTEXT)?,
        introduction: required_text(element, &["introduction"], CONTEXT)?,
        experience_section: extract_experiences(element),
        motivation: required_text(element, &["motivation"], CONTEXT)?,
        closing: required_text(element, &["closing"], CONTEXT)?,
        signature: required_text(element, &["signature"], CONTEXT)?,
    })
}

fn extract_experiences(letter: Element<'_>) -> Vec<Experience> {
    letter
        .find_all_by_path(&["experienceSection", "experience"])
        .into_iter()
        .map(|experience| Experience {
            employer: optional_text(experience, "employer"),
            achievements: experience
                .find_all_by_path(&["achievements", "achievement"])
                .into_iter()
                .map(|achievement| Achievement {
                    text: trimmed_text(achievement),
                })
                .collect(),
        })
        .collect()
}
