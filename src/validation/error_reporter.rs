use miette::{Diagnostic, NamedSource, SourceSpan};

use super::error::ValidationError;
use crate::parser::ParseError;

/// A validation or parse failure attached to the document it came from,
/// for rendering with `miette`.
#[derive(thiserror::Error, Debug, Diagnostic)]
#[error("{message}")]
pub struct XmlDiagnostic {
    #[source_code]
    pub source_code: NamedSource<String>,

    #[label("{}", self.label)]
    pub span: Option<SourceSpan>,

    pub label: String,

    #[help]
    pub help: Option<String>,

    pub message: String,
}

impl XmlDiagnostic {
    pub fn from_validation(error: &ValidationError, source_name: &str, input: &str) -> Self {
        let (label, help) = describe(error);
        Self::new(error.to_string(), error.position(), label, help, source_name, input)
    }

    pub fn from_parse(error: &ParseError, source_name: &str, input: &str) -> Self {
        match error {
            ParseError::Validation(inner) => Self::from_validation(inner, source_name, input),
            ParseError::Extraction(missing) => Self::new(
                error.to_string(),
                Some(missing.position),
                format!("no <{}> inside this element", missing.tag),
                Some(format!(
                    "Add the missing element to the {} section.",
                    missing.context
                )),
                source_name,
                input,
            ),
        }
    }

    fn new(
        message: String,
        position: Option<usize>,
        label: String,
        help: Option<String>,
        source_name: &str,
        input: &str,
    ) -> Self {
        let span = position.map(|offset| span_at(input, offset));
        Self {
            source_code: crate::error_utils::create_named_source(source_name, input.to_string()),
            span,
            label,
            help,
            message,
        }
    }
}

fn describe(error: &ValidationError) -> (String, Option<String>) {
    match error {
        ValidationError::EmptyInput => ("empty input".to_string(), None),
        ValidationError::UnclosedTag { .. } => (
            "tag structure breaks here".to_string(),
            Some("Every <tag> needs a matching </tag>, closed in reverse order.".to_string()),
        ),
        ValidationError::Incomplete { .. } => ("input ends here".to_string(), None),
        ValidationError::InvalidCharacter { .. } => (
            "invalid character or syntax".to_string(),
            Some("Write & as &amp; and < as &lt; inside text and attribute values.".to_string()),
        ),
        ValidationError::Syntax { .. } => ("here".to_string(), None),
        ValidationError::WrongRoot {
            expected, found, ..
        } => (
            format!("root element is <{found}>"),
            Some(format!("Wrap the whole document in <{expected}>...</{expected}>.")),
        ),
        ValidationError::MissingSection { tag, .. } => (
            format!("<{tag}> not found inside this element"),
            Some(format!("Add a <{tag}> section to the document.")),
        ),
    }
}

/// Label the tag at `offset`, or a single position at the end of the input.
fn span_at(input: &str, offset: usize) -> SourceSpan {
    let offset = offset.min(input.len());
    let rest = input.get(offset..).unwrap_or_default();
    let length = if rest.starts_with('<') {
        rest.find('>').map(|end| end + 1).unwrap_or(rest.len())
    } else {
        0
    };
    SourceSpan::new(offset.into(), length)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate;

    #[test]
    fn test_span_covers_start_tag() {
        let input = "<wrongRoot><applicant/></wrongRoot>";
        let span = span_at(input, 0);
        assert_eq!(span.offset(), 0);
        assert_eq!(span.len(), "<wrongRoot>".len());
    }

    #[test]
    fn test_span_at_end_of_input_is_empty() {
        let input = "<a>";
        let span = span_at(input, 10);
        assert_eq!(span.offset(), 3);
        assert_eq!(span.len(), 0);
    }

    #[test]
    fn test_diagnostic_keeps_user_message() {
        let input = "<wrongRoot><applicant></applicant></wrongRoot>";
        let error = validate(input).unwrap_err();
        let diagnostic = XmlDiagnostic::from_validation(&error, "letter.xml", input);

        assert_eq!(diagnostic.to_string(), error.to_string());
        assert_eq!(diagnostic.label, "root element is <wrongRoot>");
        assert!(diagnostic.help.unwrap().contains("<applicationDocument>"));
        assert!(diagnostic.span.is_some());
    }

    #[test]
    fn test_empty_input_has_no_span() {
        let error = validate("  ").unwrap_err();
        let diagnostic = XmlDiagnostic::from_validation(&error, "-", "  ");
        assert!(diagnostic.span.is_none());
    }
}
