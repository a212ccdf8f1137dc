//! Template error types with miette integration

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum TemplateError {
    #[error("Template \"{name}\" not found. Available templates: {available}")]
    #[diagnostic(help("Run `ohmydoc templates` to list the built-in templates"))]
    NotFound { name: String, available: String },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Render(#[from] RenderError),
}

#[derive(Error, Debug, Diagnostic)]
#[error("Failed to render template \"{template}\"")]
pub struct RenderError {
    template: String,

    #[source_code]
    src: NamedSource<String>,

    #[label("{}", self.reason)]
    span: Option<SourceSpan>,

    reason: String,

    #[help]
    help: Option<String>,

    #[source]
    source: minijinja::Error,
}

impl RenderError {
    pub fn from_minijinja_error(error: minijinja::Error, template: &str, source: &str) -> Self {
        let span = error.range().map(SourceSpan::from).or_else(|| {
            // MiniJinja uses 1-based line numbers
            error
                .line()
                .map(|line| SourceSpan::from(line_to_offset(source, line.saturating_sub(1))))
        });

        let detail = error.detail().unwrap_or("unknown");
        let reason = match error.kind() {
            minijinja::ErrorKind::UndefinedError => format!("undefined value: {detail}"),
            minijinja::ErrorKind::SyntaxError => format!("syntax error: {detail}"),
            minijinja::ErrorKind::UnknownFilter => format!("unknown filter: {detail}"),
            minijinja::ErrorKind::InvalidOperation => format!("invalid operation: {detail}"),
            _ => error.to_string(),
        };

        let help = match error.kind() {
            minijinja::ErrorKind::UndefinedError => Some(
                "Templates see `doc` (the parsed document, camelCase fields) and `template` (its metadata)"
                    .to_string(),
            ),
            minijinja::ErrorKind::UnknownFilter => {
                Some("Available filters: mailto, tel, and the MiniJinja built-ins".to_string())
            }
            _ => None,
        };

        Self {
            template: template.to_string(),
            src: crate::error_utils::create_named_source(&format!("{template}.html.j2"), source.to_string()),
            span,
            reason,
            help,
            source: error,
        }
    }
}

/// Byte offset of the start of `target_line` (0-based)
fn line_to_offset(source: &str, target_line: usize) -> usize {
    if target_line == 0 {
        return 0;
    }

    source
        .match_indices('\n')
        .nth(target_line - 1)
        .map(|(idx, _)| idx + 1)
        .unwrap_or(source.len())
}
