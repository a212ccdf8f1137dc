//! Built-in templates

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::error::TemplateError;

pub const DEFAULT_TEMPLATE: &str = "modern";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateMetadata {
    pub name: String,
    pub display_name: String,
    pub description: String,
}

#[derive(Debug)]
pub struct TemplateDefinition {
    pub metadata: TemplateMetadata,
    pub source: &'static str,
}

impl TemplateDefinition {
    fn new(name: &str, display_name: &str, description: &str, source: &'static str) -> Self {
        Self {
            metadata: TemplateMetadata {
                name: name.to_string(),
                display_name: display_name.to_string(),
                description: description.to_string(),
            },
            source,
        }
    }

    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    /// Name the engine stores the template under; the suffix turns on HTML escaping.
    pub(crate) fn file_name(&self) -> String {
        format!("{}.html", self.metadata.name)
    }
}

// Registration order is display order.
static REGISTRY: Lazy<Vec<TemplateDefinition>> = Lazy::new(|| {
    vec![
        TemplateDefinition::new(
            "modern",
            "Modern",
            "Professional cover letter template with modern styling and clean typography",
            include_str!("../../templates/modern.html.j2"),
        ),
        TemplateDefinition::new(
            "classic",
            "Classic",
            "Traditional serif layout with a right-aligned letterhead",
            include_str!("../../templates/classic.html.j2"),
        ),
    ]
});

pub fn lookup(name: &str) -> Result<&'static TemplateDefinition, TemplateError> {
    REGISTRY
        .iter()
        .find(|template| template.name() == name)
        .ok_or_else(|| TemplateError::NotFound {
            name: name.to_string(),
            available: available_templates().join(", "),
        })
}

pub fn available_templates() -> Vec<&'static str> {
    REGISTRY.iter().map(|template| template.metadata.name.as_str()).collect()
}

pub fn all_metadata() -> Vec<&'static TemplateMetadata> {
    REGISTRY.iter().map(|template| &template.metadata).collect()
}

/// Pick the template to render with.
///
/// An explicit choice always wins, even when it is unknown, so the caller
/// gets a `NotFound` error instead of a silent fallback. A `formatStyle`
/// that names no registered template is ignored.
pub fn select_template<'a>(explicit: Option<&'a str>, format_style: Option<&'a str>) -> &'a str {
    if let Some(name) = explicit {
        return name;
    }

    match format_style {
        Some(style) if lookup(style).is_ok() => style,
        _ => DEFAULT_TEMPLATE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_available_templates_in_registration_order() {
        assert_eq!(available_templates(), vec!["modern", "classic"]);
        assert_eq!(available_templates()[0], DEFAULT_TEMPLATE);
    }

    #[test]
    fn test_lookup_default_metadata() {
        let template = lookup(DEFAULT_TEMPLATE).unwrap();
        assert_eq!(template.metadata.display_name, "Modern");
        assert_eq!(
            template.metadata.description,
            "Professional cover letter template with modern styling and clean typography"
        );
        assert_eq!(template.file_name(), "modern.html");
    }

    #[test]
    fn test_lookup_unknown_template() {
        let err = lookup("fancy").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Template \"fancy\" not found. Available templates: modern, classic"
        );
    }

    #[test]
    fn test_metadata_serializes_camel_case() {
        let json = serde_json::to_value(all_metadata()[1]).unwrap();
        assert_eq!(json["name"], "classic");
        assert_eq!(json["displayName"], "Classic");
    }

    #[test]
    fn test_select_template_precedence() {
        assert_eq!(select_template(Some("classic"), Some("modern")), "classic");
        assert_eq!(select_template(Some("unknown"), None), "unknown");
        assert_eq!(select_template(None, Some("classic")), "classic");
        assert_eq!(select_template(None, Some("unknown")), DEFAULT_TEMPLATE);
        assert_eq!(select_template(None, None), DEFAULT_TEMPLATE);
    }
}
