use minijinja::{Environment, context};
use tracing::debug;

use super::error::{RenderError, TemplateError};
use super::filters::register_filters;
use super::registry::{self, TemplateDefinition};
use crate::models::ParsedData;

pub struct TemplateEngine {
    env: Environment<'static>,
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateEngine {
    pub fn new() -> Self {
        let mut env = Environment::new();

        // Fail on undefined values instead of rendering blanks
        env.set_undefined_behavior(minijinja::UndefinedBehavior::Strict);
        env.set_loader(|name| {
            Ok(name
                .strip_suffix(".html")
                .and_then(|name| registry::lookup(name).ok())
                .map(|template| template.source.to_string()))
        });

        register_filters(&mut env);

        Self { env }
    }

    /// Render `data` as a standalone HTML page with the named template.
    pub fn render(&self, data: &ParsedData, name: &str) -> Result<String, TemplateError> {
        let definition = registry::lookup(name)?;
        debug!(template = name, "Rendering application document");

        self.render_definition(data, definition)
            .map_err(|error| RenderError::from_minijinja_error(error, name, definition.source).into())
    }

    fn render_definition(
        &self,
        data: &ParsedData,
        definition: &TemplateDefinition,
    ) -> Result<String, minijinja::Error> {
        let template = self.env.get_template(&definition.file_name())?;
        template.render(context! {
            doc => data,
            template => &definition.metadata,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SAMPLE_DOCUMENT;
    use crate::parser::parse;

    fn sample() -> ParsedData {
        parse(SAMPLE_DOCUMENT).unwrap()
    }

    #[test]
    fn test_render_sample_with_default_template() {
        let html = TemplateEngine::new().render(&sample(), "modern").unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<article class=\"application-document template-modern\">"));
        assert!(html.contains("<h1 class=\"applicant-name\">Jane Doe</h1>"));
        assert!(html.contains("href=\"mailto:jane.doe@email.com\""));
        assert!(html.contains("href=\"tel:5551234567\""));
        assert!(html.contains("<p class=\"document-date\">June 15, 2024</p>"));
        assert!(html.contains("<p class=\"recipient-company\">Brightwave Marketing</p>"));
        assert!(html.contains("<strong>GreenLeaf Promotions</strong>"));
        assert_eq!(html.matches("<div class=\"experience\">").count(), 2);
        assert_eq!(html.matches("<li class=\"achievement\">").count(), 5);
        assert!(html.contains("<p class=\"signature\">Jane Doe</p>"));
    }

    #[test]
    fn test_render_classic_template() {
        let html = TemplateEngine::new().render(&sample(), "classic").unwrap();
        assert!(html.contains("template-classic"));
        assert!(html.contains("<main class=\"letter\">"));
        assert_eq!(html.matches("<li class=\"achievement\">").count(), 5);
    }

    #[test]
    fn test_empty_experience_list_renders_no_section() {
        let mut data = sample();
        data.letter.experience_section.clear();

        for name in registry::available_templates() {
            let html = TemplateEngine::new().render(&data, name).unwrap();
            assert!(!html.contains("class=\"experience-section\""), "{name}");
            assert!(html.contains("<p class=\"motivation\">"), "{name}");
        }
    }

    #[test]
    fn test_text_is_html_escaped() {
        let mut data = sample();
        data.recipient.company = "Smith & Sons <Ltd>".to_string();

        let html = TemplateEngine::new().render(&data, "modern").unwrap();
        assert!(html.contains("Smith &amp; Sons &lt;Ltd&gt;"));
        assert!(!html.contains("<Ltd>"));
    }

    #[test]
    fn test_unknown_template_is_not_found() {
        let err = TemplateEngine::new().render(&sample(), "fancy").unwrap_err();
        assert!(matches!(err, TemplateError::NotFound { .. }));
        assert_eq!(
            err.to_string(),
            "Template \"fancy\" not found. Available templates: modern, classic"
        );
    }
}
