//! HTML rendering of parsed application documents

pub mod engine;
pub mod error;
pub mod filters;
pub mod registry;

pub use engine::TemplateEngine;
pub use error::{RenderError, TemplateError};
pub use registry::{
    DEFAULT_TEMPLATE, TemplateDefinition, TemplateMetadata, all_metadata, available_templates,
    lookup, select_template,
};
