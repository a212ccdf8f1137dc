mod error;
pub mod error_reporter;
mod validator;


pub use error::ValidationError;
pub use error_reporter::XmlDiagnostic;
pub use validator::{REQUIRED_SECTIONS, ROOT_ELEMENT, Validator, validate};
