pub mod display;
pub mod document;
pub mod outcome;

// Re-export commonly used types
pub use document::{
    Achievement, Address, Applicant, ContactInformation, Experience, Letter, ParsedData, Recipient,
};
pub use outcome::{ParseOutcome, ValidationOutcome};
