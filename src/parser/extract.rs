//! Lookups shared by every section extractor

use super::error::MissingElement;
use crate::models::Address;
use crate::xml::Element;

/// First descendant of `scope` matching `path`, or an error naming the path.
pub(crate) fn required_element<'a>(
    scope: Element<'a>,
    path: &[&str],
    context: &str,
) -> Result<Element<'a>, MissingElement> {
    scope
        .find_first_by_path(path)
        .ok_or_else(|| MissingElement::new(path, context, scope.position()))
}

/// Trimmed text of a required descendant.
pub(crate) fn required_text(
    scope: Element<'_>,
    path: &[&str],
    context: &str,
) -> Result<String, MissingElement> {
    required_element(scope, path, context).map(trimmed_text)
}

/// Trimmed text of an optional descendant; absent reads as "".
pub(crate) fn optional_text(scope: Element<'_>, tag: &str) -> String {
    scope
        .find_first(tag)
        .map(trimmed_text)
        .unwrap_or_default()
}

pub(crate) fn trimmed_text(element: Element<'_>) -> String {
    element.text_content().trim().to_string()
}

/// Read the `<address>` block of `owner` (e.g. "applicant").
/// A missing block reads "Missing required element: address in <owner>", like any other field.
pub(crate) fn address(owner_element: Element<'_>, owner: &str) -> Result<Address, MissingElement> {
    let element = required_element(owner_element, &["address"], owner)?;
    let context = format!("{owner} address");

    Ok(Address {
        street: required_text(element, &["street"], &context)?,
        city: required_text(element, &["city"], &context)?,
        state: required_text(element, &["state"], &context)?,
        zip_code: required_text(element, &["zipCode"], &context)?,
    })
}
