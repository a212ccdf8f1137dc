//! Shared error utilities

use miette::NamedSource;

/// Toggle this to add spaces for iTerm2 clickability
const ADD_SPACES_FOR_ITERM: bool = true;

/// Format a source name for error display
///
/// When ADD_SPACES_FOR_ITERM is true, adds a space before file paths to make
/// them clickable in iTerm2. Standard input is shown as `<stdin>`.
pub fn format_source_name(name: &str) -> String {
    if name == "-" {
        return "<stdin>".to_string();
    }

    if ADD_SPACES_FOR_ITERM {
        format!(" {name}")
    } else {
        name.to_string()
    }
}

/// Create a NamedSource with proper formatting for error display
pub fn create_named_source(name: &str, content: String) -> NamedSource<String> {
    NamedSource::new(format_source_name(name), content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stdin_source_name() {
        assert_eq!(format_source_name("-"), "<stdin>");
    }

    #[test]
    fn test_file_source_name() {
        assert_eq!(format_source_name("letter.xml").trim(), "letter.xml");
    }
}
