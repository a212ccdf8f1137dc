use ohmydoc::templating::{DEFAULT_TEMPLATE, all_metadata};

pub fn templates_command() {
    println!("Templates:");

    for metadata in all_metadata() {
        let marker = if metadata.name == DEFAULT_TEMPLATE {
            " (default)"
        } else {
            ""
        };
        println!("  - {}{marker}: {}", metadata.name, metadata.description);
    }
}
