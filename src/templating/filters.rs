use minijinja::Environment;

/// `mailto:` link target for an email address
pub fn mailto_filter(email: &str) -> String {
    format!("mailto:{}", email.trim())
}

/// `tel:` link target; keeps digits and a leading `+`
pub fn tel_filter(phone: &str) -> String {
    let phone = phone.trim();
    let mut target = String::from("tel:");
    if phone.starts_with('+') {
        target.push('+');
    }
    target.extend(phone.chars().filter(char::is_ascii_digit));
    target
}

pub fn register_filters(env: &mut Environment) {
    env.add_filter("mailto", mailto_filter);
    env.add_filter("tel", tel_filter);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mailto_filter() {
        assert_eq!(mailto_filter(" jane.doe@email.com "), "mailto:jane.doe@email.com");
    }

    #[test]
    fn test_tel_filter_strips_formatting() {
        assert_eq!(tel_filter("(555) 123-4567"), "tel:5551234567");
        assert_eq!(tel_filter("+44 20 7946 0958"), "tel:+442079460958");
    }

    #[test]
    fn test_filters_in_template() {
        let mut env = Environment::new();
        register_filters(&mut env);
        let rendered = env
            .render_str(
                "{{ phone | tel }} {{ email | mailto }}",
                minijinja::context! { phone => "555-0100", email => "a@b.example" },
            )
            .unwrap();
        assert_eq!(rendered, "tel:5550100 mailto:a@b.example");
    }
}
