/// Minimum 8 characters, at least one letter and one digit. The frontend
/// enforces the same rule; this is the backstop.
pub fn validate_password_form(password: &str) -> bool {
    password.chars().count() >= 8
        && password.chars().any(|c| c.is_alphabetic())
        && password.chars().any(|c| c.is_ascii_digit())
}

pub fn validate_username(name: &str) -> bool {
    let trimmed = name.trim();
    !trimmed.is_empty() && trimmed.chars().count() <= 100
}

/// Title-cases a display name before storage: first letter of each
/// whitespace-separated word uppercased, rest lowered.
pub fn title_case(name: &str) -> String {
    name.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + chars.as_str().to_lowercase().as_str()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_needs_length_letter_and_digit() {
        assert!(validate_password_form("longpass1"));
        assert!(!validate_password_form("short1a"));
        assert!(!validate_password_form("alllettersonly"));
        assert!(!validate_password_form("1234567890"));
    }

    #[test]
    fn username_rejects_blank_and_overlong() {
        assert!(validate_username("Ann"));
        assert!(!validate_username("   "));
        assert!(!validate_username(&"a".repeat(101)));
    }

    #[test]
    fn title_case_normalizes_each_word() {
        assert_eq!(title_case("ann smith"), "Ann Smith");
        assert_eq!(title_case("ANN"), "Ann");
        assert_eq!(title_case("  mary  jane "), "Mary Jane");
    }
}
