//! Local input validation and formatting helpers shared by the forms.

/// Accepts `local@domain.tld` shaped addresses: no whitespace, a single `@`,
/// and at least one dot with something on both sides in the domain part.
pub fn is_valid_email(email: &str) -> bool {
    let mut parts = email.split('@');
    let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => (local, domain),
        _ => return false,
    };
    if local.is_empty() || local.chars().any(char::is_whitespace) {
        return false;
    }
    if domain.chars().any(char::is_whitespace) {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Formats free-typed input as `+7 (XXX) XXX-XX-XX`, dropping a leading
/// country digit (7 or 8) and ignoring everything past ten digits.
pub fn format_phone(raw: &str) -> String {
    let mut digits: Vec<char> = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.first() == Some(&'7') || digits.first() == Some(&'8') {
        digits.remove(0);
    }
    digits.truncate(10);

    let take = |from: usize, to: usize| -> String {
        digits[from.min(digits.len())..to.min(digits.len())].iter().collect()
    };

    let mut out = String::from("+7");
    if !digits.is_empty() {
        out.push_str(" (");
        out.push_str(&take(0, 3));
        if digits.len() > 3 {
            out.push_str(") ");
            out.push_str(&take(3, 6));
            if digits.len() > 6 {
                out.push('-');
                out.push_str(&take(6, 8));
                if digits.len() > 8 {
                    out.push('-');
                    out.push_str(&take(8, 10));
                }
            }
        }
    }
    out
}

/// Contact form message limit; beyond this the counter turns red and the
/// form refuses to submit.
pub const MESSAGE_LIMIT: usize = 1000;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_addresses() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("first.last@mail.example.ru"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("user@example"));
        assert!(!is_valid_email("user@.com"));
        assert!(!is_valid_email("user@example."));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("us er@example.com"));
        assert!(!is_valid_email("user@exa mple.com"));
        assert!(!is_valid_email("user@ex@ample.com"));
    }

    #[test]
    fn masks_a_full_number() {
        assert_eq!(format_phone("9261234567"), "+7 (926) 123-45-67");
    }

    #[test]
    fn strips_a_leading_country_digit() {
        assert_eq!(format_phone("89261234567"), "+7 (926) 123-45-67");
        assert_eq!(format_phone("79261234567"), "+7 (926) 123-45-67");
    }

    #[test]
    fn masks_partial_input_as_typed() {
        assert_eq!(format_phone(""), "+7");
        assert_eq!(format_phone("9"), "+7 (9");
        assert_eq!(format_phone("926"), "+7 (926");
        assert_eq!(format_phone("9261"), "+7 (926) 1");
        assert_eq!(format_phone("92612345"), "+7 (926) 123-45");
    }

    #[test]
    fn ignores_punctuation_and_overflow() {
        assert_eq!(format_phone("+7 (926) 123-45-67 ext 89"), "+7 (926) 123-45-67");
    }
}
