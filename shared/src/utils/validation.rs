//! Common validation utilities

/// Common validation functions
pub mod validators {
    use once_cell::sync::Lazy;
    use regex::Regex;

    static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
        Regex::new(concat!(
            r"^[A-Za-z0-9._%+\-]+@",
            r"[A-Za-z0-9](?:[A-Za-z0-9\-]*[A-Za-z0-9])?",
            r"(?:\.[A-Za-z0-9](?:[A-Za-z0-9\-]*[A-Za-z0-9])?)+$",
        ))
        .expect("email pattern is a valid regex")
    });

    /// Check if a string is not blank after trimming
    pub fn not_blank(value: &str) -> bool {
        !value.trim().is_empty()
    }

    /// Check if a string is at least `min` bytes long in UTF-8
    pub fn min_len(value: &str, min: usize) -> bool {
        value.len() >= min
    }

    /// Check if an email address is syntactically valid
    pub fn is_valid_email(email: &str) -> bool {
        email.len() <= 254 && EMAIL_PATTERN.is_match(email)
    }
}

#[cfg(test)]
mod tests {
    use super::validators::*;

    #[test]
    fn test_not_blank() {
        assert!(not_blank("a"));
        assert!(not_blank("  a  "));
        assert!(!not_blank(""));
        assert!(!not_blank(" \t\n"));
    }

    #[test]
    fn test_min_len_counts_bytes() {
        assert!(min_len("123456", 6));
        assert!(!min_len("12345", 6));
        // three two-byte characters are six bytes
        assert!(min_len("ééé", 6));
        assert!(!min_len("éé", 6));
    }

    #[test]
    fn test_email_validation() {
        assert!(is_valid_email("a@x.io"));
        assert!(is_valid_email("first.last+tag@sub.example.com"));
        assert!(!is_valid_email("a@x"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("@x.io"));
        assert!(!is_valid_email("a b@x.io"));
    }
}
