/// Gate for the metric text fields: empty clears, otherwise ASCII digits only.
pub fn accepts(candidate: &str) -> bool {
    candidate.chars().all(|c| c.is_ascii_digit())
}

/// Applies `candidate` to a metric field, keeping the previous value when the
/// candidate is rejected. Rejection is silent; callers re-render whatever the
/// field holds afterwards.
pub fn apply(field: &mut String, candidate: String) {
    if accepts(&candidate) {
        *field = candidate;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_are_accepted() {
        assert!(accepts("123"));
        assert!(accepts("0"));
        assert!(accepts("0042"));
    }

    #[test]
    fn empty_string_is_accepted() {
        assert!(accepts(""));
    }

    #[test]
    fn mixed_input_is_rejected() {
        assert!(!accepts("12a3"));
        assert!(!accepts(" 12"));
        assert!(!accepts("-5"));
        assert!(!accepts("3.5"));
    }

    #[test]
    fn non_ascii_digits_are_rejected() {
        assert!(!accepts("١٢٣"));
    }

    #[test]
    fn apply_keeps_previous_value_on_reject() {
        let mut field = String::from("123");
        apply(&mut field, "12a3".to_string());
        assert_eq!(field, "123");
    }

    #[test]
    fn apply_replaces_on_accept_and_clears_on_empty() {
        let mut field = String::new();
        apply(&mut field, "123".to_string());
        assert_eq!(field, "123");
        apply(&mut field, String::new());
        assert_eq!(field, "");
    }
}
