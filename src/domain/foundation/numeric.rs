//! Parsing of user-entered numeric text.

/// Parses a number typed by the user.
///
/// Thousands separators (`,`) are stripped and surrounding whitespace is
/// ignored. Returns `None` for empty input or anything that does not parse
/// to a finite number; callers treat that as "absent", never as zero.
pub fn parse_number(input: &str) -> Option<f64> {
    let cleaned: String = input.chars().filter(|c| *c != ',').collect();
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_thousands_separators() {
        assert_eq!(parse_number("72,000"), Some(72000.0));
        assert_eq!(parse_number("1,234,567.5"), Some(1_234_567.5));
    }

    #[test]
    fn trims_whitespace() {
        assert_eq!(parse_number("  42.5 "), Some(42.5));
    }

    #[test]
    fn garbage_is_absent() {
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number("12abc"), None);
    }

    #[test]
    fn empty_is_absent() {
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("   "), None);
        assert_eq!(parse_number(","), None);
    }

    #[test]
    fn non_finite_is_absent() {
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("1e400"), None);
    }

    #[test]
    fn negative_and_zero_parse() {
        assert_eq!(parse_number("-3.5"), Some(-3.5));
        assert_eq!(parse_number("0"), Some(0.0));
    }
}
