use regex::Regex;

/// Tries `patterns` in order and returns capture `group` of the first one
/// that matches anywhere in `text`. Later patterns are not consulted.
pub fn first_capture<'t>(patterns: &[Regex], text: &'t str, group: usize) -> Option<&'t str> {
    patterns
        .iter()
        .find_map(|re| re.captures(text))
        .and_then(|caps| caps.get(group))
        .map(|m| m.as_str())
}

/// Like [`first_capture`], parsing the captured digits as a number.
pub fn first_number(patterns: &[Regex], text: &str) -> Option<f64> {
    first_capture(patterns, text, 1).and_then(|digits| digits.parse::<f64>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patterns() -> Vec<Regex> {
        vec![
            Regex::new(r"(?i)([0-9]+)\s*apples").unwrap(),
            Regex::new(r"(?i)([0-9]+)\s*pears").unwrap(),
        ]
    }

    #[test]
    fn test_earlier_pattern_wins_even_if_later_in_text() {
        let text = "3 pears and 7 apples";
        assert_eq!(first_capture(&patterns(), text, 1), Some("7"));
    }

    #[test]
    fn test_falls_through_to_next_pattern() {
        assert_eq!(first_number(&patterns(), "only 4 PEARS left"), Some(4.0));
    }

    #[test]
    fn test_no_match() {
        assert_eq!(first_capture(&patterns(), "bananas", 0), None);
        assert_eq!(first_number(&[], "12 apples"), None);
    }
}
