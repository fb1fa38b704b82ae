use regex::Regex;
use std::sync::LazyLock;

static NUMERIC_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\d./]+").expect("numeric run pattern is valid"));

/// Parses a free-form quantity such as `"2"`, `"0.5"`, `"3/4"` or `"1 1/2"`.
///
/// Accepts one or two whitespace-separated tokens, each a plain number or an
/// `a/b` fraction, and sums them. Returns `None` for empty input, garbage,
/// a zero denominator, or a total that is not strictly positive.
pub fn parse_quantity(raw: &str) -> Option<f64> {
    let tokens: Vec<&str> = raw.split_whitespace().collect();
    if tokens.is_empty() || tokens.len() > 2 {
        return None;
    }

    let mut total = 0.0;
    for token in tokens {
        total += parse_token(token)?;
    }

    (total.is_finite() && total > 0.0).then_some(total)
}

fn parse_token(token: &str) -> Option<f64> {
    match token.split_once('/') {
        Some((numerator, denominator)) => {
            let numerator: f64 = numerator.parse().ok()?;
            let denominator: f64 = denominator.parse().ok()?;
            if denominator == 0.0 {
                return None;
            }
            Some(numerator / denominator)
        }
        None => token.parse().ok(),
    }
}

/// Pulls the first number-looking run out of a messy quantity (`"3-4"`,
/// `"2 (8 oz)"`, `"about 1/2"`) and parses it.
pub fn extract_leading_quantity(raw: &str) -> Option<f64> {
    NUMERIC_RUN
        .find(raw)
        .and_then(|run| parse_quantity(run.as_str()))
}

/// Renders a JSON quantity value the way it reads in the source data.
///
/// Importers mostly store strings, but bare numbers show up too.
pub fn quantity_text(value: Option<&serde_json::Value>) -> String {
    match value {
        Some(serde_json::Value::String(s)) => s.clone(),
        Some(serde_json::Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_plain_numbers() {
        assert_eq!(parse_quantity("2"), Some(2.0));
        assert_eq!(parse_quantity("0.25"), Some(0.25));
        assert_eq!(parse_quantity("  3 "), Some(3.0));
    }

    #[test]
    fn test_parse_fractions() {
        assert_eq!(parse_quantity("3/4"), Some(0.75));
        assert_eq!(parse_quantity("1 1/2"), Some(1.5));
        assert_eq!(parse_quantity("2 3/4"), Some(2.75));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_quantity(""), None);
        assert_eq!(parse_quantity("   "), None);
        assert_eq!(parse_quantity("abc"), None);
        assert_eq!(parse_quantity("3-4"), None);
        assert_eq!(parse_quantity("1/0"), None);
        assert_eq!(parse_quantity("1/2/3"), None);
        assert_eq!(parse_quantity("a pinch"), None);
    }

    #[test]
    fn test_parse_requires_strictly_positive() {
        assert_eq!(parse_quantity("0"), None);
        assert_eq!(parse_quantity("0/4"), None);
        assert_eq!(parse_quantity("-1"), None);
    }

    #[test]
    fn test_parse_rejects_more_than_two_tokens() {
        assert_eq!(parse_quantity("1 1/2 cups"), None);
        assert_eq!(parse_quantity("1 1 1"), None);
    }

    #[test]
    fn test_extract_leading_quantity() {
        assert_eq!(extract_leading_quantity("3-4"), Some(3.0));
        assert_eq!(extract_leading_quantity("2 (8 oz)"), Some(2.0));
        assert_eq!(extract_leading_quantity("about 1/2"), Some(0.5));
        assert_eq!(extract_leading_quantity("to taste"), None);
        assert_eq!(extract_leading_quantity("."), None);
    }

    #[test]
    fn test_quantity_text() {
        assert_eq!(quantity_text(Some(&json!("1 1/2"))), "1 1/2");
        assert_eq!(quantity_text(Some(&json!(2))), "2");
        assert_eq!(quantity_text(Some(&json!(null))), "");
        assert_eq!(quantity_text(None), "");
    }
}
