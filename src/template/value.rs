//! Lenient coercion of loosely-typed template values.
//!
//! Templates come from many client versions, so a field that should be a
//! string may arrive as a number and a flag may arrive as `"yes"`. Nothing
//! here fails: unusable input becomes "no value" or `false`.

use serde_json::{Number, Value};

/// Render a value as text.
///
/// Strings pass through, numbers use their natural decimal form (`2.0` is
/// `"2"`), booleans become `"true"`/`"false"`, arrays and objects fall back
/// to their JSON text. `null` is no value.
pub fn as_string(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(number_to_string(n)),
        Value::Bool(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    }
}

/// Interpret a value as a flag.
///
/// `true`, or a string equal to `true`, `yes` or `1` ignoring case and
/// surrounding whitespace. Everything else, numbers included, is `false`.
pub fn as_bool(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::String(s) => matches!(s.trim().to_ascii_lowercase().as_str(), "true" | "yes" | "1"),
        _ => false,
    }
}

/// Interpret a value as a number, accepting numeric strings.
pub fn as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        _ => None,
    }
}

/// Text at `key` of an object, `None` when missing, null or blank.
pub fn text(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(non_empty)
}

/// [`as_string`], treating whitespace-only strings as absent.
pub fn non_empty(value: &Value) -> Option<String> {
    as_string(value).filter(|s| !s.trim().is_empty())
}

/// Numeric value of an amount such as `"$4.50"` or `"4.5"`.
pub fn amount_value(s: &str) -> Option<f64> {
    strip_currency(s).parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Render an amount as `$<value>`, keeping the digits exactly as sent.
///
/// A single leading `$` is dropped first so `"$3"` does not print as `$$3`.
pub fn format_amount(s: &str) -> String {
    format!("${}", strip_currency(s))
}

fn strip_currency(s: &str) -> &str {
    let s = s.trim();
    s.strip_prefix('$').unwrap_or(s)
}

fn number_to_string(n: &Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    match n.as_f64() {
        Some(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_as_string() {
        assert_eq!(as_string(&json!("Tea")), Some("Tea".into()));
        assert_eq!(as_string(&json!(2)), Some("2".into()));
        assert_eq!(as_string(&json!(2.0)), Some("2".into()));
        assert_eq!(as_string(&json!(4.5)), Some("4.5".into()));
        assert_eq!(as_string(&json!(true)), Some("true".into()));
        assert_eq!(as_string(&json!(null)), None);
        assert_eq!(as_string(&json!([1, 2])), Some("[1,2]".into()));
    }

    #[test]
    fn test_as_bool_truth_set() {
        assert!(as_bool(&json!(true)));
        assert!(as_bool(&json!("true")));
        assert!(as_bool(&json!("TRUE")));
        assert!(as_bool(&json!("yes")));
        assert!(as_bool(&json!("Yes")));
        assert!(as_bool(&json!("1")));
        assert!(as_bool(&json!(" yes ")));
    }

    #[test]
    fn test_as_bool_everything_else_is_false() {
        assert!(!as_bool(&json!(false)));
        assert!(!as_bool(&json!("false")));
        assert!(!as_bool(&json!("no")));
        assert!(!as_bool(&json!("0")));
        assert!(!as_bool(&json!(null)));
        assert!(!as_bool(&json!(1)));
        assert!(!as_bool(&json!(0)));
        assert!(!as_bool(&json!({"bold": true})));
    }

    #[test]
    fn test_text_skips_blank() {
        let v = json!({"a": "  ", "b": "x", "c": null, "d": 7});
        assert_eq!(text(&v, "a"), None);
        assert_eq!(text(&v, "b"), Some("x".into()));
        assert_eq!(text(&v, "c"), None);
        assert_eq!(text(&v, "d"), Some("7".into()));
        assert_eq!(text(&v, "missing"), None);
        assert_eq!(text(&json!("not an object"), "a"), None);
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount("5.00"), "$5.00");
        assert_eq!(format_amount("$3"), "$3");
        assert_eq!(format_amount(" $14.5 "), "$14.5");
        assert_eq!(format_amount("FREE"), "$FREE");
        assert_eq!(format_amount("$$2"), "$$2");
    }

    #[test]
    fn test_format_amount_keeps_digits() {
        assert_eq!(format_amount("12345678901234567890"), "$12345678901234567890");
        assert_eq!(format_amount("12.345"), "$12.345");
        assert_eq!(format_amount("0.005"), "$0.005");
        assert_eq!(format_amount("1e3"), "$1e3");
    }

    #[test]
    fn test_amount_value() {
        assert_eq!(amount_value("$1.20"), Some(1.2));
        assert_eq!(amount_value("0"), Some(0.0));
        assert_eq!(amount_value("-"), None);
    }

    #[test]
    fn test_as_f64() {
        assert_eq!(as_f64(&json!("1.50")), Some(1.5));
        assert_eq!(as_f64(&json!(3)), Some(3.0));
        assert_eq!(as_f64(&json!("abc")), None);
        assert_eq!(as_f64(&json!("NaN")), None);
    }
}
