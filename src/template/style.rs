//! Section formatting: character size and bold.

use serde_json::Value;

use super::value::{as_bool, as_f64};
use crate::protocol::Magnification;

/// Resolve a template size value.
///
/// | input | output |
/// |---|---|
/// | 1, "1", "normal" | Normal |
/// | 2, "2", "large" | X2 |
/// | 3, "3", "xlarge" | X3 |
/// | 4, "4" | X4 |
/// | anything else | Normal |
pub fn resolve_size(value: &Value) -> Magnification {
    match value {
        Value::Number(_) => match as_f64(value) {
            Some(n) if n == 1.0 => Magnification::Normal,
            Some(n) if n == 2.0 => Magnification::X2,
            Some(n) if n == 3.0 => Magnification::X3,
            Some(n) if n == 4.0 => Magnification::X4,
            _ => Magnification::Normal,
        },
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "2" | "large" => Magnification::X2,
            "3" | "xlarge" => Magnification::X3,
            "4" => Magnification::X4,
            _ => Magnification::Normal,
        },
        _ => Magnification::Normal,
    }
}

/// Size and emphasis applied to one section of the receipt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    pub size: Magnification,
    pub bold: bool,
}

impl Style {
    pub const NORMAL: Self = Self::new(Magnification::Normal, false);

    pub const fn new(size: Magnification, bold: bool) -> Self {
        Self { size, bold }
    }

    /// Read `size`/`bold` from a section config object.
    ///
    /// Missing keys keep `default`; a present but unrecognized size is Normal.
    pub fn from_config(config: Option<&Value>, default: Style) -> Style {
        let Some(config) = config.filter(|c| c.is_object()) else {
            return default;
        };
        Style {
            size: config.get("size").map_or(default.size, resolve_size),
            bold: config.get("bold").map_or(default.bold, as_bool),
        }
    }

    /// Read a style from the flat keys of a legacy `formatting` object,
    /// e.g. `headerSize`/`headerBold`.
    pub fn from_flat(
        formatting: Option<&Value>,
        size_key: &str,
        bold_key: Option<&str>,
    ) -> Style {
        let Some(formatting) = formatting else {
            return Style::NORMAL;
        };
        Style {
            size: formatting.get(size_key).map_or(Magnification::Normal, resolve_size),
            bold: bold_key
                .and_then(|k| formatting.get(k))
                .is_some_and(as_bool),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_resolve_size_table() {
        let cases = [
            (json!(1), Magnification::Normal),
            (json!(2), Magnification::X2),
            (json!(3), Magnification::X3),
            (json!(4), Magnification::X4),
            (json!("1"), Magnification::Normal),
            (json!("2"), Magnification::X2),
            (json!("3"), Magnification::X3),
            (json!("4"), Magnification::X4),
            (json!("normal"), Magnification::Normal),
            (json!("large"), Magnification::X2),
            (json!("xlarge"), Magnification::X3),
        ];
        for (input, expected) in cases {
            assert_eq!(resolve_size(&input), expected, "input {input}");
        }
    }

    #[test]
    fn test_resolve_size_case_insensitive() {
        assert_eq!(resolve_size(&json!("LARGE")), Magnification::X2);
        assert_eq!(resolve_size(&json!(" XLarge ")), Magnification::X3);
        assert_eq!(resolve_size(&json!("Normal")), Magnification::Normal);
    }

    #[test]
    fn test_resolve_size_unrecognized_is_normal() {
        for input in [json!("huge"), json!(5), json!(0), json!(2.5), json!(null), json!(true), json!("")] {
            assert_eq!(resolve_size(&input), Magnification::Normal, "input {input}");
        }
        assert_eq!(resolve_size(&json!(2.0)), Magnification::X2);
    }

    #[test]
    fn test_from_config_keeps_defaults() {
        let default = Style::new(Magnification::X2, true);
        assert_eq!(Style::from_config(None, default), default);
        assert_eq!(Style::from_config(Some(&json!({})), default), default);
        assert_eq!(Style::from_config(Some(&json!("bold")), default), default);
        assert_eq!(
            Style::from_config(Some(&json!({"bold": false})), default),
            Style::new(Magnification::X2, false)
        );
    }

    #[test]
    fn test_from_config_invalid_size_is_normal() {
        let default = Style::new(Magnification::X2, false);
        assert_eq!(
            Style::from_config(Some(&json!({"size": "huge"})), default),
            Style::NORMAL
        );
    }

    #[test]
    fn test_from_flat() {
        let formatting = json!({"itemSize": 3, "itemBold": true, "footerSize": "large"});
        assert_eq!(
            Style::from_flat(Some(&formatting), "itemSize", Some("itemBold")),
            Style::new(Magnification::X3, true)
        );
        assert_eq!(
            Style::from_flat(Some(&formatting), "footerSize", None),
            Style::new(Magnification::X2, false)
        );
        assert_eq!(Style::from_flat(None, "headerSize", None), Style::NORMAL);
    }
}
