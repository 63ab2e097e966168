//! Detection of the template generation a client sent.

use serde_json::Value;

/// The four template layouts clients have shipped over time.
///
/// Detected once per compile; defaults for section styles depend on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateShape {
    /// Flat `header`/`items`/`total`/`footer`, no formatting at all.
    Legacy,
    /// Legacy fields plus a global `formatting` object
    /// (`headerSize`, `itemSize`, `itemBold`, `totalSize`, ...).
    Formatted,
    /// Structured `header` object and per-section config objects.
    Sectioned,
    /// Sectioned layout with a `kitchen` item list (`menu`, `modifiers`).
    Kitchen,
}

/// Keys that only exist in the per-section config layout.
const SECTION_KEYS: &[&str] = &[
    "item",
    "modifier",
    "total_config",
    "order_type_config",
    "order_info",
];

impl TemplateShape {
    pub fn detect(template: &Value) -> Self {
        let has = |key: &str| template.get(key).is_some_and(|v| !v.is_null());

        if template.get("kitchen").is_some_and(Value::is_array) {
            Self::Kitchen
        } else if template.get("header").is_some_and(Value::is_object)
            || template.get("footer").is_some_and(Value::is_object)
            || SECTION_KEYS.iter().any(|k| has(k))
        {
            Self::Sectioned
        } else if template.get("formatting").is_some_and(Value::is_object) {
            Self::Formatted
        } else {
            Self::Legacy
        }
    }

    /// Whether sections default to the larger kitchen-ticket styles.
    pub fn is_structured(self) -> bool {
        matches!(self, Self::Sectioned | Self::Kitchen)
    }
}
