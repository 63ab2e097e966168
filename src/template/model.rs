//! Canonical receipt model.
//!
//! [`ReceiptTemplate::from_value`] folds every supported template layout
//! into one set of typed sections with defaults already applied, so the
//! section encoders never look at raw JSON.

use serde_json::Value;

use super::shape::TemplateShape;
use super::style::Style;
use super::value::{amount_value, as_f64, as_string, non_empty, text};
use crate::protocol::Magnification;
use crate::timestamp::{DateFormat, TimeFormat};

/// A receipt template after shape detection and normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct ReceiptTemplate {
    pub shape: TemplateShape,
    /// Per-template separator character override.
    pub separator: Option<char>,
    pub header: Option<Header>,
    pub order_info: OrderInfo,
    pub items: Items,
    pub totals: Totals,
    pub footer: Footer,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Header {
    pub restaurant_name: Option<String>,
    pub sub_header: Option<String>,
    pub address: Option<String>,
    pub phone_number: Option<String>,
    pub gst_number: Option<String>,
    pub style: Style,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderInfo {
    pub order_type: Option<String>,
    pub order_type_style: Style,
    pub table_name: Option<String>,
    pub order_number: Option<String>,
    pub style: Style,
}

impl OrderInfo {
    /// `"<table> | <order>"`, or whichever of the two is present.
    pub fn table_line(&self) -> Option<String> {
        match (&self.table_name, &self.order_number) {
            (Some(table), Some(order)) => Some(format!("{table} | {order}")),
            (Some(one), None) | (None, Some(one)) => Some(one.clone()),
            (None, None) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ItemList {
    /// Current layout: `"<name> x<qty>"` plus modifiers.
    Kitchen(Vec<KitchenItem>),
    /// Old layout: `"<name>\t<price>"`.
    Priced(Vec<PricedItem>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Items {
    pub list: Option<ItemList>,
    pub style: Style,
    pub modifier: ModifierFormat,
}

#[derive(Debug, Clone, PartialEq)]
pub struct KitchenItem {
    pub name: String,
    pub quantity: String,
    pub modifiers: Vec<Modifier>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Modifier {
    pub name: String,
    /// Only set when strictly positive.
    pub price: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PricedItem {
    pub name: String,
    pub price: String,
}

/// Marker printed before each modifier. The printer font has no arrows or
/// bullets, so all three are ASCII.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModifierPrefix {
    #[default]
    Dash,
    Bullet,
    Arrow,
}

impl ModifierPrefix {
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "bullet" => Self::Bullet,
            "arrow" => Self::Arrow,
            _ => Self::Dash,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dash => "-",
            Self::Bullet => "*",
            Self::Arrow => ">",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Indent {
    #[default]
    Small,
    Medium,
    Large,
}

impl Indent {
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "medium" => Self::Medium,
            "large" => Self::Large,
            _ => Self::Small,
        }
    }

    pub fn width(self) -> usize {
        match self {
            Self::Small => 1,
            Self::Medium => 2,
            Self::Large => 4,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ModifierFormat {
    pub style: Style,
    pub prefix: ModifierPrefix,
    pub indent: Indent,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Totals {
    pub subtotal: Option<String>,
    /// Only set when it parses as a number greater than zero.
    pub discount: Option<String>,
    pub gst: Option<String>,
    pub total: Option<String>,
    pub total_style: Style,
    pub payment_method: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Footer {
    pub message: Option<String>,
    pub style: Style,
    pub date_format: DateFormat,
    pub time_format: TimeFormat,
}

// ============================================================================
// NORMALIZATION
// ============================================================================

const ITEM_STRUCTURED: Style = Style::new(Magnification::X2, false);
const ORDER_INFO_DEFAULT: Style = Style::new(Magnification::X2, true);

impl ReceiptTemplate {
    /// Normalize a raw template. Never fails: anything unusable falls back to
    /// its default, and non-object input is an empty template.
    pub fn from_value(raw: &Value) -> Self {
        let shape = TemplateShape::detect(raw);
        let formatting = match shape {
            TemplateShape::Formatted => raw.get("formatting").filter(|f| f.is_object()),
            _ => None,
        };

        Self {
            shape,
            separator: raw
                .get("separator")
                .and_then(as_string)
                .and_then(|s| s.chars().next()),
            header: header(raw, formatting),
            order_info: order_info(raw),
            items: items(raw, shape, formatting),
            totals: totals(raw, formatting),
            footer: footer(raw, formatting),
        }
    }
}

fn header(raw: &Value, formatting: Option<&Value>) -> Option<Header> {
    match raw.get("header")? {
        obj @ Value::Object(_) => Some(Header {
            restaurant_name: text(obj, "restaurant_name"),
            sub_header: text(obj, "sub_header"),
            address: text(obj, "address"),
            phone_number: text(obj, "phone_number"),
            gst_number: text(obj, "gst_number"),
            style: Style::from_config(Some(obj), Style::NORMAL),
        }),
        other => non_empty(other).map(|name| Header {
            restaurant_name: Some(name),
            style: Style::from_flat(formatting, "headerSize", None),
            ..Header::default()
        }),
    }
}

fn order_info(raw: &Value) -> OrderInfo {
    OrderInfo {
        order_type: text(raw, "order_type"),
        order_type_style: Style::from_config(raw.get("order_type_config"), Style::NORMAL),
        table_name: text(raw, "table_name"),
        order_number: text(raw, "order_number"),
        style: Style::from_config(raw.get("order_info"), ORDER_INFO_DEFAULT),
    }
}

fn items(raw: &Value, shape: TemplateShape, formatting: Option<&Value>) -> Items {
    let style = if formatting.is_some() {
        Style::from_flat(formatting, "itemSize", Some("itemBold"))
    } else if shape.is_structured() {
        Style::from_config(raw.get("item"), ITEM_STRUCTURED)
    } else {
        Style::NORMAL
    };

    let modifier_config = raw.get("modifier").filter(|m| m.is_object());
    let modifier = ModifierFormat {
        style: Style::from_config(modifier_config, Style::NORMAL),
        prefix: modifier_config
            .and_then(|m| text(m, "style"))
            .map_or_else(ModifierPrefix::default, |s| ModifierPrefix::parse(&s)),
        indent: modifier_config
            .and_then(|m| text(m, "indent"))
            .map_or_else(Indent::default, |s| Indent::parse(&s)),
    };

    let list = if let Some(Value::Array(entries)) = raw.get("kitchen") {
        Some(ItemList::Kitchen(entries.iter().map(kitchen_item).collect()))
    } else if let Some(Value::Array(entries)) = raw.get("items") {
        Some(ItemList::Priced(entries.iter().map(priced_item).collect()))
    } else {
        None
    };

    Items {
        list,
        style,
        modifier,
    }
}

fn kitchen_item(entry: &Value) -> KitchenItem {
    let name = entry
        .get("menu")
        .and_then(|menu| text(menu, "name"))
        .or_else(|| text(entry, "name"))
        .unwrap_or_default();
    let quantity = text(entry, "quantity")
        .or_else(|| text(entry, "qty"))
        .unwrap_or_else(|| "1".to_string());
    let modifiers = match entry.get("modifiers") {
        Some(Value::Array(mods)) => mods.iter().filter_map(modifier).collect(),
        _ => Vec::new(),
    };
    KitchenItem {
        name,
        quantity,
        modifiers,
    }
}

fn modifier(entry: &Value) -> Option<Modifier> {
    let name = match entry {
        Value::Object(_) => text(entry, "name")?,
        other => non_empty(other)?,
    };
    let price = entry
        .get("price")
        .and_then(as_f64)
        .filter(|p| *p > 0.0);
    Some(Modifier { name, price })
}

fn priced_item(entry: &Value) -> PricedItem {
    PricedItem {
        name: text(entry, "name").unwrap_or_default(),
        price: entry.get("price").and_then(as_string).unwrap_or_default(),
    }
}

fn totals(raw: &Value, formatting: Option<&Value>) -> Totals {
    let total_style = if formatting.is_some() {
        Style::from_flat(formatting, "totalSize", Some("totalBold"))
    } else {
        Style::from_config(raw.get("total_config"), Style::NORMAL)
    };
    Totals {
        subtotal: text(raw, "subtotal"),
        discount: text(raw, "discount").filter(|d| amount_value(d).is_some_and(|v| v > 0.0)),
        gst: text(raw, "gst").or_else(|| text(raw, "tax")),
        total: text(raw, "total"),
        total_style,
        payment_method: text(raw, "payment_method"),
    }
}

fn footer(raw: &Value, formatting: Option<&Value>) -> Footer {
    match raw.get("footer") {
        Some(obj @ Value::Object(_)) => Footer {
            message: text(obj, "message"),
            style: Style::from_config(Some(obj), Style::NORMAL),
            date_format: text(obj, "date_format")
                .map_or_else(DateFormat::default, |s| DateFormat::parse(&s)),
            time_format: text(obj, "time_format")
                .map_or_else(TimeFormat::default, |s| TimeFormat::parse(&s)),
        },
        Some(other) => Footer {
            message: non_empty(other),
            style: Style::from_flat(formatting, "footerSize", None),
            ..Footer::default()
        },
        None => Footer::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_structured_header() {
        let t = ReceiptTemplate::from_value(&json!({
            "header": {
                "restaurant_name": "CAFE",
                "sub_header": "",
                "gst_number": "M2-123",
                "size": "2",
                "bold": true
            }
        }));
        assert_eq!(
            t.header,
            Some(Header {
                restaurant_name: Some("CAFE".into()),
                gst_number: Some("M2-123".into()),
                style: Style::new(Magnification::X2, true),
                ..Header::default()
            })
        );
    }

    #[test]
    fn test_legacy_header_has_no_formatting() {
        let t = ReceiptTemplate::from_value(&json!({"header": "Shop"}));
        let header = t.header.unwrap();
        assert_eq!(header.restaurant_name.as_deref(), Some("Shop"));
        assert_eq!(header.style, Style::NORMAL);
    }

    #[test]
    fn test_formatted_reads_flat_keys() {
        let t = ReceiptTemplate::from_value(&json!({
            "header": "Shop",
            "items": [{"name": "Coffee", "price": 3}],
            "total": "3",
            "footer": "Bye",
            "formatting": {"headerSize": "large", "itemSize": 3, "itemBold": "yes",
                           "totalSize": 2, "totalBold": true, "footerSize": 4}
        }));
        assert_eq!(t.shape, TemplateShape::Formatted);
        assert_eq!(t.header.unwrap().style, Style::new(Magnification::X2, false));
        assert_eq!(t.items.style, Style::new(Magnification::X3, true));
        assert_eq!(t.totals.total_style, Style::new(Magnification::X2, true));
        assert_eq!(t.footer.style, Style::new(Magnification::X4, false));
        assert_eq!(
            t.items.list,
            Some(ItemList::Priced(vec![PricedItem {
                name: "Coffee".into(),
                price: "3".into()
            }]))
        );
    }

    #[test]
    fn test_kitchen_defaults() {
        let t = ReceiptTemplate::from_value(&json!({"kitchen": [{"name": "Tea", "qty": 2}]}));
        assert_eq!(t.items.style, Style::new(Magnification::X2, false));
        assert_eq!(t.order_info.style, Style::new(Magnification::X2, true));
        assert_eq!(t.items.modifier, ModifierFormat::default());
        assert_eq!(
            t.items.list,
            Some(ItemList::Kitchen(vec![KitchenItem {
                name: "Tea".into(),
                quantity: "2".into(),
                modifiers: vec![]
            }]))
        );
    }

    #[test]
    fn test_kitchen_item_prefers_menu_and_quantity() {
        let item = kitchen_item(&json!({
            "menu": {"name": "Laksa", "price": 5.0},
            "name": "ignored",
            "quantity": 3,
            "qty": 9,
            "total_price": 15.0,
            "modifiers": [{"name": "Extra egg", "price": 1.5}, {"name": "No chili", "price": 0}, {"price": 2}]
        }));
        assert_eq!(item.name, "Laksa");
        assert_eq!(item.quantity, "3");
        assert_eq!(
            item.modifiers,
            vec![
                Modifier { name: "Extra egg".into(), price: Some(1.5) },
                Modifier { name: "No chili".into(), price: None },
            ]
        );
    }

    #[test]
    fn test_kitchen_item_defaults_quantity() {
        let item = kitchen_item(&json!({"name": "Kopi"}));
        assert_eq!(item.quantity, "1");
    }

    #[test]
    fn test_modifier_format() {
        let t = ReceiptTemplate::from_value(&json!({
            "kitchen": [],
            "modifier": {"style": "arrow", "indent": "large", "size": "2", "bold": "1"}
        }));
        assert_eq!(t.items.modifier.prefix, ModifierPrefix::Arrow);
        assert_eq!(t.items.modifier.indent.width(), 4);
        assert_eq!(t.items.modifier.style, Style::new(Magnification::X2, true));
    }

    #[test]
    fn test_discount_only_when_positive() {
        let t = ReceiptTemplate::from_value(&json!({"discount": "$0.00"}));
        assert_eq!(t.totals.discount, None);
        let t = ReceiptTemplate::from_value(&json!({"discount": "abc"}));
        assert_eq!(t.totals.discount, None);
        let t = ReceiptTemplate::from_value(&json!({"discount": "$1.20"}));
        assert_eq!(t.totals.discount.as_deref(), Some("$1.20"));
    }

    #[test]
    fn test_order_info_default_ignores_shape() {
        for raw in [
            json!({"header": "Shop", "table_name": "T1", "order_number": "42"}),
            json!({"header": "Shop", "table_name": "T1", "formatting": {"headerSize": 2}}),
            json!({"header": {"restaurant_name": "Shop"}, "table_name": "T1"}),
        ] {
            let t = ReceiptTemplate::from_value(&raw);
            assert_eq!(t.order_info.style, Style::new(Magnification::X2, true), "{raw}");
            assert_eq!(t.order_info.order_type_style, Style::NORMAL, "{raw}");
        }
    }

    #[test]
    fn test_table_line() {
        let mut info = ReceiptTemplate::from_value(&json!({"table_name": "T1", "order_number": "42"})).order_info;
        assert_eq!(info.table_line().as_deref(), Some("T1 | 42"));
        info.table_name = None;
        assert_eq!(info.table_line().as_deref(), Some("42"));
        info.order_number = None;
        assert_eq!(info.table_line(), None);
    }

    #[test]
    fn test_separator_override() {
        let t = ReceiptTemplate::from_value(&json!({"separator": "=*"}));
        assert_eq!(t.separator, Some('='));
        let t = ReceiptTemplate::from_value(&json!({"separator": ""}));
        assert_eq!(t.separator, None);
    }

    #[test]
    fn test_footer_formats() {
        let t = ReceiptTemplate::from_value(&json!({
            "footer": {"message": "Thanks", "date_format": "DD/MM/YYYY", "time_format": "12H"}
        }));
        assert_eq!(t.footer.message.as_deref(), Some("Thanks"));
        assert_eq!(t.footer.date_format, DateFormat::DayMonthYearSlash);
        assert_eq!(t.footer.time_format, TimeFormat::H12);
    }

    #[test]
    fn test_non_object_is_empty() {
        let t = ReceiptTemplate::from_value(&json!(null));
        assert_eq!(t.header, None);
        assert_eq!(t.items.list, None);
        assert_eq!(t.totals, Totals::default());
    }
}
