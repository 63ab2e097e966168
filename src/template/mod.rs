//! # Receipt Templates
//!
//! Receipt templates arrive as loosely-typed JSON from several generations
//! of client. This module turns them into a single canonical
//! [`ReceiptTemplate`].
//!
//! ## Supported Layouts
//!
//! | Shape | Recognized by | Example |
//! |-------|---------------|---------|
//! | Legacy | flat fields only | `{"header": "Shop", "items": [...], "total": "$3"}` |
//! | Formatted | `formatting` object | `{"formatting": {"headerSize": 2, "itemBold": true}}` |
//! | Sectioned | `header` object or `*_config` keys | `{"header": {"restaurant_name": "CAFE", "bold": true}}` |
//! | Kitchen | `kitchen` list | `{"kitchen": [{"menu": {"name": "Tea"}, "quantity": 2}]}` |
//!
//! Normalization never fails. Wrong types, unknown sizes and missing
//! fields all resolve to defaults.

pub mod model;
pub mod shape;
pub mod style;
pub mod value;

pub use model::{
    Footer, Header, Indent, ItemList, Items, KitchenItem, Modifier, ModifierFormat,
    ModifierPrefix, OrderInfo, PricedItem, ReceiptTemplate, Totals,
};
pub use shape::TemplateShape;
pub use style::{Style, resolve_size};
pub use value::{as_bool, as_string, format_amount};
