//! # Sample Templates
//!
//! Built-in receipt templates, one per template shape, for trying a printer
//! without writing JSON by hand.

use serde_json::{Value, json};

// ============================================================================
// SAMPLE TEMPLATES
// ============================================================================

/// Kitchen ticket with every section configured.
pub fn kitchen() -> Value {
    json!({
        "header": {
            "restaurant_name": "CHURRA MART",
            "sub_header": "Kitchen Copy",
            "address": "12 Harbour St, Wellington",
            "phone_number": "04 555 0199",
            "gst_number": "123-456-789",
            "size": "large",
            "bold": true
        },
        "order_type": "Dine In",
        "order_type_config": {"size": "2", "bold": true},
        "table_name": "Patio 4",
        "order_number": "A-1042",
        "order_info": {"size": "1", "bold": false},
        "kitchen": [
            {
                "menu": {"name": "Flat White"},
                "qty": 2,
                "modifiers": [
                    {"name": "Oat milk", "price": 0.8},
                    {"name": "Extra hot", "price": 0}
                ]
            },
            {"name": "Ham & Cheese Toastie", "quantity": "1", "modifiers": ["No butter"]},
            {"name": "Churros", "qty": 3}
        ],
        "item": {"size": "2", "bold": false},
        "modifier": {"size": "1", "bold": false, "style": "arrow", "indent": "medium"},
        "subtotal": "18.50",
        "discount": "2.00",
        "gst": "2.48",
        "total": "16.50",
        "total_config": {"size": "3", "bold": true},
        "payment_method": "CARD",
        "footer": {
            "message": "Thank you!",
            "size": "1",
            "bold": false,
            "date_format": "DD/MM/YYYY",
            "time_format": "12h"
        }
    })
}

/// Flat template with plain strings and priced items.
pub fn legacy() -> Value {
    json!({
        "header": "Corner Shop",
        "items": [
            {"name": "Coffee", "price": "$3"},
            {"name": "Muffin", "price": 4.5}
        ],
        "total": "$7.50",
        "footer": "See you soon"
    })
}

/// Flat template with a `formatting` block of per-section sizes.
pub fn formatted() -> Value {
    json!({
        "header": "Corner Shop",
        "items": [
            {"name": "Coffee", "price": "3.00"},
            {"name": "Muffin", "price": "4.50"}
        ],
        "total": "7.50",
        "footer": "See you soon",
        "formatting": {
            "headerSize": "large",
            "itemSize": 1,
            "itemBold": false,
            "totalSize": 2,
            "totalBold": true,
            "footerSize": "normal"
        }
    })
}

/// Smallest useful ticket.
pub fn minimal() -> Value {
    json!({
        "kitchen": [{"name": "Tea", "qty": 2}],
        "total": "5.00"
    })
}

// ============================================================================
// LOOKUP FUNCTIONS
// ============================================================================

/// List available sample templates
pub fn list_samples() -> &'static [&'static str] {
    &["kitchen", "legacy", "formatted", "minimal"]
}

/// Get a sample template by name
pub fn by_name(name: &str) -> Option<Value> {
    match name.to_lowercase().as_str() {
        "kitchen" => Some(kitchen()),
        "legacy" => Some(legacy()),
        "formatted" => Some(formatted()),
        "minimal" => Some(minimal()),
        _ => None,
    }
}
