//! Item list encoder.
//!
//! The item style stays applied for the whole list. Each item's modifiers
//! open a nested scope that closes back to the item style, so the next
//! item continues at item size.

use super::{ReceiptWriter, Section};
use crate::template::{ItemList, Items, Modifier, ModifierFormat};

impl Section for Items {
    fn emit(&self, out: &mut ReceiptWriter) {
        match &self.list {
            Some(ItemList::Kitchen(items)) if !items.is_empty() => {
                out.styled(self.style, |out| {
                    for item in items {
                        out.line(format!("{} x{}", item.name, item.quantity));
                        if item.modifiers.is_empty() {
                            continue;
                        }
                        out.styled(self.modifier.style, |out| {
                            for modifier in &item.modifiers {
                                out.line(modifier_line(modifier, &self.modifier));
                            }
                        });
                    }
                });
            }
            Some(ItemList::Priced(items)) if !items.is_empty() => {
                out.styled(self.style, |out| {
                    for item in items {
                        out.line(format!("{}\t{}", item.name, item.price));
                    }
                });
            }
            _ => {}
        }
    }
}

/// `"<indent><prefix> <name>"`, with `" (+$<price>)"` for paid modifiers.
fn modifier_line(modifier: &Modifier, format: &ModifierFormat) -> String {
    let mut line = format!(
        "{}{} {}",
        " ".repeat(format.indent.width()),
        format.prefix.as_str(),
        modifier.name
    );
    if let Some(price) = modifier.price {
        line.push_str(&format!(" (+${price:.2})"));
    }
    line
}
