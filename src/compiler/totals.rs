use super::{ReceiptWriter, Section};
use crate::template::{Totals, format_amount};

impl Section for Totals {
    fn emit(&self, out: &mut ReceiptWriter) {
        let mut breakdown = false;
        if let Some(subtotal) = &self.subtotal {
            out.line(format!("SUBTOTAL\t\t\t{}", format_amount(subtotal)));
            breakdown = true;
        }
        if let Some(discount) = &self.discount {
            out.line(format!("SAFRA Members\t\t\t-{}", format_amount(discount)));
            breakdown = true;
        }
        if let Some(gst) = &self.gst {
            out.line(format!("9% (Incl.) GST\t\t\t{}", format_amount(gst)));
            breakdown = true;
        }
        if breakdown {
            out.separator();
        }

        if let Some(total) = &self.total {
            out.styled(self.total_style, |out| {
                out.line(format!("TOTAL\t\t\t{}", format_amount(total)));
            });
        }

        if let Some(method) = &self.payment_method {
            out.separator();
            match self.total.as_deref().map(str::trim) {
                Some(total) => out.line(format!("PAYMENT BY:{method}\t{total}")),
                None => out.line(format!("PAYMENT BY:{method}")),
            }
        }
    }
}
