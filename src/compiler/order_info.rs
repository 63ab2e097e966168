use super::{ReceiptWriter, Section};
use crate::template::OrderInfo;

impl Section for OrderInfo {
    fn emit(&self, out: &mut ReceiptWriter) {
        if let Some(order_type) = &self.order_type {
            out.styled(self.order_type_style, |out| out.line(order_type.as_str()));
        }
        if let Some(line) = self.table_line() {
            out.styled(self.style, |out| out.line(line));
        }
    }
}
