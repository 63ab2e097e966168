use super::{ReceiptWriter, Section};
use crate::template::Header;

impl Section for Header {
    fn emit(&self, out: &mut ReceiptWriter) {
        let lines: Vec<String> = [
            self.restaurant_name.clone(),
            self.sub_header.clone(),
            self.address.clone(),
            self.phone_number.clone(),
            self.gst_number.clone(),
        ]
        .into_iter()
        .flatten()
        .collect();

        if lines.is_empty() {
            return;
        }
        out.styled(self.style, |out| {
            for line in lines {
                out.line(line);
            }
        });
    }
}
