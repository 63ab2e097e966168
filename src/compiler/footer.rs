use super::{ReceiptWriter, Section};
use crate::template::Footer;
use crate::timestamp::format_timestamp;

impl Section for Footer {
    fn emit(&self, out: &mut ReceiptWriter) {
        if let Some(message) = &self.message {
            out.styled(self.style, |out| out.line(message.as_str()));
        }
        let stamp = format_timestamp(out.now(), self.date_format, self.time_format);
        out.line(stamp);
    }
}
