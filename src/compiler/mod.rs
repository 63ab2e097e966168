//! # Receipt Compiler
//!
//! Turns a receipt template into the ESC/POS byte stream for one print.
//!
//! ## Layout
//!
//! Sections are always emitted in the same order, with fixed framing
//! between them. A section with no data emits nothing; the framing is
//! always there.
//!
//! ```text
//! ESC @                      initialize
//! center   Header            restaurant, sub-header, address, phone, GST no.
//! left     ------------
//! center   Order info        order type, "table | order"
//! left     ------------
//!          Items             "Tea x2", modifiers
//!          ------------
//!          Totals            subtotal, discount, GST, TOTAL, payment
//! center   Footer            message, timestamp
//! LF LF LF, cut
//! ```
//!
//! ## Example
//!
//! ```
//! use recibo::compiler::ReceiptCompiler;
//! use serde_json::json;
//!
//! let template = json!({
//!     "header": {"restaurant_name": "CAFE", "size": "2", "bold": true},
//!     "kitchen": [{"name": "Tea", "qty": 2}],
//!     "total": "5.00",
//! });
//! let bytes = ReceiptCompiler::default().compile(&template)?;
//! assert_eq!(&bytes[..2], &[0x1B, 0x40]);
//! # Ok::<(), recibo::error::CompileError>(())
//! ```

mod footer;
mod header;
mod items;
mod order_info;
mod style;
mod totals;
mod writer;

pub use style::StyleStack;
pub use writer::ReceiptWriter;

use chrono::{Local, NaiveDateTime};
use serde_json::Value;

use crate::error::CompileError;
use crate::ir::{Op, Program};
use crate::printer::PrinterConfig;
use crate::protocol::text::CODEPAGE_PC437;
use crate::protocol::{Alignment, TextEncoding, commands};
use crate::template::ReceiptTemplate;

/// One part of the receipt that knows how to emit itself.
pub trait Section {
    fn emit(&self, out: &mut ReceiptWriter);
}

/// Compiles templates for one printer configuration.
///
/// Stateless between calls; a single compiler can serve concurrent prints.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReceiptCompiler {
    config: PrinterConfig,
}

impl ReceiptCompiler {
    pub fn new(config: PrinterConfig) -> Self {
        Self { config }
    }

    /// Compile a raw template, stamping the footer with the local time.
    pub fn compile(&self, template: &Value) -> Result<Vec<u8>, CompileError> {
        self.compile_at(template, Local::now().naive_local())
    }

    /// Compile a raw template with a fixed print time.
    pub fn compile_at(&self, template: &Value, now: NaiveDateTime) -> Result<Vec<u8>, CompileError> {
        let template = ReceiptTemplate::from_value(template);
        let program = self.program(&template, now);
        let bytes = program.to_bytes_with_encoding(self.config.encoding)?;
        tracing::debug!(
            shape = ?template.shape,
            ops = program.len(),
            bytes = bytes.len(),
            "compiled receipt"
        );
        Ok(bytes)
    }

    /// Build the IR for a normalized template.
    pub fn program(&self, template: &ReceiptTemplate, now: NaiveDateTime) -> Program {
        let separator = template.separator.unwrap_or(self.config.separator);
        let mut out = ReceiptWriter::new(self.preamble(), self.config.columns, separator, now);

        out.align(Alignment::Center);
        if let Some(header) = &template.header {
            header.emit(&mut out);
        }
        out.align(Alignment::Left);
        out.separator();

        out.align(Alignment::Center);
        template.order_info.emit(&mut out);
        out.align(Alignment::Left);
        out.separator();

        template.items.emit(&mut out);
        out.separator();
        template.totals.emit(&mut out);

        out.align(Alignment::Center);
        template.footer.emit(&mut out);

        let mut program = out.finish();
        push_trailer(&mut program);
        program
    }

    /// Plain text print: initialize, the text as given, feed and cut.
    pub fn compile_text(&self, text: &str) -> Result<Vec<u8>, CompileError> {
        self.text_program(text)
            .to_bytes_with_encoding(self.config.encoding)
    }

    pub fn text_program(&self, text: &str) -> Program {
        let mut program = self.preamble();
        program.push(Op::Text(text.to_string()));
        push_trailer(&mut program);
        program
    }

    fn preamble(&self) -> Program {
        let mut program = Program::with_init();
        if self.config.encoding == TextEncoding::Cp437 {
            program.push(Op::SetCodepage(CODEPAGE_PC437));
        }
        program
    }
}

fn push_trailer(program: &mut Program) {
    program.push(Op::Feed {
        lines: commands::CUT_FEED_LINES,
    });
    program.push(Op::Cut);
}

/// Compile with the default 80mm configuration.
pub fn compile(template: &Value) -> Result<Vec<u8>, CompileError> {
    ReceiptCompiler::default().compile(template)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    pub(crate) fn fixed_now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, 7)
            .unwrap()
            .and_hms_opt(14, 5, 9)
            .unwrap()
    }

    /// Ops a single section emits on an empty 48-column writer.
    pub(crate) fn emit_ops(section: &impl Section) -> Vec<Op> {
        let mut out = ReceiptWriter::new(Program::new(), 48, '-', fixed_now());
        section.emit(&mut out);
        out.finish().ops
    }

    fn sep() -> Op {
        Op::Text("-".repeat(48))
    }

    #[test]
    fn test_empty_template_framing() {
        let program = ReceiptCompiler::default()
            .program(&ReceiptTemplate::from_value(&json!({})), fixed_now());
        assert_eq!(
            program.ops,
            vec![
                Op::Init,
                Op::SetAlign(Alignment::Center),
                Op::SetAlign(Alignment::Left),
                sep(),
                Op::Newline,
                Op::SetAlign(Alignment::Center),
                Op::SetAlign(Alignment::Left),
                sep(),
                Op::Newline,
                sep(),
                Op::Newline,
                Op::SetAlign(Alignment::Center),
                Op::Text("2026-03-07 14:05:09".into()),
                Op::Newline,
                Op::Feed { lines: 3 },
                Op::Cut,
            ]
        );
    }

    #[test]
    fn test_separator_override_and_columns() {
        let compiler = ReceiptCompiler::new(PrinterConfig::PAPER_58MM);
        let program = compiler.program(
            &ReceiptTemplate::from_value(&json!({"separator": "="})),
            fixed_now(),
        );
        assert!(program.ops.contains(&Op::Text("=".repeat(32))));
        assert!(!program.ops.contains(&Op::Text("-".repeat(32))));
    }

    #[test]
    fn test_compile_is_deterministic() {
        let template = json!({
            "header": {"restaurant_name": "CAFE"},
            "kitchen": [{"name": "Tea", "qty": 2}],
            "total": "5.00"
        });
        let compiler = ReceiptCompiler::default();
        let a = compiler.compile_at(&template, fixed_now()).unwrap();
        let b = compiler.compile_at(&template, fixed_now()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_cp437_selects_codepage() {
        let compiler = ReceiptCompiler::new(
            PrinterConfig::default().with_encoding(TextEncoding::Cp437),
        );
        let bytes = compiler.compile_text("Año").unwrap();
        assert_eq!(
            bytes,
            vec![0x1B, 0x40, 0x1B, 0x74, 0x00, b'A', 0xA4, b'o', 0x0A, 0x0A, 0x0A, 0x1D, 0x56, 0x41, 0x10]
        );
    }

    #[test]
    fn test_compile_text() {
        let bytes = ReceiptCompiler::default().compile_text("Hello\nWorld").unwrap();
        let mut expected = vec![0x1B, 0x40];
        expected.extend(b"Hello\nWorld");
        expected.extend([0x0A, 0x0A, 0x0A, 0x1D, 0x56, 0x41, 0x10]);
        assert_eq!(bytes, expected);
    }

    #[test]
    fn test_encoding_failure_fails_whole_compile() {
        let compiler = ReceiptCompiler::new(
            PrinterConfig::default().with_encoding(TextEncoding::Cp437),
        );
        let template = json!({"footer": {"message": "✅ Done"}});
        let err = compiler.compile_at(&template, fixed_now()).unwrap_err();
        assert!(matches!(err, CompileError::Encoding { ch: '✅', .. }));
    }
}
