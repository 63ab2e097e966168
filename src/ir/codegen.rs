//! # Code Generation
//!
//! Converts IR programs to ESC/POS bytes.

use super::ops::{Op, Program};
use crate::error::CompileError;
use crate::protocol::{TextEncoding, commands, text};

impl Program {
    /// Compile the IR program to ESC/POS bytes with UTF-8 text.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::new();
        for op in &self.ops {
            match op {
                Op::Text(s) => out.extend(s.as_bytes()),
                other => out.extend(control_bytes(other)),
            }
        }
        out
    }

    /// Compile the IR program, encoding text with `encoding`.
    ///
    /// Fails on the first text run the encoding cannot represent; nothing
    /// is returned in that case.
    pub fn to_bytes_with_encoding(&self, encoding: TextEncoding) -> Result<Vec<u8>, CompileError> {
        let mut out = Vec::new();
        for op in &self.ops {
            match op {
                Op::Text(s) => out.extend(encoding.encode(s)?),
                other => out.extend(control_bytes(other)),
            }
        }
        Ok(out)
    }
}

fn control_bytes(op: &Op) -> Vec<u8> {
    match op {
        // ===== Printer Control =====
        Op::Init => commands::init(),
        Op::SetCodepage(n) => text::codepage(*n),
        Op::Feed { lines } => commands::feed_lines(*lines),
        Op::Cut => commands::cut(),

        // ===== Style Changes =====
        Op::SetAlign(alignment) => text::align(*alignment),
        Op::SetBold(true) => text::bold_on(),
        Op::SetBold(false) => text::bold_off(),
        Op::SetSize(magnification) => text::size(*magnification),

        // ===== Content =====
        Op::Text(s) => s.as_bytes().to_vec(),
        Op::Newline => commands::line_feed(),
    }
}
