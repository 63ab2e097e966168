//! # IR Opcodes
//!
//! The intermediate representation for a receipt: a flat list of named
//! device operations and text runs, compiled to ESC/POS bytes by
//! [`Program::to_bytes`].
//!
//! ```text
//! Section encoders → IR (inspectable) → Codegen → Bytes
//! ```
//!
//! Ops are emitted exactly as the encoders request them. There is no
//! optimizer pass: every set/reset pair the style scopes produce is part of
//! the printed output.

use crate::protocol::{Alignment, Magnification};

/// IR opcodes - the "bytecode" for receipt printing.
///
/// Each variant maps to one fixed byte sequence (or one encoded text run).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    // ========== Printer Control ==========
    /// Initialize printer (ESC @). Resets to default state.
    Init,

    /// Select character code table (ESC t n).
    SetCodepage(u8),

    /// Feed `lines` blank lines.
    Feed { lines: u8 },

    /// Feed past the blade and cut (GS V A 16).
    Cut,

    // ========== Style Changes ==========
    /// Set text alignment.
    SetAlign(Alignment),

    /// Enable/disable bold.
    SetBold(bool),

    /// Set character magnification (GS ! n).
    SetSize(Magnification),

    // ========== Content ==========
    /// Text run (no trailing newline). Encoded at codegen time.
    Text(String),

    /// Line feed (newline).
    Newline,
}

/// A sequence of IR ops.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    pub ops: Vec<Op>,
}

impl Program {
    pub fn new() -> Self {
        Self::default()
    }

    /// A program that starts by initializing the printer.
    pub fn with_init() -> Self {
        Self { ops: vec![Op::Init] }
    }

    pub fn push(&mut self, op: Op) {
        self.ops.push(op);
    }

    /// Text followed by a line feed.
    pub fn line(&mut self, text: impl Into<String>) {
        self.ops.push(Op::Text(text.into()));
        self.ops.push(Op::Newline);
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// All text runs in order, joined. Useful for inspecting a receipt
    /// without control codes.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        for op in &self.ops {
            match op {
                Op::Text(s) => out.push_str(s),
                Op::Newline => out.push('\n'),
                _ => {}
            }
        }
        out
    }
}
