//! Output context shared by the section encoders.

use chrono::NaiveDateTime;

use super::style::StyleStack;
use crate::ir::{Op, Program};
use crate::layout::separator_line;
use crate::protocol::Alignment;
use crate::template::Style;

/// Accumulates IR for one receipt.
///
/// Bold and size only change through [`ReceiptWriter::styled`], which always
/// closes what it opens.
pub struct ReceiptWriter {
    program: Program,
    styles: StyleStack,
    columns: usize,
    separator: char,
    now: NaiveDateTime,
}

impl ReceiptWriter {
    pub fn new(program: Program, columns: usize, separator: char, now: NaiveDateTime) -> Self {
        Self {
            program,
            styles: StyleStack::new(),
            columns,
            separator,
            now,
        }
    }

    pub fn line(&mut self, text: impl Into<String>) {
        self.program.line(text);
    }

    pub fn align(&mut self, alignment: Alignment) {
        self.program.push(Op::SetAlign(alignment));
    }

    /// Separator line sized for the magnification currently in effect.
    pub fn separator(&mut self) {
        let line = separator_line(self.columns, self.styles.current().size, self.separator);
        self.program.line(line);
    }

    /// Run `body` with `style` applied, then restore the enclosing style.
    pub fn styled(&mut self, style: Style, body: impl FnOnce(&mut Self)) {
        self.styles.enter(style, &mut self.program);
        body(self);
        self.styles.leave(&mut self.program);
    }

    /// Print time used by the footer.
    pub fn now(&self) -> &NaiveDateTime {
        &self.now
    }

    pub fn finish(self) -> Program {
        self.program
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::Magnification;
    use chrono::NaiveDate;

    fn writer(columns: usize) -> ReceiptWriter {
        let now = NaiveDate::from_ymd_opt(2026, 1, 2)
            .unwrap()
            .and_hms_opt(3, 4, 5)
            .unwrap();
        ReceiptWriter::new(Program::new(), columns, '=', now)
    }

    #[test]
    fn test_separator_follows_magnification() {
        let mut w = writer(12);
        w.separator();
        w.styled(Style::new(Magnification::X3, false), |w| w.separator());
        let program = w.finish();
        assert_eq!(program.plain_text(), "============\n====\n");
    }

    #[test]
    fn test_styled_closes_scope() {
        let mut w = writer(48);
        w.styled(Style::new(Magnification::X2, true), |w| w.line("A"));
        w.line("B");
        let ops = w.finish().ops;
        assert_eq!(ops.last(), Some(&Op::Newline));
        assert_eq!(ops[ops.len() - 3], Op::SetBold(false));
    }
}
