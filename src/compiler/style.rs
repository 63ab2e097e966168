//! Scoped bold/size state.
//!
//! Every scope that changes a property restores it on exit to whatever the
//! enclosing scope had, not to a fixed default. Modifier lines inside an
//! item list therefore return to the item size, and a header printed bold
//! never leaks bold into the next section.

use crate::ir::{Op, Program};
use crate::template::Style;

#[derive(Debug, Clone)]
pub struct StyleStack {
    stack: Vec<Style>,
}

impl StyleStack {
    /// A stack whose base is the printer's power-on style.
    pub fn new() -> Self {
        Self {
            stack: vec![Style::NORMAL],
        }
    }

    pub fn current(&self) -> Style {
        self.stack.last().copied().unwrap_or(Style::NORMAL)
    }

    /// Enter a scope: bold first, then size, each only if it changes.
    pub fn enter(&mut self, style: Style, program: &mut Program) {
        let outer = self.current();
        if style.bold != outer.bold {
            program.push(Op::SetBold(style.bold));
        }
        if style.size != outer.size {
            program.push(Op::SetSize(style.size));
        }
        self.stack.push(style);
    }

    /// Leave the innermost scope: size first, then bold, back to the
    /// enclosing values. The base scope cannot be left.
    pub fn leave(&mut self, program: &mut Program) {
        if self.stack.len() <= 1 {
            return;
        }
        let Some(inner) = self.stack.pop() else {
            return;
        };
        let outer = self.current();
        if inner.size != outer.size {
            program.push(Op::SetSize(outer.size));
        }
        if inner.bold != outer.bold {
            program.push(Op::SetBold(outer.bold));
        }
    }
}

impl Default for StyleStack {
    fn default() -> Self {
        Self::new()
    }
}
