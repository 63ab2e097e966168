//! # Intermediate Representation (IR)
//!
//! The IR is a "bytecode" representation that sits between the receipt
//! section encoders and raw ESC/POS bytes.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐     ┌─────────────┐     ┌──────────┐
//! │   Sections   │ ──► │     IR      │ ──► │ Codegen  │
//! │ (compiler)   │     │  (Vec<Op>)  │     │ (bytes)  │
//! └──────────────┘     └─────────────┘     └──────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use recibo::ir::{Op, Program};
//! use recibo::protocol::Alignment;
//!
//! let mut program = Program::with_init();
//! program.push(Op::SetAlign(Alignment::Center));
//! program.push(Op::SetBold(true));
//! program.push(Op::Text("HELLO".into()));
//! program.push(Op::Newline);
//! program.push(Op::Cut);
//!
//! let bytes = program.to_bytes();
//! assert_eq!(&bytes[..2], &[0x1B, 0x40]);
//! ```

mod codegen;
mod ops;

pub use ops::*;
