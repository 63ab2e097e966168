//! # ESC/POS Protocol Implementation
//!
//! Low-level command builders for ESC/POS thermal receipt printers. Each
//! named device operation maps to one fixed byte sequence; everything above
//! this module works with named operations (see [`crate::ir::Op`]) instead of
//! byte literals.
//!
//! ## Module Structure
//!
//! - [`commands`]: Printer control (init, feed, cut, status)
//! - [`text`]: Text styling (alignment, bold, size, code page)
//! - [`encoding`]: Text to bytes (UTF-8, CP437)
//!
//! ## Usage Example
//!
//! ```
//! use recibo::protocol::{Alignment, commands, text};
//!
//! let mut data = Vec::new();
//! data.extend(commands::init());
//! data.extend(text::align(Alignment::Center));
//! data.extend(text::bold_on());
//! data.extend(b"RECEIPT\n");
//! data.extend(text::bold_off());
//! data.extend(commands::feed_lines(commands::CUT_FEED_LINES));
//! data.extend(commands::cut());
//! ```

pub mod commands;
pub mod encoding;
pub mod text;

pub use encoding::TextEncoding;
pub use text::{Alignment, Magnification};
