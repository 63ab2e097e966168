//! # ESC/POS Printer Control Commands
//!
//! Paper handling and session commands for ESC/POS thermal receipt printers
//! (Zywell, Epson TM, Xprinter and compatible 58/80 mm models).
//!
//! ## Escape Sequence Structure
//!
//! Commands follow these patterns:
//! - Single byte: `LF`
//! - Two bytes: `ESC @`
//! - Multi-byte with parameters: `GS V m n`, `DLE EOT n`
//!
//! Every function here returns one fixed byte sequence. Text styling lives
//! in [`super::text`].

// ============================================================================
// ESCAPE SEQUENCE CONSTANTS
// ============================================================================

/// ESC (Escape) - Command prefix byte
///
/// Most ESC/POS commands begin with ESC (0x1B).
pub const ESC: u8 = 0x1B;

/// GS (Group Separator) - Extended command prefix
///
/// Used for character size, cutter and barcode commands.
/// - Hex: 0x1D, Decimal: 29
pub const GS: u8 = 0x1D;

/// DLE (Data Link Escape) - Real-time command prefix
pub const DLE: u8 = 0x10;

/// EOT (End of Transmission) - Used with DLE for status requests
pub const EOT: u8 = 0x04;

/// LF (Line Feed) - Print and advance one line
///
/// Prints any data in the line buffer and advances paper by the current
/// line spacing amount.
pub const LF: u8 = 0x0A;

/// Number of blank lines fed before the cut so the last line clears the blade.
pub const CUT_FEED_LINES: u8 = 3;

// ============================================================================
// INITIALIZATION COMMANDS
// ============================================================================

/// # Initialize Printer (ESC @)
///
/// Resets the printer to its power-on default state. Sent at the start of
/// every receipt.
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC @ |
/// | Hex     | 1B 40 |
/// | Decimal | 27 64 |
///
/// ## What Gets Reset
///
/// - Print buffer is cleared
/// - Bold disabled
/// - Character size reset to 1x1
/// - Alignment reset to left
///
/// ## Example
///
/// ```
/// use recibo::protocol::commands;
///
/// let init = commands::init();
/// assert_eq!(init, vec![0x1B, 0x40]);
/// ```
#[inline]
pub fn init() -> Vec<u8> {
    vec![ESC, b'@']
}

// ============================================================================
// PAPER FEED
// ============================================================================

/// Single line feed.
#[inline]
pub fn line_feed() -> Vec<u8> {
    vec![LF]
}

/// # Feed N Lines
///
/// Emits `n` plain line feeds. The receipt trailer uses
/// [`CUT_FEED_LINES`] of these before cutting.
///
/// ```
/// use recibo::protocol::commands;
///
/// assert_eq!(commands::feed_lines(3), vec![0x0A, 0x0A, 0x0A]);
/// ```
pub fn feed_lines(n: u8) -> Vec<u8> {
    vec![LF; n as usize]
}

// ============================================================================
// CUTTER CONTROL
// ============================================================================

/// # Feed and Cut (GS V A n)
///
/// Feeds the paper by `n` motion units past the cutter, then cuts.
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | GS V A n |
/// | Hex     | 1D 56 41 n |
/// | Decimal | 29 86 65 n |
///
/// Receipts always use `n = 16` (0x10).
///
/// ```
/// use recibo::protocol::commands;
///
/// assert_eq!(commands::cut(), vec![0x1D, 0x56, 0x41, 0x10]);
/// ```
#[inline]
pub fn cut() -> Vec<u8> {
    vec![GS, b'V', b'A', 0x10]
}

// ============================================================================
// STATUS
// ============================================================================

/// # Transmit Printer Status (DLE EOT 1)
///
/// Real-time request for the printer status byte. Only used as a liveness
/// probe: the reply is not decoded.
///
/// | Format  | Bytes |
/// |---------|-------|
/// | Hex     | 10 04 01 |
#[inline]
pub fn status_request() -> Vec<u8> {
    vec![DLE, EOT, 1]
}
