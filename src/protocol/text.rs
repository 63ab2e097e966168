//! # ESC/POS Text Styling Commands
//!
//! Alignment, emphasis and character magnification.
//!
//! ## Text Styling Overview
//!
//! | Style | Command | Effect |
//! |-------|---------|--------|
//! | Alignment | ESC a n | Left / center / right |
//! | Bold | ESC E n | **Emphasized** text |
//! | Size | GS ! n | Width and height multiplier |
//! | Code page | ESC t n | Character table for bytes 0x80-0xFF |
//!
//! ## Character Size
//!
//! `GS ! n` packs the width multiplier in the high nibble and the height
//! multiplier in the low nibble. Receipts only use the square sizes:
//!
//! | Magnification | n | Columns (80mm) |
//! |---------------|------|----|
//! | Normal | 0x00 | 48 |
//! | X2 | 0x11 | 24 |
//! | X3 | 0x22 | 16 |
//! | X4 | 0x33 | 12 |

use super::commands::{ESC, GS};

// ============================================================================
// TEXT ALIGNMENT
// ============================================================================

/// Text alignment options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left = 0,
    Center = 1,
}

/// # Set Text Alignment (ESC a n)
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC a n |
/// | Hex     | 1B 61 n |
/// | Decimal | 27 97 n |
///
/// ## Example
///
/// ```
/// use recibo::protocol::text::{align, Alignment};
///
/// let center = align(Alignment::Center);
/// assert_eq!(center, vec![0x1B, 0x61, 0x01]);
/// ```
pub fn align(alignment: Alignment) -> Vec<u8> {
    vec![ESC, b'a', alignment as u8]
}

// ============================================================================
// EMPHASIS
// ============================================================================

/// # Bold On (ESC E 1)
///
/// | Hex | 1B 45 01 |
/// |-----|----------|
#[inline]
pub fn bold_on() -> Vec<u8> {
    vec![ESC, b'E', 1]
}

/// # Bold Off (ESC E 0)
///
/// | Hex | 1B 45 00 |
/// |-----|----------|
#[inline]
pub fn bold_off() -> Vec<u8> {
    vec![ESC, b'E', 0]
}

// ============================================================================
// CHARACTER SIZE
// ============================================================================

/// Square character magnification supported by receipt templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Magnification {
    #[default]
    Normal,
    X2,
    X3,
    X4,
}

impl Magnification {
    /// The `n` parameter of `GS ! n`.
    pub const fn code(self) -> u8 {
        match self {
            Self::Normal => 0x00,
            Self::X2 => 0x11,
            Self::X3 => 0x22,
            Self::X4 => 0x33,
        }
    }

    /// Horizontal scale factor; a line holds `columns / factor` characters.
    pub const fn factor(self) -> usize {
        match self {
            Self::Normal => 1,
            Self::X2 => 2,
            Self::X3 => 3,
            Self::X4 => 4,
        }
    }
}

/// # Select Character Size (GS ! n)
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | GS ! n |
/// | Hex     | 1D 21 n |
///
/// ```
/// use recibo::protocol::text::{size, Magnification};
///
/// assert_eq!(size(Magnification::X2), vec![0x1D, 0x21, 0x11]);
/// ```
pub fn size(magnification: Magnification) -> Vec<u8> {
    vec![GS, b'!', magnification.code()]
}

/// Reset to 1x1 characters (`GS ! 0`)
#[inline]
pub fn size_normal() -> Vec<u8> {
    size(Magnification::Normal)
}

// ============================================================================
// CODE PAGE
// ============================================================================

/// Code page 437 (USA, Standard Europe)
pub const CODEPAGE_PC437: u8 = 0;

/// # Select Character Code Table (ESC t n)
///
/// | Hex | 1B 74 n |
/// |-----|---------|
pub fn codepage(n: u8) -> Vec<u8> {
    vec![ESC, b't', n]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_align() {
        assert_eq!(align(Alignment::Left), vec![0x1B, 0x61, 0x00]);
        assert_eq!(align(Alignment::Center), vec![0x1B, 0x61, 0x01]);
    }

    #[test]
    fn test_bold() {
        assert_eq!(bold_on(), vec![0x1B, 0x45, 0x01]);
        assert_eq!(bold_off(), vec![0x1B, 0x45, 0x00]);
    }

    #[test]
    fn test_size_codes() {
        assert_eq!(size_normal(), vec![0x1D, 0x21, 0x00]);
        assert_eq!(size(Magnification::X2), vec![0x1D, 0x21, 0x11]);
        assert_eq!(size(Magnification::X3), vec![0x1D, 0x21, 0x22]);
        assert_eq!(size(Magnification::X4), vec![0x1D, 0x21, 0x33]);
    }

    #[test]
    fn test_factor() {
        assert_eq!(Magnification::Normal.factor(), 1);
        assert_eq!(Magnification::X4.factor(), 4);
    }

    #[test]
    fn test_codepage() {
        assert_eq!(codepage(CODEPAGE_PC437), vec![0x1B, 0x74, 0x00]);
    }
}
