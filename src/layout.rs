//! Line width calculations.

use crate::protocol::Magnification;

/// Characters that fit on one line at `magnification`.
///
/// ```
/// use recibo::layout::separator_width;
/// use recibo::protocol::Magnification;
///
/// assert_eq!(separator_width(48, Magnification::X3), 16);
/// ```
pub fn separator_width(columns: usize, magnification: Magnification) -> usize {
    columns / magnification.factor()
}

/// A full-width separator line (without the trailing line feed).
pub fn separator_line(columns: usize, magnification: Magnification, ch: char) -> String {
    std::iter::repeat_n(ch, separator_width(columns, magnification)).collect()
}
