//! # Text Encoding
//!
//! Converts receipt text to the bytes the printer expects.
//!
//! UTF-8 is the default and never fails. Code Page 437 is available for
//! printers without a UTF-8 font; the printer must be switched to it with
//! `ESC t 0` (see [`super::text::codepage`]). Characters outside CP437 fail
//! the encode instead of being silently replaced, so a receipt is never
//! printed with missing text.

use serde::{Deserialize, Serialize};

use crate::error::CompileError;

/// Byte encoding used for text fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextEncoding {
    #[default]
    Utf8,
    Cp437,
}

impl TextEncoding {
    pub fn name(self) -> &'static str {
        match self {
            Self::Utf8 => "UTF-8",
            Self::Cp437 => "CP437",
        }
    }

    /// Parse a user-supplied encoding name (`utf8`, `utf-8`, `cp437`, `pc437`).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "utf8" | "utf-8" => Some(Self::Utf8),
            "cp437" | "pc437" | "437" => Some(Self::Cp437),
            _ => None,
        }
    }

    /// Encode `text`, failing on the first character the encoding cannot hold.
    pub fn encode(self, text: &str) -> Result<Vec<u8>, CompileError> {
        match self {
            Self::Utf8 => Ok(text.as_bytes().to_vec()),
            Self::Cp437 => encode_cp437(text),
        }
    }
}

/// Encode a Unicode string as CP437 bytes.
///
/// - ASCII (U+0000–U+007F): passed through as-is
/// - CP437 upper half: single byte 0x80–0xFF
/// - Anything else: [`CompileError::Encoding`]
pub fn encode_cp437(text: &str) -> Result<Vec<u8>, CompileError> {
    let mut out = Vec::with_capacity(text.len());
    for ch in text.chars() {
        if ch.is_ascii() {
            out.push(ch as u8);
        } else if let Some(byte) = cp437_byte(ch) {
            out.push(byte);
        } else {
            return Err(CompileError::Encoding {
                ch,
                code: ch as u32,
                encoding: TextEncoding::Cp437.name(),
                text: text.to_string(),
            });
        }
    }
    Ok(out)
}

/// CP437 upper half, indexed by `byte - 0x80`.
const CP437_HIGH: [char; 128] = [
    // 0x80
    'Ç', 'ü', 'é', 'â', 'ä', 'à', 'å', 'ç', 'ê', 'ë', 'è', 'ï', 'î', 'ì', 'Ä', 'Å',
    // 0x90
    'É', 'æ', 'Æ', 'ô', 'ö', 'ò', 'û', 'ù', 'ÿ', 'Ö', 'Ü', '¢', '£', '¥', '₧', 'ƒ',
    // 0xA0
    'á', 'í', 'ó', 'ú', 'ñ', 'Ñ', 'ª', 'º', '¿', '⌐', '¬', '½', '¼', '¡', '«', '»',
    // 0xB0
    '░', '▒', '▓', '│', '┤', '╡', '╢', '╖', '╕', '╣', '║', '╗', '╝', '╜', '╛', '┐',
    // 0xC0
    '└', '┴', '┬', '├', '─', '┼', '╞', '╟', '╚', '╔', '╩', '╦', '╠', '═', '╬', '╧',
    // 0xD0
    '╨', '╤', '╥', '╙', '╘', '╒', '╓', '╫', '╪', '┘', '┌', '█', '▄', '▌', '▐', '▀',
    // 0xE0
    'α', 'ß', 'Γ', 'π', 'Σ', 'σ', 'µ', 'τ', 'Φ', 'Θ', 'Ω', 'δ', '∞', 'φ', 'ε', '∩',
    // 0xF0
    '≡', '±', '≥', '≤', '⌠', '⌡', '÷', '≈', '°', '∙', '·', '√', 'ⁿ', '²', '■', '\u{00A0}',
];

fn cp437_byte(ch: char) -> Option<u8> {
    CP437_HIGH
        .iter()
        .position(|&c| c == ch)
        .map(|i| 0x80 + i as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utf8_passthrough() {
        assert_eq!(TextEncoding::Utf8.encode("Café €5").unwrap(), "Café €5".as_bytes());
    }

    #[test]
    fn test_cp437_ascii() {
        assert_eq!(encode_cp437("TOTAL\t$5.00").unwrap(), b"TOTAL\t$5.00");
    }

    #[test]
    fn test_cp437_accented() {
        assert_eq!(encode_cp437("Café").unwrap(), vec![0x43, 0x61, 0x66, 0x82]);
        assert_eq!(encode_cp437("Año").unwrap(), vec![0x41, 0xA4, 0x6F]);
        assert_eq!(encode_cp437("°").unwrap(), vec![0xF8]);
        assert_eq!(encode_cp437("\u{00A0}").unwrap(), vec![0xFF]);
    }

    #[test]
    fn test_cp437_box_drawing() {
        assert_eq!(encode_cp437("┌──┐").unwrap(), vec![0xDA, 0xC4, 0xC4, 0xBF]);
    }

    #[test]
    fn test_cp437_rejects_unmapped() {
        let err = encode_cp437("5€").unwrap_err();
        match err {
            CompileError::Encoding { ch, encoding, .. } => {
                assert_eq!(ch, '€');
                assert_eq!(encoding, "CP437");
            }
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!(TextEncoding::parse("UTF-8"), Some(TextEncoding::Utf8));
        assert_eq!(TextEncoding::parse(" cp437 "), Some(TextEncoding::Cp437));
        assert_eq!(TextEncoding::parse("latin1"), None);
    }
}
