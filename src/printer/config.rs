//! # Printer Configuration
//!
//! Paper and text settings that shape the compiled receipt.
//!
//! ## Supported Paper Widths
//!
//! | Paper | Columns (Font A) | Preset |
//! |-------|------------------|--------|
//! | 80mm | 48 | [`PrinterConfig::PAPER_80MM`] |
//! | 58mm | 32 | [`PrinterConfig::PAPER_58MM`] |
//!
//! ## Usage
//!
//! ```
//! use recibo::printer::PrinterConfig;
//! use recibo::protocol::TextEncoding;
//!
//! let config = PrinterConfig::PAPER_58MM.with_encoding(TextEncoding::Cp437);
//! assert_eq!(config.columns, 32);
//! ```

use serde::{Deserialize, Serialize};

use crate::protocol::TextEncoding;

/// # Printer Configuration
///
/// - **columns**: characters per line at normal size; separators span this
///   width divided by the active magnification
/// - **separator**: default separator character, overridable per template
/// - **encoding**: how text fields become bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrinterConfig {
    /// Preset name
    pub name: &'static str,

    /// Characters per line at normal magnification
    pub columns: usize,

    /// Character repeated to draw separator lines
    pub separator: char,

    /// Text encoding for all text fields
    pub encoding: TextEncoding,
}

impl PrinterConfig {
    /// # 80mm Receipt Paper
    ///
    /// 72mm printable width, Font A 12x24 dots, 48 columns.
    pub const PAPER_80MM: Self = Self {
        name: "80mm",
        columns: 48,
        separator: '-',
        encoding: TextEncoding::Utf8,
    };

    /// # 58mm Receipt Paper
    ///
    /// 48mm printable width, 32 columns.
    pub const PAPER_58MM: Self = Self {
        name: "58mm",
        columns: 32,
        separator: '-',
        encoding: TextEncoding::Utf8,
    };

    pub fn with_columns(mut self, columns: usize) -> Self {
        self.columns = columns;
        self
    }

    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    pub fn with_encoding(mut self, encoding: TextEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Look up a preset by paper width (`"80mm"`, `"58"`, ...).
    pub fn for_paper(paper: &str) -> Option<Self> {
        match paper.trim().to_ascii_lowercase().trim_end_matches("mm") {
            "80" => Some(Self::PAPER_80MM),
            "58" => Some(Self::PAPER_58MM),
            _ => None,
        }
    }
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self::PAPER_80MM
    }
}

// ============================================================================
// PRINTER KIND
// ============================================================================

/// How a printer is attached, as reported in status responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrinterKind {
    Wifi,
    Bluetooth,
    Usb,
}

impl std::fmt::Display for PrinterKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Wifi => "wifi",
            Self::Bluetooth => "bluetooth",
            Self::Usb => "usb",
        };
        f.write_str(s)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_80mm() {
        let config = PrinterConfig::default();
        assert_eq!(config.columns, 48);
        assert_eq!(config.separator, '-');
        assert_eq!(config.encoding, TextEncoding::Utf8);
    }

    #[test]
    fn test_for_paper() {
        assert_eq!(PrinterConfig::for_paper("80mm"), Some(PrinterConfig::PAPER_80MM));
        assert_eq!(PrinterConfig::for_paper("58"), Some(PrinterConfig::PAPER_58MM));
        assert_eq!(PrinterConfig::for_paper("112mm"), None);
    }

    #[test]
    fn test_builders() {
        let config = PrinterConfig::PAPER_80MM
            .with_columns(42)
            .with_separator('=')
            .with_encoding(TextEncoding::Cp437);
        assert_eq!(config.columns, 42);
        assert_eq!(config.separator, '=');
        assert_eq!(config.encoding, TextEncoding::Cp437);
    }

    #[test]
    fn test_kind_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&PrinterKind::Wifi).unwrap(), "\"wifi\"");
        assert_eq!(PrinterKind::Bluetooth.to_string(), "bluetooth");
    }
}
