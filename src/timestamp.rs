//! # Receipt Timestamps
//!
//! The footer always ends with the print time. Date and time layouts are
//! chosen per template:
//!
//! | `date_format` | Example |
//! |---------------|---------|
//! | `YYYY-MM-DD` (default) | 2026-03-07 |
//! | `DD-MM-YYYY` | 07-03-2026 |
//! | `DD/MM/YYYY` | 07/03/2026 |
//! | `MM-DD-YYYY` | 03-07-2026 |
//! | `MM/DD/YYYY` | 03/07/2026 |
//!
//! | `time_format` | Example |
//! |---------------|---------|
//! | `24H` (default) | 14:05:09 |
//! | `12H` | 02:05:09 PM |

use chrono::{Datelike, NaiveDateTime, Timelike};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateFormat {
    #[default]
    YearMonthDay,
    DayMonthYearDash,
    DayMonthYearSlash,
    MonthDayYearDash,
    MonthDayYearSlash,
}

impl DateFormat {
    /// Parse a format name, falling back to the default for anything unknown.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_uppercase().as_str() {
            "DD-MM-YYYY" => Self::DayMonthYearDash,
            "DD/MM/YYYY" => Self::DayMonthYearSlash,
            "MM-DD-YYYY" => Self::MonthDayYearDash,
            "MM/DD/YYYY" => Self::MonthDayYearSlash,
            _ => Self::YearMonthDay,
        }
    }

    fn render(self, at: &NaiveDateTime) -> String {
        let (y, m, d) = (at.year(), at.month(), at.day());
        match self {
            Self::YearMonthDay => format!("{y:04}-{m:02}-{d:02}"),
            Self::DayMonthYearDash => format!("{d:02}-{m:02}-{y:04}"),
            Self::DayMonthYearSlash => format!("{d:02}/{m:02}/{y:04}"),
            Self::MonthDayYearDash => format!("{m:02}-{d:02}-{y:04}"),
            Self::MonthDayYearSlash => format!("{m:02}/{d:02}/{y:04}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeFormat {
    #[default]
    H24,
    H12,
}

impl TimeFormat {
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_uppercase().as_str() {
            "12H" => Self::H12,
            _ => Self::H24,
        }
    }

    fn render(self, at: &NaiveDateTime) -> String {
        let (min, sec) = (at.minute(), at.second());
        match self {
            Self::H24 => format!("{:02}:{min:02}:{sec:02}", at.hour()),
            Self::H12 => {
                let (pm, hour) = at.hour12();
                let suffix = if pm { "PM" } else { "AM" };
                format!("{hour:02}:{min:02}:{sec:02} {suffix}")
            }
        }
    }
}

/// Render `"<date> <time>"` for the receipt footer.
pub fn format_timestamp(at: &NaiveDateTime, date: DateFormat, time: TimeFormat) -> String {
    format!("{} {}", date.render(at), time.render(at))
}
