//! Display formats for show start times.

use crate::types::Timestamp;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFormat {
    /// `Monday January, 5, 2026 at 8:00PM`
    Full,
    /// `Mon 01, 05, 2026 8:00PM`
    Medium,
}

impl DateFormat {
    fn pattern(self) -> &'static str {
        match self {
            DateFormat::Full => "%A %B, %-d, %Y at %-I:%M%p",
            DateFormat::Medium => "%a %m, %d, %Y %-I:%M%p",
        }
    }
}

pub fn format_datetime(value: Timestamp, format: DateFormat) -> String {
    value.format(format.pattern()).to_string()
}
