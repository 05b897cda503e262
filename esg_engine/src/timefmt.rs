//! Event-timestamp parsing and display formatting.
//!
//! Publication timestamps arrive as naive `YYYY-MM-DD HH:MM:SS` strings with
//! no zone component. A malformed or absent timestamp is not an error:
//! aggregation ignores it entirely, and the display boundary substitutes the
//! documented sentinel.

use chrono::NaiveDateTime;

/// Sentinel shown in place of a date that could not be parsed.
pub const INVALID_DATE: &str = "Invalid Date";

/// The wire format of publication timestamps.
const PUBLISHED_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A publication timestamp rendered for display.
#[derive(Debug, Clone, PartialEq)]
pub struct PublishedStamp {
    /// Date portion, e.g. "Dec 23, 2024", or [`INVALID_DATE`].
    pub date: String,
    /// Time portion, e.g. "3:47 PM"; empty when the timestamp was invalid.
    pub time: String,
}

/// Parses a raw publication timestamp; `None` for malformed input.
pub fn parse_published(raw: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw.trim(), PUBLISHED_FORMAT).ok()
}

/// Renders a raw timestamp for display, substituting the sentinel when the
/// value is absent or malformed.
pub fn published_stamp(raw: Option<&str>) -> PublishedStamp {
    match raw.and_then(parse_published) {
        Some(dt) => PublishedStamp {
            date: dt.format("%b %-d, %Y").to_string(),
            time: dt.format("%-I:%M %p").to_string(),
        },
        None => PublishedStamp {
            date: INVALID_DATE.to_string(),
            time: String::new(),
        },
    }
}
