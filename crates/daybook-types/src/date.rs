use chrono::{Local, NaiveDate};

/// Day strings use this fixed-width format everywhere: directory names,
/// daily-log keys, and the context target date. Fixed width means plain
/// string comparison orders them chronologically.
pub const DAY_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` day string, rejecting impossible dates and
/// anything with trailing content.
pub fn parse_day(name: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(name, DAY_FORMAT).ok()
}

/// Whether `name` is a valid calendar day in `YYYY-MM-DD` form.
pub fn is_day(name: &str) -> bool {
    parse_day(name).is_some()
}

/// The current local day as a `YYYY-MM-DD` string.
pub fn today() -> String {
    Local::now().format(DAY_FORMAT).to_string()
}
