use chrono::{DateTime, Datelike, Local, NaiveDateTime, TimeZone, Utc};

pub const MISSING: &str = "—";

const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Accepts RFC 3339 or a naive ISO timestamp (read as UTC).
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
        .map(|naive| naive.and_utc())
}

/// Milliseconds since epoch; missing or unparseable timestamps sort as 0.
pub fn sort_key(raw: Option<&str>) -> i64 {
    raw.and_then(parse_timestamp)
        .map(|dt| dt.timestamp_millis())
        .unwrap_or(0)
}

pub fn format_timestamp_in<Tz>(raw: Option<&str>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let Some(raw) = raw.filter(|r| !r.trim().is_empty()) else {
        return MISSING.to_string();
    };
    match parse_timestamp(raw) {
        Some(dt) => dt.with_timezone(tz).format(DISPLAY_FORMAT).to_string(),
        None => raw.to_string(),
    }
}

/// Browser-local rendering of an event timestamp.
pub fn format_timestamp(raw: Option<&str>) -> String {
    format_timestamp_in(raw, &Local)
}

pub fn current_year() -> i32 {
    Local::now().year()
}
