use chrono::{DateTime, Duration, Local, NaiveDate, TimeZone};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::types::{AlbumEntry, AlbumTableRow, ChartPeriod, ChartTableRow, Window};

/// Converts a unix timestamp to the calendar date it falls on in `tz`.
pub fn timestamp_to_date<Tz: TimeZone>(ts: i64, tz: &Tz) -> Option<NaiveDate> {
    DateTime::from_timestamp(ts, 0).map(|dt| dt.with_timezone(tz).date_naive())
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Target date of `window` relative to `today`, `None` if it falls before
/// the earliest date chrono can represent.
pub fn window_target(today: NaiveDate, window: Window) -> Option<NaiveDate> {
    today.checked_sub_signed(Duration::days(window.days()))
}

pub fn parse_date(date: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
        .map_err(|e| format!("'{}' is not a YYYY-MM-DD date: {}", date, e))
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Characters escaped in a user path segment: everything but the
/// unreserved URL characters.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Path of the snapshot page of `username`.
pub fn user_path(username: &str) -> String {
    format!("/{}/", utf8_percent_encode(username, PATH_SEGMENT))
}

pub fn album_table_rows(albums: &[AlbumEntry]) -> Vec<AlbumTableRow> {
    albums
        .iter()
        .enumerate()
        .map(|(i, a)| AlbumTableRow {
            rank: i + 1,
            artist: a.artist.clone(),
            album: a.album.clone(),
        })
        .collect()
}

pub fn chart_table_rows(periods: &[ChartPeriod]) -> Vec<ChartTableRow> {
    periods
        .iter()
        .map(|p| ChartTableRow {
            from: p.from_date.format("%Y-%m-%d").to_string(),
            to: p.to_date.format("%Y-%m-%d").to_string(),
            from_ts: p.from_ts,
            to_ts: p.to_ts,
        })
        .collect()
}
