use chrono::{NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tabled::Tabled;

use crate::utils;

/// One weekly reporting window as published by Last.fm.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartPeriod {
    pub from_ts: i64,
    pub to_ts: i64,
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
}

impl ChartPeriod {
    /// Builds a period from raw unix timestamps, truncating both bounds to
    /// calendar dates in `tz`. Returns `None` for timestamps chrono cannot
    /// represent.
    pub fn new<Tz: TimeZone>(from_ts: i64, to_ts: i64, tz: &Tz) -> Option<Self> {
        Some(Self {
            from_ts,
            to_ts,
            from_date: utils::timestamp_to_date(from_ts, tz)?,
            to_date: utils::timestamp_to_date(to_ts, tz)?,
        })
    }

    /// Whether `target` resolves to this period.
    ///
    /// The lower bound matches on equality, the upper bound is exclusive: a
    /// target equal to `to_date` belongs to the next period.
    pub fn contains(&self, target: NaiveDate) -> bool {
        target == self.from_date || (target > self.from_date && target < self.to_date)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlbumEntry {
    pub artist: String,
    pub album: String,
}

/// Lookback windows shown on a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Window {
    SixMonths,
    OneYear,
    TwoYear,
    ThreeYear,
    FourYear,
    FiveYear,
}

impl Window {
    pub const BASIC: [Window; 3] = [Window::SixMonths, Window::OneYear, Window::TwoYear];

    pub const EXTENDED: [Window; 6] = [
        Window::SixMonths,
        Window::OneYear,
        Window::TwoYear,
        Window::ThreeYear,
        Window::FourYear,
        Window::FiveYear,
    ];

    /// Days subtracted from today to get the window's target date.
    pub fn days(&self) -> i64 {
        match self {
            Window::SixMonths => 180,
            Window::OneYear => 365,
            Window::TwoYear => 730,
            Window::ThreeYear => 1095,
            Window::FourYear => 1460,
            Window::FiveYear => 1825,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Window::SixMonths => "six_months",
            Window::OneYear => "one_year",
            Window::TwoYear => "two_year",
            Window::ThreeYear => "three_year",
            Window::FourYear => "four_year",
            Window::FiveYear => "five_year",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Window::SixMonths => "6 months ago",
            Window::OneYear => "1 year ago",
            Window::TwoYear => "2 years ago",
            Window::ThreeYear => "3 years ago",
            Window::FourYear => "4 years ago",
            Window::FiveYear => "5 years ago",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct WindowAlbums {
    pub window: Window,
    pub target: NaiveDate,
    pub albums: Vec<AlbumEntry>,
}

/// Top albums of one user across the configured lookback windows, in
/// window order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Snapshot {
    pub windows: Vec<WindowAlbums>,
}

impl Snapshot {
    pub fn get(&self, window: Window) -> Option<&[AlbumEntry]> {
        self.windows
            .iter()
            .find(|w| w.window == window)
            .map(|w| w.albums.as_slice())
    }

    pub fn get_by_label(&self, label: &str) -> Option<&[AlbumEntry]> {
        self.windows
            .iter()
            .find(|w| w.window.label() == label)
            .map(|w| w.albums.as_slice())
    }

    pub fn labels(&self) -> Vec<&'static str> {
        self.windows.iter().map(|w| w.window.label()).collect()
    }
}

/// Last.fm collapses single-element lists into a bare object.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::Many(items) => items,
            OneOrMany::One(item) => vec![item],
        }
    }
}

/// Unix timestamp as sent by Last.fm, usually a decimal string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Timestamp {
    Int(i64),
    Text(String),
}

impl Timestamp {
    pub fn value(&self) -> Option<i64> {
        match self {
            Timestamp::Int(ts) => Some(*ts),
            Timestamp::Text(ts) => ts.trim().parse().ok(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeeklyChartListResponse {
    pub weeklychartlist: Option<WeeklyChartList>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeeklyChartList {
    pub chart: Option<OneOrMany<RawChart>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawChart {
    pub from: Timestamp,
    pub to: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeeklyAlbumChartResponse {
    pub weeklyalbumchart: Option<WeeklyAlbumChart>,
}

/// Albums are kept as raw values so only the entries actually shown get
/// decoded.
#[derive(Debug, Clone, Deserialize)]
pub struct WeeklyAlbumChart {
    pub album: Option<OneOrMany<Value>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawAlbum {
    pub name: String,
    pub artist: RawArtist,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawArtist {
    #[serde(rename = "#text")]
    pub name: String,
}

impl From<RawAlbum> for AlbumEntry {
    fn from(raw: RawAlbum) -> Self {
        AlbumEntry {
            artist: raw.artist.name,
            album: raw.name,
        }
    }
}

#[derive(Tabled)]
pub struct AlbumTableRow {
    pub rank: usize,
    pub artist: String,
    pub album: String,
}

#[derive(Tabled)]
pub struct ChartTableRow {
    pub from: String,
    pub to: String,
    pub from_ts: i64,
    pub to_ts: i64,
}
