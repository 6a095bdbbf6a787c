#![allow(dead_code)]

use std::sync::{
    Mutex,
    atomic::{AtomicUsize, Ordering},
};

use chrono::{Duration, NaiveDate};
use serde_json::{Value, json};

use scrobblesnap::{Result, lastfm::ScrobbleApi};

pub const USER: &str = "J_Roche";

pub fn chart_fixture() -> Value {
    serde_json::from_str(include_str!("../fixtures/chart.json")).expect("valid chart fixture")
}

pub fn albums_fixture() -> Value {
    serde_json::from_str(include_str!("../fixtures/albums.json")).expect("valid albums fixture")
}

/// (artist, album) pairs of the albums fixture, in order.
pub fn fixture_pairs() -> Vec<(String, String)> {
    albums_fixture()["weeklyalbumchart"]["album"]
        .as_array()
        .expect("album list")
        .iter()
        .map(|a| {
            (
                a["artist"]["#text"].as_str().unwrap().to_string(),
                a["name"].as_str().unwrap().to_string(),
            )
        })
        .collect()
}

pub fn noon_utc(date: NaiveDate) -> i64 {
    date.and_hms_opt(12, 0, 0).unwrap().and_utc().timestamp()
}

/// A chart list of `weeks` consecutive weekly periods starting at noon UTC on
/// `first_day`.
pub fn weekly_chart_list(first_day: NaiveDate, weeks: usize) -> Value {
    let charts: Vec<Value> = (0..weeks)
        .map(|i| {
            let from = first_day + Duration::days(7 * i as i64);
            json!({
                "#text": "",
                "from": noon_utc(from).to_string(),
                "to": noon_utc(from + Duration::days(7)).to_string(),
            })
        })
        .collect();

    json!({ "weeklychartlist": { "chart": charts, "@attr": { "user": USER } } })
}

pub fn album_chart(pairs: &[(&str, &str)]) -> Value {
    let albums: Vec<Value> = pairs
        .iter()
        .enumerate()
        .map(|(i, (artist, album))| {
            json!({
                "artist": { "#text": artist, "mbid": "" },
                "name": album,
                "mbid": "",
                "@attr": { "rank": (i + 1).to_string() },
                "playcount": "3",
            })
        })
        .collect();

    json!({ "weeklyalbumchart": { "album": albums } })
}

pub fn error_payload(code: i64, message: &str) -> Value {
    json!({ "error": code, "message": message, "links": [] })
}

/// In-memory Last.fm that answers from canned payloads and counts requests.
///
/// Album chart requests are answered from `album_charts` in order; once the
/// list is exhausted the last payload is repeated.
pub struct FakeLastFm {
    pub chart_list: Value,
    pub album_charts: Vec<Value>,
    pub chart_list_calls: AtomicUsize,
    pub album_chart_calls: AtomicUsize,
    pub album_requests: Mutex<Vec<(String, i64, i64)>>,
}

impl FakeLastFm {
    pub fn new(chart_list: Value, album_chart: Value) -> Self {
        Self::with_album_charts(chart_list, vec![album_chart])
    }

    pub fn with_album_charts(chart_list: Value, album_charts: Vec<Value>) -> Self {
        Self {
            chart_list,
            album_charts,
            chart_list_calls: AtomicUsize::new(0),
            album_chart_calls: AtomicUsize::new(0),
            album_requests: Mutex::new(Vec::new()),
        }
    }

    pub fn fixtures() -> Self {
        Self::new(chart_fixture(), albums_fixture())
    }

    pub fn chart_list_calls(&self) -> usize {
        self.chart_list_calls.load(Ordering::SeqCst)
    }

    pub fn album_chart_calls(&self) -> usize {
        self.album_chart_calls.load(Ordering::SeqCst)
    }

    pub fn album_requests(&self) -> Vec<(String, i64, i64)> {
        self.album_requests.lock().unwrap().clone()
    }
}

impl ScrobbleApi for FakeLastFm {
    async fn weekly_chart_list(&self, _user: &str) -> Result<Value> {
        self.chart_list_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.chart_list.clone())
    }

    async fn weekly_album_chart(&self, user: &str, from: i64, to: i64) -> Result<Value> {
        let n = self.album_chart_calls.fetch_add(1, Ordering::SeqCst);
        self.album_requests
            .lock()
            .unwrap()
            .push((user.to_string(), from, to));

        let idx = n.min(self.album_charts.len().saturating_sub(1));
        Ok(self.album_charts.get(idx).cloned().unwrap_or(Value::Null))
    }
}
