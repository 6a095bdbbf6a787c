//! # Last.fm Integration Module
//!
//! This module talks to the Last.fm web service and turns its weekly chart
//! data into the dated periods and album lists the rest of the application
//! works with.
//!
//! ## Architecture
//!
//! ```text
//! Presentation (web server, CLI)
//!          ↓
//! Snapshot assembly (crate::snapshot)
//!          ↓
//! Chart resolution
//!     ├── Chart index   (charts)  user.getweeklychartlist
//!     └── Album window  (albums)  user.getweeklyalbumchart
//!          ↓
//! ScrobbleApi (LastFmClient over reqwest, or a test double)
//!          ↓
//! Last.fm REST API (JSON)
//! ```
//!
//! ## The `ScrobbleApi` seam
//!
//! [`ScrobbleApi`] exposes the two upstream queries as raw JSON. Everything
//! that interprets a payload (error detection, missing fields, truncation to
//! the top ten) lives in [`charts`] and [`albums`], so the same rules apply no
//! matter where the JSON came from. [`LastFmClient`] is the production
//! implementation; it carries the API key and base URL it was built with,
//! there is no process-wide key.
//!
//! ## Error Payloads
//!
//! Last.fm reports failures as `{"error": <code>, "message": "..."}`, often
//! with an HTTP error status. Bodies are decoded regardless of status so that
//! the upstream message reaches the user; see [`check_api_error`].
//!
//! ## Request Budget
//!
//! One call resolves the chart index and one call fetches each album window.
//! There are no retries and no caching.

pub mod albums;
pub mod charts;

use std::future::Future;

use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::{
    config::Config,
    error::{Error, Result},
};

pub use albums::{TOP_ALBUM_LIMIT, fetch_top_albums, select_period};
pub use charts::resolve_chart_index;

pub const METHOD_WEEKLY_CHART_LIST: &str = "user.getweeklychartlist";
pub const METHOD_WEEKLY_ALBUM_CHART: &str = "user.getweeklyalbumchart";

/// Read-only access to the two Last.fm chart queries.
pub trait ScrobbleApi: Send + Sync {
    /// `user.getweeklychartlist` for `user`.
    fn weekly_chart_list(&self, user: &str) -> impl Future<Output = Result<Value>> + Send;

    /// `user.getweeklyalbumchart` for `user` between the raw `from` and `to`
    /// timestamps of one chart period.
    fn weekly_album_chart(
        &self,
        user: &str,
        from: i64,
        to: i64,
    ) -> impl Future<Output = Result<Value>> + Send;
}

/// HTTP client for the Last.fm REST API.
#[derive(Debug, Clone)]
pub struct LastFmClient {
    http: Client,
    api_url: String,
    api_key: String,
}

impl LastFmClient {
    pub fn new(api_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            api_url: api_url.into(),
            api_key: api_key.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.api_url.clone(), config.api_key.clone())
    }

    async fn get(&self, method: &str, params: &[(&str, String)]) -> Result<Value> {
        debug!(method, url = %self.api_url, "calling Last.fm");

        let response = self
            .http
            .get(&self.api_url)
            .query(&[("method", method)])
            .query(params)
            .query(&[("api_key", self.api_key.as_str()), ("format", "json")])
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;
        debug!(method, %status, bytes = body.len(), "Last.fm responded");

        Ok(serde_json::from_slice(&body)?)
    }
}

impl ScrobbleApi for LastFmClient {
    async fn weekly_chart_list(&self, user: &str) -> Result<Value> {
        self.get(METHOD_WEEKLY_CHART_LIST, &[("user", user.to_string())])
            .await
    }

    async fn weekly_album_chart(&self, user: &str, from: i64, to: i64) -> Result<Value> {
        self.get(
            METHOD_WEEKLY_ALBUM_CHART,
            &[
                ("user", user.to_string()),
                ("from", from.to_string()),
                ("to", to.to_string()),
            ],
        )
        .await
    }
}

/// Turns a Last.fm error payload into [`Error::Upstream`].
///
/// A payload counts as an error when it has a top-level `error` field. The
/// upstream `message` is carried over verbatim.
pub fn check_api_error(payload: &Value) -> Result<()> {
    let Some(code) = payload.get("error") else {
        return Ok(());
    };

    let message = payload
        .get("message")
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| format!("Last.fm error {}", code));

    Err(Error::Upstream {
        code: code.as_i64(),
        message,
    })
}
