//! Error types shared by the Last.fm client, the chart resolution logic and
//! the presentation layer.

use chrono::NaiveDate;
use thiserror::Error;

/// Message Last.fm sends back when the requested user does not exist.
pub const USER_NOT_FOUND: &str = "User not found";

#[derive(Error, Debug)]
pub enum Error {
    /// Last.fm answered with an explicit error payload.
    #[error("{message}")]
    Upstream { code: Option<i64>, message: String },

    /// The target date is outside every weekly chart period of the user.
    #[error("No chart for that range")]
    NoChartForRange { target: NaiveDate },

    /// A date outside the range chrono can represent.
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid JSON from Last.fm: {0}")]
    Json(#[from] serde_json::Error),

    /// The payload was valid JSON but not shaped the way Last.fm documents it.
    #[error("Malformed Last.fm response: {0}")]
    Malformed(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// True when Last.fm reported that the requested user does not exist.
    pub fn is_user_not_found(&self) -> bool {
        matches!(self, Error::Upstream { message, .. } if message.contains(USER_NOT_FOUND))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
