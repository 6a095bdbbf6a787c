//! Configuration management for scrobblesnap.
//!
//! Configuration comes from environment variables, optionally seeded from a
//! `.env` file in the local data directory. Values are read once into a
//! [`Config`] which is then handed to the Last.fm client and the web server;
//! nothing reads the environment after startup.
//!
//! The lookup order is:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (where applicable)

use std::{env, path::PathBuf};

use crate::{
    error::{Error, Result},
    types::Window,
};

pub const DEFAULT_API_URL: &str = "https://ws.audioscrobbler.com/2.0/";
pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:5000";

/// Loads environment variables from `scrobblesnap/.env` in the local data
/// directory.
///
/// The directory is created when missing so `build.rs` and users have a
/// place to put the file. A missing `.env` is not an error, because every
/// value may also come from the process environment.
///
/// # Directory Structure
///
/// - Linux: `~/.local/share/scrobblesnap/.env`
/// - macOS: `~/Library/Application Support/scrobblesnap/.env`
/// - Windows: `%LOCALAPPDATA%/scrobblesnap/.env`
///
/// # Errors
///
/// Returns an error if the directory cannot be created or an existing `.env`
/// file cannot be parsed.
pub async fn load_env() -> Result<()> {
    let path = env_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent).await?;
    }

    match dotenv::from_path(&path) {
        Ok(()) => Ok(()),
        Err(dotenv::Error::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(Error::Config(format!(
            "cannot load {}: {}",
            path.display(),
            e
        ))),
    }
}

pub fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("scrobblesnap/.env");
    path
}

/// Runtime settings, injected into the client and the server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Last.fm API key (`LASTFM_API_KEY`).
    pub api_key: String,
    /// Base URL of the Last.fm REST endpoint (`LASTFM_API_URL`).
    pub api_url: String,
    /// Bind address of the web server (`SERVER_ADDRESS`).
    pub server_addr: String,
    /// Windows rendered on a snapshot (`SNAPSHOT_WINDOWS`).
    pub windows: Vec<Window>,
}

impl Config {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_url: DEFAULT_API_URL.to_string(),
            server_addr: DEFAULT_SERVER_ADDRESS.to_string(),
            windows: Window::EXTENDED.to_vec(),
        }
    }

    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Fails when `LASTFM_API_KEY` is unset or blank, or when
    /// `SNAPSHOT_WINDOWS` holds something other than `basic` or `extended`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_key = get("LASTFM_API_KEY")
            .ok_or_else(|| Error::Config("LASTFM_API_KEY must be set".to_string()))?;

        let windows = match get("SNAPSHOT_WINDOWS") {
            Some(v) => parse_windows(&v)?,
            None => Window::EXTENDED.to_vec(),
        };

        Ok(Self {
            api_key: api_key.trim().to_string(),
            api_url: get("LASTFM_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            server_addr: get("SERVER_ADDRESS")
                .unwrap_or_else(|| DEFAULT_SERVER_ADDRESS.to_string()),
            windows,
        })
    }
}

pub fn parse_windows(value: &str) -> Result<Vec<Window>> {
    match value.trim().to_lowercase().as_str() {
        "basic" => Ok(Window::BASIC.to_vec()),
        "extended" => Ok(Window::EXTENDED.to_vec()),
        other => Err(Error::Config(format!(
            "SNAPSHOT_WINDOWS must be 'basic' or 'extended', got '{}'",
            other
        ))),
    }
}
