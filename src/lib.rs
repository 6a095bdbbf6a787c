//! Last.fm Listening Snapshot Library
//!
//! This library looks up what a Last.fm user was listening to six months and
//! one to five years ago. It resolves arbitrary dates to the weekly chart
//! periods Last.fm publishes, fetches the top albums of those weeks and
//! presents them on a small web page or in the terminal.
//!
//! # Modules
//!
//! - `api` - HTTP endpoints and page rendering of the web server
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration loading from the environment and `.env` files
//! - `error` - Error type shared by all layers
//! - `lastfm` - Last.fm client, chart index resolution and album lookup
//! - `server` - Router construction and the HTTP server loop
//! - `snapshot` - Assembly of the multi-window snapshot
//! - `types` - Data structures and Last.fm response shapes
//! - `utils` - Date and formatting helpers
//!
//! # Example
//!
//! ```
//! use scrobblesnap::{config::Config, lastfm::LastFmClient, snapshot, types::Window};
//!
//! #[tokio::main]
//! async fn main() -> scrobblesnap::Res<()> {
//!     let config = Config::from_env()?;
//!     let client = LastFmClient::from_config(&config);
//!     let snapshot = snapshot::build_snapshot_today(&client, "rj", &Window::BASIC).await?;
//!     println!("{:?}", snapshot.labels());
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod lastfm;
pub mod server;
pub mod snapshot;
pub mod types;
pub mod utils;

pub use error::{Error, Result};

/// A convenient Result type alias for top-level operations that may fail.
///
/// Uses a boxed dynamic error so the binary can mix library errors with
/// anything else it runs into. Library code returns [`Result`] instead.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Initializes `tracing` output on stderr.
///
/// `RUST_LOG` takes precedence; otherwise `default_filter` is used.
pub fn init_tracing(default_filter: &str) {
    use tracing_subscriber::EnvFilter;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Fetching charts for {}", user);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Found {} chart periods", count);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only meant for fatal errors in the binary; the program terminates with
/// exit code 1 right after printing.
///
/// # Example
///
/// ```
/// error!("Cannot load configuration: {}", e);
/// // Program exits here
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// # Example
///
/// ```
/// warning!("No albums scrobbled in the week of {}", date);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
