//! # CLI Module
//!
//! Terminal front end for scrobblesnap. Every command goes through the same
//! library code as the web server, so what the terminal prints is exactly
//! what the page would show.
//!
//! ## Commands
//!
//! - [`serve`] - Runs the web server
//! - [`snapshot`] - Prints the top albums of every lookback window
//! - [`charts`] - Lists the weekly chart periods Last.fm knows for a user
//! - [`albums`] - Prints the top albums of the week containing a given date
//!
//! ## Output
//!
//! Status lines use the crate's `info!`, `success!`, `warning!` and `error!`
//! macros, results are rendered as tables with `tabled`, and a spinner runs
//! while Last.fm is queried. `snapshot --json` prints the snapshot as JSON
//! instead, for scripting.
//!
//! ## Error Handling
//!
//! Commands never return errors. A failure is reported with `error!`, which
//! terminates the process with exit code 1. An unknown user gets a dedicated
//! message; every other failure prints the underlying error.
//!
//! ## Usage Patterns
//!
//! ```bash
//! scrobblesnap serve                          # Web UI on SERVER_ADDRESS
//! scrobblesnap snapshot rj                    # Six windows relative to today
//! scrobblesnap snapshot rj --basic --json     # Three windows as JSON
//! scrobblesnap snapshot rj --date 2016-01-01  # Relative to another day
//! scrobblesnap charts rj                      # All weekly periods
//! scrobblesnap albums rj 2015-07-01           # Top albums of one week
//! ```

mod albums;
mod charts;
mod serve;
mod snapshot;

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

pub use albums::albums;
pub use charts::charts;
pub use serve::serve;
pub use snapshot::snapshot;

fn spinner(message: impl Into<String>) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.into());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb
}

fn describe_failure(user: &str, err: &crate::Error) -> String {
    if err.is_user_not_found() {
        format!("Last.fm does not know the user '{}'", user)
    } else {
        format!("Cannot load charts for {}. Err: {}", user, err)
    }
}
