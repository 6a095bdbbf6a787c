//! Snapshot assembly: a user's top albums across several lookback windows.
//!
//! The chart index is fetched once and lent to every window lookup. Windows
//! are fetched one after another in the order given; the first failing window
//! aborts the snapshot and its error is returned as is.

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::{
    error::{Error, Result},
    lastfm::{ScrobbleApi, fetch_top_albums, resolve_chart_index},
    types::{Snapshot, Window, WindowAlbums},
    utils,
};

/// Builds the snapshot of `user` relative to `today`.
///
/// Issues one chart index request plus one album chart request per window.
pub async fn build_snapshot<A: ScrobbleApi>(
    api: &A,
    user: &str,
    today: NaiveDate,
    windows: &[Window],
) -> Result<Snapshot> {
    let chart_index = resolve_chart_index(api, user).await?;

    let mut snapshot = Snapshot {
        windows: Vec::with_capacity(windows.len()),
    };

    for &window in windows {
        let target = utils::window_target(today, window).ok_or_else(|| {
            Error::InvalidDate(format!("{} days before {}", window.days(), today))
        })?;
        debug!(user, window = window.label(), %target, "fetching window");

        let albums = fetch_top_albums(api, user, target, Some(&chart_index)).await?;
        snapshot.windows.push(WindowAlbums {
            window,
            target,
            albums,
        });
    }

    info!(user, windows = snapshot.windows.len(), "snapshot built");
    Ok(snapshot)
}

/// [`build_snapshot`] relative to the current local date.
pub async fn build_snapshot_today<A: ScrobbleApi>(
    api: &A,
    user: &str,
    windows: &[Window],
) -> Result<Snapshot> {
    build_snapshot(api, user, utils::today(), windows).await
}
