use chrono::NaiveDate;
use tracing::debug;

use crate::{
    error::{Error, Result},
    lastfm::{ScrobbleApi, charts::resolve_chart_index, check_api_error},
    types::{AlbumEntry, ChartPeriod, RawAlbum, WeeklyAlbumChartResponse},
};

/// Maximum number of albums returned per window.
pub const TOP_ALBUM_LIMIT: usize = 10;

/// Returns the first period in `chart_index` that `target` resolves to.
///
/// Order matters: when two periods both accept the date, the earlier one in
/// the list wins. See [`ChartPeriod::contains`] for the bound rules.
pub fn select_period(chart_index: &[ChartPeriod], target: NaiveDate) -> Option<&ChartPeriod> {
    chart_index.iter().find(|p| p.contains(target))
}

/// Fetches the top albums `user` listened to in the week containing `target`.
///
/// # Arguments
///
/// * `api` - Last.fm access
/// * `user` - Last.fm user name
/// * `target` - Any date inside the wanted week
/// * `chart_index` - A previously resolved chart index. When `None`, the
///   index is fetched first, costing one extra request.
///
/// # Returns
///
/// At most [`TOP_ALBUM_LIMIT`] albums, in the order Last.fm ranks them. An
/// empty list when Last.fm returns no album chart for the period.
///
/// # Errors
///
/// - [`Error::NoChartForRange`] if no chart period covers `target`
/// - [`Error::Upstream`] if Last.fm answers with an error payload
/// - [`Error::Http`], [`Error::Json`] on transport or decoding failures
pub async fn fetch_top_albums<A: ScrobbleApi>(
    api: &A,
    user: &str,
    target: NaiveDate,
    chart_index: Option<&[ChartPeriod]>,
) -> Result<Vec<AlbumEntry>> {
    let fetched;
    let chart_index = match chart_index {
        Some(index) => index,
        None => {
            fetched = resolve_chart_index(api, user).await?;
            fetched.as_slice()
        }
    };

    let period = select_period(chart_index, target).ok_or(Error::NoChartForRange { target })?;
    debug!(
        user,
        %target,
        from = %period.from_date,
        to = %period.to_date,
        "selected chart period"
    );

    let payload = api
        .weekly_album_chart(user, period.from_ts, period.to_ts)
        .await?;
    check_api_error(&payload)?;

    let response: WeeklyAlbumChartResponse = serde_json::from_value(payload)?;
    let Some(albums) = response.weeklyalbumchart.and_then(|chart| chart.album) else {
        debug!(user, %target, "no album chart in response");
        return Ok(Vec::new());
    };

    albums
        .into_vec()
        .into_iter()
        .take(TOP_ALBUM_LIMIT)
        .map(|album| -> Result<AlbumEntry> {
            let raw: RawAlbum = serde_json::from_value(album)?;
            Ok(AlbumEntry::from(raw))
        })
        .collect()
}
