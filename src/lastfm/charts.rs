use chrono::{Local, TimeZone};
use tracing::{debug, warn};

use crate::{
    error::{Error, Result},
    lastfm::{ScrobbleApi, check_api_error},
    types::{ChartPeriod, RawChart, WeeklyChartListResponse},
};

/// Fetches every weekly chart period available for `user`.
///
/// Periods come back in the order Last.fm lists them, with their bounds
/// truncated to local calendar dates. This costs exactly one request.
///
/// # Errors
///
/// - [`Error::Upstream`] if Last.fm answers with an error payload, e.g. for an
///   unknown user
/// - [`Error::Json`] or [`Error::Malformed`] if the payload cannot be read
///
/// A payload without a `weeklychartlist.chart` list is not an error: the user
/// simply has no charts and an empty index is returned.
pub async fn resolve_chart_index<A: ScrobbleApi>(api: &A, user: &str) -> Result<Vec<ChartPeriod>> {
    let payload = api.weekly_chart_list(user).await?;
    check_api_error(&payload)?;

    let response: WeeklyChartListResponse = serde_json::from_value(payload)?;
    let Some(charts) = response.weeklychartlist.and_then(|list| list.chart) else {
        debug!(user, "no weekly chart list in response");
        return Ok(Vec::new());
    };

    let periods = periods_from_charts(charts.into_vec(), &Local)?;
    debug!(user, periods = periods.len(), "resolved chart index");
    Ok(periods)
}

/// Converts raw chart entries into periods with dates in `tz`.
///
/// Entries whose start lies after their end are skipped so every returned
/// period satisfies `from_date <= to_date`.
pub fn periods_from_charts<Tz: TimeZone>(charts: Vec<RawChart>, tz: &Tz) -> Result<Vec<ChartPeriod>> {
    let mut periods = Vec::with_capacity(charts.len());

    for chart in charts {
        let (Some(from), Some(to)) = (chart.from.value(), chart.to.value()) else {
            return Err(Error::Malformed(format!(
                "chart period with unreadable bounds: {:?} - {:?}",
                chart.from, chart.to
            )));
        };

        if from > to {
            warn!(from, to, "skipping inverted chart period");
            continue;
        }

        let period = ChartPeriod::new(from, to, tz).ok_or_else(|| {
            Error::Malformed(format!("chart period out of range: {} - {}", from, to))
        })?;
        periods.push(period);
    }

    Ok(periods)
}
