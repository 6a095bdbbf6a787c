use tabled::Table;

use crate::{
    cli::{describe_failure, spinner},
    config::Config,
    error,
    lastfm::{LastFmClient, resolve_chart_index},
    success, utils, warning,
};

/// Lists all weekly chart periods of `user`.
pub async fn charts(config: &Config, user: String) {
    let client = LastFmClient::from_config(config);

    let pb = spinner(format!("Fetching chart list for {}...", user));
    let periods = resolve_chart_index(&client, &user).await;
    pb.finish_and_clear();

    let periods = match periods {
        Ok(periods) => periods,
        Err(e) => error!("{}", describe_failure(&user, &e)),
    };

    if periods.is_empty() {
        warning!("No weekly charts available for {}", user);
        return;
    }

    println!("{}", Table::new(utils::chart_table_rows(&periods)));
    success!(
        "{} chart periods from {} to {}",
        periods.len(),
        periods[0].from_date,
        periods[periods.len() - 1].to_date
    );
}
