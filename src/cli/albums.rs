use tabled::Table;

use crate::{
    cli::{describe_failure, spinner},
    config::Config,
    error,
    lastfm::{LastFmClient, fetch_top_albums},
    utils, warning,
};

/// Prints the top albums of `user` for the week containing `date`.
pub async fn albums(config: &Config, user: String, date: String) {
    let target = match utils::parse_date(&date) {
        Ok(target) => target,
        Err(e) => error!("{}", e),
    };

    let client = LastFmClient::from_config(config);

    let pb = spinner(format!("Fetching top albums of {} around {}...", user, target));
    let albums = fetch_top_albums(&client, &user, target, None).await;
    pb.finish_and_clear();

    let albums = match albums {
        Ok(albums) => albums,
        Err(e) => error!("{}", describe_failure(&user, &e)),
    };

    if albums.is_empty() {
        warning!("Nothing scrobbled by {} in the week of {}", user, target);
        return;
    }

    println!(
        "Week of {target}\n{table}",
        target = target,
        table = Table::new(utils::album_table_rows(&albums))
    );
}
