use tabled::Table;

use crate::{
    cli::{describe_failure, spinner},
    config::Config,
    error,
    lastfm::LastFmClient,
    snapshot::build_snapshot,
    types::Window,
    utils,
};

/// Prints the snapshot of `user`.
///
/// # Arguments
///
/// * `date` - Optional `YYYY-MM-DD` to use instead of today
/// * `basic` - Only the six month, one and two year windows
/// * `json` - Print JSON instead of tables
pub async fn snapshot(config: &Config, user: String, date: Option<String>, basic: bool, json: bool) {
    let today = match date {
        Some(date) => match utils::parse_date(&date) {
            Ok(today) => today,
            Err(e) => error!("{}", e),
        },
        None => utils::today(),
    };
    let windows: Vec<Window> = if basic {
        Window::BASIC.to_vec()
    } else {
        config.windows.clone()
    };

    let client = LastFmClient::from_config(config);

    let pb = spinner(format!("Building snapshot for {}...", user));
    let snapshot = build_snapshot(&client, &user, today, &windows).await;
    pb.finish_and_clear();

    let snapshot = match snapshot {
        Ok(snapshot) => snapshot,
        Err(e) => error!("{}", describe_failure(&user, &e)),
    };

    if json {
        match serde_json::to_string_pretty(&snapshot) {
            Ok(out) => println!("{}", out),
            Err(e) => error!("Cannot serialize snapshot. Err: {}", e),
        }
        return;
    }

    for window in &snapshot.windows {
        if window.albums.is_empty() {
            println!(
                "{title} (week of {target})\nNothing scrobbled that week.\n",
                title = window.window.title(),
                target = window.target
            );
            continue;
        }

        println!(
            "{title} (week of {target})\n{table}\n",
            title = window.window.title(),
            target = window.target,
            table = Table::new(utils::album_table_rows(&window.albums))
        );
    }
}
