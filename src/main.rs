use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use scrobblesnap::{cli, config, error};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Run the web server
    Serve,

    /// Show a user's top albums for every lookback window
    Snapshot(SnapshotOptions),

    /// List the weekly chart periods of a user
    Charts(ChartsOptions),

    /// Show a user's top albums for the week containing a date
    Albums(AlbumsOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct SnapshotOptions {
    /// Last.fm user name
    pub username: String,

    /// Compute the windows relative to this date (YYYY-MM-DD) instead of today
    #[clap(long)]
    pub date: Option<String>,

    /// Only six months, one and two years
    #[clap(long)]
    pub basic: bool,

    /// Print JSON instead of tables
    #[clap(long)]
    pub json: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct ChartsOptions {
    /// Last.fm user name
    pub username: String,
}

#[derive(Parser, Debug, Clone)]
pub struct AlbumsOptions {
    /// Last.fm user name
    pub username: String,

    /// Any date inside the wanted week (YYYY-MM-DD)
    pub date: String,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Command::Completions(opt) = &cli.command {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        generate(opt.shell, &mut cmd, name, &mut std::io::stdout());
        return;
    }

    match cli.command {
        Command::Serve => scrobblesnap::init_tracing("scrobblesnap=info,tower_http=debug"),
        _ => scrobblesnap::init_tracing("warn"),
    }

    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let config = match config::Config::from_env() {
        Ok(config) => config,
        Err(e) => error!("{}", e),
    };

    match cli.command {
        Command::Serve => cli::serve(&config).await,
        Command::Snapshot(opt) => {
            cli::snapshot(&config, opt.username, opt.date, opt.basic, opt.json).await
        }
        Command::Charts(opt) => cli::charts(&config, opt.username).await,
        Command::Albums(opt) => cli::albums(&config, opt.username, opt.date).await,
        Command::Completions(_) => {}
    }
}
