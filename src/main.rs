use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use spotidash::{cli, config, error, utils};

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
    /// Authorize with Spotify API
    Auth(AuthOptions),

    /// Render the full listening dashboard
    Dashboard,

    /// Show liked-artist summary
    Artists(ArtistsOptions),

    /// Show top tracks per time range
    Top(TopOptions),

    /// Show follow/unfollow recommendations
    Recommend,

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct AuthOptions {
    /// Paste the authorization code manually instead of using the local callback server
    #[clap(long)]
    pub manual: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct ArtistsOptions {
    /// Only show the N artists with the most liked tracks
    #[clap(long)]
    pub top: Option<usize>,
}

#[derive(Parser, Debug, Clone)]
pub struct TopOptions {
    /// Time window to show: short, medium, or long (default: all three)
    #[clap(long, value_parser = utils::parse_time_range)]
    pub term: Option<utils::TimeRange>,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

fn session_config() -> config::Config {
    match config::Config::from_env() {
        Ok(config) => config,
        Err(e) => error!("Cannot load configuration. Err: {}", e),
    }
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Auth(opt) => cli::auth(&session_config(), opt.manual).await,
        Command::Dashboard => cli::dashboard(&session_config()).await,
        Command::Artists(opt) => cli::artists(&session_config(), opt.top).await,
        Command::Top(opt) => cli::top(&session_config(), opt.term).await,
        Command::Recommend => cli::recommend(&session_config()).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
