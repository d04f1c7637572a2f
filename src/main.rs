use std::path::PathBuf;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};
use tracing_subscriber::EnvFilter;

use tracklift::{cli, config, error};

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
    /// Parse a pasted track list (or a single playlist link)
    Parse(ParseOptions),

    /// Import a Spotify playlist by link, URI or id
    Import(ImportOptions),

    /// Parse a track list and check how likely each track is to be found
    Verify(VerifyOptions),

    /// List playlists in the catalog library
    Library,

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct ParseOptions {
    /// Read the track list from a file instead of stdin
    #[clap(long, short)]
    file: Option<PathBuf>,

    /// Print the playlist as JSON
    #[clap(long)]
    json: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct ImportOptions {
    /// Playlist link, spotify:playlist URI or playlist id
    reference: String,

    /// Print the playlist as JSON
    #[clap(long)]
    json: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct VerifyOptions {
    /// Read the track list from a file instead of stdin
    #[clap(long, short)]
    file: Option<PathBuf>,

    /// Search the catalog for every track instead of estimating
    #[clap(long)]
    lookup: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Parse(opt) => cli::parse(opt.file, opt.json).await,
        Command::Import(opt) => cli::import(opt.reference, opt.json).await,
        Command::Verify(opt) => cli::verify(opt.file, opt.lookup).await,
        Command::Library => cli::library().await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
