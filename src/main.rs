//! AetherGo - fast travel by abbreviation
//!
//! Runs a single `/go` command against an aetheryte catalog.

use aethergo::catalog::Catalog;
use aethergo::chat::StdoutChat;
use aethergo::command::HELP_TEXT;
use aethergo::config::Config;
use aethergo::go::GoCommand;
use aethergo::teleport::LogTeleporter;
use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{debug, info, Level};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Aetheryte catalog JSON file ("-" reads stdin)
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,

    /// Search phrase and chat flags, as typed after /go
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    words: Vec<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Setup logging; RUST_LOG wins over --debug
    let level = if args.debug { Level::DEBUG } else { Level::INFO };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.to_string()));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    if args.words.is_empty() {
        println!("{}", HELP_TEXT);
        return Ok(());
    }

    let config = Config::load()?;
    debug!("Using config: {:?}", config);

    let catalog = match args.catalog.or(config.catalog_path.clone()) {
        Some(path) if path.as_os_str() == "-" => {
            Catalog::from_reader(std::io::stdin().lock())
                .context("Failed to read catalog from stdin")?
        }
        Some(path) => Catalog::load(&path)
            .with_context(|| format!("Failed to load catalog {}", path.display()))?,
        None => {
            info!("💡 No catalog configured, using demo aetherytes");
            Catalog::demo()
        }
    };

    let mut command = GoCommand::new(
        catalog,
        LogTeleporter::new(),
        StdoutChat,
        config.chat_levels(),
    );
    command.handle(&args.words.join(" "));

    Ok(())
}
