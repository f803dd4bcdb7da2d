//! Terminal driver for morris-core.
//!
//! Usage:
//!   # Interactive, default 3×3 board with 4 stones each
//!   cargo run --bin morris
//!
//!   # Replay a script of moves on a 4×4 board
//!   cargo run --bin morris -- game.txt --size 4 --stones 5
//!
//!   # Options from a TOML file (board_size, stones_per_player, player_count)
//!   cargo run --bin morris -- --config morris.toml -v

mod input;
mod render;
mod session;

use std::fs::{self, File};
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use morris_core::{Engine, EngineConfig};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::session::{Finish, Session};

/// Play a placement-then-sliding alignment game in the terminal
#[derive(Parser, Debug)]
#[command(name = "morris", version, about, long_about = None)]
struct Cli {
    /// File of commands to play; reads stdin when omitted
    script: Option<PathBuf>,

    /// TOML file with engine options
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Board side length
    #[arg(long)]
    size: Option<usize>,

    /// Stones per player
    #[arg(long)]
    stones: Option<usize>,

    /// Number of players
    #[arg(long)]
    players: Option<u8>,

    /// Log engine decisions to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// Options from the config file, overridden by flags.
    fn engine_config(&self) -> Result<EngineConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => EngineConfig::default(),
        };
        if let Some(size) = self.size {
            config = config.with_board_size(size);
        }
        if let Some(stones) = self.stones {
            config = config.with_stones_per_player(stones);
        }
        if let Some(players) = self.players {
            config = config.with_player_count(players);
        }
        Ok(config)
    }
}

fn load_config(path: &Path) -> Result<EngineConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = cli.engine_config()?;
    debug!(?config, "engine options");
    let engine = Engine::new(config).context("invalid engine options")?;

    let mut session = Session::new(engine, io::stdout().lock());
    let finish = match &cli.script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("opening script {}", path.display()))?;
            session.run(BufReader::new(file))?
        }
        None => session.run(io::stdin().lock())?,
    };

    info!(?finish, result = ?session.engine().result(), "session finished");
    if finish == Finish::EndOfInput && !session.engine().is_over() {
        eprintln!("Input ended before the game was decided.");
    }
    Ok(())
}
