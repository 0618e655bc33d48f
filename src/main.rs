//! Pente GUI and terminal self-play

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use pente::ui::PenteApp;
use pente::{GameConfig, GameMode, GameSession, GameStatus, Ruleset};

#[derive(Parser)]
#[command(name = "pente", version, about = "Pente / Gomoku with pair captures")]
struct Cli {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the ruleset (standard or restricted)
    #[arg(short, long)]
    ruleset: Option<Ruleset>,

    /// Override the engine search depth
    #[arg(short, long)]
    depth: Option<u8>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Open the board window (default)
    Play,
    /// Let the engine play itself in the terminal
    Selfplay {
        /// Stop after this many plies
        #[arg(long, default_value_t = 200)]
        max_moves: usize,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => run_gui(config),
        Command::Selfplay { max_moves } => selfplay(config, max_moves),
    }
}

fn load_config(cli: &Cli) -> Result<GameConfig> {
    let mut config = match &cli.config {
        Some(path) => GameConfig::load(path).with_context(|| "loading configuration")?,
        None => GameConfig::default(),
    };
    if let Some(ruleset) = cli.ruleset {
        config.ruleset = ruleset;
    }
    if let Some(depth) = cli.depth {
        config.depth = depth;
    }
    config.validate()?;
    Ok(config)
}

fn run_gui(config: GameConfig) -> Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 750.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Pente"),
        ..Default::default()
    };

    eframe::run_native(
        "Pente",
        options,
        Box::new(|cc| Ok(Box::new(PenteApp::new(cc, config)))),
    )
    .map_err(|err| anyhow!("GUI failed: {err}"))
}

fn selfplay(config: GameConfig, max_moves: usize) -> Result<()> {
    let mut session = GameSession::new(GameConfig {
        mode: GameMode::EngineVsEngine,
        ..config
    });

    while session.board().history().len() < max_moves {
        let status = session.engine_move()?;
        println!("{}", session.board());
        if status != GameStatus::Playing {
            break;
        }
    }

    info!(
        result = %session.status(),
        plies = session.board().history().len(),
        "self-play finished"
    );
    println!("Result: {}", session.status());
    Ok(())
}
