use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use connect_four_agent::ai::AgentKind;
use connect_four_agent::arena::run_arena;
use connect_four_agent::config::AppConfig;
use connect_four_agent::game::Player;

/// Pit two Connect Four agents against each other.
#[derive(Parser)]
#[command(name = "arena", about = "Play a headless series of Connect Four games")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Override number of games
    #[arg(short, long)]
    games: Option<usize>,

    /// RNG seed for random agents
    #[arg(long)]
    seed: Option<u64>,

    /// Policy playing Red (moves first)
    #[arg(long, value_enum)]
    red: Option<AgentKind>,

    /// Policy playing Yellow
    #[arg(long, value_enum)]
    yellow: Option<AgentKind>,

    /// Override the number of columns
    #[arg(long)]
    columns: Option<usize>,

    /// Override the number of rows
    #[arg(long)]
    rows: Option<usize>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    initialize_logging(cli.log_level);

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(games) = cli.games {
        config.arena.games = games;
    }
    if cli.seed.is_some() {
        config.arena.seed = cli.seed;
    }
    if let Some(red) = cli.red {
        config.arena.red = red;
    }
    if let Some(yellow) = cli.yellow {
        config.arena.yellow = yellow;
    }
    if let Some(columns) = cli.columns {
        config.board.columns = columns;
    }
    if let Some(rows) = cli.rows {
        config.board.rows = rows;
    }
    config.validate()?;

    info!(
        columns = config.board.columns,
        rows = config.board.rows,
        games = config.arena.games,
        seed = ?config.arena.seed,
        "starting arena"
    );

    let report = run_arena(&config).context("running arena")?;

    println!(
        "{} games on a {}x{} board",
        report.games, config.board.columns, config.board.rows
    );
    println!(
        "Red    ({:?}): {:>5} wins ({:.1}%)",
        config.arena.red,
        report.red_wins,
        report.win_rate(Player::Red) * 100.0
    );
    println!(
        "Yellow ({:?}): {:>5} wins ({:.1}%)",
        config.arena.yellow,
        report.yellow_wins,
        report.win_rate(Player::Yellow) * 100.0
    );
    println!("Draws: {}  Forfeits: {}", report.draws, report.forfeits);
    println!("Average game length: {:.1} moves", report.avg_game_length());

    Ok(())
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().event_format(format))
        .with(filter)
        .init();
}
