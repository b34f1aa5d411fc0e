use std::path::PathBuf;

use clap::builder::RangedU64ValueParser;
use clap::{Parser, ValueEnum};
use othello::{Board, GameConfig, GameMode, MAX_BOARD_SIZE, MAX_PLAYERS};
use othello_cli::Session;
use tracing::info;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
struct Args {
    /// Path to a JSON game config
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Side length of the board, overrides the config
    #[arg(short, long, value_parser = RangedU64ValueParser::<usize>::new().range(2..=MAX_BOARD_SIZE as u64))]
    board_size: Option<usize>,

    /// Number of players, overrides the config
    #[arg(short, long, value_parser = RangedU64ValueParser::<usize>::new().range(2..=MAX_PLAYERS as u64))]
    players: Option<usize>,

    /// Who sits at the board, overrides the config
    #[arg(short, long, value_enum)]
    mode: Option<ModeArg>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    HumanVsHuman,
    HumanVsHeuristicAi,
}

impl From<ModeArg> for GameMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::HumanVsHuman => GameMode::HumanVsHuman,
            ModeArg::HumanVsHeuristicAi => GameMode::HumanVsHeuristicAi,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    let mut config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    if let Some(board_size) = args.board_size {
        config.board_size = board_size;
    }
    if let Some(players) = args.players {
        config.player_number = players;
    }
    if let Some(mode) = args.mode {
        config.mode = mode.into();
    }
    info!(?config);

    let board = Board::from_config(&config);
    let mut session = Session::new(board, std::io::stdin().lock(), std::io::stdout().lock());
    let match_score = session.run()?;

    let wins: Vec<String> = match_score
        .wins
        .iter()
        .enumerate()
        .map(|(player, wins)| format!("- {} wins by player {}", wins, player))
        .collect();
    eprintln!(
        "End result:\n{}\n- {} ties",
        wins.join("\n"),
        match_score.ties
    );

    Ok(())
}

// Logs go to stderr, the board is drawn on stdout
fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
