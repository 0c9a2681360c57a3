//! Phonics Tiles - CLI
//!
//! Letter-tile word building game with TUI and line modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use phonics_tiles::{
    catalog::WordCatalog,
    commands::{check_spelling, list_catalog, run_simple},
    core::DifficultyFilter,
    output::{print_catalog, print_check_result},
    session::{Mode, SessionConfig},
};
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

const LOG_FILE: &str = "phonics_tiles.log";

#[derive(Parser)]
#[command(
    name = "phonics_tiles",
    about = "Build words from letter tiles, hear their sounds and spell picture words",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word tier: all (default), easy, medium, hard
    #[arg(short, long, global = true, env = "PHONICS_DIFFICULTY", default_value = "all")]
    difficulty: DifficultyFilter,

    /// Starting mode: freeform (default) or guess
    #[arg(short, long, global = true, env = "PHONICS_MODE", default_value = "freeform")]
    mode: Mode,

    /// Speech rate (1.0 = normal speed)
    #[arg(short, long, global = true, env = "PHONICS_RATE", default_value_t = 0.8)]
    rate: f32,

    /// Seed for picking target words
    #[arg(short, long, global = true, env = "PHONICS_SEED")]
    seed: Option<u64>,

    /// Print tone cues (place, remove, ...) in line mode
    #[arg(long, global = true, env = "PHONICS_TONES")]
    tones: bool,

    /// Directory for the TUI log file (default: system temp dir)
    #[arg(long, global = true, env = "PHONICS_LOG_DIR")]
    log_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line mode (one command per line, no TUI)
    Simple,

    /// List the built-in words with their pictures
    Catalog,

    /// Check one spelling attempt against a target word
    Check {
        /// The word to spell
        target: String,

        /// The attempt; non-letters are ignored
        attempt: String,
    },
}

impl Cli {
    fn session_config(&self) -> SessionConfig {
        SessionConfig {
            difficulty: self.difficulty,
            start_mode: self.mode,
            speech_rate: self.rate,
            seed: self.seed,
            ..SessionConfig::default()
        }
    }
}

/// Setup logging: a file for the TUI, stderr for everything else
///
/// Filter comes from `RUST_LOG`, defaulting to warnings only. The returned
/// guard must live until exit so buffered lines reach the file.
fn setup_logging(to_file: bool, log_dir: Option<PathBuf>) -> Result<Option<WorkerGuard>> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    if to_file {
        let log_dir = log_dir.unwrap_or_else(std::env::temp_dir);
        std::fs::create_dir_all(&log_dir)
            .with_context(|| format!("failed to create log directory {}", log_dir.display()))?;

        let file_appender = tracing_appender::rolling::never(&log_dir, LOG_FILE);
        let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

        // The terminal belongs to the TUI, so only the file gets log lines
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_writer(non_blocking_file).with_ansi(false))
            .init();

        tracing::info!("Log file: {}", log_dir.join(LOG_FILE).display());
        Ok(Some(guard))
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
        Ok(None)
    }
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);

    let _guard = setup_logging(matches!(command, Commands::Play), cli.log_dir.take())?;
    let catalog = WordCatalog::builtin();

    match command {
        Commands::Play => run_play_command(catalog, cli.session_config()),
        Commands::Simple => run_simple(catalog, cli.session_config(), cli.tones),
        Commands::Catalog => {
            print_catalog(&list_catalog(catalog, cli.difficulty));
            Ok(())
        }
        Commands::Check { target, attempt } => {
            let result = check_spelling(catalog, &target, &attempt)
                .with_context(|| format!("cannot check against '{target}'"))?;
            print_check_result(&result);
            Ok(())
        }
    }
}

fn run_play_command(catalog: &WordCatalog, config: SessionConfig) -> Result<()> {
    use phonics_tiles::interactive::{App, run_tui};

    let app = App::new(catalog, config);
    run_tui(app)
}
