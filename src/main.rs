//! Terminal chase runner (default binary).
//!
//! Sizes the board from the terminal, then hands the game, the terminal and the
//! keyboard to a [`Session`] running on a tokio runtime.

use std::path::PathBuf;

use anyhow::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use tui_chase::core::SimpleRng;
use tui_chase::input::TtyInput;
use tui_chase::session::{create_game, ChaseConfig, Session, SessionError, SessionExit};
use tui_chase::term::TerminalRenderer;
use tui_chase::types::{GAME_OVER_TITLE, TOO_SMALL_MESSAGE};

fn main() -> Result<()> {
    let config = ChaseConfig::from_env();
    let _log_guard = setup_logging(&config)?;

    // A failed size query reads as (0, 0) and is caught by the size check.
    let size = crossterm::terminal::size().unwrap_or((0, 0));
    let seed = config.seed.unwrap_or_else(SimpleRng::seed_from_clock);

    let game = match create_game(size, seed) {
        Ok(game) => game,
        Err(SessionError::TerminalTooSmall {
            width,
            height,
            cause,
        }) => {
            tracing::info!(width, height, %cause, "terminal too small");
            println!("{TOO_SMALL_MESSAGE}");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let mut term = TerminalRenderer::new();
    term.enter()?;
    // Dropping `term` on any early return restores the terminal.
    let input = TtyInput::open()?;

    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let result = rt.block_on(Session::new(game, term, input, &config).run());
    // The input thread may still sit in a blocking read; do not wait for it.
    rt.shutdown_background();

    match result {
        Ok(report) => {
            let mut term = report.surface;
            term.exit()?;
            tracing::info!(exit = ?report.exit, turns = report.snapshot.turn, "session ended");
            if report.exit == SessionExit::Interrupted {
                println!("{GAME_OVER_TITLE}");
            }
            Ok(())
        }
        Err(e) => {
            tracing::error!(error = %e, "session failed");
            Err(e.into())
        }
    }
}

/// Setup logging to a file only; the terminal belongs to the game.
fn setup_logging(config: &ChaseConfig) -> Result<WorkerGuard> {
    let log_dir = config
        .log_dir
        .clone()
        .unwrap_or_else(default_log_directory);
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = tracing_appender::rolling::never(&log_dir, "chase.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    tracing::info!(log_dir = %log_dir.display(), "logging initialized");
    Ok(guard)
}

/// Get the platform-specific log directory
fn default_log_directory() -> PathBuf {
    if let Some(xdg_cache) = std::env::var_os("XDG_CACHE_HOME") {
        return PathBuf::from(xdg_cache).join("tui-chase").join("logs");
    }
    if let Some(home) = std::env::var_os("HOME") {
        return PathBuf::from(home)
            .join(".cache")
            .join("tui-chase")
            .join("logs");
    }
    PathBuf::from("/tmp/tui-chase/logs")
}
