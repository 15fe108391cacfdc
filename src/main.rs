//! Flashcards - interactive command-line flashcard trainer
//!
//! CLI entry point with global panic handler.

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use flashcards::config::{crash_log_path, Config};
use flashcards::error::exit_codes;
use flashcards::{Session, StdConsole};

/// Environment variable holding the log filter (e.g. `debug`, `flashcards=trace`).
const LOG_ENV: &str = "FLASHCARDS_LOG";

// =============================================================================
// CLI Definition
// =============================================================================

/// Interactive flashcard trainer
#[derive(Parser)]
#[command(name = "flashcards")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Import cards from this file before the first prompt
    #[arg(long, value_name = "FILE")]
    import_from: Option<PathBuf>,

    /// Export cards to this file on exit
    #[arg(long, value_name = "FILE")]
    export_to: Option<PathBuf>,

    /// Seed for question selection, for reproducible quizzes
    #[arg(long)]
    seed: Option<u64>,

    /// Config file layered above the project and user configs
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

// =============================================================================
// Main Entry Point
// =============================================================================

fn main() -> ExitCode {
    setup_panic_handler();
    setup_logging();

    // Errors are reported, never turned into a failing exit status.
    if let Err(e) = run() {
        eprintln!("flashcards error: {}", e);
    }
    ExitCode::from(exit_codes::SUCCESS as u8)
}

/// Send diagnostics to stderr so they never mix with the quiz on stdout.
fn setup_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Set up the global panic handler.
///
/// On panic, logs to `<home>/crash.log` and exits with the crash code.
fn setup_panic_handler() {
    std::panic::set_hook(Box::new(|info| {
        eprintln!("flashcards panic: {}", info);

        if let Some(crash_log) = crash_log_path() {
            if let Some(parent) = crash_log.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            if let Ok(mut file) = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&crash_log)
            {
                let timestamp = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC");
                let _ = writeln!(file, "[{}] {}", timestamp, info);
            }
        }

        std::process::exit(exit_codes::CRASH);
    }));
}

/// Load config, then run one interactive session.
fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let cwd = std::env::current_dir()?;

    let config = Config::load_with(&cwd, cli.config.as_deref()).with_overrides(
        cli.import_from,
        cli.export_to,
        cli.seed,
    );
    tracing::debug!(?config, "configuration loaded");

    let mut session = Session::new(StdConsole::new(), &config);
    session.run()?;
    Ok(())
}
