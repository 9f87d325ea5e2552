//! `TaskMaster` — terminal-native task list manager.
//!
//! Launches the TUI, loading tasks and the theme preference from the data
//! directory. Configuration via CLI flags, environment variables, or config
//! file (`~/.config/taskmaster/config.toml`).
//!
//! ```bash
//! # Default data directory
//! cargo run --bin taskmaster
//!
//! # Custom data directory, import a backup on startup
//! cargo run --bin taskmaster -- --data-dir /tmp/tasks \
//!     --import taskmaster-backup.json
//! ```

use std::io;
use std::path::Path;

use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing_appender::non_blocking::WorkerGuard;

use taskmaster::app::App;
use taskmaster::config::{AppConfig, CliArgs};
use taskmaster::storage::Storage;
use taskmaster::ui;
use taskmaster_core::store::TaskStore;

fn main() -> io::Result<()> {
    let cli = CliArgs::parse();

    // Load and resolve configuration (CLI args > config file > defaults).
    let config = match AppConfig::load(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Warning: failed to load config file: {e}");
            AppConfig::default()
        }
    };

    // Initialize logging before terminal setup (logs go to file, not stdout).
    let _log_guard = init_logging(&cli.log_level, cli.log_file.as_deref());

    tracing::info!("taskmaster starting");

    // Open storage and load persisted state. A malformed task blob degrades
    // to an empty collection inside load_tasks().
    let data_dir = match config.data_dir.clone() {
        Some(dir) => dir,
        None => Storage::default_dir().map_err(io::Error::other)?,
    };
    let storage = Storage::open(data_dir).map_err(io::Error::other)?;
    let store = TaskStore::from_tasks(storage.load_tasks());
    let theme_kind = storage.load_theme();

    let mut app = App::new(store, storage, &config, theme_kind);
    if let Some(path) = cli.import.as_deref() {
        app.import_from(path);
    }

    // Set up terminal.
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app.
    let result = run_app(&mut terminal, &mut app, &config);

    // Restore terminal.
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    tracing::info!("taskmaster exiting");
    result
}

/// Initialize file-based logging.
///
/// Logs are written to a file (never stdout, since ratatui owns the
/// terminal). Returns a [`WorkerGuard`] that must be held until shutdown to
/// ensure all buffered log entries are flushed.
fn init_logging(level: &str, file_path: Option<&Path>) -> Option<WorkerGuard> {
    let default_path = std::env::temp_dir().join("taskmaster.log");
    let log_path = file_path.unwrap_or(&default_path);

    let log_dir = log_path.parent()?;
    let file_name = log_path.file_name()?.to_str()?;

    let file_appender = tracing_appender::rolling::never(log_dir, file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(env_filter)
        .with_ansi(false)
        .init();

    Some(guard)
}

/// Main application loop: draw, expire notifications, poll input, dispatch.
///
/// Single-threaded and synchronous; every operation completes before the
/// next input is processed.
fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    config: &AppConfig,
) -> io::Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        app.tick_notification();

        if event::poll(config.poll_timeout)?
            && let Event::Key(key) = event::read()?
        {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key_event(key);
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
