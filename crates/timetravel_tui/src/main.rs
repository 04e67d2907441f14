//! timetravel_tui - play tic-tac-toe with a rewindable history.

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use timetravel_tictactoe::GameState;
use timetravel_tui::{App, Cli, Command, Settings, command_for, draw, enter_terminal, run_script};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref()).context("Failed to load settings")?;

    match cli.command {
        Command::Tui => run_tui(&settings),
        Command::Script { json } => run_script_mode(&settings, json),
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Run the line-driven shell on stdin/stdout
fn run_script_mode(settings: &Settings, json: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(io::stderr)
        .init();

    info!(json, "Starting script mode");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut stderr = io::stderr();
    let initial = GameState::new().with_sort_ascending(*settings.sort_ascending());
    let state = run_script(
        stdin.lock(),
        &mut stdout,
        &mut stderr,
        settings.view_options(),
        initial,
        json,
    )?;

    info!(steps = state.history().len(), "Script finished");
    Ok(())
}

/// Run the terminal UI
fn run_tui(settings: &Settings) -> Result<()> {
    // Setup logging to file to avoid interfering with TUI
    let log_file = std::fs::File::create(settings.log_file())
        .with_context(|| format!("Failed to create log file {}", settings.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!("Starting terminal UI");

    let guard = enter_terminal().context("Failed to set up terminal")?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let mut app = App::new(settings);
    let result = event_loop(&mut terminal, &mut app);
    drop(guard);

    info!(steps = app.state().history().len(), "Terminal UI closed");
    result
}

#[instrument(skip_all)]
fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|frame| draw(frame, app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && let Some(command) = command_for(key.code)
        {
            app.handle(command);
        }
    }
    Ok(())
}
