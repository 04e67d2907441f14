//! Headless line-driven shell.
//!
//! One command per line: `play N`, `jump N`, `sort`, `show`. Blank lines
//! and lines starting with `#` are skipped. Bad lines are reported and the
//! session keeps going.

use anyhow::{Context, Result};
use derive_more::{Display, Error};
use std::io::{BufRead, Write};
use timetravel_tictactoe::{GameState, Intent, ViewOptions};
use tracing::{debug, instrument, warn};

/// A parsed script line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptCommand {
    /// Feed an intent to the engine.
    Intent(Intent),
    /// Print the board and move list.
    Show,
}

/// Malformed script line.
#[derive(Debug, Clone, Display, Error)]
#[display("Script error: {} at {}:{}", message, file, line)]
pub struct ScriptError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ScriptError {
    /// Creates a new script error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Parses one line. `Ok(None)` for blank lines and comments.
pub fn parse_line(line: &str) -> Result<Option<ScriptCommand>, ScriptError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let mut parts = line.split_whitespace();
    let verb = parts.next().unwrap_or_default().to_lowercase();
    let arg = parts.next();
    if let Some(extra) = parts.next() {
        return Err(ScriptError::new(format!("unexpected argument '{}'", extra)));
    }

    let command = match (verb.as_str(), arg) {
        ("play", Some(n)) => ScriptCommand::Intent(Intent::PlayMove(parse_number(n)?)),
        ("jump", Some(n)) => ScriptCommand::Intent(Intent::JumpToStep(parse_number(n)?)),
        ("sort", None) => ScriptCommand::Intent(Intent::ToggleSortOrder),
        ("show", None) => ScriptCommand::Show,
        ("play" | "jump", None) => {
            return Err(ScriptError::new(format!("'{}' needs a number", verb)));
        }
        ("sort" | "show", Some(_)) => {
            return Err(ScriptError::new(format!("'{}' takes no argument", verb)));
        }
        _ => return Err(ScriptError::new(format!("unknown command '{}'", verb))),
    };
    Ok(Some(command))
}

#[track_caller]
fn parse_number(s: &str) -> Result<usize, ScriptError> {
    match s.parse() {
        Ok(n) => Ok(n),
        Err(_) => Err(ScriptError::new(format!(
            "'{}' is not a non-negative number",
            s
        ))),
    }
}

/// Runs a script session.
///
/// Prints the status after each command to `out` (or the whole view as
/// JSON when `json` is set) and problems to `err`. Returns the final state.
#[instrument(skip_all, fields(json = json))]
pub fn run<R, W, E>(
    input: R,
    out: &mut W,
    err: &mut E,
    options: ViewOptions,
    initial: GameState,
    json: bool,
) -> Result<GameState>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let mut state = initial;

    for (number, line) in input.lines().enumerate() {
        let line = line.context("Failed to read script input")?;
        let number = number + 1;

        let command = match parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                warn!(number, error = %e, "Bad script line");
                writeln!(err, "line {}: {}", number, e.message)?;
                continue;
            }
        };
        debug!(number, ?command, "Running script command");

        match command {
            ScriptCommand::Intent(intent) => match state.apply(intent) {
                Ok(next) => state = next,
                Err(e) => {
                    warn!(number, %intent, error = %e, "Intent rejected");
                    writeln!(err, "line {}: {}", number, e.kind)?;
                    continue;
                }
            },
            ScriptCommand::Show if !json => {
                write_board(out, &state, options)?;
                continue;
            }
            ScriptCommand::Show => {}
        }

        if json {
            let view = state.view(options);
            let text = serde_json::to_string(&view).context("Failed to serialize view")?;
            writeln!(out, "{}", text)?;
        } else {
            writeln!(out, "{}", state.status(options))?;
        }
    }

    Ok(state)
}

fn write_board<W: Write>(out: &mut W, state: &GameState, options: ViewOptions) -> Result<()> {
    let view = state.view(options);
    writeln!(out, "{}", view.board.display())?;
    writeln!(out, "{}", view.status)?;
    for m in &view.moves {
        let marker = if m.is_current { '>' } else { ' ' };
        writeln!(out, "{} {}", marker, m.label)?;
    }
    Ok(())
}
