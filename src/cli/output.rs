//! Output formatting utilities for CLI.

use gridhunt::game::{Engine, Outcome};
use gridhunt::scenario::RunReport;
use serde::Serialize;

/// JSON-serializable run result.
#[derive(Debug, Serialize)]
pub(super) struct JsonRunResult {
    /// Rounds played.
    pub(super) rounds: u32,
    /// Hunter's collected treasure value.
    pub(super) hunter_score: u32,
    /// Monsters' collected treasure value.
    pub(super) monster_score: u32,
    /// Treasures still on the grid.
    pub(super) treasures_remaining: u32,
    /// Outcome (`null` if the move list ran out mid-game).
    pub(super) outcome: Option<&'static str>,
    /// Per-command log of engine replies.
    pub(super) log: Vec<JsonLogLine>,
    /// Final grid rendering, one string per row.
    pub(super) grid: Vec<String>,
}

/// JSON-serializable log entry.
#[derive(Debug, Serialize)]
pub(super) struct JsonLogLine {
    /// The command executed.
    pub(super) command: String,
    /// The engine's status message.
    pub(super) message: String,
}

impl JsonRunResult {
    /// Create from a finished run.
    pub(super) fn from_report(report: &RunReport) -> Self {
        let engine = &report.engine;
        Self {
            rounds: engine.round(),
            hunter_score: engine.hunter_score(),
            monster_score: engine.monster_score(),
            treasures_remaining: engine.treasures_remaining(),
            outcome: engine.outcome().map(outcome_name),
            log: report
                .log
                .iter()
                .map(|line| JsonLogLine {
                    command: line.command.clone(),
                    message: line.message.clone(),
                })
                .collect(),
            grid: grid_rows(engine),
        }
    }
}

const fn outcome_name(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::HunterWins => "hunter",
        Outcome::MonstersWin => "monsters",
        Outcome::Draw => "draw",
    }
}

/// Render the grid as glyph rows, without the fence.
fn grid_rows(engine: &Engine) -> Vec<String> {
    let grid = engine.grid();
    (0..grid.height())
        .map(|y| {
            (0..grid.width())
                .map(|x| {
                    grid.get(gridhunt::Coord::new(x, y))
                        .map_or(' ', gridhunt::Cell::glyph)
                })
                .collect()
        })
        .collect()
}

/// Render the grid with its boundary fence drawn in.
pub(super) fn render_grid(engine: &Engine) -> String {
    let grid = engine.grid();
    let fence: String = "#".repeat(grid.width() as usize + 2);

    let mut output = String::new();
    output.push_str(&fence);
    output.push('\n');
    for row in grid_rows(engine) {
        output.push('#');
        output.push_str(&row);
        output.push_str("#\n");
    }
    output.push_str(&fence);
    output.push('\n');
    output
}

/// Format a finished run as human-readable text.
pub(super) fn format_text(engine: &Engine) -> String {
    let mut output = String::new();

    output.push_str(&format!("Rounds played: {}\n", engine.round()));
    output.push_str(&format!("Hunter score:  {}\n", engine.hunter_score()));
    output.push_str(&format!("Monster score: {}\n", engine.monster_score()));
    output.push_str(&format!(
        "Treasures remaining: {}\n",
        engine.treasures_remaining()
    ));
    match engine.outcome() {
        Some(Outcome::HunterWins) => output.push_str("Result: hunter wins\n"),
        Some(Outcome::MonstersWin) => output.push_str("Result: monsters win\n"),
        Some(Outcome::Draw) => output.push_str("Result: draw\n"),
        None => output.push_str("Result: unfinished (move list exhausted)\n"),
    }

    output
}
