//! Scenario files: scripted games for non-interactive runs.
//!
//! A scenario is a JSON description of a board (placements) plus a list of
//! hunter moves. It is a front-end convenience driven through the public
//! command surface; the engine itself persists nothing, and a running
//! game is discarded on restart.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use serde::Deserialize;

use crate::error::{CommandError, Severity};
use crate::game::{Direction, Engine, Phase, PlaceKind, invariants};

/// A grid position in a scenario file.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Position {
    /// X coordinate (column).
    pub x: u16,
    /// Y coordinate (row).
    pub y: u16,
}

/// A treasure placement in a scenario file.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct TreasurePlacement {
    /// X coordinate (column).
    pub x: u16,
    /// Y coordinate (row).
    pub y: u16,
    /// Treasure value, 1-9.
    pub value: u8,
}

const fn default_width() -> u16 {
    crate::game::DEFAULT_WIDTH
}

const fn default_height() -> u16 {
    crate::game::DEFAULT_HEIGHT
}

/// A scripted game: board layout plus a sequence of hunter moves.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    /// Grid width (default 10).
    #[serde(default = "default_width")]
    pub width: u16,
    /// Grid height (default 10).
    #[serde(default = "default_height")]
    pub height: u16,
    /// Hunter start position. Required: setup cannot end without one.
    pub hunter: Position,
    /// Monster positions, in placement (and move-resolution) order.
    #[serde(default)]
    pub monsters: Vec<Position>,
    /// Obstacle positions.
    #[serde(default)]
    pub obstacles: Vec<Position>,
    /// Treasure placements.
    #[serde(default)]
    pub treasures: Vec<TreasurePlacement>,
    /// Hunter moves (`up`/`down`/`left`/`right` or `w`/`a`/`s`/`d`),
    /// applied in order until the list is exhausted or the game ends.
    #[serde(default)]
    pub moves: Vec<String>,
}

/// Errors from loading or running a scenario.
#[derive(Debug)]
pub enum ScenarioError {
    /// Reading the file failed.
    Io(io::Error),
    /// The file is not valid scenario JSON.
    Parse(serde_json::Error),
    /// Grid dimensions were zero.
    InvalidDimensions {
        /// Requested width.
        width: u16,
        /// Requested height.
        height: u16,
    },
    /// The engine rejected one of the scripted commands.
    Command {
        /// Which scripted step was rejected.
        step: String,
        /// The engine's rejection.
        source: CommandError,
    },
}

impl fmt::Display for ScenarioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScenarioError::Io(e) => write!(f, "failed to read scenario: {e}"),
            ScenarioError::Parse(e) => write!(f, "failed to parse scenario: {e}"),
            ScenarioError::InvalidDimensions { width, height } => {
                write!(f, "invalid grid dimensions {width}x{height}")
            }
            ScenarioError::Command { step, source } => {
                write!(f, "scenario step {step} rejected: {source}")
            }
        }
    }
}

impl std::error::Error for ScenarioError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScenarioError::Io(e) => Some(e),
            ScenarioError::Parse(e) => Some(e),
            ScenarioError::Command { source, .. } => Some(source),
            ScenarioError::InvalidDimensions { .. } => None,
        }
    }
}

impl From<io::Error> for ScenarioError {
    fn from(e: io::Error) -> Self {
        ScenarioError::Io(e)
    }
}

impl From<serde_json::Error> for ScenarioError {
    fn from(e: serde_json::Error) -> Self {
        ScenarioError::Parse(e)
    }
}

/// One executed command and the engine's reply to it.
#[derive(Debug, Clone)]
pub struct LogLine {
    /// The command, in scenario terms.
    pub command: String,
    /// The engine's status message.
    pub message: String,
    /// Message severity.
    pub severity: Severity,
}

/// The result of running a scenario to completion.
#[derive(Debug)]
pub struct RunReport {
    /// The engine in its final state, for querying scores and outcome.
    pub engine: Engine,
    /// Per-command log of engine replies.
    pub log: Vec<LogLine>,
}

impl Scenario {
    /// Load a scenario from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`ScenarioError::Io`] or [`ScenarioError::Parse`].
    pub fn load(path: &Path) -> Result<Self, ScenarioError> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Parse a scenario from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`ScenarioError::Parse`] for invalid JSON.
    pub fn from_json(text: &str) -> Result<Self, ScenarioError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Drive a fresh engine through the scenario.
    ///
    /// Placements and `end_setup` must be accepted; a scripted move into an
    /// obstacle or the fence is not an error (it consumes the turn, exactly
    /// as it would for an interactive player) and is recorded in the log.
    /// Remaining moves after the game ends are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`ScenarioError::InvalidDimensions`] for a zero-sized grid
    /// and [`ScenarioError::Command`] if the engine rejects a placement,
    /// `end_setup`, or an unparseable move.
    pub fn run(&self) -> Result<RunReport, ScenarioError> {
        let mut engine =
            Engine::new(self.width, self.height).ok_or(ScenarioError::InvalidDimensions {
                width: self.width,
                height: self.height,
            })?;
        let mut log = Vec::new();

        place(
            &mut engine,
            &mut log,
            self.hunter.x,
            self.hunter.y,
            PlaceKind::Hunter,
        )?;
        for monster in &self.monsters {
            place(&mut engine, &mut log, monster.x, monster.y, PlaceKind::Monster)?;
        }
        for obstacle in &self.obstacles {
            place(&mut engine, &mut log, obstacle.x, obstacle.y, PlaceKind::Obstacle)?;
        }
        for treasure in &self.treasures {
            place(
                &mut engine,
                &mut log,
                treasure.x,
                treasure.y,
                PlaceKind::Treasure(treasure.value),
            )?;
        }

        let reply = engine.end_setup().map_err(|source| ScenarioError::Command {
            step: "end setup".to_string(),
            source,
        })?;
        invariants::assert_invariants(&engine);
        log.push(LogLine {
            command: "end setup".to_string(),
            message: reply.message,
            severity: reply.severity,
        });

        for raw in &self.moves {
            if engine.phase() != Phase::Play {
                break;
            }
            let direction: Direction =
                raw.parse().map_err(|source| ScenarioError::Command {
                    step: format!("move {raw:?}"),
                    source,
                })?;
            let line = match engine.move_hunter(direction) {
                Ok(reply) => LogLine {
                    command: format!("move {direction}"),
                    message: reply.message,
                    severity: reply.severity,
                },
                // The turn is consumed either way; record it and keep going.
                Err(CommandError::IllegalMove) => LogLine {
                    command: format!("move {direction}"),
                    message: CommandError::IllegalMove.to_string(),
                    severity: Severity::Error,
                },
                Err(source) => {
                    return Err(ScenarioError::Command {
                        step: format!("move {direction}"),
                        source,
                    });
                }
            };
            invariants::assert_invariants(&engine);
            log.push(line);
        }

        Ok(RunReport { engine, log })
    }
}

/// Execute one scripted placement: select, place, log.
fn place(
    engine: &mut Engine,
    log: &mut Vec<LogLine>,
    x: u16,
    y: u16,
    kind: PlaceKind,
) -> Result<(), ScenarioError> {
    let step = format!("place {kind:?} at ({x},{y})");
    let reply = engine
        .select_cell(x, y)
        .and_then(|_| engine.place_object(kind))
        .map_err(|source| ScenarioError::Command {
            step: step.clone(),
            source,
        })?;
    invariants::assert_invariants(engine);
    log.push(LogLine {
        command: step,
        message: reply.message,
        severity: reply.severity,
    });
    Ok(())
}
