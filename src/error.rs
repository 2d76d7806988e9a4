//! Error types for the game engine command surface.

use std::fmt;

use crate::game::Phase;

/// Severity tag attached to command replies and errors.
///
/// Informational only: the front end uses it to colour messages, the
/// engine never branches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Neutral status text.
    Info,
    /// A command that changed the game for the better.
    Success,
    /// A rejected command.
    Error,
}

/// Reasons a command can be rejected.
///
/// Every variant is recoverable: the offending command is refused and the
/// engine stays in a consistent state. [`CommandError::IllegalMove`] is the
/// one documented exception: it still consumes the hunter's turn, so the
/// monster pass runs before the error is reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Selecting a non-empty cell during setup.
    OccupiedCell {
        /// X coordinate of the rejected cell.
        x: u16,
        /// Y coordinate of the rejected cell.
        y: u16,
    },
    /// Placing an object with no cell selected.
    NoActiveSelection,
    /// Attempting to place a second hunter.
    DuplicateHunter,
    /// A placement kind or movement direction that is not recognized.
    InvalidInput(String),
    /// Ending setup without a hunter placed.
    PreconditionNotMet,
    /// Hunter movement into an obstacle or out of bounds.
    IllegalMove,
    /// A command issued while the engine is not in the phase that accepts it.
    WrongPhase {
        /// Phase the command requires.
        expected: Phase,
        /// Phase the engine is actually in.
        actual: Phase,
    },
}

impl CommandError {
    /// Severity tag for this error. Always [`Severity::Error`].
    #[must_use]
    pub const fn severity(&self) -> Severity {
        Severity::Error
    }
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::OccupiedCell { x, y } => {
                write!(f, "grid position ({x},{y}) is already occupied")
            }
            CommandError::NoActiveSelection => {
                write!(f, "no cell selected; select a cell before placing")
            }
            CommandError::DuplicateHunter => write!(f, "the hunter has already been placed"),
            CommandError::InvalidInput(input) => write!(f, "invalid input: {input}"),
            CommandError::PreconditionNotMet => {
                write!(f, "a hunter must be placed before the game can start")
            }
            CommandError::IllegalMove => write!(f, "invalid move: obstacle or fence"),
            CommandError::WrongPhase { expected, actual } => {
                write!(f, "command requires the {expected} phase (currently {actual})")
            }
        }
    }
}

impl std::error::Error for CommandError {}

/// Result type for engine commands.
pub type CommandResult<T> = Result<T, CommandError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_carries_coordinates() {
        let err = CommandError::OccupiedCell { x: 3, y: 7 };
        assert_eq!(err.to_string(), "grid position (3,7) is already occupied");
    }

    #[test]
    fn test_wrong_phase_names_both_phases() {
        let err = CommandError::WrongPhase {
            expected: Phase::Play,
            actual: Phase::Setup,
        };
        let text = err.to_string();
        assert!(text.contains("Play"));
        assert!(text.contains("Setup"));
    }

    #[test]
    fn test_every_error_is_error_severity() {
        assert_eq!(CommandError::IllegalMove.severity(), Severity::Error);
        assert_eq!(CommandError::NoActiveSelection.severity(), Severity::Error);
    }
}
