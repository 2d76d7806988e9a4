//! The game engine: setup controller, turn engine, end determination.

use std::fmt;

use crate::error::{CommandError, CommandResult, Severity};
use crate::game::policy::{self, Decision};
use crate::game::rules::{self, Direction, Role};
use crate::game::{Cell, Coord, Grid, Registry};

/// Default grid width.
pub const DEFAULT_WIDTH: u16 = 10;
/// Default grid height.
pub const DEFAULT_HEIGHT: u16 = 10;

/// The three stages of a game instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Placement stage: the board is being populated.
    Setup,
    /// Active gameplay: hunter moves alternate with monster passes.
    Play,
    /// The game is over; only `restart` is accepted.
    End,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Setup => write!(f, "Setup"),
            Phase::Play => write!(f, "Play"),
            Phase::End => write!(f, "End"),
        }
    }
}

/// Final result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The hunter out-collected the monsters.
    HunterWins,
    /// The hunter was caught, or the monsters out-collected it.
    MonstersWin,
    /// Equal scores (or a game with no treasures at all).
    Draw,
}

/// An object the player can place during setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceKind {
    /// The single player agent.
    Hunter,
    /// A computer agent; any number may be placed.
    Monster,
    /// An impassable placed cell.
    Obstacle,
    /// A collectible with the given value (must be 1-9).
    Treasure(u8),
}

impl PlaceKind {
    /// Map a placement keystroke (h/m/o/1-9) to a kind.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::InvalidInput`] for unrecognized keys.
    pub fn from_key(key: char) -> CommandResult<Self> {
        match key {
            'h' | 'H' => Ok(PlaceKind::Hunter),
            'm' | 'M' => Ok(PlaceKind::Monster),
            'o' | 'O' => Ok(PlaceKind::Obstacle),
            '1'..='9' => {
                let value = (key as u32 - '0' as u32) as u8;
                Ok(PlaceKind::Treasure(value))
            }
            other => Err(CommandError::InvalidInput(format!(
                "unknown placement key {other:?}, expected h, m, o, or 1-9"
            ))),
        }
    }
}

/// Successful command acknowledgement: a human-readable status message plus
/// a severity tag. Informational only; game logic never depends on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// Status text for the front end to surface.
    pub message: String,
    /// How the front end should colour the message.
    pub severity: Severity,
}

impl Reply {
    fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Info,
        }
    }

    fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Success,
        }
    }
}

/// The complete game engine.
///
/// One explicit object owns the grid, the entity registry, and all game
/// state; a front end holds it by reference and drives it through the
/// command methods. Single-writer, turn-synchronous: every command runs to
/// completion (including the monster pass it may trigger) before the next
/// one is accepted.
#[derive(Debug, Clone)]
pub struct Engine {
    grid: Grid,
    registry: Registry,
    phase: Phase,
    round: u32,
    treasures_remaining: u32,
    hunter_score: u32,
    monster_score: u32,
    /// Setup-only: at most one selected empty cell pending a placement.
    selection: Option<Coord>,
    /// Set exactly once, at the transition into [`Phase::End`].
    outcome: Option<Outcome>,
}

impl Engine {
    /// Create an engine with an empty grid of the given dimensions.
    ///
    /// Returns `None` if either dimension is zero.
    #[must_use]
    pub fn new(width: u16, height: u16) -> Option<Self> {
        Some(Self {
            grid: Grid::new(width, height)?,
            registry: Registry::new(),
            phase: Phase::Setup,
            round: 0,
            treasures_remaining: 0,
            hunter_score: 0,
            monster_score: 0,
            selection: None,
            outcome: None,
        })
    }

    // ---- query surface ----

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Current round number (0 until play begins).
    #[must_use]
    pub const fn round(&self) -> u32 {
        self.round
    }

    /// Number of treasures left on the grid.
    #[must_use]
    pub const fn treasures_remaining(&self) -> u32 {
        self.treasures_remaining
    }

    /// The hunter's score.
    #[must_use]
    pub const fn hunter_score(&self) -> u32 {
        self.hunter_score
    }

    /// The monsters' combined score.
    #[must_use]
    pub const fn monster_score(&self) -> u32 {
        self.monster_score
    }

    /// The grid, for rendering.
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Hunter position, `None` if not placed or captured.
    #[must_use]
    pub const fn hunter(&self) -> Option<Coord> {
        self.registry.hunter()
    }

    /// Monster positions in placement (and move-resolution) order.
    #[must_use]
    pub fn monsters(&self) -> &[Coord] {
        self.registry.monsters()
    }

    /// The currently selected setup cell, if any.
    #[must_use]
    pub const fn selection(&self) -> Option<Coord> {
        self.selection
    }

    /// Final outcome, present once the phase is [`Phase::End`].
    #[must_use]
    pub const fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    // ---- command surface: setup ----

    /// Select an empty cell as the target for the next placement.
    ///
    /// Replaces any prior selection.
    ///
    /// # Errors
    ///
    /// [`CommandError::WrongPhase`] outside setup,
    /// [`CommandError::InvalidInput`] for out-of-bounds coordinates, and
    /// [`CommandError::OccupiedCell`] if the cell is not empty.
    pub fn select_cell(&mut self, x: u16, y: u16) -> CommandResult<Reply> {
        self.require_phase(Phase::Setup)?;

        let coord = Coord::new(x, y);
        let Some(cell) = self.grid.get(coord) else {
            return Err(CommandError::InvalidInput(format!(
                "cell ({x},{y}) is outside the grid"
            )));
        };
        if !cell.is_empty() {
            return Err(CommandError::OccupiedCell { x, y });
        }

        self.selection = Some(coord);
        Ok(Reply::info(format!("cell ({x},{y}) selected")))
    }

    /// Place an object on the selected cell, then clear the selection.
    ///
    /// # Errors
    ///
    /// [`CommandError::WrongPhase`] outside setup,
    /// [`CommandError::NoActiveSelection`] with nothing selected,
    /// [`CommandError::DuplicateHunter`] for a second hunter, and
    /// [`CommandError::InvalidInput`] for a treasure value outside 1-9.
    pub fn place_object(&mut self, kind: PlaceKind) -> CommandResult<Reply> {
        self.require_phase(Phase::Setup)?;
        let coord = self.selection.ok_or(CommandError::NoActiveSelection)?;

        let message = match kind {
            PlaceKind::Hunter => {
                if self.registry.hunter_placed() {
                    return Err(CommandError::DuplicateHunter);
                }
                self.grid.set(coord, Cell::Hunter);
                self.registry.place_hunter(coord);
                "Hunter placed successfully!".to_string()
            }
            PlaceKind::Monster => {
                self.grid.set(coord, Cell::Monster);
                self.registry.add_monster(coord);
                "Monster placed successfully!".to_string()
            }
            PlaceKind::Obstacle => {
                self.grid.set(coord, Cell::Obstacle);
                "Obstacle placed successfully!".to_string()
            }
            PlaceKind::Treasure(value) => {
                if !(1..=9).contains(&value) {
                    return Err(CommandError::InvalidInput(format!(
                        "treasure value must be 1-9, got {value}"
                    )));
                }
                self.grid.set(coord, Cell::Treasure(value));
                self.treasures_remaining += 1;
                format!("Treasure with value {value} placed successfully!")
            }
        };

        self.selection = None;
        Ok(Reply::success(message))
    }

    /// End the setup stage.
    ///
    /// With no treasures on the board the game goes straight to a drawn
    /// end state; otherwise play begins and the first round-advance check
    /// runs immediately (which can itself end the game).
    ///
    /// # Errors
    ///
    /// [`CommandError::WrongPhase`] outside setup and
    /// [`CommandError::PreconditionNotMet`] if no hunter was placed.
    pub fn end_setup(&mut self) -> CommandResult<Reply> {
        self.require_phase(Phase::Setup)?;
        if !self.registry.hunter_placed() {
            return Err(CommandError::PreconditionNotMet);
        }

        self.selection = None;

        // A hunter-only game with no collectible objective is declared a
        // draw rather than played out.
        if self.treasures_remaining == 0 {
            self.phase = Phase::End;
            self.outcome = Some(Outcome::Draw);
            return Ok(Reply::success("No treasures were placed. It's a draw."));
        }

        self.phase = Phase::Play;
        self.round = 0;
        if let Some(ending) = self.advance_round() {
            return Ok(Reply::success(ending));
        }
        Ok(Reply::info(
            "Game started! Move the hunter with w/a/s/d.",
        ))
    }

    // ---- command surface: play ----

    /// Move the hunter one step, then run the monster pass and the
    /// round-advance check.
    ///
    /// # Errors
    ///
    /// [`CommandError::WrongPhase`] outside play. An illegal target
    /// (obstacle or fence) reports [`CommandError::IllegalMove`] but still
    /// consumes the turn: the monsters move before the error returns.
    pub fn move_hunter(&mut self, direction: Direction) -> CommandResult<Reply> {
        self.require_phase(Phase::Play)?;
        // Play phase implies a live hunter.
        let Some(from) = self.registry.hunter() else {
            return Err(CommandError::WrongPhase {
                expected: Phase::Play,
                actual: self.phase,
            });
        };

        let (dx, dy) = direction.delta();
        let target = from.offset(dx, dy);
        let legal = target.is_some_and(|t| rules::is_legal(&self.grid, t, Role::Hunter));
        let Some(target) = target.filter(|_| legal) else {
            // An illegal attempt consumes the hunter's turn anyway.
            let _ = self.computer_turn();
            return Err(CommandError::IllegalMove);
        };

        let mut collected = None;
        match self.grid.get(target) {
            Some(Cell::Treasure(value)) => {
                self.hunter_score += u32::from(value);
                self.treasures_remaining -= 1;
                collected = Some(value);
            }
            Some(Cell::Monster) => {
                // Walking onto a monster is legal, and fatal.
                self.grid.set(from, Cell::Empty);
                self.registry.remove_hunter();
                let message = self.finish();
                return Ok(Reply::success(message));
            }
            _ => {}
        }

        self.grid.set(from, Cell::Empty);
        self.grid.set(target, Cell::Hunter);
        self.registry.move_hunter(target);

        if let Some(ending) = self.computer_turn() {
            return Ok(Reply::success(ending));
        }
        Ok(match collected {
            Some(value) => Reply::success(format!("Collected a treasure worth {value}.")),
            None => Reply::info(format!("Hunter moved {direction}.")),
        })
    }

    /// Finish the game early, scoring it as it stands.
    ///
    /// # Errors
    ///
    /// [`CommandError::WrongPhase`] outside play.
    pub fn end_game(&mut self) -> CommandResult<Reply> {
        self.require_phase(Phase::Play)?;
        let message = self.finish();
        Ok(Reply::success(message))
    }

    /// Reset everything to a fresh setup stage with the same grid size.
    ///
    /// Always accepted, in any phase.
    pub fn restart(&mut self) -> Reply {
        self.grid.clear();
        self.registry = Registry::new();
        self.phase = Phase::Setup;
        self.round = 0;
        self.treasures_remaining = 0;
        self.hunter_score = 0;
        self.monster_score = 0;
        self.selection = None;
        self.outcome = None;
        Reply::info("New game. Select a cell and place objects with h, m, o, or 1-9.")
    }

    /// Direct grid access for corrupting state in invariant tests.
    #[cfg(test)]
    pub(crate) fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    // ---- internals ----

    fn require_phase(&self, expected: Phase) -> CommandResult<()> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(CommandError::WrongPhase {
                expected,
                actual: self.phase,
            })
        }
    }

    /// Round-advance check: bump the round counter, then end the game on
    /// stalemate or when every treasure has been collected.
    ///
    /// Returns the ending message if the game finished here.
    fn advance_round(&mut self) -> Option<String> {
        self.round += 1;

        let hunter_mobile = self
            .registry
            .hunter()
            .is_some_and(|hunter| rules::hunter_can_move(&self.grid, hunter));
        if !hunter_mobile {
            let any_monster_mobile = self
                .registry
                .monsters()
                .iter()
                .any(|&monster| rules::monster_can_move(&self.grid, monster));
            if !any_monster_mobile {
                let message = self.finish();
                return Some(format!(
                    "Neither the hunter nor the monsters can move. {message}"
                ));
            }
        }

        if self.treasures_remaining == 0 {
            let message = self.finish();
            return Some(format!("All treasures have been collected! {message}"));
        }

        None
    }

    /// The computer's half of the turn: every monster moves once, in
    /// registry order, each seeing the board as left by its predecessors.
    /// Ends with the round-advance check.
    fn computer_turn(&mut self) -> Option<String> {
        if self.phase != Phase::Play {
            return None;
        }

        for index in 0..self.registry.monsters().len() {
            if let Some(ending) = self.resolve_monster(index) {
                // A capture mid-pass stops the remaining monsters.
                return Some(ending);
            }
            if self.phase != Phase::Play {
                return None;
            }
        }

        self.advance_round()
    }

    fn resolve_monster(&mut self, index: usize) -> Option<String> {
        let hunter = self.registry.hunter()?;
        let from = self.registry.monsters()[index];

        match policy::choose_move(&self.grid, from, hunter) {
            Decision::Stay => None,
            Decision::Capture(target) | Decision::Move(target) => {
                self.execute_monster_move(index, target)
            }
        }
    }

    /// Apply a chosen monster move, re-validating the destination contents
    /// at execution time.
    fn execute_monster_move(&mut self, index: usize, target: Coord) -> Option<String> {
        let from = self.registry.monsters()[index];

        let destination = self.grid.get(target);
        let captured = destination == Some(Cell::Hunter);
        if let Some(Cell::Treasure(value)) = destination {
            self.monster_score += u32::from(value);
            self.treasures_remaining -= 1;
        }
        if captured {
            self.registry.remove_hunter();
        }

        self.grid.set(from, Cell::Empty);
        self.grid.set(target, Cell::Monster);
        self.registry.move_monster(index, target);

        if captured {
            let message = self.finish();
            return Some(format!(
                "The treasure hunter has been caught by a monster! {message}"
            ));
        }
        None
    }

    /// Transition to the end phase and compute the outcome exactly once,
    /// from the state as it stands at this instant.
    fn finish(&mut self) -> &'static str {
        let (outcome, message) = if self.registry.hunter().is_none() {
            (Outcome::MonstersWin, "Computer wins! The hunter has been caught.")
        } else if self.hunter_score > self.monster_score {
            (Outcome::HunterWins, "You win! You collected more treasure value.")
        } else if self.monster_score > self.hunter_score {
            (
                Outcome::MonstersWin,
                "Computer wins! Monsters collected more treasure value.",
            )
        } else {
            (Outcome::Draw, "It's a draw! Both collected equal treasure value.")
        };

        self.phase = Phase::End;
        self.outcome = Some(outcome);
        message
    }
}

impl Default for Engine {
    fn default() -> Self {
        match Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT) {
            Some(engine) => engine,
            None => unreachable!("default dimensions are non-zero"),
        }
    }
}
