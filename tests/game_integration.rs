//! Multi-round integration tests driven through the public command surface.
//!
//! These tests play complete games and verify end-of-game determination,
//! score accounting, and engine consistency after every command.
//!
//! Run with: cargo test --release game_integration

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use gridhunt::game::invariants::check_invariants;
use gridhunt::game::{Direction, Engine, Outcome, Phase, PlaceKind};

/// Select a cell and place an object on it, asserting consistency.
fn place(engine: &mut Engine, x: u16, y: u16, kind: PlaceKind) {
    engine.select_cell(x, y).unwrap();
    engine.place_object(kind).unwrap();
    assert!(check_invariants(engine).is_empty());
}

/// Move the hunter, tolerating an illegal move, asserting consistency.
fn step(engine: &mut Engine, direction: Direction) {
    let _ = engine.move_hunter(direction);
    assert!(check_invariants(engine).is_empty());
}

#[test]
fn test_hunter_sweeps_the_board_and_wins() {
    let mut engine = Engine::default();
    place(&mut engine, 0, 0, PlaceKind::Hunter);
    place(&mut engine, 0, 1, PlaceKind::Treasure(3));
    place(&mut engine, 0, 2, PlaceKind::Treasure(2));
    place(&mut engine, 1, 2, PlaceKind::Treasure(4));
    engine.end_setup().unwrap();

    step(&mut engine, Direction::Down);
    assert_eq!(engine.hunter_score(), 3);
    step(&mut engine, Direction::Down);
    assert_eq!(engine.hunter_score(), 5);
    assert_eq!(engine.phase(), Phase::Play);

    // Collecting the last treasure ends the game at the round check.
    let reply = engine.move_hunter(Direction::Right).unwrap();
    assert_eq!(engine.phase(), Phase::End);
    assert_eq!(engine.outcome(), Some(Outcome::HunterWins));
    assert_eq!(engine.hunter_score(), 9);
    assert_eq!(engine.treasures_remaining(), 0);
    assert!(reply.message.contains("All treasures"));
    assert!(check_invariants(&engine).is_empty());
}

#[test]
fn test_pursuing_monster_eventually_captures() {
    let mut engine = Engine::default();
    place(&mut engine, 0, 0, PlaceKind::Hunter);
    place(&mut engine, 6, 6, PlaceKind::Monster);
    // An out-of-the-way treasure keeps the game from ending early; the
    // monster prefers the capture line long before reaching it.
    place(&mut engine, 9, 0, PlaceKind::Treasure(1));
    engine.end_setup().unwrap();

    // The hunter dithers in the corner while the monster closes in.
    let mut rounds = 0;
    while engine.phase() == Phase::Play {
        let direction = if engine.hunter() == Some(gridhunt::Coord::new(0, 0)) {
            Direction::Right
        } else {
            Direction::Left
        };
        step(&mut engine, direction);
        rounds += 1;
        assert!(rounds < 30, "monster never caught the dithering hunter");
    }

    assert_eq!(engine.outcome(), Some(Outcome::MonstersWin));
    assert_eq!(engine.hunter(), None);
}

#[test]
fn test_treasure_race_decides_by_value() {
    let mut engine = Engine::default();
    // Hunter reaches a value-2 treasure in one step; the monster reaches a
    // value-7 treasure in one step. Nothing remains, so the round check
    // ends the game and the monsters win on value.
    place(&mut engine, 0, 0, PlaceKind::Hunter);
    place(&mut engine, 0, 1, PlaceKind::Treasure(2));
    place(&mut engine, 9, 9, PlaceKind::Monster);
    place(&mut engine, 8, 8, PlaceKind::Treasure(7));
    engine.end_setup().unwrap();

    let reply = engine.move_hunter(Direction::Down).unwrap();
    assert_eq!(engine.phase(), Phase::End);
    assert_eq!(engine.outcome(), Some(Outcome::MonstersWin));
    assert_eq!(engine.hunter_score(), 2);
    assert_eq!(engine.monster_score(), 7);
    assert!(reply.message.contains("Computer wins"));
}

#[test]
fn test_equal_scores_end_in_a_draw() {
    let mut engine = Engine::default();
    place(&mut engine, 0, 0, PlaceKind::Hunter);
    place(&mut engine, 0, 1, PlaceKind::Treasure(5));
    place(&mut engine, 9, 9, PlaceKind::Monster);
    place(&mut engine, 8, 8, PlaceKind::Treasure(5));
    engine.end_setup().unwrap();

    engine.move_hunter(Direction::Down).unwrap();
    assert_eq!(engine.outcome(), Some(Outcome::Draw));
}

#[test]
fn test_walled_in_hunter_loses_by_forfeit() {
    let mut engine = Engine::default();
    // The hunter spends every turn bumping the fence while a monster
    // clears the board.
    place(&mut engine, 0, 0, PlaceKind::Hunter);
    place(&mut engine, 9, 9, PlaceKind::Monster);
    place(&mut engine, 9, 8, PlaceKind::Treasure(2));
    place(&mut engine, 8, 8, PlaceKind::Treasure(3));
    engine.end_setup().unwrap();

    let mut rounds = 0;
    while engine.phase() == Phase::Play {
        assert!(engine.move_hunter(Direction::Up).is_err());
        assert!(check_invariants(&engine).is_empty());
        rounds += 1;
        assert!(rounds < 10, "monster never finished collecting");
    }

    assert_eq!(engine.outcome(), Some(Outcome::MonstersWin));
    assert_eq!(engine.monster_score(), 5);
    assert_eq!(engine.hunter_score(), 0);
    // The hunter survived; it lost on value alone.
    assert!(engine.hunter().is_some());
}

#[test]
fn test_obstacles_reroute_the_monster() {
    let mut engine = Engine::default();
    place(&mut engine, 0, 5, PlaceKind::Hunter);
    place(&mut engine, 5, 5, PlaceKind::Monster);
    // Wall directly on the monster's straight line to the hunter.
    place(&mut engine, 4, 5, PlaceKind::Obstacle);
    place(&mut engine, 9, 0, PlaceKind::Treasure(1));
    engine.end_setup().unwrap();

    step(&mut engine, Direction::Down);
    // The monster stepped around the wall, not through it.
    let monster = engine.monsters()[0];
    assert_ne!(monster, gridhunt::Coord::new(4, 5));
    assert_ne!(monster, gridhunt::Coord::new(5, 5));
    assert!(engine.grid().get(gridhunt::Coord::new(4, 5)) == Some(gridhunt::Cell::Obstacle));
}

#[test]
fn test_full_session_with_restart() {
    let mut engine = Engine::default();
    place(&mut engine, 5, 5, PlaceKind::Hunter);
    place(&mut engine, 5, 6, PlaceKind::Treasure(4));
    engine.end_setup().unwrap();
    engine.move_hunter(Direction::Down).unwrap();
    assert_eq!(engine.phase(), Phase::End);

    engine.restart();
    assert!(check_invariants(&engine).is_empty());

    // A second, different game on the same engine.
    place(&mut engine, 0, 0, PlaceKind::Hunter);
    let reply = engine.end_setup().unwrap();
    assert_eq!(engine.outcome(), Some(Outcome::Draw));
    assert!(reply.message.contains("No treasures"));
}
