//! Entity registry: hunter and monster positions.

use crate::game::Coord;

/// Read-optimized cache of entity positions.
///
/// The grid remains the single source of truth for cell contents; the
/// registry is updated in lockstep with every grid mutation that moves,
/// creates, or removes the hunter or a monster. Any divergence between the
/// two is an invariant violation.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    /// Hunter position, `None` when not yet placed or after capture.
    hunter: Option<Coord>,
    /// Set once the hunter has been placed; stays true even after capture,
    /// since capture is a one-way removal rather than an un-placement.
    hunter_placed: bool,
    /// Monster positions in placement order. Order is significant: it is
    /// the move-resolution order, and an index is a monster's identity.
    monsters: Vec<Coord>,
}

impl Registry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current hunter position, if the hunter is alive and placed.
    #[must_use]
    pub const fn hunter(&self) -> Option<Coord> {
        self.hunter
    }

    /// Whether a hunter has ever been placed in this game instance.
    #[must_use]
    pub const fn hunter_placed(&self) -> bool {
        self.hunter_placed
    }

    /// Place the hunter. Only meaningful once per game instance; the
    /// uniqueness rule is enforced by the setup logic.
    pub fn place_hunter(&mut self, coord: Coord) {
        self.hunter = Some(coord);
        self.hunter_placed = true;
    }

    /// Move the hunter to a new position.
    pub fn move_hunter(&mut self, coord: Coord) {
        self.hunter = Some(coord);
    }

    /// Remove the hunter permanently (capture).
    pub fn remove_hunter(&mut self) {
        self.hunter = None;
    }

    /// Monster positions in placement order.
    #[must_use]
    pub fn monsters(&self) -> &[Coord] {
        &self.monsters
    }

    /// Append a monster to the end of the collection.
    pub fn add_monster(&mut self, coord: Coord) {
        self.monsters.push(coord);
    }

    /// Update a monster's position in place, preserving its identity.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range; callers iterate the registry's
    /// own indices, so this indicates a bug.
    pub fn move_monster(&mut self, index: usize, coord: Coord) {
        self.monsters[index] = coord;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_registry() {
        let registry = Registry::new();
        assert_eq!(registry.hunter(), None);
        assert!(!registry.hunter_placed());
        assert!(registry.monsters().is_empty());
    }

    #[test]
    fn test_hunter_lifecycle() {
        let mut registry = Registry::new();
        registry.place_hunter(Coord::new(2, 3));
        assert_eq!(registry.hunter(), Some(Coord::new(2, 3)));
        assert!(registry.hunter_placed());

        registry.move_hunter(Coord::new(2, 4));
        assert_eq!(registry.hunter(), Some(Coord::new(2, 4)));

        registry.remove_hunter();
        assert_eq!(registry.hunter(), None);
        // Placement is permanent even after capture.
        assert!(registry.hunter_placed());
    }

    #[test]
    fn test_monster_order_preserved() {
        let mut registry = Registry::new();
        registry.add_monster(Coord::new(0, 0));
        registry.add_monster(Coord::new(5, 5));
        registry.add_monster(Coord::new(9, 9));
        assert_eq!(
            registry.monsters(),
            &[Coord::new(0, 0), Coord::new(5, 5), Coord::new(9, 9)]
        );

        registry.move_monster(1, Coord::new(5, 6));
        assert_eq!(registry.monsters()[1], Coord::new(5, 6));
        assert_eq!(registry.monsters()[0], Coord::new(0, 0));
        assert_eq!(registry.monsters()[2], Coord::new(9, 9));
    }
}
