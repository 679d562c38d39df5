//! Move output model: what the engine hands to the host serializer.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::entity::EntityId;

/// One unit's action for the turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Move {
    /// Hold position (also the fail-safe when no decision was reached).
    Noop,
    /// Directional displacement. `priority` orders conflict resolution;
    /// it never reaches the wire.
    Thrust {
        angle_deg: i32,
        thrust: i32,
        priority: i32,
    },
    /// Begin docking at a planet.
    Dock { planet_id: EntityId },
    /// Begin undocking from the current planet.
    Undock,
}

impl Move {
    pub fn is_thrust(&self) -> bool {
        matches!(self, Move::Thrust { .. })
    }

    /// Priority of a thrust move; non-thrust moves take no part in
    /// conflict resolution.
    pub fn priority(&self) -> Option<i32> {
        match self {
            Move::Thrust { priority, .. } => Some(*priority),
            _ => None,
        }
    }

    /// The same move with thrust forced to zero (conflict cancellation).
    pub fn zeroed(&self) -> Move {
        match *self {
            Move::Thrust {
                angle_deg,
                priority,
                ..
            } => Move::Thrust {
                angle_deg,
                thrust: 0,
                priority,
            },
            other => other,
        }
    }
}

/// A proposed move still subject to conflict resolution. List order is
/// the deterministic resolution order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProposedMove {
    pub ship_id: EntityId,
    pub action: Move,
}

/// The finalized turn output: exactly one move per controlled unit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MoveSet {
    moves: BTreeMap<EntityId, Move>,
}

impl MoveSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, ship_id: EntityId, action: Move) {
        self.moves.insert(ship_id, action);
    }

    pub fn get(&self, ship_id: EntityId) -> Option<&Move> {
        self.moves.get(&ship_id)
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&EntityId, &Move)> {
        self.moves.iter()
    }

    /// Fail-safe fill: every listed unit without a finalized move gets a
    /// `Noop` so the emission never omits a unit.
    pub fn fill_missing(&mut self, ship_ids: impl IntoIterator<Item = EntityId>) {
        for id in ship_ids {
            self.moves.entry(id).or_insert(Move::Noop);
        }
    }
}

impl FromIterator<ProposedMove> for MoveSet {
    fn from_iter<I: IntoIterator<Item = ProposedMove>>(iter: I) -> Self {
        let mut set = MoveSet::new();
        for proposed in iter {
            set.insert(proposed.ship_id, proposed.action);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeroed_keeps_angle_and_priority() {
        let thrust = Move::Thrust {
            angle_deg: 137,
            thrust: 7,
            priority: 5,
        };
        assert_eq!(
            thrust.zeroed(),
            Move::Thrust {
                angle_deg: 137,
                thrust: 0,
                priority: 5,
            }
        );
        assert_eq!(Move::Undock.zeroed(), Move::Undock);
    }

    #[test]
    fn test_fill_missing_preserves_decisions() {
        let mut set = MoveSet::new();
        set.insert(3, Move::Dock { planet_id: 1 });
        set.fill_missing([1, 2, 3]);
        assert_eq!(set.len(), 3);
        assert_eq!(set.get(3), Some(&Move::Dock { planet_id: 1 }));
        assert_eq!(set.get(1), Some(&Move::Noop));
        assert_eq!(set.get(2), Some(&Move::Noop));
    }
}
