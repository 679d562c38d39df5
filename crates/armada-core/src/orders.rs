//! Objectives and fleets: the per-turn goal model.
//!
//! Both are created fresh each turn by the pipeline and discarded at turn
//! end; nothing here persists across snapshots.

use serde::{Deserialize, Serialize};

use crate::entity::EntityId;
use crate::enums::OrderKind;

/// A prioritized goal generated for one turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Objective {
    /// The targeted entity (a planet for `Colonize`).
    pub target: EntityId,
    /// Higher is more urgent. Ties keep generation order.
    pub priority: f64,
    /// How many units the objective wants bound to it.
    pub required_ships: usize,
    pub kind: OrderKind,
}

/// Controlled units bound to one objective for the turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fleet {
    /// Member ship ids, in assignment order.
    pub ships: Vec<EntityId>,
    pub objective: Objective,
}

impl Fleet {
    pub fn contains(&self, ship_id: EntityId) -> bool {
        self.ships.contains(&ship_id)
    }
}
