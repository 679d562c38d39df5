//! World snapshot: the complete parsed game state received each turn.
//!
//! Supplied by an external protocol parser; the engine never parses raw
//! text and never mutates a snapshot. Ships and planets are keyed by id
//! in ordered maps so every enumeration is deterministic.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::entity::{EntityId, Planet, PlayerId, Ship};
use crate::enums::DockingStatus;

/// One player and their ships.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub ships: BTreeMap<EntityId, Ship>,
}

/// Fully parsed state of the game at the start of a turn.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorldState {
    pub turn: u32,
    pub width: f64,
    pub height: f64,
    pub players: Vec<Player>,
    pub planets: BTreeMap<EntityId, Planet>,
}

impl WorldState {
    /// Ships controlled by `player`, in id order.
    pub fn ships_of(&self, player: PlayerId) -> Vec<&Ship> {
        self.players
            .iter()
            .filter(|p| p.id == player)
            .flat_map(|p| p.ships.values())
            .collect()
    }

    /// All ships not controlled by `player`, in (player, id) order.
    pub fn enemy_ships_of(&self, player: PlayerId) -> Vec<&Ship> {
        self.players
            .iter()
            .filter(|p| p.id != player)
            .flat_map(|p| p.ships.values())
            .collect()
    }

    /// Every ship on the map, in (player, id) order.
    pub fn all_ships(&self) -> Vec<&Ship> {
        self.players.iter().flat_map(|p| p.ships.values()).collect()
    }

    pub fn ship(&self, id: EntityId) -> Option<&Ship> {
        self.players.iter().find_map(|p| p.ships.get(&id))
    }

    pub fn planet(&self, id: EntityId) -> Option<&Planet> {
        self.planets.get(&id)
    }

    /// Undocked ships controlled by `player`, the ones that can receive
    /// thrust or dock orders this turn.
    pub fn mobile_ships_of(&self, player: PlayerId) -> Vec<&Ship> {
        self.ships_of(player)
            .into_iter()
            .filter(|s| s.docking_status == DockingStatus::Undocked)
            .collect()
    }
}
