//! The ship/planet entity model.
//!
//! Entities are rebuilt fresh each turn from the host snapshot and never
//! mutated in place; navigation works on projected copies of positions.
//! `Unit` is the closed sum over the two entity kinds, used wherever the
//! pipeline needs "any positioned thing" (targets, obstacles).

use serde::{Deserialize, Serialize};

use crate::constants::{DOCK_RADIUS, WEAPON_DAMAGE};
use crate::enums::DockingStatus;
use crate::types::Position;

/// Unique id of a ship or planet within one snapshot.
pub type EntityId = i32;

/// Id of a player as assigned by the host.
pub type PlayerId = i32;

/// A controlled or enemy vessel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ship {
    pub id: EntityId,
    pub owner: PlayerId,
    pub position: Position,
    pub health: f64,
    pub radius: f64,
    pub docking_status: DockingStatus,
    /// Planet this ship is docked to (or docking toward), if any.
    pub docked_planet: Option<EntityId>,
    /// Turns remaining in a Docking/Undocking transition.
    pub docking_progress: i32,
    /// Turns until the weapon may fire again.
    pub weapon_cooldown: i32,
}

impl Ship {
    pub fn is_undocked(&self) -> bool {
        self.docking_status == DockingStatus::Undocked
    }

    /// Per-turn damage output. Only undocked ships fight.
    pub fn attack_power(&self) -> f64 {
        if self.is_undocked() {
            WEAPON_DAMAGE
        } else {
            0.0
        }
    }

    /// Whether this ship is close enough to begin docking at `planet`.
    pub fn in_dock_range(&self, planet: &Planet) -> bool {
        self.position.distance_to(&planet.position) <= self.radius + planet.radius + DOCK_RADIUS
    }

    pub fn distance_to(&self, other: &Position) -> f64 {
        self.position.distance_to(other)
    }
}

/// A stationary objective.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Planet {
    pub id: EntityId,
    /// `None` when unowned.
    pub owner: Option<PlayerId>,
    pub position: Position,
    pub health: f64,
    pub radius: f64,
    /// Total docking capacity.
    pub docking_spots: u32,
    /// Ids of ships currently docked (or docking).
    pub docked_ships: Vec<EntityId>,
}

impl Planet {
    pub fn is_owned(&self) -> bool {
        self.owner.is_some()
    }

    pub fn owned_by(&self, player: PlayerId) -> bool {
        self.owner == Some(player)
    }

    pub fn is_full(&self) -> bool {
        self.docked_ships.len() as u32 >= self.docking_spots
    }

    pub fn free_docking_spots(&self) -> u32 {
        self.docking_spots
            .saturating_sub(self.docked_ships.len() as u32)
    }
}

/// A borrowed view over either entity kind.
#[derive(Debug, Clone, Copy)]
pub enum Unit<'a> {
    Ship(&'a Ship),
    Planet(&'a Planet),
}

impl Unit<'_> {
    pub fn id(&self) -> EntityId {
        match self {
            Unit::Ship(s) => s.id,
            Unit::Planet(p) => p.id,
        }
    }

    pub fn owner(&self) -> Option<PlayerId> {
        match self {
            Unit::Ship(s) => Some(s.owner),
            Unit::Planet(p) => p.owner,
        }
    }

    pub fn position(&self) -> Position {
        match self {
            Unit::Ship(s) => s.position,
            Unit::Planet(p) => p.position,
        }
    }

    pub fn radius(&self) -> f64 {
        match self {
            Unit::Ship(s) => s.radius,
            Unit::Planet(p) => p.radius,
        }
    }

    pub fn health(&self) -> f64 {
        match self {
            Unit::Ship(s) => s.health,
            Unit::Planet(p) => p.health,
        }
    }
}
