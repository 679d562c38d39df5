//! Enumeration types used throughout the engine.

use serde::{Deserialize, Serialize};

/// Docking lifecycle of a ship, as reported by the host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DockingStatus {
    /// Free-flying, able to thrust and fight.
    #[default]
    Undocked,
    /// In transit toward a docking spot.
    Docking,
    /// Attached to a planet, producing ships, unable to fight.
    Docked,
    /// Detaching from a planet.
    Undocking,
}

/// The kind of goal an objective represents.
///
/// Only `Colonize` is generated by the default priority formula; the
/// remaining kinds are modeled (and `CrashInto` is navigable) but unused
/// by the generator. See DESIGN.md for the rationale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderKind {
    /// Dock free spots of an unowned or self-owned planet.
    Colonize,
    /// Engage an enemy unit.
    Attack,
    /// Protect a friendly docked unit.
    Defend,
    /// Ram a full enemy planet.
    CrashInto,
    /// Rally with nearby allied units.
    Group,
    /// Early all-in on the nearest opponent.
    Rush,
    /// Counter a detected opponent rush.
    AntiRush,
    /// Hunt a specific high-value enemy ship.
    Assassination,
    /// Bait enemies away from an objective.
    Lure,
    /// Shore up an existing fleet.
    Reinforce,
}

/// How the navigation engine should approach a target; selects the
/// safety margin and angular correction step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavKind {
    /// Generic approach: stop at combined radii.
    Approach,
    /// Dock approach: stop inside dock range.
    DockApproach,
    /// Attack approach: stop inside weapon range, coarser corrections.
    Attack,
    /// Ramming run: no margin at all.
    Crash,
}

/// Discrete action considered by the combat look-ahead search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CombatEvent {
    /// Close with an undocked enemy unit.
    Attack,
    /// Close with a docked (defenseless) enemy unit.
    AttackDocked,
    /// Screen a threatened friendly docked unit.
    Defend,
    /// Rally with allied units before committing.
    Group,
    /// Disengage from the cluster.
    Retreat,
}
