//! Combat reasoning for ARMADA.
//!
//! Pure functions over plain data, with no dependency on the pipeline or on
//! live snapshot references. Implements engagement clustering, the
//! stationary-clash balance heuristic, per-unit move quality, and the
//! arena-based adversarial event search.

pub mod cluster;
pub mod search;

pub use armada_core as core;
pub use cluster::{combat_balance, move_quality, CombatCluster, Combatant};
pub use search::choose_event;
