//! Per-turn tactical pipeline for ARMADA.
//!
//! Turns one immutable `WorldState` snapshot into a conflict-free,
//! obstacle-aware move set: distance indexing, objective generation,
//! fleet assignment, obstacle-avoiding navigation, combat overrides for
//! clustered units, and pairwise move-conflict resolution.

pub mod assignment;
pub mod collision;
pub mod distance;
pub mod engine;
pub mod navigation;
pub mod objectives;

pub use armada_core as core;
pub use engine::TurnEngine;
