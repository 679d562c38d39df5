//! Core types and definitions for the ARMADA tactical engine.
//!
//! This crate defines the vocabulary shared across all other crates:
//! geometric types, the ship/planet entity model, orders and moves,
//! the per-turn world snapshot, configuration, and the error taxonomy.
//! It has no dependency on the decision pipeline itself.

pub mod config;
pub mod constants;
pub mod entity;
pub mod enums;
pub mod error;
pub mod moves;
pub mod orders;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
