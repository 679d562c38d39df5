//! Error taxonomy.
//!
//! Only contract violations and empty-population queries are errors.
//! Recoverable conditions (navigation exhaustion, assignment shortfall,
//! geometry degeneracy) are expressed as `Option`/empty results and
//! never surface here.

use thiserror::Error;

use crate::enums::OrderKind;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TacticsError {
    /// A distance query was issued over an empty unit population.
    #[error("distance query over an empty population")]
    EmptyPopulation,

    /// An order kind with no navigation handling reached the engine:
    /// a programming-contract violation, not a runtime condition.
    #[error("no handler for order kind {0:?}")]
    UnsupportedOrder(OrderKind),
}
