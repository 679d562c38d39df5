//! Fleet assignment: greedy single-pass binding of units to objectives.

use armada_core::entity::{EntityId, Ship};
use armada_core::orders::{Fleet, Objective};

/// Bind pooled units to ranked objectives.
///
/// Iterates objectives in rank order, popping up to `required_ships`
/// units from the front of the pool for each; stops early when the pool
/// empties. A shortfall leaves an objective's remaining slots unfilled
/// (non-fatal). Units left over when objectives run out are returned
/// unassigned. No unit ever lands in two fleets.
pub fn assign(objectives: &[Objective], pool: &[&Ship]) -> (Vec<Fleet>, Vec<EntityId>) {
    let mut fleets = Vec::new();
    let mut next = 0usize;

    for objective in objectives {
        if next >= pool.len() {
            break;
        }
        let take = objective.required_ships.min(pool.len() - next);
        if take == 0 {
            continue;
        }
        let ships: Vec<EntityId> = pool[next..next + take].iter().map(|s| s.id).collect();
        next += take;
        fleets.push(Fleet {
            ships,
            objective: objective.clone(),
        });
    }

    let unassigned = pool[next..].iter().map(|s| s.id).collect();
    (fleets, unassigned)
}
