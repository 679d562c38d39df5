//! Adversarial look-ahead over discrete combat events.
//!
//! The tree is an arena of nodes addressed by index; each node stores
//! its parent index and ply depth, and terminal scoring walks parent
//! links instead of live back-references. Plies alternate between the
//! allied side (maximizing) and the enemy side (minimizing), solved
//! with a plain minimax backup.

use armada_core::constants::{
    EVENT_WEIGHT_ATTACK, EVENT_WEIGHT_ATTACK_DOCKED, EVENT_WEIGHT_DEFEND, EVENT_WEIGHT_GROUP,
};
use armada_core::enums::CombatEvent;

use crate::cluster::{CombatCluster, Combatant};

/// One step on a root-to-terminal path: the event taken and whether the
/// allied side took it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathStep {
    pub event: CombatEvent,
    pub by_self: bool,
}

#[derive(Debug, Clone, Copy)]
struct Node {
    parent: Option<usize>,
    /// `None` only at the root.
    event: Option<CombatEvent>,
    depth: u8,
}

/// Weighted tally of the events on a path. Self events add, enemy
/// events subtract, and accumulation stops at the first Retreat.
pub fn score_path(path: &[PathStep]) -> i32 {
    let mut score = 0;
    for step in path {
        if step.event == CombatEvent::Retreat {
            break;
        }
        let weight = match step.event {
            CombatEvent::Group => EVENT_WEIGHT_GROUP,
            CombatEvent::AttackDocked => EVENT_WEIGHT_ATTACK_DOCKED,
            CombatEvent::Defend => EVENT_WEIGHT_DEFEND,
            CombatEvent::Attack => EVENT_WEIGHT_ATTACK,
            CombatEvent::Retreat => 0,
        };
        score += if step.by_self { weight } else { -weight };
    }
    score
}

/// Candidate events for one side of the cluster, in the fixed tie-break
/// order Attack, AttackDocked, Defend, Group, Retreat.
fn candidate_events(own: &[Combatant], opposing: &[Combatant]) -> Vec<CombatEvent> {
    let mut events = Vec::with_capacity(5);
    if opposing.iter().any(|c| !c.docked) {
        events.push(CombatEvent::Attack);
    }
    if opposing.iter().any(|c| c.docked) {
        events.push(CombatEvent::AttackDocked);
    }
    if own.iter().any(|c| c.docked) {
        events.push(CombatEvent::Defend);
    }
    if own.len() >= 2 {
        events.push(CombatEvent::Group);
    }
    events.push(CombatEvent::Retreat);
    events
}

/// Pick the allied side's root event for `cluster` by expanding the
/// event tree to `max_depth` plies and backing the terminal path scores
/// up with minimax. Ties keep the first candidate in generation order.
/// Returns `None` for a cluster with no enemies (nothing to decide).
pub fn choose_event(cluster: &CombatCluster, max_depth: u8) -> Option<CombatEvent> {
    if cluster.enemies.is_empty() {
        return None;
    }

    let mut nodes = vec![Node {
        parent: None,
        event: None,
        depth: 0,
    }];
    let mut children: Vec<Vec<usize>> = vec![Vec::new()];

    // Breadth-first expansion. Even depths are about to move for the
    // allied side, odd depths for the enemy side.
    let mut frontier = vec![0usize];
    for depth in 0..max_depth {
        let moving_side_is_self = depth % 2 == 0;
        let events = if moving_side_is_self {
            candidate_events(&cluster.allies, &cluster.enemies)
        } else {
            candidate_events(&cluster.enemies, &cluster.allies)
        };

        let mut next_frontier = Vec::new();
        for &parent_idx in &frontier {
            for &event in &events {
                let idx = nodes.len();
                nodes.push(Node {
                    parent: Some(parent_idx),
                    event: Some(event),
                    depth: depth + 1,
                });
                children.push(Vec::new());
                children[parent_idx].push(idx);
                next_frontier.push(idx);
            }
        }
        frontier = next_frontier;
    }

    let root_children = children[0].clone();
    let best = root_children
        .into_iter()
        .map(|idx| (idx, minimax(&nodes, &children, idx)))
        // max_by on ties keeps the later element; strict comparison
        // keeps the first candidate instead.
        .reduce(|best, cand| if cand.1 > best.1 { cand } else { best })?;

    nodes[best.0].event
}

/// Minimax backup. A node at depth d has children chosen by the side
/// moving at ply d: even-depth nodes maximize, odd-depth nodes minimize.
fn minimax(nodes: &[Node], children: &[Vec<usize>], idx: usize) -> i32 {
    if children[idx].is_empty() {
        return score_path(&path_to(nodes, idx));
    }

    let child_values = children[idx].iter().map(|&c| minimax(nodes, children, c));
    if nodes[idx].depth % 2 == 0 {
        child_values.max().unwrap_or(0)
    } else {
        child_values.min().unwrap_or(0)
    }
}

/// Reconstruct the root-to-node path by walking parent indices.
fn path_to(nodes: &[Node], mut idx: usize) -> Vec<PathStep> {
    let mut path = Vec::new();
    while let Some(parent) = nodes[idx].parent {
        if let Some(event) = nodes[idx].event {
            path.push(PathStep {
                event,
                // Depth 1 nodes were produced by the allied ply.
                by_self: nodes[idx].depth % 2 == 1,
            });
        }
        idx = parent;
    }
    path.reverse();
    path
}
