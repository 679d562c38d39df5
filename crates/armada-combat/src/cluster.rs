//! Engagement clustering and the combat balance heuristic.

use serde::{Deserialize, Serialize};

use armada_core::entity::{EntityId, Ship};
use armada_core::types::Position;

/// Plain-data view of one fighter in a cluster. Snapshot references are
/// flattened here so the heuristics stay free of lifetime plumbing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Combatant {
    pub id: EntityId,
    pub position: Position,
    pub health: f64,
    pub attack_power: f64,
    pub docked: bool,
}

impl From<&Ship> for Combatant {
    fn from(ship: &Ship) -> Self {
        Combatant {
            id: ship.id,
            position: ship.position,
            health: ship.health,
            attack_power: ship.attack_power(),
            docked: !ship.is_undocked(),
        }
    }
}

/// The two opposing unit sets within an interaction radius. Created per
/// turn, scored, and discarded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatCluster {
    pub id: u32,
    pub allies: Vec<Combatant>,
    pub enemies: Vec<Combatant>,
}

impl CombatCluster {
    /// Gather the cluster around `subject`: enemy units within `radius`
    /// of it, and if any exist, allied units (subject included) within
    /// the same radius. Returns `None` when no enemy is near.
    pub fn gather(
        id: u32,
        subject: &Ship,
        allies: &[&Ship],
        enemies: &[&Ship],
        radius: f64,
    ) -> Option<CombatCluster> {
        let near_enemies: Vec<Combatant> = enemies
            .iter()
            .filter(|e| subject.distance_to(&e.position) <= radius)
            .map(|e| Combatant::from(*e))
            .collect();
        if near_enemies.is_empty() {
            return None;
        }

        let mut near_allies = vec![Combatant::from(subject)];
        near_allies.extend(
            allies
                .iter()
                .filter(|a| a.id != subject.id && subject.distance_to(&a.position) <= radius)
                .map(|a| Combatant::from(*a)),
        );

        Some(CombatCluster {
            id,
            allies: near_allies,
            enemies: near_enemies,
        })
    }

    pub fn member_ids(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.allies.iter().map(|c| c.id)
    }

    pub fn balance(&self) -> f64 {
        combat_balance(&self.allies, &self.enemies)
    }
}

/// Turns until a unit with `health` dies under `incoming` damage per
/// turn. Unthreatened units survive forever.
fn survival_turns(health: f64, incoming: f64) -> f64 {
    if incoming <= 0.0 {
        f64::INFINITY
    } else {
        health / incoming
    }
}

/// Estimate the relative outcome of a stationary clash.
///
/// Positive favors the allied side. The two-unit case compares raw
/// remaining-turns-to-destruction and returns ±1, ties scored
/// pessimistically. The general case shares each side's total attack
/// evenly across the opposing units, counts the units that die before
/// the shorter-lived side is gone, and subtracts one extra point for
/// mutual destruction. An empty side means there is no clash to score.
pub fn combat_balance(allies: &[Combatant], enemies: &[Combatant]) -> f64 {
    if allies.is_empty() || enemies.is_empty() {
        return 0.0;
    }

    if allies.len() == 1 && enemies.len() == 1 {
        let ally_turns = survival_turns(allies[0].health, enemies[0].attack_power);
        let enemy_turns = survival_turns(enemies[0].health, allies[0].attack_power);
        return if ally_turns > enemy_turns { 1.0 } else { -1.0 };
    }

    let ally_attack: f64 = allies.iter().map(|c| c.attack_power).sum();
    let enemy_attack: f64 = enemies.iter().map(|c| c.attack_power).sum();

    // Each unit absorbs an even share of the opposing side's output.
    let ally_share = enemy_attack / allies.len() as f64;
    let enemy_share = ally_attack / enemies.len() as f64;

    let ally_turns: Vec<f64> = allies
        .iter()
        .map(|c| survival_turns(c.health, ally_share))
        .collect();
    let enemy_turns: Vec<f64> = enemies
        .iter()
        .map(|c| survival_turns(c.health, enemy_share))
        .collect();

    let ally_survival = ally_turns.iter().fold(f64::NEG_INFINITY, |a, &b| a.max(b));
    let enemy_survival = enemy_turns.iter().fold(f64::NEG_INFINITY, |a, &b| a.max(b));
    let shorter = ally_survival.min(enemy_survival);

    let ally_losses = ally_turns.iter().filter(|&&t| t <= shorter).count() as f64;
    let enemy_losses = enemy_turns.iter().filter(|&&t| t <= shorter).count() as f64;

    let mutual = if ally_survival <= shorter && enemy_survival <= shorter {
        1.0
    } else {
        0.0
    };

    enemy_losses - ally_losses - mutual
}

/// Score a candidate displacement of `subject` toward `projected`.
///
/// Out of skirmish range of `target`, any move is fine (score 1, no
/// search). In range, compare the balance of the cluster re-gathered
/// around the current position against the cluster re-gathered around
/// the projected position; the quality is the improvement.
#[allow(clippy::too_many_arguments)]
pub fn move_quality(
    subject: &Combatant,
    target: Position,
    projected: Position,
    allies: &[Combatant],
    enemies: &[Combatant],
    skirmish_range: f64,
    recluster_radius: f64,
) -> f64 {
    if subject.position.distance_to(&target) > skirmish_range {
        return 1.0;
    }

    let before = balance_around(subject, subject.position, allies, enemies, recluster_radius);
    let mut moved = *subject;
    moved.position = projected;
    let after = balance_around(&moved, projected, allies, enemies, recluster_radius);
    after - before
}

/// Balance of the sub-cluster within `radius` of `center`, with
/// `subject` always on the allied side.
fn balance_around(
    subject: &Combatant,
    center: Position,
    allies: &[Combatant],
    enemies: &[Combatant],
    radius: f64,
) -> f64 {
    let mut near_allies = vec![*subject];
    near_allies.extend(
        allies
            .iter()
            .filter(|a| a.id != subject.id && center.distance_to(&a.position) <= radius)
            .copied(),
    );
    let near_enemies: Vec<Combatant> = enemies
        .iter()
        .filter(|e| center.distance_to(&e.position) <= radius)
        .copied()
        .collect();

    combat_balance(&near_allies, &near_enemies)
}
