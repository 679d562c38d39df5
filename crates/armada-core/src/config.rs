//! Engine configuration.

use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Tuning knobs for the tactical engine. Defaults reproduce the
/// reference behavior; every field names its effect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TacticsConfig {
    /// RNG seed for the idle-exploration behavior. Same seed + same
    /// snapshot = same move set.
    pub seed: u64,
    /// Distance within which enemy units trigger cluster formation.
    pub engagement_radius: f64,
    /// Radius used when re-clustering around a projected position for
    /// move-quality scoring.
    pub recluster_radius: f64,
    /// Beyond this distance from a target, any move is accepted without
    /// combat search.
    pub skirmish_range: f64,
    /// Caps iterative obstacle-avoidance retries.
    pub max_navigation_corrections: u32,
    /// Angular step per retry for generic and dock approaches (degrees).
    pub navigation_angular_step_deg: f64,
    /// Angular step per retry for attack approaches (degrees).
    pub attack_angular_step_deg: f64,
    /// Safety fudge added to obstacle radii in segment tests.
    pub obstacle_fudge: f64,
    /// Extra separation required between sampled trajectories before two
    /// thrust moves conflict.
    pub collision_fudge: f64,
    /// Time-fraction step when sampling trajectory pairs.
    pub trajectory_sample_step: f64,
    /// Bounds the adversarial look-ahead ply count.
    pub combat_search_depth: u8,
    /// Per-docking-spot weight in the objective priority formula.
    pub colonize_spot_weight: f64,
    /// Priority multiplier for reinforcing an owned planet.
    pub owned_planet_multiplier: f64,
    /// Wall-clock budget for one turn (milliseconds).
    pub turn_time_budget_ms: u64,
    /// Safety epsilon subtracted from the budget (milliseconds).
    pub deadline_epsilon_ms: u64,
}

impl Default for TacticsConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            engagement_radius: ENGAGEMENT_RADIUS,
            recluster_radius: RECLUSTER_RADIUS,
            skirmish_range: SKIRMISH_RANGE,
            max_navigation_corrections: MAX_NAVIGATION_CORRECTIONS,
            navigation_angular_step_deg: NAVIGATION_ANGULAR_STEP_DEG,
            attack_angular_step_deg: ATTACK_ANGULAR_STEP_DEG,
            obstacle_fudge: OBSTACLE_FUDGE,
            collision_fudge: COLLISION_FUDGE,
            trajectory_sample_step: TRAJECTORY_SAMPLE_STEP,
            combat_search_depth: COMBAT_SEARCH_DEPTH,
            colonize_spot_weight: COLONIZE_SPOT_WEIGHT,
            owned_planet_multiplier: OWNED_PLANET_MULTIPLIER,
            turn_time_budget_ms: TURN_TIME_BUDGET_MS,
            deadline_epsilon_ms: DEADLINE_EPSILON_MS,
        }
    }
}
