//! Game constants and tuning parameters.
//!
//! Host-defined values mirror the game rules; everything below the
//! "Tactics defaults" marker seeds [`crate::config::TacticsConfig`].

// --- Host game rules ---

/// Maximum thrust magnitude per turn (map units).
pub const MAX_SPEED: i32 = 7;

/// Collision radius of every ship.
pub const SHIP_RADIUS: f64 = 0.5;

/// Hull points of a freshly spawned ship.
pub const SHIP_MAX_HEALTH: f64 = 255.0;

/// Damage dealt per turn by an undocked ship in weapon range.
pub const WEAPON_DAMAGE: f64 = 64.0;

/// Range within which an undocked ship deals damage.
pub const WEAPON_RADIUS: f64 = 5.0;

/// Distance from a planet's surface at which docking may begin.
pub const DOCK_RADIUS: f64 = 4.0;

/// Turns a ship spends in the Docking/Undocking transition.
pub const DOCK_TURNS: i32 = 5;

// --- Tactics defaults ---

/// Enemy units closer than this trigger combat-cluster formation.
pub const ENGAGEMENT_RADIUS: f64 = 14.0;

/// Radius used when re-clustering around a projected position for
/// move-quality scoring.
pub const RECLUSTER_RADIUS: f64 = 7.0;

/// Beyond this distance from a target, any move is accepted without search.
pub const SKIRMISH_RANGE: f64 = 12.0;

/// Maximum angular retries while searching for a collision-free heading.
pub const MAX_NAVIGATION_CORRECTIONS: u32 = 180;

/// Angular step per retry for generic and dock approaches (degrees).
pub const NAVIGATION_ANGULAR_STEP_DEG: f64 = 1.0;

/// Angular step per retry for attack approaches (degrees).
pub const ATTACK_ANGULAR_STEP_DEG: f64 = 2.0;

/// Safety fudge added to an obstacle's radius in segment tests.
pub const OBSTACLE_FUDGE: f64 = SHIP_RADIUS + 0.1;

/// Extra separation required between sampled trajectories before two
/// thrust moves are considered colliding.
pub const COLLISION_FUDGE: f64 = 0.1;

/// Time-fraction step when sampling a pair of trajectories.
pub const TRAJECTORY_SAMPLE_STEP: f64 = 0.05;

/// Margin subtracted from dock/attack approach distances so the floor'd
/// thrust never overshoots into the target.
pub const APPROACH_SLACK: f64 = 2.0;

/// Ply count for the adversarial combat event search.
pub const COMBAT_SEARCH_DEPTH: u8 = 2;

/// Per-docking-spot weight in the objective priority formula.
pub const COLONIZE_SPOT_WEIGHT: f64 = 100.0;

/// Multiplier applied to reinforcing an already-owned planet.
pub const OWNED_PLANET_MULTIPLIER: f64 = 2.0;

// --- Combat event weights (path scoring) ---

/// Weight of a Group event on a search path.
pub const EVENT_WEIGHT_GROUP: i32 = 4;

/// Weight of an AttackDocked event on a search path.
pub const EVENT_WEIGHT_ATTACK_DOCKED: i32 = 2;

/// Weight of a Defend event on a search path.
pub const EVENT_WEIGHT_DEFEND: i32 = 2;

/// Weight of an Attack event on a search path.
pub const EVENT_WEIGHT_ATTACK: i32 = 1;

// --- Turn clock ---

/// Wall-clock budget granted by the host for one turn (milliseconds).
pub const TURN_TIME_BUDGET_MS: u64 = 2000;

/// Safety epsilon subtracted from the budget before the final emission
/// (milliseconds).
pub const DEADLINE_EPSILON_MS: u64 = 150;

// --- Move priorities ---

/// Priority of thrust moves issued for combat-cluster events.
pub const COMBAT_MOVE_PRIORITY: i32 = 1000;

/// Priority of thrust moves issued for idle exploration.
pub const EXPLORE_MOVE_PRIORITY: i32 = 0;
