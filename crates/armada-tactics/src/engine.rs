//! Turn engine: runs the decision pipeline over one snapshot.
//!
//! Single-threaded and synchronous within a turn: distance index,
//! objectives, assignment, per-unit navigation with combat overrides for
//! clustered units, then the deterministic collision pass. The whole
//! pipeline is a pure function of (snapshot, config): identical inputs
//! produce identical move sets.

use std::collections::{BTreeMap, BTreeSet};
use std::time::{Duration, Instant};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, trace};

use armada_combat::cluster::{CombatCluster, Combatant};
use armada_combat::search::choose_event;
use armada_core::config::TacticsConfig;
use armada_core::constants::{COMBAT_MOVE_PRIORITY, EXPLORE_MOVE_PRIORITY, MAX_SPEED};
use armada_core::entity::{EntityId, PlayerId, Ship};
use armada_core::enums::{CombatEvent, DockingStatus, NavKind, OrderKind};
use armada_core::error::TacticsError;
use armada_core::moves::{Move, MoveSet, ProposedMove};
use armada_core::orders::Fleet;
use armada_core::state::WorldState;
use armada_core::types::Position;

use crate::assignment;
use crate::collision;
use crate::distance::DistanceIndex;
use crate::navigation::{self, NavTarget};
use crate::objectives;

/// Wall-clock guard for one turn: the host budget minus a safety
/// epsilon. Checked between units; on expiry the engine fails safe and
/// leaves the remaining units to the Noop fill.
#[derive(Debug)]
pub struct TurnClock {
    started: Instant,
    budget: Duration,
}

impl TurnClock {
    pub fn start(config: &TacticsConfig) -> Self {
        let ms = config
            .turn_time_budget_ms
            .saturating_sub(config.deadline_epsilon_ms);
        Self {
            started: Instant::now(),
            budget: Duration::from_millis(ms),
        }
    }

    pub fn expired(&self) -> bool {
        self.started.elapsed() >= self.budget
    }
}

/// The per-turn tactical decision engine.
pub struct TurnEngine {
    player: PlayerId,
    config: TacticsConfig,
}

impl TurnEngine {
    pub fn new(player: PlayerId, config: TacticsConfig) -> Self {
        Self { player, config }
    }

    pub fn config(&self) -> &TacticsConfig {
        &self.config
    }

    /// Produce this turn's move set: exactly one move per controlled
    /// unit. The only error surface is a programming-contract violation
    /// (an order kind with no navigation handling); everything else
    /// degrades to Noop.
    pub fn run(&self, world: &WorldState) -> Result<MoveSet, TacticsError> {
        let clock = TurnClock::start(&self.config);
        let index = DistanceIndex::build(world, self.player);
        let objectives = objectives::generate(world, self.player, &self.config);
        let pool = world.mobile_ships_of(self.player);
        let (fleets, unassigned) = assignment::assign(&objectives, &pool);
        debug!(
            turn = world.turn,
            ships = pool.len(),
            objectives = objectives.len(),
            fleets = fleets.len(),
            unassigned = unassigned.len(),
            "turn planned"
        );

        let my_ships = world.ships_of(self.player);
        let enemy_ships = world.enemy_ships_of(self.player);
        let fleet_of: BTreeMap<EntityId, usize> = fleets
            .iter()
            .enumerate()
            .flat_map(|(i, f)| f.ships.iter().map(move |id| (*id, i)))
            .collect();

        // Exploration waypoints come from a per-turn stream, so a fixed
        // snapshot always replays to the same move set.
        let mut rng = ChaCha8Rng::seed_from_u64(self.config.seed ^ u64::from(world.turn));

        let mut proposed: Vec<ProposedMove> = Vec::with_capacity(my_ships.len());
        let mut claimed: BTreeSet<EntityId> = BTreeSet::new();
        let mut next_cluster_id = 0u32;

        for ship in &my_ships {
            if clock.expired() {
                debug!(
                    turn = world.turn,
                    ship = ship.id,
                    "deadline reached; remaining units hold position"
                );
                break;
            }
            // One decision per unit: a ship already claimed by an
            // earlier cluster is never reprocessed.
            if claimed.contains(&ship.id) {
                continue;
            }

            match ship.docking_status {
                DockingStatus::Docking | DockingStatus::Undocking => {
                    proposed.push(ProposedMove {
                        ship_id: ship.id,
                        action: Move::Noop,
                    });
                }
                DockingStatus::Docked => {
                    let threatened = !index
                        .enemies_within(ship.id, self.config.engagement_radius)
                        .is_empty();
                    proposed.push(ProposedMove {
                        ship_id: ship.id,
                        action: if threatened { Move::Undock } else { Move::Noop },
                    });
                }
                DockingStatus::Undocked => {
                    if let Some(cluster) = CombatCluster::gather(
                        next_cluster_id,
                        ship,
                        &my_ships,
                        &enemy_ships,
                        self.config.engagement_radius,
                    ) {
                        next_cluster_id += 1;
                        let event = choose_event(&cluster, self.config.combat_search_depth)
                            .unwrap_or(CombatEvent::Retreat);
                        trace!(
                            cluster = cluster.id,
                            allies = cluster.allies.len(),
                            enemies = cluster.enemies.len(),
                            ?event,
                            "combat cluster resolved"
                        );
                        self.issue_cluster_moves(
                            event,
                            &cluster,
                            world,
                            &index,
                            &mut claimed,
                            &mut proposed,
                        );
                    } else if let Some(&fleet_idx) = fleet_of.get(&ship.id) {
                        claimed.insert(ship.id);
                        if let Some(action) =
                            self.objective_move(ship, &fleets[fleet_idx], world)?
                        {
                            proposed.push(ProposedMove {
                                ship_id: ship.id,
                                action,
                            });
                        }
                    } else {
                        claimed.insert(ship.id);
                        // Idle exploration toward a deterministic
                        // pseudo-random waypoint.
                        let waypoint = Position::new(
                            rng.gen_range(0.0..world.width),
                            rng.gen_range(0.0..world.height),
                        );
                        if let Some(action) = navigation::navigate(
                            ship,
                            &NavTarget::point(waypoint),
                            &navigation::obstacles_for(world, ship.id, None),
                            MAX_SPEED,
                            NavKind::Approach,
                            EXPLORE_MOVE_PRIORITY,
                            &self.config,
                            world.width,
                            world.height,
                        ) {
                            proposed.push(ProposedMove {
                                ship_id: ship.id,
                                action,
                            });
                        }
                    }
                }
            }
        }

        let positions: BTreeMap<EntityId, Position> =
            my_ships.iter().map(|s| (s.id, s.position)).collect();
        collision::resolve(&mut proposed, &positions, &self.config);

        let mut moves: MoveSet = proposed.into_iter().collect();
        moves.fill_missing(my_ships.iter().map(|s| s.id));
        debug!(turn = world.turn, moves = moves.len(), "turn emitted");
        Ok(moves)
    }

    /// Translate the chosen cluster event into one move per undocked
    /// cluster member, claiming the members so they are not reprocessed.
    fn issue_cluster_moves(
        &self,
        event: CombatEvent,
        cluster: &CombatCluster,
        world: &WorldState,
        index: &DistanceIndex,
        claimed: &mut BTreeSet<EntityId>,
        proposed: &mut Vec<ProposedMove>,
    ) {
        for member in cluster.allies.iter().filter(|c| !c.docked) {
            if !claimed.insert(member.id) {
                continue;
            }
            let Some(member_ship) = world.ship(member.id) else {
                continue;
            };
            let action = self
                .combat_move(event, member_ship, cluster, world, index)
                .unwrap_or(Move::Noop);
            proposed.push(ProposedMove {
                ship_id: member.id,
                action,
            });
        }
    }

    /// The physical move realizing `event` for one cluster member.
    fn combat_move(
        &self,
        event: CombatEvent,
        ship: &Ship,
        cluster: &CombatCluster,
        world: &WorldState,
        index: &DistanceIndex,
    ) -> Option<Move> {
        match event {
            CombatEvent::Attack => {
                let target_id = nearest_combatant(ship, &cluster.enemies, |c| !c.docked)?;
                self.approach(ship, target_id, world, NavKind::Attack)
            }
            CombatEvent::AttackDocked => {
                let target_id = nearest_combatant(ship, &cluster.enemies, |c| c.docked)?;
                self.approach(ship, target_id, world, NavKind::Attack)
            }
            CombatEvent::Defend => {
                // Screen the closest docked ally; fall back to any ally.
                let target_id = nearest_combatant(ship, &cluster.allies, |c| {
                    c.docked && c.id != ship.id
                })
                .or_else(|| index.nearest_ally(ship.id).ok().map(|(id, _)| id))?;
                self.approach(ship, target_id, world, NavKind::Approach)
            }
            CombatEvent::Group => {
                let target_id = index.nearest_ally(ship.id).ok().map(|(id, _)| id)?;
                self.approach(ship, target_id, world, NavKind::Approach)
            }
            CombatEvent::Retreat => {
                let centroid = enemy_centroid(cluster)?;
                let away = centroid.angle_to(&ship.position);
                let waypoint = ship.position.offset(away, MAX_SPEED as f64);
                navigation::navigate(
                    ship,
                    &NavTarget::point(waypoint),
                    &navigation::obstacles_for(world, ship.id, None),
                    MAX_SPEED,
                    NavKind::Approach,
                    COMBAT_MOVE_PRIORITY,
                    &self.config,
                    world.width,
                    world.height,
                )
            }
        }
    }

    /// Navigate toward another ship with the given kind at combat
    /// priority.
    fn approach(
        &self,
        ship: &Ship,
        target_id: EntityId,
        world: &WorldState,
        kind: NavKind,
    ) -> Option<Move> {
        let target = world.ship(target_id)?;
        navigation::navigate(
            ship,
            &NavTarget::from(target),
            &navigation::obstacles_for(world, ship.id, Some(target_id)),
            MAX_SPEED,
            kind,
            COMBAT_MOVE_PRIORITY,
            &self.config,
            world.width,
            world.height,
        )
    }

    /// The physical move realizing a fleet's objective for one member.
    ///
    /// An order kind without navigation handling is a contract
    /// violation and surfaces immediately.
    pub(crate) fn objective_move(
        &self,
        ship: &Ship,
        fleet: &Fleet,
        world: &WorldState,
    ) -> Result<Option<Move>, TacticsError> {
        let objective = &fleet.objective;
        let priority = objective.priority as i32;

        match objective.kind {
            OrderKind::Colonize => {
                let Some(planet) = world.planet(objective.target) else {
                    return Ok(None);
                };
                let dockable =
                    !planet.is_owned() || (planet.owned_by(self.player) && !planet.is_full());
                if dockable && ship.in_dock_range(planet) {
                    return Ok(Some(Move::Dock {
                        planet_id: planet.id,
                    }));
                }
                Ok(navigation::navigate(
                    ship,
                    &NavTarget::from(planet),
                    &navigation::obstacles_for(world, ship.id, Some(planet.id)),
                    MAX_SPEED,
                    NavKind::DockApproach,
                    priority,
                    &self.config,
                    world.width,
                    world.height,
                ))
            }
            OrderKind::CrashInto => {
                let Some(planet) = world.planet(objective.target) else {
                    return Ok(None);
                };
                Ok(navigation::navigate(
                    ship,
                    &NavTarget::from(planet),
                    &navigation::obstacles_for(world, ship.id, Some(planet.id)),
                    MAX_SPEED,
                    NavKind::Crash,
                    priority,
                    &self.config,
                    world.width,
                    world.height,
                ))
            }
            OrderKind::Attack => {
                let Some(target) = world.ship(objective.target) else {
                    return Ok(None);
                };
                Ok(navigation::navigate(
                    ship,
                    &NavTarget::from(target),
                    &navigation::obstacles_for(world, ship.id, Some(target.id)),
                    MAX_SPEED,
                    NavKind::Attack,
                    priority,
                    &self.config,
                    world.width,
                    world.height,
                ))
            }
            OrderKind::Defend | OrderKind::Group => {
                let Some(target) = world.ship(objective.target) else {
                    return Ok(None);
                };
                Ok(navigation::navigate(
                    ship,
                    &NavTarget::from(target),
                    &navigation::obstacles_for(world, ship.id, Some(target.id)),
                    MAX_SPEED,
                    NavKind::Approach,
                    priority,
                    &self.config,
                    world.width,
                    world.height,
                ))
            }
            kind => Err(TacticsError::UnsupportedOrder(kind)),
        }
    }
}

/// Id of the combatant nearest to `ship` among those matching `keep`.
fn nearest_combatant(
    ship: &Ship,
    combatants: &[Combatant],
    keep: impl Fn(&Combatant) -> bool,
) -> Option<EntityId> {
    combatants
        .iter()
        .filter(|c| keep(c))
        .min_by(|a, b| {
            ship.distance_to(&a.position)
                .total_cmp(&ship.distance_to(&b.position))
        })
        .map(|c| c.id)
}

/// Centroid of the cluster's enemy side.
fn enemy_centroid(cluster: &CombatCluster) -> Option<Position> {
    if cluster.enemies.is_empty() {
        return None;
    }
    let n = cluster.enemies.len() as f64;
    Some(Position::new(
        cluster.enemies.iter().map(|c| c.position.x).sum::<f64>() / n,
        cluster.enemies.iter().map(|c| c.position.y).sum::<f64>() / n,
    ))
}
