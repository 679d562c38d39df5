//! Distance index: sorted-by-distance relations for one snapshot.
//!
//! Built once per turn as a pure function of the snapshot; never mutates
//! snapshot data. Populations are small (tens to low hundreds), so the
//! O(U·P) / O(U·E) builds are deliberate.

use std::collections::BTreeMap;

use armada_core::entity::{EntityId, PlayerId};
use armada_core::error::TacticsError;
use armada_core::orders::{Fleet, Objective};
use armada_core::state::WorldState;
use armada_core::types::Position;

/// Sorted-ascending distance relations from every controlled unit to
/// all planets, all enemy units, and all allied units.
#[derive(Debug, Clone)]
pub struct DistanceIndex {
    planets_by_ship: BTreeMap<EntityId, Vec<(EntityId, f64)>>,
    enemies_by_ship: BTreeMap<EntityId, Vec<(EntityId, f64)>>,
    allies_by_ship: BTreeMap<EntityId, Vec<(EntityId, f64)>>,
    /// Positions of every ship in the snapshot, for derived queries.
    positions: BTreeMap<EntityId, Position>,
}

impl DistanceIndex {
    /// Build the relations for `player`'s units.
    pub fn build(world: &WorldState, player: PlayerId) -> Self {
        let my_ships = world.ships_of(player);
        let enemy_ships = world.enemy_ships_of(player);

        let mut planets_by_ship = BTreeMap::new();
        let mut enemies_by_ship = BTreeMap::new();
        let mut allies_by_ship = BTreeMap::new();

        for ship in &my_ships {
            let mut planets: Vec<(EntityId, f64)> = world
                .planets
                .values()
                .map(|p| (p.id, ship.distance_to(&p.position)))
                .collect();
            planets.sort_by(|a, b| a.1.total_cmp(&b.1));
            planets_by_ship.insert(ship.id, planets);

            let mut enemies: Vec<(EntityId, f64)> = enemy_ships
                .iter()
                .map(|e| (e.id, ship.distance_to(&e.position)))
                .collect();
            enemies.sort_by(|a, b| a.1.total_cmp(&b.1));
            enemies_by_ship.insert(ship.id, enemies);

            let mut allies: Vec<(EntityId, f64)> = my_ships
                .iter()
                .filter(|a| a.id != ship.id)
                .map(|a| (a.id, ship.distance_to(&a.position)))
                .collect();
            allies.sort_by(|a, b| a.1.total_cmp(&b.1));
            allies_by_ship.insert(ship.id, allies);
        }

        let positions = world
            .all_ships()
            .iter()
            .map(|s| (s.id, s.position))
            .collect();

        Self {
            planets_by_ship,
            enemies_by_ship,
            allies_by_ship,
            positions,
        }
    }

    fn first_of(
        relation: &BTreeMap<EntityId, Vec<(EntityId, f64)>>,
        ship_id: EntityId,
    ) -> Result<(EntityId, f64), TacticsError> {
        relation
            .get(&ship_id)
            .and_then(|v| v.first())
            .copied()
            .ok_or(TacticsError::EmptyPopulation)
    }

    /// Nearest planet to a controlled unit.
    pub fn nearest_planet(&self, ship_id: EntityId) -> Result<(EntityId, f64), TacticsError> {
        Self::first_of(&self.planets_by_ship, ship_id)
    }

    /// Nearest enemy unit to a controlled unit.
    pub fn nearest_enemy(&self, ship_id: EntityId) -> Result<(EntityId, f64), TacticsError> {
        Self::first_of(&self.enemies_by_ship, ship_id)
    }

    /// Nearest allied unit, excluding the unit itself.
    pub fn nearest_ally(&self, ship_id: EntityId) -> Result<(EntityId, f64), TacticsError> {
        Self::first_of(&self.allies_by_ship, ship_id)
    }

    /// Nearest allied unit not bound to the given fleet.
    pub fn nearest_ally_outside(
        &self,
        ship_id: EntityId,
        fleet: &Fleet,
    ) -> Result<(EntityId, f64), TacticsError> {
        self.allies_by_ship
            .get(&ship_id)
            .and_then(|v| v.iter().find(|(id, _)| !fleet.contains(*id)))
            .copied()
            .ok_or(TacticsError::EmptyPopulation)
    }

    /// Enemy ids within `radius` of a controlled unit, nearest first.
    pub fn enemies_within(&self, ship_id: EntityId, radius: f64) -> Vec<EntityId> {
        self.enemies_by_ship
            .get(&ship_id)
            .map(|v| {
                v.iter()
                    .take_while(|(_, d)| *d <= radius)
                    .map(|(id, _)| *id)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Enemy ids within `radius` of an arbitrary position (e.g. a
    /// planet's center), nearest first.
    pub fn enemies_within_of(
        &self,
        world: &WorldState,
        player: PlayerId,
        center: Position,
        radius: f64,
    ) -> Vec<EntityId> {
        let mut hits: Vec<(EntityId, f64)> = world
            .enemy_ships_of(player)
            .iter()
            .map(|e| (e.id, center.distance_to(&e.position)))
            .filter(|(_, d)| *d <= radius)
            .collect();
        hits.sort_by(|a, b| a.1.total_cmp(&b.1));
        hits.into_iter().map(|(id, _)| id).collect()
    }

    /// Indices of the `k` objectives nearest to a controlled unit.
    pub fn nearest_objectives(
        &self,
        ship_id: EntityId,
        objectives: &[Objective],
        k: usize,
    ) -> Vec<usize> {
        let Some(planets) = self.planets_by_ship.get(&ship_id) else {
            return Vec::new();
        };
        let mut ranked: Vec<(usize, f64)> = objectives
            .iter()
            .enumerate()
            .filter_map(|(i, o)| {
                planets
                    .iter()
                    .find(|(id, _)| *id == o.target)
                    .map(|(_, d)| (i, *d))
            })
            .collect();
        ranked.sort_by(|a, b| a.1.total_cmp(&b.1));
        ranked.into_iter().take(k).map(|(i, _)| i).collect()
    }

    /// Indices of the `k` fleets nearest to a controlled unit, by
    /// distance to the fleet's centroid.
    pub fn nearest_fleets(&self, ship_id: EntityId, fleets: &[Fleet], k: usize) -> Vec<usize> {
        let Some(own) = self.positions.get(&ship_id) else {
            return Vec::new();
        };
        let mut ranked: Vec<(usize, f64)> = fleets
            .iter()
            .enumerate()
            .filter_map(|(i, fleet)| {
                self.fleet_centroid(fleet)
                    .map(|centroid| (i, own.distance_to(&centroid)))
            })
            .collect();
        ranked.sort_by(|a, b| a.1.total_cmp(&b.1));
        ranked.into_iter().take(k).map(|(i, _)| i).collect()
    }

    fn fleet_centroid(&self, fleet: &Fleet) -> Option<Position> {
        let points: Vec<Position> = fleet
            .ships
            .iter()
            .filter_map(|id| self.positions.get(id))
            .copied()
            .collect();
        if points.is_empty() {
            return None;
        }
        let n = points.len() as f64;
        Some(Position::new(
            points.iter().map(|p| p.x).sum::<f64>() / n,
            points.iter().map(|p| p.y).sum::<f64>() / n,
        ))
    }
}
