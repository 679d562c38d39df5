//! Objective generation: score and rank candidate targets.

use armada_core::config::TacticsConfig;
use armada_core::entity::PlayerId;
use armada_core::enums::OrderKind;
use armada_core::orders::Objective;
use armada_core::state::WorldState;

/// Generate this turn's objectives, sorted by priority descending.
///
/// Per planet: reinforcing an owned, non-full planet outranks taking an
/// unowned one of the same size; opponent-owned planets generate
/// nothing (crash-into objectives are modeled but disabled). The
/// reinforcement term weighs the planet's remaining *free* spots
/// (doubled), not its total capacity, so a nearly full planet does not
/// outrank a fresh colony of the same size. The sort
/// is stable, so priority ties keep planet enumeration order, an
/// explicit, arbitrary tie-break that keeps runs reproducible.
pub fn generate(world: &WorldState, player: PlayerId, config: &TacticsConfig) -> Vec<Objective> {
    let mut objectives = Vec::new();

    for planet in world.planets.values() {
        if planet.owned_by(player) && !planet.is_full() {
            let free = planet.free_docking_spots();
            objectives.push(Objective {
                target: planet.id,
                priority: config.owned_planet_multiplier
                    * (free as f64 * config.colonize_spot_weight),
                required_ships: free as usize,
                kind: OrderKind::Colonize,
            });
        } else if !planet.is_owned() {
            objectives.push(Objective {
                target: planet.id,
                priority: planet.docking_spots as f64 * config.colonize_spot_weight,
                required_ships: planet.docking_spots as usize,
                kind: OrderKind::Colonize,
            });
        }
        // Opponent-owned planets: no objective by default.
    }

    objectives.sort_by(|a, b| b.priority.total_cmp(&a.priority));
    objectives
}
