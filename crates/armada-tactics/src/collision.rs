//! Collision resolver: pairwise trajectory conflict cancellation.
//!
//! Examines the full proposed move list and zeroes the lower-priority
//! member of every colliding thrust pair. Dock/Undock/Noop moves do not
//! displace the unit along a line this turn and are exempt. The O(n²)
//! pass runs in list order (each move against every earlier one) with
//! "earlier-processed wins on tie", which must stay fixed for
//! deterministic replay.

use std::collections::BTreeMap;

use armada_core::config::TacticsConfig;
use armada_core::constants::SHIP_RADIUS;
use armada_core::entity::EntityId;
use armada_core::moves::{Move, ProposedMove};
use armada_core::types::Position;

/// Straight-line trajectory of one thrust move.
#[derive(Debug, Clone, Copy)]
struct Trajectory {
    start: Position,
    vx: f64,
    vy: f64,
}

impl Trajectory {
    fn of(start: Position, action: &Move) -> Option<Trajectory> {
        match action {
            Move::Thrust {
                angle_deg, thrust, ..
            } => {
                let rad = (*angle_deg as f64).to_radians();
                Some(Trajectory {
                    start,
                    vx: *thrust as f64 * rad.cos(),
                    vy: *thrust as f64 * rad.sin(),
                })
            }
            _ => None,
        }
    }

    fn at(&self, t: f64) -> Position {
        Position::new(self.start.x + self.vx * t, self.start.y + self.vy * t)
    }
}

/// Whether two trajectories pass within the collision threshold at any
/// sampled time fraction in [0, 1].
fn trajectories_collide(a: &Trajectory, b: &Trajectory, step: f64, fudge: f64) -> bool {
    let threshold = 2.0 * SHIP_RADIUS + fudge;
    let mut t = 0.0;
    while t <= 1.0 + 1e-9 {
        if a.at(t).distance_to(&b.at(t)) < threshold {
            return true;
        }
        t += step;
    }
    false
}

/// Cancel lower-priority moves in colliding pairs, in place.
///
/// `positions` maps each moving unit to its snapshot position. The
/// replacement is a zero-thrust move with the original angle, so the
/// cancelled unit holds station without losing its heading.
pub fn resolve(
    moves: &mut [ProposedMove],
    positions: &BTreeMap<EntityId, Position>,
    config: &TacticsConfig,
) {
    for i in 1..moves.len() {
        for j in 0..i {
            let (Some(pos_i), Some(pos_j)) = (
                positions.get(&moves[i].ship_id),
                positions.get(&moves[j].ship_id),
            ) else {
                continue;
            };
            let (Some(traj_i), Some(traj_j)) = (
                Trajectory::of(*pos_i, &moves[i].action),
                Trajectory::of(*pos_j, &moves[j].action),
            ) else {
                continue;
            };
            if !trajectories_collide(
                &traj_i,
                &traj_j,
                config.trajectory_sample_step,
                config.collision_fudge,
            ) {
                continue;
            }

            // Earlier-processed wins on tie.
            let priority_i = moves[i].action.priority().unwrap_or(i32::MIN);
            let priority_j = moves[j].action.priority().unwrap_or(i32::MIN);
            if priority_i < priority_j {
                moves[i].action = moves[i].action.zeroed();
            } else if priority_j < priority_i {
                moves[j].action = moves[j].action.zeroed();
            } else {
                moves[i].action = moves[i].action.zeroed();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn thrust(angle_deg: i32, thrust: i32, priority: i32) -> Move {
        Move::Thrust {
            angle_deg,
            thrust,
            priority,
        }
    }

    fn crossing_setup(priority_a: i32, priority_b: i32) -> (Vec<ProposedMove>, BTreeMap<EntityId, Position>) {
        // Head-on along the x axis: trajectories meet in the middle.
        let moves = vec![
            ProposedMove {
                ship_id: 1,
                action: thrust(0, 7, priority_a),
            },
            ProposedMove {
                ship_id: 2,
                action: thrust(180, 7, priority_b),
            },
        ];
        let mut positions = BTreeMap::new();
        positions.insert(1, Position::new(0.0, 0.0));
        positions.insert(2, Position::new(7.0, 0.0));
        (moves, positions)
    }

    #[test]
    fn test_lower_priority_move_is_zeroed() {
        let config = TacticsConfig::default();
        let (mut moves, positions) = crossing_setup(5, 10);
        resolve(&mut moves, &positions, &config);
        assert_eq!(moves[0].action, thrust(0, 0, 5));
        assert_eq!(moves[1].action, thrust(180, 7, 10));
    }

    #[test]
    fn test_swapped_priorities_swap_the_victim() {
        let config = TacticsConfig::default();
        let (mut moves, positions) = crossing_setup(10, 5);
        resolve(&mut moves, &positions, &config);
        assert_eq!(moves[0].action, thrust(0, 7, 10));
        assert_eq!(moves[1].action, thrust(180, 0, 5));
    }

    #[test]
    fn test_tie_earlier_processed_wins() {
        let config = TacticsConfig::default();
        let (mut moves, positions) = crossing_setup(5, 5);
        resolve(&mut moves, &positions, &config);
        assert_eq!(moves[0].action, thrust(0, 7, 5));
        assert_eq!(moves[1].action, thrust(180, 0, 5));
    }

    #[test]
    fn test_parallel_moves_do_not_conflict() {
        let config = TacticsConfig::default();
        let mut moves = vec![
            ProposedMove {
                ship_id: 1,
                action: thrust(0, 7, 1),
            },
            ProposedMove {
                ship_id: 2,
                action: thrust(0, 7, 1),
            },
        ];
        let mut positions = BTreeMap::new();
        positions.insert(1, Position::new(0.0, 0.0));
        positions.insert(2, Position::new(0.0, 10.0));
        let before = moves.clone();
        resolve(&mut moves, &positions, &config);
        assert_eq!(moves, before);
    }

    #[test]
    fn test_dock_moves_are_exempt() {
        let config = TacticsConfig::default();
        let mut moves = vec![
            ProposedMove {
                ship_id: 1,
                action: Move::Dock { planet_id: 9 },
            },
            ProposedMove {
                ship_id: 2,
                action: thrust(180, 7, 1),
            },
        ];
        let mut positions = BTreeMap::new();
        positions.insert(1, Position::new(0.0, 0.0));
        positions.insert(2, Position::new(7.0, 0.0));
        let before = moves.clone();
        resolve(&mut moves, &positions, &config);
        assert_eq!(moves, before, "dock/noop moves take no part in the pass");
    }
}
