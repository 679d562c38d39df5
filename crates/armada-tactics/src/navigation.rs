//! Navigation engine: obstacle-avoiding thrust planning.
//!
//! Converts a (unit, target, move-kind) triple into a physical move via
//! a bounded iterative search: test the straight segment against every
//! obstacle footprint, rotate the heading by a fixed angular step while
//! blocked, and give up (no move) once the correction budget runs out.
//! A post-pass reflects headings that would carry the unit off the map.

use armada_core::config::TacticsConfig;
use armada_core::constants::{APPROACH_SLACK, DOCK_RADIUS, WEAPON_RADIUS};
use armada_core::entity::{EntityId, Planet, Ship, Unit};
use armada_core::enums::NavKind;
use armada_core::moves::Move;
use armada_core::state::WorldState;
use armada_core::types::Position;

/// What the navigator steers toward: a position with a footprint.
/// Point targets (retreat/exploration waypoints) have zero radius.
#[derive(Debug, Clone, Copy)]
pub struct NavTarget {
    pub position: Position,
    pub radius: f64,
}

impl NavTarget {
    pub fn point(position: Position) -> Self {
        Self {
            position,
            radius: 0.0,
        }
    }
}

impl From<&Ship> for NavTarget {
    fn from(ship: &Ship) -> Self {
        Self {
            position: ship.position,
            radius: ship.radius,
        }
    }
}

impl From<&Planet> for NavTarget {
    fn from(planet: &Planet) -> Self {
        Self {
            position: planet.position,
            radius: planet.radius,
        }
    }
}

/// Whether the segment from `start` to `end` passes within
/// `radius + fudge` of `center`. The closest-approach parameter is
/// clipped to the segment; a zero-length segment degrades to a direct
/// distance comparison.
pub fn segment_intersects_circle(
    start: Position,
    end: Position,
    center: Position,
    radius: f64,
    fudge: f64,
) -> bool {
    let dx = end.x - start.x;
    let dy = end.y - start.y;
    let len_sq = dx * dx + dy * dy;

    let closest = if len_sq < f64::EPSILON {
        start
    } else {
        let t = (((center.x - start.x) * dx + (center.y - start.y) * dy) / len_sq).clamp(0.0, 1.0);
        Position::new(start.x + t * dx, start.y + t * dy)
    };

    closest.distance_to(&center) <= radius + fudge
}

/// Whether any obstacle blocks the segment.
pub fn path_blocked(start: Position, end: Position, obstacles: &[Unit<'_>], fudge: f64) -> bool {
    obstacles
        .iter()
        .any(|u| segment_intersects_circle(start, end, u.position(), u.radius(), fudge))
}

/// Collect the obstacles relevant to a move: every planet and every
/// ship except the mover itself and the target entity.
pub fn obstacles_for<'a>(
    world: &'a WorldState,
    mover: EntityId,
    target: Option<EntityId>,
) -> Vec<Unit<'a>> {
    let mut obstacles: Vec<Unit<'a>> = world
        .planets
        .values()
        .filter(|p| Some(p.id) != target)
        .map(Unit::Planet)
        .collect();
    obstacles.extend(
        world
            .all_ships()
            .into_iter()
            .filter(|s| s.id != mover && Some(s.id) != target)
            .map(Unit::Ship),
    );
    obstacles
}

/// Safety margin subtracted from the approach distance for each kind.
fn approach_margin(kind: NavKind, ship: &Ship, target: &NavTarget) -> f64 {
    match kind {
        NavKind::Approach => target.radius + ship.radius,
        NavKind::DockApproach => target.radius + ship.radius + DOCK_RADIUS - APPROACH_SLACK,
        NavKind::Attack => target.radius + ship.radius + WEAPON_RADIUS - APPROACH_SLACK,
        NavKind::Crash => 0.0,
    }
}

/// Plan a thrust move for `ship` toward `target`.
///
/// The thrust magnitude is the approach distance minus the kind's
/// safety margin, clamped to `[0, max_thrust]` and always floored so
/// rounding never overshoots into a collision. Returns `None` when the
/// correction budget is exhausted with every heading blocked; the unit
/// simply makes no move this turn.
#[allow(clippy::too_many_arguments)]
pub fn navigate(
    ship: &Ship,
    target: &NavTarget,
    obstacles: &[Unit<'_>],
    max_thrust: i32,
    kind: NavKind,
    priority: i32,
    config: &TacticsConfig,
    map_width: f64,
    map_height: f64,
) -> Option<Move> {
    let distance = ship.distance_to(&target.position);
    let margin = approach_margin(kind, ship, target);
    let thrust = (distance - margin).clamp(0.0, max_thrust as f64).floor() as i32;

    let step = match kind {
        NavKind::Attack => config.attack_angular_step_deg,
        _ => config.navigation_angular_step_deg,
    };

    let mut angle = ship.position.angle_to(&target.position);
    let mut budget = config.max_navigation_corrections;
    loop {
        let destination = ship.position.offset(angle, thrust as f64);
        if !path_blocked(ship.position, destination, obstacles, config.obstacle_fudge) {
            break;
        }
        if budget == 0 {
            return None;
        }
        budget -= 1;
        angle = (angle + step).rem_euclid(360.0);
    }

    let angle = correct_for_bounds(ship.position, angle, thrust as f64, map_width, map_height);

    Some(Move::Thrust {
        angle_deg: angle.round().rem_euclid(360.0) as i32 % 360,
        thrust,
        priority,
    })
}

/// Reflect a heading whose projected destination would cross a map
/// edge: the move is redirected along the edge (toward 90°/270° for the
/// vertical edges, 0°/180° for the horizontal ones) according to the
/// original heading's quadrant, rather than clipped or rejected.
fn correct_for_bounds(
    start: Position,
    angle_deg: f64,
    thrust: f64,
    map_width: f64,
    map_height: f64,
) -> f64 {
    let destination = start.offset(angle_deg, thrust);
    let heading = angle_deg.rem_euclid(360.0);

    if destination.x > map_width {
        // Exiting the right edge.
        return if heading > 270.0 || heading < 90.0 {
            if heading > 270.0 {
                270.0
            } else {
                90.0
            }
        } else {
            heading
        };
    }
    if destination.x < 0.0 {
        // Exiting the left edge.
        return if heading > 90.0 && heading < 270.0 {
            if heading < 180.0 {
                90.0
            } else {
                270.0
            }
        } else {
            heading
        };
    }
    if destination.y > map_height {
        // Exiting the bottom edge.
        return if heading > 0.0 && heading < 180.0 {
            if heading < 90.0 {
                0.0
            } else {
                180.0
            }
        } else {
            heading
        };
    }
    if destination.y < 0.0 {
        // Exiting the top edge.
        return if heading > 180.0 {
            if heading < 270.0 {
                180.0
            } else {
                0.0
            }
        } else {
            heading
        };
    }

    heading
}

#[cfg(test)]
mod tests {
    use super::*;
    use armada_core::constants::{MAX_SPEED, SHIP_MAX_HEALTH, SHIP_RADIUS};
    use armada_core::enums::DockingStatus;

    fn blocker(x: f64, y: f64, radius: f64) -> Planet {
        Planet {
            id: 900,
            owner: None,
            position: Position::new(x, y),
            health: 1000.0,
            radius,
            docking_spots: 0,
            docked_ships: vec![],
        }
    }

    fn ship_at(x: f64, y: f64) -> Ship {
        Ship {
            id: 0,
            owner: 0,
            position: Position::new(x, y),
            health: SHIP_MAX_HEALTH,
            radius: SHIP_RADIUS,
            docking_status: DockingStatus::Undocked,
            docked_planet: None,
            docking_progress: 0,
            weapon_cooldown: 0,
        }
    }

    #[test]
    fn test_segment_intersection_hit() {
        let hit = segment_intersects_circle(
            Position::new(0.0, 0.0),
            Position::new(10.0, 0.0),
            Position::new(5.0, 1.0),
            2.0,
            0.0,
        );
        assert!(hit);
    }

    #[test]
    fn test_segment_intersection_miss() {
        let hit = segment_intersects_circle(
            Position::new(0.0, 0.0),
            Position::new(10.0, 0.0),
            Position::new(5.0, 5.0),
            2.0,
            0.0,
        );
        assert!(!hit);
    }

    #[test]
    fn test_segment_degenerate_uses_direct_distance() {
        let p = Position::new(3.0, 3.0);
        assert!(segment_intersects_circle(p, p, Position::new(3.5, 3.0), 1.0, 0.0));
        assert!(!segment_intersects_circle(p, p, Position::new(9.0, 9.0), 1.0, 0.0));
    }

    #[test]
    fn test_navigate_clear_path() {
        let ship = ship_at(0.0, 0.0);
        let target = NavTarget::point(Position::new(50.0, 0.0));
        let config = TacticsConfig::default();

        let planned = navigate(
            &ship,
            &target,
            &[],
            MAX_SPEED,
            NavKind::Approach,
            10,
            &config,
            300.0,
            200.0,
        )
        .unwrap();
        assert_eq!(
            planned,
            Move::Thrust {
                angle_deg: 0,
                thrust: 7,
                priority: 10,
            }
        );
    }

    #[test]
    fn test_navigate_thrust_floored_near_target() {
        let ship = ship_at(0.0, 0.0);
        // 5.9 away with a 0.5 margin: 5.4 floors to 5, never rounds up.
        let target = NavTarget::point(Position::new(5.9, 0.0));
        let config = TacticsConfig::default();

        let planned = navigate(
            &ship,
            &target,
            &[],
            MAX_SPEED,
            NavKind::Approach,
            0,
            &config,
            300.0,
            200.0,
        )
        .unwrap();
        assert_eq!(
            planned,
            Move::Thrust {
                angle_deg: 0,
                thrust: 5,
                priority: 0,
            }
        );
    }

    #[test]
    fn test_navigate_exhausted_budget_returns_none() {
        let ship = ship_at(0.0, 0.0);
        // A closed ring of blockers around the mover. Adjacent footprints
        // overlap (perpendicular gap 5*sin(22.5) < 2 + fudge), so the
        // angular sweep finds every candidate heading blocked and the
        // whole correction budget burns.
        let target = NavTarget::point(Position::new(20.0, 0.0));
        let ring: Vec<Planet> = (0..8)
            .map(|i| {
                let center = Position::new(0.0, 0.0).offset(f64::from(i) * 45.0, 5.0);
                blocker(center.x, center.y, 2.0)
            })
            .collect();
        let obstacles: Vec<Unit> = ring.iter().map(Unit::Planet).collect();
        let config = TacticsConfig::default();

        let planned = navigate(
            &ship,
            &target,
            &obstacles,
            MAX_SPEED,
            NavKind::Approach,
            0,
            &config,
            300.0,
            200.0,
        );
        assert!(planned.is_none());
    }

    #[test]
    fn test_navigate_steers_around_obstacle() {
        let ship = ship_at(0.0, 0.0);
        let target = NavTarget::point(Position::new(50.0, 0.0));
        // A small planet dead ahead; the corrected heading must clear it.
        let small = blocker(10.0, 0.0, 3.0);
        let obstacles = vec![Unit::Planet(&small)];
        let config = TacticsConfig::default();

        let planned = navigate(
            &ship,
            &target,
            &obstacles,
            MAX_SPEED,
            NavKind::Approach,
            0,
            &config,
            300.0,
            200.0,
        )
        .unwrap();
        match planned {
            Move::Thrust {
                angle_deg, thrust, ..
            } => {
                assert!(angle_deg != 0, "heading must deviate from the blocked line");
                assert_eq!(thrust, 7);
                let destination = ship
                    .position
                    .offset(angle_deg as f64, thrust as f64);
                assert!(!path_blocked(
                    ship.position,
                    destination,
                    &obstacles,
                    config.obstacle_fudge
                ));
            }
            other => panic!("expected a thrust move, got {other:?}"),
        }
    }

    #[test]
    fn test_dock_margin_shorter_than_attack_margin() {
        let ship = ship_at(0.0, 0.0);
        let target = NavTarget {
            position: Position::new(30.0, 0.0),
            radius: 5.0,
        };
        // Dock margin: 5 + 0.5 + 4 - 2 = 7.5; attack: 5 + 0.5 + 5 - 2 = 8.5.
        assert_eq!(approach_margin(NavKind::DockApproach, &ship, &target), 7.5);
        assert_eq!(approach_margin(NavKind::Attack, &ship, &target), 8.5);
        assert_eq!(approach_margin(NavKind::Crash, &ship, &target), 0.0);
    }

    #[test]
    fn test_boundary_reflection_right_edge() {
        let start = Position::new(98.0, 50.0);
        // Heading 10°: would exit the right edge of a 100-wide map.
        assert_eq!(correct_for_bounds(start, 10.0, 7.0, 100.0, 100.0), 90.0);
        // Heading 350°: same edge, upper quadrant, reflects to 270°.
        assert_eq!(correct_for_bounds(start, 350.0, 7.0, 100.0, 100.0), 270.0);
    }

    #[test]
    fn test_boundary_reflection_leaves_inside_moves_alone() {
        let start = Position::new(50.0, 50.0);
        assert_eq!(correct_for_bounds(start, 33.0, 7.0, 100.0, 100.0), 33.0);
    }
}
