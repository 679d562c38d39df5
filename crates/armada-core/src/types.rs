//! Fundamental geometric types.

use serde::{Deserialize, Serialize};

/// 2D position on the game map (map units, Cartesian).
/// x grows to the right, y grows downward, matching the host's frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another position.
    pub fn distance_to(&self, other: &Position) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Angle to another position in degrees, normalized to [0, 360).
    pub fn angle_to(&self, other: &Position) -> f64 {
        let dy = other.y - self.y;
        let dx = other.x - self.x;
        dy.atan2(dx).to_degrees().rem_euclid(360.0)
    }

    /// The position reached by travelling `distance` along `angle_deg`.
    pub fn offset(&self, angle_deg: f64, distance: f64) -> Position {
        let rad = angle_deg.to_radians();
        Position::new(self.x + distance * rad.cos(), self.y + distance * rad.sin())
    }

    /// The point at `margin` short of `target`, along the line between the two.
    /// Coincident points degrade to the current position rather than erroring.
    pub fn closest_point_to(&self, target: &Position, margin: f64) -> Position {
        let dist = self.distance_to(target);
        if dist < f64::EPSILON {
            return *self;
        }
        let angle = target.angle_to(self);
        target.offset(angle, margin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_symmetry() {
        let a = Position::new(3.0, -4.5);
        let b = Position::new(-7.25, 11.0);
        assert_eq!(a.distance_to(&b), b.distance_to(&a));
        assert_eq!(a.distance_to(&a), 0.0);
    }

    #[test]
    fn test_angle_cardinal_directions() {
        let origin = Position::new(0.0, 0.0);
        assert_eq!(origin.angle_to(&Position::new(10.0, 0.0)), 0.0);
        assert_eq!(origin.angle_to(&Position::new(0.0, 10.0)), 90.0);
        assert_eq!(origin.angle_to(&Position::new(-10.0, 0.0)), 180.0);
        assert_eq!(origin.angle_to(&Position::new(0.0, -10.0)), 270.0);
    }

    #[test]
    fn test_offset_round_trip() {
        let origin = Position::new(5.0, 5.0);
        let moved = origin.offset(45.0, 10.0);
        assert!((origin.distance_to(&moved) - 10.0).abs() < 1e-9);
        assert!((origin.angle_to(&moved) - 45.0).abs() < 1e-9);
    }

    #[test]
    fn test_closest_point_stops_short_of_target() {
        let ship = Position::new(0.0, 0.0);
        let target = Position::new(20.0, 0.0);
        let point = ship.closest_point_to(&target, 3.0);
        assert!((point.x - 17.0).abs() < 1e-9);
        assert!(point.y.abs() < 1e-9);
    }

    #[test]
    fn test_closest_point_degenerate() {
        let p = Position::new(2.0, 2.0);
        assert_eq!(p.closest_point_to(&p, 3.0), p);
    }
}
