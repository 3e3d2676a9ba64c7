//! Wall reflection policies
//!
//! Two independent policies share the same crossing test: a heading/speed
//! target reflects its angle, a velocity target flips its velocity (and the
//! velocity it is steering toward) away from the wall. Both axes are checked
//! in the same call, so a corner hit reflects twice.

use std::f32::consts::PI;

use glam::Vec2;

use super::area::MovableArea;
use crate::normalize_angle;

/// Which walls a position crossed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WallHit {
    /// -1 = left wall, 1 = right wall, 0 = none
    pub x: i8,
    /// -1 = top wall, 1 = bottom wall, 0 = none
    pub y: i8,
}

impl WallHit {
    #[inline]
    pub fn any(&self) -> bool {
        self.x != 0 || self.y != 0
    }
}

/// Clamp `pos` onto the area, reporting which walls it was outside of
pub fn clamp_to_walls(pos: &mut Vec2, area: MovableArea) -> WallHit {
    let mut hit = WallHit::default();
    let max = area.max();

    if pos.x < 0.0 {
        pos.x = 0.0;
        hit.x = -1;
    } else if pos.x > max.x {
        pos.x = max.x;
        hit.x = 1;
    }

    if pos.y < 0.0 {
        pos.y = 0.0;
        hit.y = -1;
    } else if pos.y > max.y {
        pos.y = max.y;
        hit.y = 1;
    }

    hit
}

/// Reflect a heading/speed body off the walls
///
/// A vertical wall mirrors the heading to `π - angle`, a horizontal wall to
/// `-angle`. Any hit damps `speed`. Returns whether a reflection happened.
pub fn reflect_angle(
    pos: &mut Vec2,
    angle: &mut f32,
    speed: &mut f32,
    area: MovableArea,
    damping: f32,
) -> bool {
    let hit = clamp_to_walls(pos, area);
    if !hit.any() {
        return false;
    }

    let mut reflected = *angle;
    if hit.x != 0 {
        reflected = PI - reflected;
    }
    if hit.y != 0 {
        reflected = -reflected;
    }
    *angle = normalize_angle(reflected);
    *speed *= damping;

    log::trace!("angle bounce {:?} -> heading {:.3}", hit, *angle);
    true
}

/// Reflect a velocity body off the walls
///
/// On each crossed axis both `vel` and `vel_target` are forced to point back
/// into the area and damped; the other axis is left alone. Returns the walls
/// that were hit.
pub fn reflect_vector(
    pos: &mut Vec2,
    vel: &mut Vec2,
    vel_target: &mut Vec2,
    area: MovableArea,
    damping: f32,
) -> WallHit {
    let hit = clamp_to_walls(pos, area);

    if hit.x != 0 {
        // Away from the wall: right after the left wall, left after the right
        let dir = -(hit.x as f32);
        vel.x = dir * vel.x.abs() * damping;
        vel_target.x = dir * vel_target.x.abs() * damping;
    }
    if hit.y != 0 {
        let dir = -(hit.y as f32);
        vel.y = dir * vel.y.abs() * damping;
        vel_target.y = dir * vel_target.y.abs() * damping;
    }

    hit
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area() -> MovableArea {
        MovableArea {
            width: 500.0,
            height: 300.0,
        }
    }

    #[test]
    fn test_inside_is_untouched() {
        let mut pos = Vec2::new(250.0, 150.0);
        let mut angle = 0.3;
        let mut speed = 1.0;
        assert!(!reflect_angle(&mut pos, &mut angle, &mut speed, area(), 0.6));
        assert_eq!(angle, 0.3);
        assert_eq!(speed, 1.0);

        // Exactly on the edge is still inside
        let mut pos = Vec2::new(0.0, 300.0);
        assert!(!clamp_to_walls(&mut pos, area()).any());
    }

    #[test]
    fn test_angle_left_wall() {
        let mut pos = Vec2::new(-2.0, 100.0);
        let mut angle = PI;
        let mut speed = 1.0;
        assert!(reflect_angle(&mut pos, &mut angle, &mut speed, area(), 0.6));
        assert_eq!(pos.x, 0.0);
        assert!(angle.abs() < 1e-6);
        assert!((speed - 0.6).abs() < 1e-6);
    }

    #[test]
    fn test_angle_bottom_wall() {
        let mut pos = Vec2::new(100.0, 305.0);
        let mut angle = PI / 3.0;
        let mut speed = 1.5;
        assert!(reflect_angle(&mut pos, &mut angle, &mut speed, area(), 0.6));
        assert_eq!(pos.y, 300.0);
        assert!((angle + PI / 3.0).abs() < 1e-6);
        assert!((speed - 0.9).abs() < 1e-6);
    }

    #[test]
    fn test_angle_corner_damps_once() {
        let mut pos = Vec2::new(510.0, -1.0);
        // Heading up and to the right (screen y grows downward)
        let mut angle = -PI / 4.0;
        let mut speed = 1.0;
        assert!(reflect_angle(&mut pos, &mut angle, &mut speed, area(), 0.6));
        assert_eq!(pos, Vec2::new(500.0, 0.0));
        // Both axes mirrored: now heading down and to the left
        assert!((angle - 3.0 * PI / 4.0).abs() < 1e-5);
        assert!((speed - 0.6).abs() < 1e-6);
    }

    #[test]
    fn test_vector_right_wall_reverses_x_only() {
        let mut pos = Vec2::new(500.5, 100.0);
        let mut vel = Vec2::new(2.0, 0.5);
        let mut vel_target = Vec2::new(2.0, -0.25);
        let hit = reflect_vector(&mut pos, &mut vel, &mut vel_target, area(), 0.6);
        assert_eq!(hit, WallHit { x: 1, y: 0 });
        assert_eq!(pos.x, 500.0);
        assert!((vel.x + 1.2).abs() < 1e-6);
        assert!((vel_target.x + 1.2).abs() < 1e-6);
        assert_eq!(vel.y, 0.5);
        assert_eq!(vel_target.y, -0.25);
    }

    #[test]
    fn test_vector_top_wall_points_down() {
        let mut pos = Vec2::new(100.0, -4.0);
        // Target already points down; it still gets damped but keeps its sign
        let mut vel = Vec2::new(0.0, -1.0);
        let mut vel_target = Vec2::new(0.0, 1.0);
        reflect_vector(&mut pos, &mut vel, &mut vel_target, area(), 0.5);
        assert_eq!(pos.y, 0.0);
        assert_eq!(vel.y, 0.5);
        assert_eq!(vel_target.y, 0.5);
    }

    #[test]
    fn test_zero_area() {
        let zero = MovableArea::default();
        let mut pos = Vec2::new(3.0, -3.0);
        let mut vel = Vec2::new(1.0, -1.0);
        let mut vel_target = vel;
        let hit = reflect_vector(&mut pos, &mut vel, &mut vel_target, zero, 0.6);
        assert_eq!(hit, WallHit { x: 1, y: -1 });
        assert_eq!(pos, Vec2::ZERO);
        assert!(vel.x < 0.0 && vel.y > 0.0);
    }
}
