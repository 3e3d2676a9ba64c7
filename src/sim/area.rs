//! Movable area: the rectangle of valid top-left anchor positions

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::clamp;

/// Valid anchor positions `[0, width] x [0, height]`
///
/// Recomputed every frame from the viewport and the target size, since both
/// can change mid-round.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MovableArea {
    pub width: f32,
    pub height: f32,
}

impl MovableArea {
    /// Viewport minus target size; a target larger than the viewport gets a
    /// zero-size area rather than a negative one
    pub fn new(viewport: Vec2, target_size: f32) -> Self {
        Self {
            width: (viewport.x - target_size).max(0.0),
            height: (viewport.y - target_size).max(0.0),
        }
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn contains(&self, pos: Vec2) -> bool {
        pos.x >= 0.0 && pos.x <= self.width && pos.y >= 0.0 && pos.y <= self.height
    }

    /// Nearest point inside the area
    pub fn clamp_point(&self, pos: Vec2) -> Vec2 {
        Vec2::new(clamp(pos.x, 0.0, self.width), clamp(pos.y, 0.0, self.height))
    }

    /// Uniform random point inside the area
    pub fn random_point(&self, rng: &mut impl Rng) -> Vec2 {
        Vec2::new(
            rng.random::<f32>() * self.width,
            rng.random::<f32>() * self.height,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_area_from_viewport() {
        let area = MovableArea::new(Vec2::new(1280.0, 720.0), 60.0);
        assert_eq!(area.width, 1220.0);
        assert_eq!(area.height, 660.0);
    }

    #[test]
    fn test_area_degenerate_viewport() {
        let area = MovableArea::new(Vec2::new(30.0, 100.0), 60.0);
        assert_eq!(area.width, 0.0);
        assert_eq!(area.height, 40.0);
        assert_eq!(area.clamp_point(Vec2::new(12.0, -3.0)), Vec2::new(0.0, 0.0));
    }

    #[test]
    fn test_random_point_inside() {
        let area = MovableArea::new(Vec2::new(800.0, 600.0), 40.0);
        let mut rng = Pcg32::seed_from_u64(3);
        for _ in 0..200 {
            assert!(area.contains(area.random_point(&mut rng)));
        }
    }
}
