//! Data-driven motion tuning
//!
//! Every constant the motion models use lives here, so the older and newer
//! target flavors are just two `Tuning` values driving the same engine.

use std::f32::consts::PI;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Half-open frame interval `[min, max)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameRange {
    pub min: u32,
    pub max: u32,
}

impl FrameRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Draw a frame count; an empty range yields `min`
    pub fn sample(&self, rng: &mut impl Rng) -> u32 {
        if self.max <= self.min {
            self.min
        } else {
            rng.random_range(self.min..self.max)
        }
    }
}

/// Half-open scalar interval `[min, max)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScalarRange {
    pub min: f32,
    pub max: f32,
}

impl ScalarRange {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    pub fn sample(&self, rng: &mut impl Rng) -> f32 {
        self.min + rng.random::<f32>() * (self.max - self.min)
    }
}

/// Constants for the wandering tracking target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackingTuning {
    /// Spawn velocity scale (times the speed multiplier)
    pub base_mult: f32,
    /// Fraction of the heading error closed per frame
    pub turn_lerp: f32,
    /// Fraction of the speed error closed per frame
    pub speed_lerp: f32,
    /// Frames between direction changes
    pub dir_change_frames: FrameRange,
    /// First direction change after spawn
    pub first_dir_change_frames: FrameRange,
    /// Frames between speed bursts
    pub speed_event_frames: FrameRange,
    /// First speed burst after spawn
    pub first_speed_event_frames: FrameRange,
    /// How long a speed burst lasts
    pub speed_timer_frames: FrameRange,
    /// Speed a burst eases toward
    pub speed_target: ScalarRange,
    /// Distance nudged along the new heading after a bounce
    pub barrier_push: f32,
    /// Half-width of the heading sector forbidden after a bounce (0 disables)
    pub avoid_range: f32,
    /// Resampling budget when steering out of the forbidden sector
    pub avoid_attempts: u32,
    /// Speed kept after a wall bounce
    pub bounce_damping: f32,
}

impl Default for TrackingTuning {
    fn default() -> Self {
        Self {
            base_mult: 1.2,
            turn_lerp: 0.04,
            speed_lerp: 0.02,
            dir_change_frames: FrameRange::new(120, 300),
            first_dir_change_frames: FrameRange::new(120, 300),
            speed_event_frames: FrameRange::new(300, 900),
            first_speed_event_frames: FrameRange::new(300, 900),
            speed_timer_frames: FrameRange::new(60, 180),
            speed_target: ScalarRange::new(0.6, 1.8),
            barrier_push: 6.0,
            avoid_range: PI / 6.0,
            avoid_attempts: 12,
            bounce_damping: 0.6,
        }
    }
}

impl TrackingTuning {
    /// The first tracking target: no turn avoidance, softer bounces
    pub fn legacy() -> Self {
        Self {
            first_dir_change_frames: FrameRange::new(60, 150),
            first_speed_event_frames: FrameRange::new(120, 360),
            barrier_push: 0.0,
            avoid_range: 0.0,
            avoid_attempts: 1,
            bounce_damping: 0.7,
            ..Self::default()
        }
    }
}

/// Constants for the strafing target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrafeTuning {
    /// Cruise speed of a fresh movement mode (times the speed multiplier)
    pub base_speed: f32,
    /// Random scale applied to the cruise speed
    pub speed_factor: ScalarRange,
    /// Per-frame chance of reversing the velocity target
    pub sign_flip_chance: f64,
    /// Fraction of the velocity error closed per frame
    pub vel_lerp: f32,
    /// Per-axis speed cap (times the speed multiplier)
    pub max_speed_mult: f32,
    /// Scale applied to the velocity target on a tweak
    pub tweak: ScalarRange,
    /// First tweak after spawn
    pub first_change_frames: FrameRange,
    /// Frames between tweaks
    pub change_frames: FrameRange,
    /// First movement mode switch after spawn
    pub first_movement_change_frames: FrameRange,
    /// Frames between movement mode switches
    pub movement_change_frames: FrameRange,
    /// Velocity kept after a wall bounce
    pub bounce_damping: f32,
    /// Scale the diagonal lane's axes independently
    pub split_diagonal_scale: bool,
}

impl Default for StrafeTuning {
    fn default() -> Self {
        Self {
            base_speed: 0.9,
            speed_factor: ScalarRange::new(0.8, 1.2),
            sign_flip_chance: 0.005,
            vel_lerp: 0.06,
            max_speed_mult: 1.4,
            tweak: ScalarRange::new(0.9, 1.2),
            first_change_frames: FrameRange::new(60, 180),
            change_frames: FrameRange::new(90, 180),
            first_movement_change_frames: FrameRange::new(140, 360),
            movement_change_frames: FrameRange::new(140, 380),
            bounce_damping: 0.6,
            split_diagonal_scale: false,
        }
    }
}

impl StrafeTuning {
    /// The first strafing target: wider speed spread, lazier tweaks
    pub fn legacy() -> Self {
        Self {
            base_speed: 1.0,
            speed_factor: ScalarRange::new(0.6, 1.4),
            change_frames: FrameRange::new(90, 270),
            first_movement_change_frames: FrameRange::new(90, 270),
            movement_change_frames: FrameRange::new(140, 360),
            split_diagonal_scale: true,
            ..Self::default()
        }
    }

    /// Per-axis velocity cap for a speed multiplier
    #[inline]
    pub fn max_speed(&self, speed_multiplier: f32) -> f32 {
        self.max_speed_mult * speed_multiplier
    }
}

/// Complete motion tuning
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub tracking: TrackingTuning,
    pub strafe: StrafeTuning,
}

impl Tuning {
    pub fn legacy() -> Self {
        Self {
            tracking: TrackingTuning::legacy(),
            strafe: StrafeTuning::legacy(),
        }
    }

    /// Parse tuning overrides; missing fields keep their defaults
    pub fn from_json(json: &str) -> Option<Self> {
        match serde_json::from_str(json) {
            Ok(tuning) => {
                log::info!("Loaded tuning overrides");
                Some(tuning)
            }
            Err(e) => {
                log::warn!("Rejected tuning overrides: {}", e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_frame_range_sample() {
        let mut rng = Pcg32::seed_from_u64(7);
        let range = FrameRange::new(120, 300);
        for _ in 0..500 {
            let n = range.sample(&mut rng);
            assert!((120..300).contains(&n));
        }
        assert_eq!(FrameRange::new(5, 5).sample(&mut rng), 5);
        assert_eq!(FrameRange::new(9, 3).sample(&mut rng), 9);
    }

    #[test]
    fn test_scalar_range_sample() {
        let mut rng = Pcg32::seed_from_u64(7);
        let range = ScalarRange::new(0.6, 1.8);
        for _ in 0..500 {
            let v = range.sample(&mut rng);
            assert!(v >= 0.6 && v <= 1.8);
        }
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "tracking": { "turn_lerp": 0.1 } }"#).unwrap();
        assert_eq!(tuning.tracking.turn_lerp, 0.1);
        assert_eq!(tuning.tracking.speed_lerp, 0.02);
        assert_eq!(tuning.strafe, StrafeTuning::default());
    }

    #[test]
    fn test_bad_json_rejected() {
        assert!(Tuning::from_json("{ not json").is_none());
    }

    #[test]
    fn test_legacy_disables_avoidance() {
        let legacy = Tuning::legacy();
        assert_eq!(legacy.tracking.avoid_range, 0.0);
        assert_eq!(legacy.tracking.bounce_damping, 0.7);
        assert_eq!(legacy.strafe.max_speed(2.0), 2.8);
        assert!(legacy.strafe.split_diagonal_scale);
        assert!(!StrafeTuning::default().split_diagonal_scale);
    }
}
