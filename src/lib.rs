//! Aim Trainer - target motion and round simulation for a browser aim-training minigame
//!
//! Core modules:
//! - `sim`: Deterministic simulation (target motion, bounds, round state)
//! - `tuning`: Data-driven motion balance
//! - `settings`: Mode, difficulty and size settings chosen in the menu
//! - `platform`: Browser bindings for the page's frame loop

pub mod platform;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use settings::{GameMode, Settings, SizePreset, SpeedPreset};
pub use tuning::{StrafeTuning, TrackingTuning, Tuning};

use glam::Vec2;
use std::f32::consts::{PI, TAU};

/// Game configuration constants
pub mod consts {
    /// Frames per second the motion constants are tuned for (display refresh)
    pub const FRAME_RATE: u32 = 60;
    /// Seconds per frame
    pub const FRAME_DT: f32 = 1.0 / FRAME_RATE as f32;

    /// Target sizes in CSS pixels
    pub const TARGET_SIZE_SMALL: f32 = 40.0;
    pub const TARGET_SIZE_MEDIUM: f32 = 60.0;
    pub const TARGET_SIZE_LARGE: f32 = 80.0;

    /// Frames a hit target stays in its "hit" pose before teleporting (300 ms)
    pub const HIT_COOLDOWN_TICKS: u32 = 18;
    /// Hover is polled for tracking points every 6 frames (100 ms)
    pub const TRACKING_POLL_TICKS: u64 = 6;
}

/// Normalize an angle to (-π, π]
///
/// Angles already in range are returned untouched, so the function is
/// idempotent bit-for-bit.
#[inline]
pub fn normalize_angle(angle: f32) -> f32 {
    if angle > -PI && angle <= PI {
        return angle;
    }
    let wrapped = angle.rem_euclid(TAU);
    if wrapped > PI { wrapped - TAU } else { wrapped }
}

/// Signed shortest rotation from `b` to `a`, in (-π, π]
#[inline]
pub fn angle_difference(a: f32, b: f32) -> f32 {
    normalize_angle(a - b)
}

/// Saturate `value` into `[min, max]`
///
/// Unlike `f32::clamp` this never panics: a degenerate range (`min > max`)
/// collapses to `min`.
#[inline]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    value.min(max).max(min)
}

/// Unit vector pointing along `angle`
#[inline]
pub fn heading(angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_normalize_angle_wraps() {
        assert!((normalize_angle(3.0 * PI / 2.0) - (-PI / 2.0)).abs() < 1e-5);
        assert!((normalize_angle(-3.0 * PI / 2.0) - (PI / 2.0)).abs() < 1e-5);
        assert_eq!(normalize_angle(PI), PI);
        // -π is excluded, it maps onto π
        assert!((normalize_angle(-PI) - PI).abs() < 1e-5);
        assert!((normalize_angle(5.0 * TAU + 0.25) - 0.25).abs() < 1e-4);
    }

    #[test]
    fn test_angle_difference_takes_short_way() {
        // From 170° to -170° is +20°, not -340°
        let d = angle_difference(-170.0_f32.to_radians(), 170.0_f32.to_radians());
        assert!((d - 20.0_f32.to_radians()).abs() < 1e-4);
        let d = angle_difference(170.0_f32.to_radians(), -170.0_f32.to_radians());
        assert!((d + 20.0_f32.to_radians()).abs() < 1e-4);
    }

    #[test]
    fn test_clamp_degenerate_range() {
        assert_eq!(clamp(5.0, 0.0, 3.0), 3.0);
        assert_eq!(clamp(-1.0, 0.0, 3.0), 0.0);
        assert_eq!(clamp(2.0, 0.0, 3.0), 2.0);
        assert_eq!(clamp(2.0, 0.0, 0.0), 0.0);
    }

    proptest! {
        #[test]
        fn normalize_angle_is_idempotent(a in -1.0e4f32..1.0e4f32) {
            let once = normalize_angle(a);
            prop_assert!(once > -PI && once <= PI);
            prop_assert_eq!(normalize_angle(once), once);
        }

        #[test]
        fn angle_difference_is_bounded(a in -1.0e3f32..1.0e3f32, b in -1.0e3f32..1.0e3f32) {
            let d = angle_difference(a, b);
            prop_assert!(d > -PI && d <= PI);
        }
    }
}
