//! Tracking target: continuous wandering with eased heading and speed
//!
//! The target glides toward a heading it re-rolls every few seconds, with
//! occasional speed bursts. After a wall bounce it remembers the wall so the
//! next re-roll does not aim straight back into it.

use std::f32::consts::{PI, TAU};

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::area::MovableArea;
use super::bounds::reflect_angle;
use crate::tuning::{FrameRange, TrackingTuning};
use crate::{angle_difference, heading, normalize_angle};

/// Speed a burst returns to when its timer runs out
pub const BASELINE_SPEED: f32 = 1.0;

/// Fallback speed for a spawn velocity of exactly zero
const SPAWN_FALLBACK_SPEED: f32 = 0.9;

/// Stand-in for a zero velocity component when deriving the spawn heading
const SPAWN_EPSILON: f32 = 0.0001;

/// Heading sector `[center - range, center + range]` a re-roll should avoid
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AvoidSector {
    pub center: f32,
    pub range: f32,
}

impl AvoidSector {
    pub fn contains(&self, angle: f32) -> bool {
        angle_difference(angle, self.center).abs() <= self.range
    }
}

/// Motion state of a tracking target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackingState {
    /// Top-left anchor
    pub pos: Vec2,
    /// Current heading, kept in (-π, π]
    pub angle: f32,
    /// Heading being eased toward
    pub angle_target: f32,
    pub speed: f32,
    pub speed_target: f32,
    /// Frames until the next heading re-roll
    pub next_dir_change: i32,
    /// Frames until the next speed burst
    pub next_speed_event: i32,
    /// Frames left in the current burst (0 = no burst)
    pub speed_timer: i32,
    /// Sector installed by the last bounce
    pub avoid: Option<AvoidSector>,
    /// Apply `avoid` on the next re-roll
    pub avoid_next_turn: bool,
}

impl TrackingState {
    /// Fresh target at `pos` with a random drift
    pub fn spawn(
        pos: Vec2,
        speed_multiplier: f32,
        tuning: &TrackingTuning,
        rng: &mut impl Rng,
    ) -> Self {
        let base = tuning.base_mult * speed_multiplier;
        let vx = (rng.random::<f32>() - 0.5) * base;
        let vy = (rng.random::<f32>() - 0.5) * base;

        let nonzero = |v: f32| if v == 0.0 { SPAWN_EPSILON } else { v };
        let angle = nonzero(vy).atan2(nonzero(vx));
        let speed = match vx.hypot(vy) {
            s if s > 0.0 => s,
            _ => SPAWN_FALLBACK_SPEED,
        };

        Self {
            pos,
            angle,
            angle_target: angle,
            speed,
            speed_target: BASELINE_SPEED,
            next_dir_change: countdown(tuning.first_dir_change_frames, rng),
            next_speed_event: countdown(tuning.first_speed_event_frames, rng),
            speed_timer: 0,
            avoid: None,
            avoid_next_turn: false,
        }
    }

    /// Advance one frame. Returns true if the target bounced off a wall.
    pub fn tick(
        &mut self,
        speed_multiplier: f32,
        area: MovableArea,
        tuning: &TrackingTuning,
        rng: &mut impl Rng,
    ) -> bool {
        self.next_dir_change -= 1;
        if self.next_dir_change <= 0 {
            self.angle_target = self.pick_heading(tuning, rng);
            self.next_dir_change = countdown(tuning.dir_change_frames, rng);
            self.avoid_next_turn = false;
            self.avoid = None;
        }

        self.next_speed_event -= 1;
        if self.next_speed_event <= 0 {
            self.speed_target = tuning.speed_target.sample(rng);
            self.speed_timer = countdown(tuning.speed_timer_frames, rng);
            self.next_speed_event = countdown(tuning.speed_event_frames, rng);
        }

        if self.speed_timer > 0 {
            self.speed_timer -= 1;
            if self.speed_timer == 0 {
                self.speed_target = BASELINE_SPEED;
            }
        }

        self.angle += angle_difference(self.angle_target, self.angle) * tuning.turn_lerp;
        self.speed += (self.speed_target - self.speed) * tuning.speed_lerp;
        self.pos += heading(self.angle) * self.speed * speed_multiplier;

        let bounced = reflect_angle(
            &mut self.pos,
            &mut self.angle,
            &mut self.speed,
            area,
            tuning.bounce_damping,
        );
        if bounced {
            // Keep the reflected heading; only the next re-roll is steered
            self.angle_target = self.angle;
            self.avoid = (tuning.avoid_range > 0.0).then(|| AvoidSector {
                center: normalize_angle(self.angle + PI),
                range: tuning.avoid_range,
            });
            self.avoid_next_turn = true;
            self.next_dir_change = countdown(tuning.dir_change_frames, rng);
            self.pos = area.clamp_point(self.pos + heading(self.angle) * tuning.barrier_push);
        }

        self.angle = normalize_angle(self.angle);
        bounced
    }

    /// Roll a new heading in [0, 2π), resampling out of the avoid sector
    /// within the attempt budget
    fn pick_heading(&self, tuning: &TrackingTuning, rng: &mut impl Rng) -> f32 {
        let mut candidate = rng.random::<f32>() * TAU;

        let sector = if self.avoid_next_turn { self.avoid } else { None };
        if let Some(sector) = sector {
            let mut attempts = 1;
            while sector.contains(candidate) && attempts < tuning.avoid_attempts {
                candidate = rng.random::<f32>() * TAU;
                attempts += 1;
            }
            if sector.contains(candidate) {
                log::trace!("avoid sector budget exhausted, keeping {:.3}", candidate);
            }
        }

        candidate
    }
}

/// Draw a frame countdown, saturating oversized overrides
fn countdown(range: FrameRange, rng: &mut impl Rng) -> i32 {
    i32::try_from(range.sample(rng)).unwrap_or(i32::MAX)
}
