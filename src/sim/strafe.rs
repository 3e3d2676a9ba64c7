//! Strafing target: velocity steering along horizontal/vertical/diagonal lanes

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::area::MovableArea;
use super::bounds::{WallHit, reflect_vector};
use crate::tuning::StrafeTuning;
use crate::{clamp, heading};

/// Lane a strafing target currently moves along
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MovementMode {
    Horizontal,
    Vertical,
    Diagonal,
}

impl MovementMode {
    pub const ALL: [MovementMode; 3] = [
        MovementMode::Horizontal,
        MovementMode::Vertical,
        MovementMode::Diagonal,
    ];

    pub fn random(rng: &mut impl Rng) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    /// Draw a cruise velocity for this lane
    pub fn velocity_target(&self, base: f32, tuning: &StrafeTuning, rng: &mut impl Rng) -> Vec2 {
        match self {
            MovementMode::Horizontal => {
                let s = random_sign(rng);
                Vec2::new(s * base * tuning.speed_factor.sample(rng), 0.0)
            }
            MovementMode::Vertical => {
                let s = random_sign(rng);
                Vec2::new(0.0, s * base * tuning.speed_factor.sample(rng))
            }
            MovementMode::Diagonal => {
                let dir = heading(rng.random::<f32>() * TAU) * base;
                if tuning.split_diagonal_scale {
                    let sx = tuning.speed_factor.sample(rng);
                    let sy = tuning.speed_factor.sample(rng);
                    dir * Vec2::new(sx, sy)
                } else {
                    dir * tuning.speed_factor.sample(rng)
                }
            }
        }
    }
}

/// Motion state of a strafing target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrafeState {
    /// Top-left anchor
    pub pos: Vec2,
    pub vel: Vec2,
    /// Velocity being eased toward
    pub vel_target: Vec2,
    pub mode: MovementMode,
    /// Frames since the current movement mode started
    pub strafe_timer: u32,
    /// Timer value after which the velocity target is tweaked
    pub next_change_time: u32,
    /// Timer value after which a new movement mode is drawn
    pub next_movement_change: u32,
}

impl StrafeState {
    /// Fresh target at rest with a random lane and cruise velocity
    pub fn spawn(pos: Vec2, speed_multiplier: f32, tuning: &StrafeTuning, rng: &mut impl Rng) -> Self {
        let mode = MovementMode::random(rng);
        let vel_target = mode.velocity_target(tuning.base_speed * speed_multiplier, tuning, rng);

        Self {
            pos,
            vel: Vec2::ZERO,
            vel_target,
            mode,
            strafe_timer: 0,
            next_change_time: tuning.first_change_frames.sample(rng),
            next_movement_change: tuning.first_movement_change_frames.sample(rng),
        }
    }

    /// Advance one frame, returning the walls that were hit
    pub fn tick(
        &mut self,
        speed_multiplier: f32,
        area: MovableArea,
        tuning: &StrafeTuning,
        rng: &mut impl Rng,
    ) -> WallHit {
        self.strafe_timer += 1;

        if rng.random::<f64>() < tuning.sign_flip_chance {
            self.vel_target = -self.vel_target;
        }

        self.vel += (self.vel_target - self.vel) * tuning.vel_lerp;

        let max_speed = tuning.max_speed(speed_multiplier);
        self.vel = clamp_axes(self.vel, max_speed);

        if self.strafe_timer > self.next_change_time {
            let tweak = tuning.tweak.sample(rng);
            self.vel_target = clamp_axes(self.vel_target * tweak, max_speed);
            self.next_change_time = self.strafe_timer + tuning.change_frames.sample(rng);
        }

        if self.strafe_timer > self.next_movement_change {
            self.mode = MovementMode::random(rng);
            self.vel_target =
                self.mode
                    .velocity_target(tuning.base_speed * speed_multiplier, tuning, rng);
            // The pending tweak keeps its remaining countdown across the reset
            self.next_change_time = self.next_change_time.saturating_sub(self.strafe_timer);
            self.strafe_timer = 0;
            self.next_movement_change = tuning.movement_change_frames.sample(rng);
            log::debug!("strafe lane -> {:?}", self.mode);
        }

        self.pos += self.vel;

        reflect_vector(
            &mut self.pos,
            &mut self.vel,
            &mut self.vel_target,
            area,
            tuning.bounce_damping,
        )
    }
}

fn random_sign(rng: &mut impl Rng) -> f32 {
    if rng.random::<f32>() > 0.5 { 1.0 } else { -1.0 }
}

/// Clamp each component to `[-max, max]`
fn clamp_axes(v: Vec2, max: f32) -> Vec2 {
    Vec2::new(clamp(v.x, -max, max), clamp(v.y, -max, max))
}
