//! Target entities
//!
//! Archetypes are a tagged enum; `Motion::tick` dispatches to the per-variant
//! model with everything it needs passed in.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::area::MovableArea;
use super::strafe::StrafeState;
use super::tracking::TrackingState;
use crate::settings::GameMode;
use crate::tuning::Tuning;

/// Target archetype
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetKind {
    Static,
    Tracking,
    Strafing,
}

impl TargetKind {
    /// Archetype spawned for a game mode
    pub fn for_mode(mode: GameMode) -> Self {
        match mode {
            GameMode::Classic | GameMode::TimeTrial => TargetKind::Static,
            GameMode::Tracking => TargetKind::Tracking,
            GameMode::Strafe => TargetKind::Strafing,
        }
    }
}

/// Per-archetype motion payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Motion {
    Static { pos: Vec2 },
    Tracking(TrackingState),
    Strafing(StrafeState),
}

impl Motion {
    pub fn spawn(
        kind: TargetKind,
        pos: Vec2,
        speed_multiplier: f32,
        tuning: &Tuning,
        rng: &mut impl Rng,
    ) -> Self {
        match kind {
            TargetKind::Static => Motion::Static { pos },
            TargetKind::Tracking => {
                Motion::Tracking(TrackingState::spawn(pos, speed_multiplier, &tuning.tracking, rng))
            }
            TargetKind::Strafing => {
                Motion::Strafing(StrafeState::spawn(pos, speed_multiplier, &tuning.strafe, rng))
            }
        }
    }

    pub fn kind(&self) -> TargetKind {
        match self {
            Motion::Static { .. } => TargetKind::Static,
            Motion::Tracking(_) => TargetKind::Tracking,
            Motion::Strafing(_) => TargetKind::Strafing,
        }
    }

    pub fn pos(&self) -> Vec2 {
        match self {
            Motion::Static { pos } => *pos,
            Motion::Tracking(s) => s.pos,
            Motion::Strafing(s) => s.pos,
        }
    }

    pub fn set_pos(&mut self, to: Vec2) {
        match self {
            Motion::Static { pos } => *pos = to,
            Motion::Tracking(s) => s.pos = to,
            Motion::Strafing(s) => s.pos = to,
        }
    }

    /// Advance one frame. Static targets only get pulled back into the area.
    pub fn tick(
        &mut self,
        speed_multiplier: f32,
        area: MovableArea,
        tuning: &Tuning,
        rng: &mut impl Rng,
    ) {
        match self {
            Motion::Static { pos } => *pos = area.clamp_point(*pos),
            Motion::Tracking(s) => {
                s.tick(speed_multiplier, area, &tuning.tracking, rng);
            }
            Motion::Strafing(s) => {
                s.tick(speed_multiplier, area, &tuning.strafe, rng);
            }
        }
    }
}

/// A target on screen
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Target {
    pub id: u32,
    pub motion: Motion,
    /// Frames left in the hit pose; the target teleports when it reaches 0
    #[serde(default)]
    pub hit_cooldown: u32,
}

impl Target {
    pub fn new(id: u32, motion: Motion) -> Self {
        Self {
            id,
            motion,
            hit_cooldown: 0,
        }
    }

    #[inline]
    pub fn kind(&self) -> TargetKind {
        self.motion.kind()
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.motion.pos()
    }

    pub fn is_hit(&self) -> bool {
        self.hit_cooldown > 0
    }
}
