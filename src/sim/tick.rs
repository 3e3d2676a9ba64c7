//! Per-frame round driver
//!
//! The page calls `tick` once per display frame with what the player did
//! that frame. Nothing here keeps its own clock: stop calling and the round
//! freezes.

use glam::Vec2;

use super::state::{GameEvent, GameState, REASON_ENDED, REASON_TIME_UP};
use crate::consts::*;

/// Input for a single frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Viewport size in CSS pixels
    pub viewport: Vec2,
    /// Target under the pointer this frame
    pub hovered: Option<u32>,
    /// Targets clicked/tapped since the last frame
    pub hits: Vec<u32>,
    /// End the round (Escape / back button)
    pub stop: bool,
}

/// Advance the round by one frame
pub fn tick(state: &mut GameState, input: &TickInput) {
    if !state.is_running() {
        return;
    }
    if input.stop {
        state.stop(REASON_ENDED);
        return;
    }

    state.time_ticks += 1;
    let area = state.area(input.viewport);

    for &id in &input.hits {
        state.hit_target(id);
    }

    let speed_multiplier = state.settings.speed_multiplier();
    for target in &mut state.targets {
        if target.hit_cooldown > 0 {
            target.hit_cooldown -= 1;
            if target.hit_cooldown == 0 {
                target.motion.set_pos(area.random_point(&mut state.rng));
                state.events.push(GameEvent::TargetRespawned { id: target.id });
            }
        }
        target
            .motion
            .tick(speed_multiplier, area, &state.tuning, &mut state.rng);
    }

    if state.time_ticks % TRACKING_POLL_TICKS == 0 {
        if let Some(id) = input.hovered {
            state.award_tracking_point(id);
        }
    }

    if let Some(limit) = state.settings.time_limit_ticks() {
        if state.time_ticks >= limit {
            state.stop(REASON_TIME_UP);
        }
    }
}
