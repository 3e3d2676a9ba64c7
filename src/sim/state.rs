//! Round state and core simulation types

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::area::MovableArea;
use super::target::{Motion, Target, TargetKind};
use crate::consts::*;
use crate::settings::{GameMode, Settings};
use crate::tuning::Tuning;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Menu open, nothing spawned
    Menu,
    /// Round in progress
    Running,
    /// Round ended, results on screen
    Over,
}

/// Something the page may want to react to (sounds, HUD, results screen)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    RoundStarted { mode: GameMode },
    TargetHit { id: u32, score: u64 },
    /// A hit target finished its hit pose and moved
    TargetRespawned { id: u32 },
    /// Hovering the tracking target earned a point
    TrackingPoint { score: u64 },
    RoundOver {
        reason: String,
        score: u64,
        high_score: u64,
        duration_ticks: u64,
    },
}

pub const REASON_TIME_UP: &str = "Time's up!";
pub const REASON_ENDED: &str = "Ended!";

/// Complete game state (deterministic for a given seed and input stream)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the round RNG was created from
    pub seed: u64,
    pub settings: Settings,
    pub tuning: Tuning,
    pub phase: GamePhase,
    pub score: u64,
    /// Best score this session (not persisted)
    pub high_score: u64,
    /// Points earned by hovering a tracking target
    pub tracking_score: u64,
    /// Frames since the round started
    pub time_ticks: u64,
    /// Live targets (sorted by id for determinism)
    pub targets: Vec<Target>,
    /// Events since the last drain
    pub events: Vec<GameEvent>,
    /// Why the last round ended
    pub over_reason: Option<String>,
    pub(super) rng: Pcg32,
    next_id: u32,
}

impl GameState {
    pub fn new(seed: u64, settings: Settings, tuning: Tuning) -> Self {
        Self {
            seed,
            settings,
            tuning,
            phase: GamePhase::Menu,
            score: 0,
            high_score: 0,
            tracking_score: 0,
            time_ticks: 0,
            targets: Vec::new(),
            events: Vec::new(),
            over_reason: None,
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Movable area for the current target size
    pub fn area(&self, viewport: Vec2) -> MovableArea {
        MovableArea::new(viewport, self.settings.target_size())
    }

    /// Start a round with the current settings
    pub fn start(&mut self, viewport: Vec2) {
        self.score = 0;
        self.tracking_score = 0;
        self.time_ticks = 0;
        self.over_reason = None;
        self.targets.clear();

        let area = self.area(viewport);
        let kind = TargetKind::for_mode(self.settings.mode);
        let count = if self.settings.mode.uses_count() {
            self.settings.count.max(1)
        } else {
            1
        };
        for _ in 0..count {
            self.spawn_target(kind, area);
        }

        self.phase = GamePhase::Running;
        log::info!(
            "Round started: mode={}, speed={}, size={}, targets={}, limit={:?}",
            self.settings.mode.as_str(),
            self.settings.speed.as_str(),
            self.settings.size.as_str(),
            self.targets.len(),
            self.settings.time_limit_secs
        );
        self.events.push(GameEvent::RoundStarted {
            mode: self.settings.mode,
        });
    }

    /// End the running round
    pub fn stop(&mut self, reason: &str) {
        if !self.is_running() {
            return;
        }

        self.phase = GamePhase::Over;
        self.high_score = self.high_score.max(self.score);
        self.over_reason = Some(reason.to_string());
        self.targets.clear();

        log::info!(
            "Round over ({}): score={}, best={}, {} ticks",
            reason,
            self.score,
            self.high_score,
            self.time_ticks
        );
        self.events.push(GameEvent::RoundOver {
            reason: reason.to_string(),
            score: self.score,
            high_score: self.high_score,
            duration_ticks: self.time_ticks,
        });
    }

    /// Spawn a target at a random spot in the area
    pub fn spawn_target(&mut self, kind: TargetKind, area: MovableArea) -> u32 {
        let id = self.next_entity_id();
        let pos = area.random_point(&mut self.rng);
        let motion = Motion::spawn(
            kind,
            pos,
            self.settings.speed_multiplier(),
            &self.tuning,
            &mut self.rng,
        );
        self.targets.push(Target::new(id, motion));
        self.normalize_order();
        id
    }

    /// Register a click/tap on a target. Returns true if it scored.
    ///
    /// Tracking targets only score by hover and ignore clicks.
    pub fn hit_target(&mut self, id: u32) -> bool {
        if !self.is_running() {
            return false;
        }
        let Some(target) = self.targets.iter_mut().find(|t| t.id == id) else {
            return false;
        };
        if target.is_hit() || target.kind() == TargetKind::Tracking {
            return false;
        }

        target.hit_cooldown = HIT_COOLDOWN_TICKS;
        self.score += 1;
        self.events.push(GameEvent::TargetHit {
            id,
            score: self.score,
        });
        true
    }

    /// Award a hover point on a tracking target. Returns true if it scored.
    pub fn award_tracking_point(&mut self, id: u32) -> bool {
        let tracking = self
            .targets
            .iter()
            .any(|t| t.id == id && t.kind() == TargetKind::Tracking);
        if !self.is_running() || !tracking {
            return false;
        }

        self.score += 1;
        self.tracking_score += 1;
        self.events.push(GameEvent::TrackingPoint { score: self.score });
        true
    }

    /// Whole seconds left on the clock, if the round is timed
    pub fn time_left_secs(&self) -> Option<u32> {
        self.settings.time_limit_ticks().map(|limit| {
            let left = limit.saturating_sub(self.time_ticks);
            left.div_ceil(FRAME_RATE as u64) as u32
        })
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn target(&self, id: u32) -> Option<&Target> {
        self.targets.iter().find(|t| t.id == id)
    }

    /// Ensure targets are sorted by ID for deterministic iteration
    pub fn normalize_order(&mut self) {
        self.targets.sort_by_key(|t| t.id);
    }
}
