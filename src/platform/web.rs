//! Browser binding
//!
//! The page owns rendering and input normalization; it calls `frame` from
//! `requestAnimationFrame` and reads positions back to place the target
//! elements.

use glam::Vec2;
use js_sys::Float32Array;
use wasm_bindgen::prelude::*;

use crate::settings::Settings;
use crate::sim::{GameState, TickInput, tick};
use crate::tuning::Tuning;

/// Game handle exported to JavaScript
#[wasm_bindgen]
pub struct AimTrainer {
    state: GameState,
    /// Hits and stop requests queued since the last frame
    input: TickInput,
}

#[wasm_bindgen]
impl AimTrainer {
    #[wasm_bindgen(constructor)]
    pub fn new() -> AimTrainer {
        console_error_panic_hook::set_once();
        // A second handle on the same page finds the logger already set
        let _ = console_log::init_with_level(log::Level::Info);

        let seed = super::entropy_seed();
        log::info!("Aim trainer initialized with seed: {}", seed);

        let input = TickInput {
            viewport: window_viewport().unwrap_or(Vec2::new(1280.0, 720.0)),
            ..Default::default()
        };

        AimTrainer {
            state: GameState::new(seed, Settings::load(), Tuning::default()),
            input,
        }
    }

    /// Apply raw menu values; unknown values fall back to defaults
    pub fn configure(&mut self, mode: &str, speed: &str, size: &str, count: u32, time_limit_secs: u32) {
        let settings = Settings::from_menu(mode, speed, size, count, time_limit_secs);
        settings.save();
        self.state.settings = settings;
    }

    /// Apply tuning overrides as JSON. Returns false if they were rejected.
    pub fn set_tuning(&mut self, json: &str) -> bool {
        match Tuning::from_json(json) {
            Some(tuning) => {
                self.state.tuning = tuning;
                true
            }
            None => false,
        }
    }

    pub fn start(&mut self) {
        self.refresh_viewport();
        self.input.hits.clear();
        self.input.stop = false;
        self.state.start(self.input.viewport);
    }

    /// Advance one frame; `hovered` is the target id under the pointer or -1
    pub fn frame(&mut self, hovered: i32) {
        self.refresh_viewport();
        self.input.hovered = u32::try_from(hovered).ok();
        tick(&mut self.state, &self.input);

        // Clear one-shot inputs after processing
        self.input.hits.clear();
        self.input.stop = false;
    }

    /// Queue a click/tap on a target for the next frame
    pub fn hit(&mut self, id: u32) {
        self.input.hits.push(id);
    }

    /// Queue the end of the round for the next frame
    pub fn stop(&mut self) {
        self.input.stop = true;
    }

    /// Flat `[id, x, y, hit, ...]` for every live target
    pub fn positions(&self) -> Float32Array {
        let flat: Vec<f32> = self
            .state
            .targets
            .iter()
            .flat_map(|t| {
                let pos = t.pos();
                [t.id as f32, pos.x, pos.y, if t.is_hit() { 1.0 } else { 0.0 }]
            })
            .collect();
        Float32Array::from(flat.as_slice())
    }

    pub fn target_size(&self) -> f32 {
        self.state.settings.target_size()
    }

    pub fn score(&self) -> f64 {
        self.state.score as f64
    }

    pub fn high_score(&self) -> f64 {
        self.state.high_score as f64
    }

    pub fn running(&self) -> bool {
        self.state.is_running()
    }

    /// Seconds left, or -1 when the round is untimed
    pub fn time_left(&self) -> i32 {
        self.state.time_left_secs().map(|s| s as i32).unwrap_or(-1)
    }

    pub fn over_reason(&self) -> Option<String> {
        self.state.over_reason.clone()
    }

    /// Events since the last call, as a JSON array
    pub fn take_events(&mut self) -> String {
        let events = self.state.drain_events();
        serde_json::to_string(&events).unwrap_or_else(|e| {
            log::warn!("Could not encode events: {}", e);
            "[]".to_string()
        })
    }
}

impl AimTrainer {
    fn refresh_viewport(&mut self) {
        if let Some(viewport) = window_viewport() {
            self.input.viewport = viewport;
        }
    }
}

impl Default for AimTrainer {
    fn default() -> Self {
        Self::new()
    }
}

/// Current `innerWidth` x `innerHeight`
fn window_viewport() -> Option<Vec2> {
    let window = web_sys::window()?;
    let w = window.inner_width().ok()?.as_f64()?;
    let h = window.inner_height().ok()?.as_f64()?;
    Some(Vec2::new(w as f32, h as f32))
}
