//! Aim Trainer entry point
//!
//! On the web the page drives `platform::web::AimTrainer` directly. Natively
//! this runs a headless demo round per mode with a scripted player and logs
//! the results, which is handy for eyeballing tuning changes.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use aim_trainer::consts::{FRAME_DT, FRAME_RATE};
    use aim_trainer::platform::entropy_seed;
    use aim_trainer::sim::{GameEvent, GameState, TargetKind, TickInput, tick};
    use aim_trainer::{GameMode, Settings, SpeedPreset, Tuning};
    use glam::Vec2;

    env_logger::init();
    log::info!("Aim Trainer (native) starting...");

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(entropy_seed);
    let tuning = std::env::var("AIM_TUNING")
        .ok()
        .and_then(|path| std::fs::read_to_string(path).ok())
        .and_then(|json| Tuning::from_json(&json))
        .unwrap_or_default();
    let viewport = Vec2::new(1280.0, 720.0);

    for mode in [GameMode::Classic, GameMode::TimeTrial, GameMode::Tracking, GameMode::Strafe] {
        let settings = Settings {
            mode,
            speed: SpeedPreset::Fast,
            time_limit_secs: Some(10),
            ..Settings::default()
        }
        .with_count(3);
        let mut state = GameState::new(seed, settings, tuning.clone());
        state.start(viewport);

        let mut frame = 0u64;
        while state.is_running() {
            frame += 1;
            let mut input = TickInput {
                viewport,
                ..Default::default()
            };

            // Scripted player: clicks something twice a second, tracks with
            // the pointer about two thirds of the time
            if frame % (FRAME_RATE as u64 / 2) == 0 {
                if let Some(t) = state.targets.iter().find(|t| !t.is_hit()) {
                    input.hits.push(t.id);
                }
            }
            if (frame / 40) % 3 != 2 {
                input.hovered = state
                    .targets
                    .iter()
                    .find(|t| t.kind() == TargetKind::Tracking)
                    .map(|t| t.id);
            }

            tick(&mut state, &input);
        }

        for event in state.drain_events() {
            if let GameEvent::RoundOver {
                reason,
                score,
                duration_ticks,
                ..
            } = event
            {
                println!(
                    "{:>9}: {} score {} in {:.1}s (tracking {})",
                    mode.as_str(),
                    reason,
                    score,
                    duration_ticks as f32 * FRAME_DT,
                    state.tracking_score
                );
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::AimTrainer, this is just to satisfy the compiler
}
