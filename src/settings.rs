//! Round settings chosen in the menu
//!
//! Persisted in LocalStorage so the menu reopens with the last choices.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Game mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum GameMode {
    /// Static targets, no time limit unless one is set
    #[default]
    Classic,
    /// Static targets against the clock
    TimeTrial,
    /// One wandering target, points while hovered
    Tracking,
    /// Targets strafing along horizontal/vertical/diagonal lanes
    Strafe,
}

impl GameMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameMode::Classic => "classic",
            GameMode::TimeTrial => "timetrial",
            GameMode::Tracking => "tracking",
            GameMode::Strafe => "strafe",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "classic" => Some(GameMode::Classic),
            "timetrial" | "time-trial" => Some(GameMode::TimeTrial),
            "tracking" => Some(GameMode::Tracking),
            "strafe" => Some(GameMode::Strafe),
            _ => None,
        }
    }

    /// Whether targets move in this mode (speed setting applies)
    pub fn has_moving_targets(&self) -> bool {
        matches!(self, GameMode::Tracking | GameMode::Strafe)
    }

    /// Whether the target count setting applies
    pub fn uses_count(&self) -> bool {
        *self != GameMode::Tracking
    }
}

/// Target speed difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SpeedPreset {
    Slow,
    #[default]
    Normal,
    Fast,
    Insane,
}

impl SpeedPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpeedPreset::Slow => "slow",
            SpeedPreset::Normal => "normal",
            SpeedPreset::Fast => "fast",
            SpeedPreset::Insane => "insane",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "slow" => Some(SpeedPreset::Slow),
            "normal" => Some(SpeedPreset::Normal),
            "fast" => Some(SpeedPreset::Fast),
            "insane" => Some(SpeedPreset::Insane),
            _ => None,
        }
    }

    /// Scale applied to every target speed
    pub fn multiplier(&self) -> f32 {
        match self {
            SpeedPreset::Slow => 0.5,
            SpeedPreset::Normal => 1.0,
            SpeedPreset::Fast => 1.5,
            SpeedPreset::Insane => 2.5,
        }
    }

    /// Multiplier for a raw menu value, 1.0 when unrecognized
    pub fn multiplier_for(s: &str) -> f32 {
        Self::from_str(s).unwrap_or_default().multiplier()
    }
}

/// Target size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SizePreset {
    Small,
    #[default]
    Medium,
    Large,
}

impl SizePreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            SizePreset::Small => "small",
            SizePreset::Medium => "medium",
            SizePreset::Large => "large",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "small" => Some(SizePreset::Small),
            "medium" | "med" => Some(SizePreset::Medium),
            "large" => Some(SizePreset::Large),
            _ => None,
        }
    }

    /// Edge length of a target in CSS pixels
    pub fn pixels(&self) -> f32 {
        match self {
            SizePreset::Small => TARGET_SIZE_SMALL,
            SizePreset::Medium => TARGET_SIZE_MEDIUM,
            SizePreset::Large => TARGET_SIZE_LARGE,
        }
    }
}

/// Round settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub mode: GameMode,
    pub speed: SpeedPreset,
    pub size: SizePreset,
    /// Number of targets on screen (ignored in tracking mode)
    pub count: u32,
    /// Round length; `None` runs until stopped
    pub time_limit_secs: Option<u32>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mode: GameMode::Classic,
            speed: SpeedPreset::Normal,
            size: SizePreset::Medium,
            count: 3,
            time_limit_secs: None,
        }
    }
}

impl Settings {
    /// Build settings from raw menu values, falling back per field
    pub fn from_menu(mode: &str, speed: &str, size: &str, count: u32, time_limit_secs: u32) -> Self {
        Self {
            mode: GameMode::from_str(mode).unwrap_or_default(),
            speed: SpeedPreset::from_str(speed).unwrap_or_default(),
            size: SizePreset::from_str(size).unwrap_or_default(),
            count: 1,
            time_limit_secs: (time_limit_secs > 0).then_some(time_limit_secs),
        }
        .with_count(count)
    }

    /// Set the target count (at least one)
    pub fn with_count(mut self, count: u32) -> Self {
        self.count = count.max(1);
        self
    }

    pub fn speed_multiplier(&self) -> f32 {
        self.speed.multiplier()
    }

    pub fn target_size(&self) -> f32 {
        self.size.pixels()
    }

    /// Round length in frames
    pub fn time_limit_ticks(&self) -> Option<u64> {
        self.time_limit_secs
            .map(|secs| secs as u64 * FRAME_RATE as u64)
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "aim_trainer_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match serde_json::from_str(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Stored settings unreadable: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speed_multipliers() {
        assert_eq!(SpeedPreset::multiplier_for("slow"), 0.5);
        assert_eq!(SpeedPreset::multiplier_for("normal"), 1.0);
        assert_eq!(SpeedPreset::multiplier_for("FAST"), 1.5);
        assert_eq!(SpeedPreset::multiplier_for("insane"), 2.5);
        assert_eq!(SpeedPreset::multiplier_for("ludicrous"), 1.0);
        assert_eq!(SpeedPreset::multiplier_for(""), 1.0);
    }

    #[test]
    fn test_size_fallback() {
        assert_eq!(SizePreset::from_str("small").map(|s| s.pixels()), Some(40.0));
        assert_eq!(SizePreset::from_str("large").map(|s| s.pixels()), Some(80.0));
        assert_eq!(SizePreset::from_str("huge"), None);
        assert_eq!(SizePreset::default().pixels(), 60.0);
    }

    #[test]
    fn test_from_menu() {
        let s = Settings::from_menu("strafe", "fast", "small", 0, 30);
        assert_eq!(s.mode, GameMode::Strafe);
        assert_eq!(s.speed_multiplier(), 1.5);
        assert_eq!(s.target_size(), 40.0);
        assert_eq!(s.count, 1);
        assert_eq!(s.time_limit_ticks(), Some(30 * 60));

        let s = Settings::from_menu("bogus", "bogus", "bogus", 5, 0);
        assert_eq!(s.mode, GameMode::Classic);
        assert_eq!(s.speed_multiplier(), 1.0);
        assert_eq!(s.target_size(), 60.0);
        assert_eq!(s.count, 5);
        assert_eq!(s.time_limit_ticks(), None);
    }

    #[test]
    fn test_mode_flags() {
        assert!(GameMode::Tracking.has_moving_targets());
        assert!(GameMode::Strafe.has_moving_targets());
        assert!(!GameMode::TimeTrial.has_moving_targets());
        assert!(!GameMode::Tracking.uses_count());
        assert_eq!(GameMode::from_str(GameMode::TimeTrial.as_str()), Some(GameMode::TimeTrial));
    }

    #[test]
    fn test_settings_json() {
        let s: Settings = serde_json::from_str(r#"{ "mode": "Tracking" }"#).unwrap();
        assert_eq!(s.mode, GameMode::Tracking);
        assert_eq!(s.count, 3);
    }
}
