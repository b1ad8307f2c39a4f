//! Game settings and tuning
//!
//! Persisted separately from anything else in LocalStorage on the web;
//! read from an optional JSON file by the native binary.

use anyhow::{Context, ensure};
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Difficulty and scoring constants applied on score/kill transitions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Points awarded for reaching the water row
    pub score_gain: i64,
    /// Points lost when an enemy catches the player
    pub score_penalty: i64,
    /// Speed bound multiplier after a score (uncapped)
    pub speed_up_factor: f32,
    /// Speed bound multiplier after a kill (floored)
    pub slow_down_factor: f32,
    /// Lowest value the minimum enemy speed may drop to
    pub min_speed_floor: f32,
    /// Lowest value the maximum enemy speed may drop to
    pub max_speed_floor: f32,
    /// Pixels an enemy must enter the player's column to register a hit
    pub hit_offset: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            score_gain: 20,
            score_penalty: 10,
            speed_up_factor: 1.2,
            slow_down_factor: 0.8,
            min_speed_floor: 10.0,
            max_speed_floor: 40.0,
            hit_offset: 40.0,
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Score and difficulty constants
    pub tuning: Tuning,

    // === Enemies ===
    /// Initial minimum enemy speed (pixels/s)
    pub min_enemy_speed: f32,
    /// Initial maximum enemy speed (pixels/s)
    pub max_enemy_speed: f32,
    /// Number of concurrent enemies
    pub enemy_count: usize,

    // === Run ===
    /// Fixed RNG seed (None = seed from the clock)
    pub seed: Option<u64>,
    /// Frames simulated by the headless demo
    pub demo_frames: u32,

    // === HUD ===
    /// Show FPS counter
    pub show_fps: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tuning: Tuning::default(),
            min_enemy_speed: MIN_ENEMY_SPEED,
            max_enemy_speed: MAX_ENEMY_SPEED,
            enemy_count: ENEMY_COUNT,
            seed: None,
            demo_frames: 60 * 60,
            show_fps: false,
        }
    }
}

impl Settings {
    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let settings: Settings =
            serde_json::from_str(json).context("settings are not valid JSON")?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject values that would stall or break the simulation
    pub fn validate(&self) -> anyhow::Result<()> {
        let t = &self.tuning;
        for (name, value) in [
            ("min_enemy_speed", self.min_enemy_speed),
            ("max_enemy_speed", self.max_enemy_speed),
            ("speed_up_factor", t.speed_up_factor),
            ("slow_down_factor", t.slow_down_factor),
            ("min_speed_floor", t.min_speed_floor),
            ("max_speed_floor", t.max_speed_floor),
            ("hit_offset", t.hit_offset),
        ] {
            ensure!(value.is_finite(), "{} must be finite (got {})", name, value);
        }
        ensure!(
            self.min_enemy_speed > 0.0 && self.min_enemy_speed <= self.max_enemy_speed,
            "enemy speed bounds must satisfy 0 < min <= max (got {}..{})",
            self.min_enemy_speed,
            self.max_enemy_speed
        );
        ensure!(
            t.speed_up_factor > 0.0 && t.slow_down_factor > 0.0,
            "speed factors must be positive"
        );
        ensure!(
            t.min_speed_floor > 0.0 && t.min_speed_floor <= t.max_speed_floor,
            "speed floors must satisfy 0 < min floor <= max floor"
        );
        ensure!(
            t.hit_offset >= 0.0 && t.hit_offset * 2.0 < COLUMN_WIDTH,
            "hit offset {} leaves no hitbox in a {}px column",
            t.hit_offset,
            COLUMN_WIDTH
        );
        Ok(())
    }

    /// LocalStorage key
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "bug_crossing_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {:#}", e),
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
            match serde_json::to_string(self) {
                Ok(json) => match storage.set_item(Self::STORAGE_KEY, &json) {
                    Ok(()) => log::info!("Settings saved"),
                    Err(e) => log::warn!("Failed to save settings: {:?}", e),
                },
                Err(e) => log::warn!("Failed to serialize settings: {}", e),
            }
        }
    }

    /// Load settings from a JSON file (native only)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_file(path: &std::path::Path) -> anyhow::Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read settings from {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("invalid settings in {}", path.display()))
    }
}
