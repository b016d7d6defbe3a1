use serde::{Deserialize, Serialize};
use std::path::Path;

/// Errors from loading or validating a [`GameConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Constants consumed by the game core. Fixed at startup.
///
/// Distances are in play-area pixels measured from the top edge; speeds are in
/// pixels per frame; durations are in frames.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of lanes.
    pub lanes: usize,
    /// Lives at the start of a run.
    pub initial_lives: u32,
    /// Score that wins the run.
    pub win_score: u32,
    /// Lane the player starts in (clamped to the lane count).
    pub start_lane: usize,
    /// Scroll speed at the start of a run.
    pub initial_speed: f32,
    /// Added to the scroll speed every frame.
    pub speed_increment: f32,
    /// Frames between spawn attempts.
    pub spawn_interval: u64,
    /// Objects whose top edge is above this line count as occupying their lane.
    pub spawn_band: f32,
    /// Probability that a spawned object is a collectible.
    pub collectible_chance: f64,
    /// Height of a moving object.
    pub object_height: f32,
    /// Distance from the bottom of the play area to the player's top edge.
    pub player_offset: f32,
    /// Play-area height until the presentation layer reports otherwise.
    pub play_height: f32,
    /// Road marking scroll per frame.
    pub marking_speed: f32,
    /// Number of road markings laid out on reset.
    pub marking_count: usize,
    /// How far a marking travels past either edge before wrapping.
    pub marking_margin: f32,
    /// Frames the collision flash stays visible.
    pub flash_frames: u64,
    /// Frames a collection effect stays visible.
    pub effect_frames: u64,
    /// Seed for the spawn RNG.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            lanes: 3,
            initial_lives: 3,
            win_score: 30,
            start_lane: 1,
            initial_speed: 4.0,
            speed_increment: 0.002,
            spawn_interval: 45,
            spawn_band: 200.0,
            collectible_chance: 0.3,
            object_height: 60.0,
            player_offset: 120.0,
            play_height: 600.0,
            marking_speed: 6.0,
            marking_count: 6,
            marking_margin: 40.0,
            flash_frames: 18,
            effect_frames: 30,
            seed: 42,
        }
    }
}

impl GameConfig {
    /// Parse a YAML document. Missing fields fall back to the defaults.
    pub fn from_yaml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a YAML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path.as_ref())?;
        Self::from_yaml_str(&source)
    }

    /// Serialize to YAML.
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Reject values the simulation cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: &str| Err(ConfigError::Invalid(msg.to_string()));
        if self.lanes == 0 {
            return invalid("lanes must be at least 1");
        }
        if self.initial_lives == 0 {
            return invalid("initial_lives must be at least 1");
        }
        if self.win_score == 0 {
            return invalid("win_score must be at least 1");
        }
        if self.spawn_interval == 0 {
            return invalid("spawn_interval must be at least 1");
        }
        if !positive(self.initial_speed) {
            return invalid("initial_speed must be positive");
        }
        if self.speed_increment.is_nan() || self.speed_increment < 0.0 {
            return invalid("speed_increment must not be negative");
        }
        if !positive(self.object_height) || !positive(self.play_height) {
            return invalid("object_height and play_height must be positive");
        }
        if !(0.0..=self.play_height).contains(&self.player_offset) {
            return invalid("player_offset must lie inside the play area");
        }
        if !(0.0..=1.0).contains(&self.collectible_chance) {
            return invalid("collectible_chance must be within [0, 1]");
        }
        Ok(())
    }

    /// Top edge of the player sprite for a given play-area height.
    pub fn player_y(&self, play_height: f32) -> f32 {
        play_height - self.player_offset
    }
}

fn positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}
