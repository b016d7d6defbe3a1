//! Shared value types for the lanedash workspace.
//!
//! # Invariants
//! - A `Lane` produced by `shifted` or `clamped` is always below the lane count.
//! - `GameConfig` values are fixed at startup; nothing tunes them at runtime.

pub mod config;
pub mod lane_slot;
pub mod types;

pub use config::{ConfigError, GameConfig};
pub use lane_slot::LaneSlot;
pub use types::{Direction, EffectId, Lane, ObjectId, ObjectKind, Phase};
