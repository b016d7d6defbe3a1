//! Game Kernel: authoritative game state, per-frame simulation step, spawn policy.
//!
//! # Invariants
//! - The step is a pure function of state, lane slot and seeded RNG.
//! - All state mutations flow through explicit operations and are logged as events.
//! - Stepping only happens in the `Playing` phase.

pub mod events;
pub mod expiry;
pub mod game;
pub mod objects;
pub mod spawn;

pub use events::{Cue, GameEvent};
pub use expiry::ExpiryQueue;
pub use game::{CosmeticKey, Game, GameState, StepReport};
pub use objects::{CollectionEffect, MovingObject, RoadMarking};
