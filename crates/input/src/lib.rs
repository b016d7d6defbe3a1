//! Input: keyboard and swipe gestures mapped to shared actions.
//!
//! # Invariants
//! - The kernel and session consume actions, never raw input events.
//! - Keyboard and touch produce the same action graph.

pub mod action;
pub mod keymap;
pub mod swipe;

pub use action::Action;
pub use keymap::action_for_key;
pub use swipe::SwipeTracker;
