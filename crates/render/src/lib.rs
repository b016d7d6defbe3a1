//! Presentation Adapter: renderer-agnostic interface.
//!
//! # Invariants
//! - Renderers cannot mutate game truth.
//! - Render output derives only from game state and view.
//!
//! The text renderer draws the lanes as columns for terminals, logs and tests.

mod renderer;

pub use renderer::{RenderView, Renderer, TextRenderer};
