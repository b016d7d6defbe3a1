//! Session: drives the game kernel from display-refresh ticks.
//!
//! # Invariants
//! - At most one frame request is pending; leaving `Playing` cancels it.
//! - Input lands in the lane slot immediately; the next step reads it.
//! - Audio mute lives here and never reaches the kernel.

mod audio;
mod clock;
mod scheduler;
mod session;

pub use audio::{AudioSink, MutableAudio, RecordingAudio, TracingAudio};
pub use clock::{FixedTimestep, FrameTimer};
pub use scheduler::{FrameRequest, FrameScheduler};
pub use session::{PumpStats, Session};
