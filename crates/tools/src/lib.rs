//! Developer Tooling: read-only game inspection.

mod inspector;

pub use inspector::{GameInspector, GameSummary, ObjectInfo};
