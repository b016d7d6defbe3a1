use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering::{AcqRel, Acquire, Release};

use crate::types::{Direction, Lane};

/// Single-slot holder for the player's current lane.
///
/// Input handlers write, the simulation step reads. There is no queue: several
/// writes between two frames leave only the last one in effect.
#[derive(Debug)]
pub struct LaneSlot {
    lane: AtomicUsize,
    lanes: usize,
}

impl LaneSlot {
    /// Create a slot for `lanes` lanes holding `initial` (clamped).
    pub fn new(initial: Lane, lanes: usize) -> Self {
        Self {
            lane: AtomicUsize::new(initial.clamped(lanes).0),
            lanes,
        }
    }

    /// Current lane.
    pub fn get(&self) -> Lane {
        Lane(self.lane.load(Acquire))
    }

    /// Replace the lane, clamping into range.
    pub fn set(&self, lane: Lane) {
        let lane = lane.clamped(self.lanes);
        self.lane.store(lane.0, Release);
    }

    /// Shift one lane in `direction`. Returns the lane now held.
    pub fn shift(&self, direction: Direction) -> Lane {
        let lanes = self.lanes;
        let next = |cur: usize| Lane(cur).shifted(direction, lanes);
        let step = |cur| Some(next(cur).0);
        let prev = match self.lane.fetch_update(AcqRel, Acquire, step) {
            Ok(prev) | Err(prev) => prev,
        };
        next(prev)
    }

    /// Number of lanes the slot clamps to.
    pub fn lanes(&self) -> usize {
        self.lanes
    }
}
