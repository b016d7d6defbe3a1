use lanedash_common::{EffectId, Lane, ObjectId, ObjectKind, Phase};
use serde::{Deserialize, Serialize};

/// Named audio cue. Fire-and-forget: the kernel never learns whether it played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cue {
    Collect,
    Crash,
    GameOver,
    Win,
    MusicStart,
    MusicStop,
}

/// An event record produced by every gameplay mutation.
///
/// Collaborators drain the log after each frame: audio consumes `Cue`s, the
/// CLI can dump the whole stream as JSON lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// An object entered above the visible area.
    Spawned {
        id: ObjectId,
        lane: Lane,
        kind: ObjectKind,
    },
    /// A hazard reached the player. Carries the lives left afterwards.
    HazardHit {
        id: ObjectId,
        lane: Lane,
        lives_left: u32,
    },
    /// A collectible was consumed. Carries the new score.
    Collected {
        id: ObjectId,
        lane: Lane,
        score: u32,
        effect: EffectId,
    },
    /// An object scrolled off the bottom without touching the player.
    Missed {
        id: ObjectId,
        kind: ObjectKind,
    },
    PhaseChanged {
        from: Phase,
        to: Phase,
    },
    Cue(Cue),
}

impl GameEvent {
    /// The cue carried by this event, if any.
    pub fn cue(&self) -> Option<Cue> {
        match self {
            Self::Cue(cue) => Some(*cue),
            _ => None,
        }
    }
}
