use lanedash_common::Direction;
use serde::{Deserialize, Serialize};

/// A high-level action that any input source (keyboard, swipe) can produce.
///
/// The session consumes actions, never raw input events, so keyboard and
/// touch share the same game logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Shift one lane left.
    MoveLeft,
    /// Shift one lane right.
    MoveRight,
    /// Leave the start screen.
    Start,
    /// Play again after a run ended.
    Replay,
    /// Flip audio mute. Never reaches the game core.
    ToggleMute,
    /// Unbound input.
    Noop,
}

impl Action {
    /// Lane-change direction, if this is a move.
    pub fn direction(self) -> Option<Direction> {
        match self {
            Self::MoveLeft => Some(Direction::Left),
            Self::MoveRight => Some(Direction::Right),
            _ => None,
        }
    }
}

impl From<Direction> for Action {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Left => Self::MoveLeft,
            Direction::Right => Self::MoveRight,
        }
    }
}
