use serde::{Deserialize, Serialize};

/// Identifier of a moving object. Allocated from a per-game counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ObjectId(pub u64);

/// Identifier of a collection effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EffectId(pub u64);

/// One of the discrete horizontal tracks, counted from the left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Lane(pub usize);

impl Lane {
    /// Clamp into `[0, lanes - 1]`. A zero lane count collapses to lane 0.
    pub fn clamped(self, lanes: usize) -> Self {
        Self(self.0.min(lanes.saturating_sub(1)))
    }

    /// Shift one lane in `direction`, never leaving `[0, lanes - 1]`.
    pub fn shifted(self, direction: Direction, lanes: usize) -> Self {
        let next = match direction {
            Direction::Left => self.0.saturating_sub(1),
            Direction::Right => self.0.saturating_add(1),
        };
        Self(next).clamped(lanes)
    }
}

/// Lane-change direction produced by the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
}

/// What happens when the player meets an object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectKind {
    /// Costs a life.
    Hazard,
    /// Adds one point.
    Collectible,
}

/// Top-level game phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    Start,
    Playing,
    GameOver,
    Won,
}

impl Phase {
    /// Whether the phase ends a run. Only a reset leaves a terminal phase.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::GameOver | Self::Won)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Start => "start",
            Self::Playing => "playing",
            Self::GameOver => "game-over",
            Self::Won => "won",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn shift_left_stops_at_zero() {
        let mut lane = Lane(1);
        for _ in 0..(3 + 5) {
            lane = lane.shifted(Direction::Left, 3);
        }
        assert_eq!(lane, Lane(0));
    }

    #[test]
    fn shift_right_stops_at_last_lane() {
        let lane = Lane(2).shifted(Direction::Right, 3);
        assert_eq!(lane, Lane(2));
    }

    #[test]
    fn clamp_handles_out_of_range_and_zero_lanes() {
        assert_eq!(Lane(9).clamped(3), Lane(2));
        assert_eq!(Lane(4).clamped(0), Lane(0));
    }

    #[test]
    fn terminal_phases() {
        assert!(Phase::GameOver.is_terminal());
        assert!(Phase::Won.is_terminal());
        assert!(!Phase::Playing.is_terminal());
        assert!(!Phase::Start.is_terminal());
        assert_eq!(Phase::default(), Phase::Start);
    }

    proptest! {
        #[test]
        fn shifted_lane_always_in_range(
            lanes in 1usize..8,
            start in 0usize..8,
            moves in proptest::collection::vec(any::<bool>(), 0..64),
        ) {
            let mut lane = Lane(start).clamped(lanes);
            for right in moves {
                let dir = if right { Direction::Right } else { Direction::Left };
                lane = lane.shifted(dir, lanes);
                prop_assert!(lane.0 < lanes);
            }
        }
    }
}
