use lanedash_common::{EffectId, Lane, ObjectId, ObjectKind};
use serde::{Deserialize, Serialize};

/// An object scrolling down one lane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MovingObject {
    pub id: ObjectId,
    pub lane: Lane,
    /// Top edge, measured from the top of the play area.
    pub y: f32,
    pub kind: ObjectKind,
}

impl MovingObject {
    /// Bottom edge for an object of the given height.
    pub fn bottom(&self, height: f32) -> f32 {
        self.y + height
    }
}

/// Cosmetic burst left where a collectible was consumed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CollectionEffect {
    pub id: EffectId,
    pub lane: Lane,
    pub y: f32,
}

/// Dashed road decoration. Wraps vertically; no gameplay effect.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoadMarking {
    pub y: f32,
}

/// Lay out `count` markings evenly over the wrap cycle.
pub fn lay_markings(count: usize, play_height: f32, margin: f32) -> Vec<RoadMarking> {
    if count == 0 {
        return Vec::new();
    }
    let cycle = play_height + 2.0 * margin;
    let spacing = cycle / count as f32;
    (0..count)
        .map(|i| RoadMarking {
            y: -margin + i as f32 * spacing,
        })
        .collect()
}

/// Scroll markings by `speed`, wrapping anything past `play_height + margin`
/// back by one full cycle.
pub fn scroll_markings(markings: &mut [RoadMarking], speed: f32, play_height: f32, margin: f32) {
    let cycle = play_height + 2.0 * margin;
    for marking in markings {
        marking.y += speed;
        if marking.y > play_height + margin {
            marking.y -= cycle;
        }
    }
}
