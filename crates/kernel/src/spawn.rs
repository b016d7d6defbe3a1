//! Spawn policy: lane-crowding guard plus weighted kind selection.

use std::collections::BTreeSet;

use lanedash_common::{Lane, ObjectKind};
use rand::Rng;

use crate::objects::MovingObject;

/// Where and what to spawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpawnPlan {
    pub lane: Lane,
    pub kind: ObjectKind,
}

/// Lanes holding an object whose top edge is above `band`.
pub fn occupied_lanes(objects: &[MovingObject], band: f32) -> BTreeSet<Lane> {
    objects
        .iter()
        .filter(|obj| obj.y < band)
        .map(|obj| obj.lane)
        .collect()
}

/// Pick a free lane uniformly and a kind by weighted coin flip.
///
/// Returns `None` when every lane is occupied.
pub fn choose_spawn<R: Rng + ?Sized>(
    rng: &mut R,
    lanes: usize,
    occupied: &BTreeSet<Lane>,
    collectible_chance: f64,
) -> Option<SpawnPlan> {
    let free: Vec<Lane> = (0..lanes)
        .map(Lane)
        .filter(|lane| !occupied.contains(lane))
        .collect();
    if free.is_empty() {
        return None;
    }
    let lane = free[rng.gen_range(0..free.len())];
    let chance = if (0.0..=1.0).contains(&collectible_chance) {
        collectible_chance
    } else {
        0.0
    };
    let kind = if rng.gen_bool(chance) {
        ObjectKind::Collectible
    } else {
        ObjectKind::Hazard
    };
    Some(SpawnPlan { lane, kind })
}
