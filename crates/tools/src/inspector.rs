use lanedash_common::{Lane, ObjectId, ObjectKind, Phase};
use lanedash_kernel::Game;
use serde::Serialize;

/// Game inspector for developer tooling.
///
/// Read-only queries against the game for debugging and run reports.
pub struct GameInspector;

impl GameInspector {
    /// Produce a summary of the game state.
    pub fn summary(game: &Game) -> GameSummary {
        let state = game.state();
        GameSummary {
            phase: state.phase,
            frame: state.frame_count,
            score: state.score,
            lives: state.lives,
            lane: state.player_lane,
            speed: state.speed,
            objects: game.objects().len(),
            hazards: game
                .objects()
                .iter()
                .filter(|o| o.kind == ObjectKind::Hazard)
                .count(),
            effects: game.effects().len(),
            flash: game.flash_active(),
            pending_events: game.events().len(),
            state_hash: game.state_hash(),
        }
    }

    /// Look up one moving object.
    pub fn inspect_object(game: &Game, id: ObjectId) -> Option<ObjectInfo> {
        let o = game.objects().iter().find(|o| o.id == id)?;
        Some(ObjectInfo {
            id: o.id,
            lane: o.lane,
            y: o.y,
            kind: o.kind,
            distance_to_player: game.player_y() - o.bottom(game.config().object_height),
        })
    }

    /// Objects sharing the player's lane, nearest first.
    pub fn threats(game: &Game) -> Vec<ObjectInfo> {
        let lane = game.player_lane();
        let mut infos: Vec<ObjectInfo> = game
            .objects()
            .iter()
            .filter(|o| o.lane == lane)
            .filter_map(|o| Self::inspect_object(game, o.id))
            .collect();
        infos.sort_by(|a, b| a.distance_to_player.total_cmp(&b.distance_to_player));
        infos
    }
}

/// Summary of game state for the inspector.
#[derive(Debug, Clone, Serialize)]
pub struct GameSummary {
    pub phase: Phase,
    pub frame: u64,
    pub score: u32,
    pub lives: u32,
    pub lane: Lane,
    pub speed: f32,
    pub objects: usize,
    pub hazards: usize,
    pub effects: usize,
    pub flash: bool,
    pub pending_events: usize,
    pub state_hash: u64,
}

impl std::fmt::Display for GameSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Game: phase={} frame={} score={} lives={} lane={} speed={:.3} objects={} hazards={} effects={} hash={:#x}",
            self.phase,
            self.frame,
            self.score,
            self.lives,
            self.lane.0,
            self.speed,
            self.objects,
            self.hazards,
            self.effects,
            self.state_hash,
        )
    }
}

/// Detail for a single moving object.
#[derive(Debug, Clone, Serialize)]
pub struct ObjectInfo {
    pub id: ObjectId,
    pub lane: Lane,
    pub y: f32,
    pub kind: ObjectKind,
    /// Gap between the object's bottom edge and the player's top edge.
    /// Negative once the object overlaps the player row.
    pub distance_to_player: f32,
}

impl std::fmt::Display for ObjectInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Object [{}] {:?} lane={} y={:.1} gap={:.1}",
            self.id.0, self.kind, self.lane.0, self.y, self.distance_to_player
        )
    }
}
