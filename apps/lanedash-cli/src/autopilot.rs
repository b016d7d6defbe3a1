use lanedash_common::{Lane, ObjectKind};
use lanedash_input::Action;
use lanedash_kernel::{Game, GameEvent};

/// Gap below which a hazard in the player's lane triggers a dodge.
const DODGE_GAP: f32 = 160.0;

/// Simple deterministic driver for headless runs.
///
/// Dodges the nearest hazard in the player's lane toward the safest
/// neighbour, otherwise drifts toward the nearest collectible.
pub fn choose(game: &Game) -> Action {
    let lane = game.player_lane();
    let lanes = game.config().lanes;

    if hazard_gap(game, lane).is_some_and(|gap| gap < DODGE_GAP) {
        let left = (lane.0 > 0).then(|| Lane(lane.0 - 1));
        let right = (lane.0 + 1 < lanes).then(|| Lane(lane.0 + 1));
        let safety = |l: Option<Lane>| l.map(|l| hazard_gap(game, l).unwrap_or(f32::MAX));
        return match (safety(left), safety(right)) {
            (Some(l), Some(r)) if r > l => Action::MoveRight,
            (Some(_), _) => Action::MoveLeft,
            (None, Some(_)) => Action::MoveRight,
            (None, None) => Action::Noop,
        };
    }

    let target = game
        .objects()
        .iter()
        .filter(|o| o.kind == ObjectKind::Collectible && gap_of(game, o.y) >= 0.0)
        .min_by(|a, b| gap_of(game, a.y).total_cmp(&gap_of(game, b.y)))
        .map(|o| o.lane);
    match target {
        Some(t) if t.0 < lane.0 => Action::MoveLeft,
        Some(t) if t.0 > lane.0 => Action::MoveRight,
        _ => Action::Noop,
    }
}

/// Play one headless frame: autopilot move, cosmetics, step. The frame's
/// events are drained and returned so the log stays bounded.
pub fn drive(game: &mut Game) -> Vec<GameEvent> {
    if let Some(direction) = choose(game).direction() {
        game.move_player(direction);
    }
    game.tick_cosmetics();
    game.advance();
    game.drain_events()
}

fn gap_of(game: &Game, y: f32) -> f32 {
    game.player_y() - (y + game.config().object_height)
}

/// Gap to the nearest hazard in `lane` still above the player, if any.
fn hazard_gap(game: &Game, lane: Lane) -> Option<f32> {
    game.objects()
        .iter()
        .filter(|o| o.lane == lane && o.kind == ObjectKind::Hazard)
        .map(|o| gap_of(game, o.y))
        .filter(|gap| *gap >= -game.config().object_height)
        .min_by(f32::total_cmp)
}
