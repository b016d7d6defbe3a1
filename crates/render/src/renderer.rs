use lanedash_common::{Lane, ObjectKind, Phase};
use lanedash_kernel::Game;

/// Output grid configuration.
#[derive(Debug, Clone, Copy)]
pub struct RenderView {
    /// Text rows the play area is squeezed into.
    pub rows: usize,
    /// Characters per lane.
    pub lane_width: usize,
}

impl Default for RenderView {
    fn default() -> Self {
        Self {
            rows: 20,
            lane_width: 5,
        }
    }
}

/// Renderer-agnostic interface. All renderers implement this trait.
///
/// The renderer reads game state and a view, then produces output. It never
/// mutates the game.
pub trait Renderer {
    type Output;

    fn render(&self, game: &Game, view: &RenderView) -> Self::Output;
}

/// Text renderer: HUD line, lane grid, modal line.
///
/// Glyphs: `X` hazard, `$` collectible, `*` collection effect, `A` player,
/// `:` road marking on lane dividers, `|` plain divider.
#[derive(Debug, Default)]
pub struct TextRenderer;

impl TextRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for TextRenderer {
    type Output = String;

    fn render(&self, game: &Game, view: &RenderView) -> String {
        let rows = view.rows.max(1);
        let lanes = game.config().lanes;
        let lane_width = view.lane_width.max(1);
        let height = game.play_height();
        let state = game.state();

        let row_of = |y: f32| -> Option<usize> {
            if y < 0.0 || y >= height {
                return None;
            }
            Some((((y / height) * rows as f32) as usize).min(rows - 1))
        };

        let mut grid = vec![vec![' '; lanes]; rows];
        for effect in game.effects() {
            if let Some(r) = row_of(effect.y) {
                put(&mut grid, r, effect.lane, lanes, '*');
            }
        }
        for obj in game.objects() {
            if let Some(r) = row_of(obj.y) {
                let glyph = match obj.kind {
                    ObjectKind::Hazard => 'X',
                    ObjectKind::Collectible => '$',
                };
                put(&mut grid, r, obj.lane, lanes, glyph);
            }
        }
        if let Some(r) = row_of(game.player_y()) {
            put(&mut grid, r, game.player_lane(), lanes, 'A');
        }

        let mut marked = vec![false; rows];
        for marking in game.markings() {
            if let Some(r) = row_of(marking.y) {
                marked[r] = true;
            }
        }

        let mut out = String::new();
        out.push_str(&format!(
            "score={} lives={} speed={:.2} frame={} phase={}{}\n",
            state.score,
            state.lives,
            state.speed,
            state.frame_count,
            state.phase,
            if game.flash_active() { " !CRASH!" } else { "" }
        ));
        for (r, row) in grid.iter().enumerate() {
            let divider = if marked[r] { ':' } else { '|' };
            out.push('|');
            for (i, cell) in row.iter().enumerate() {
                let pad = lane_width - 1;
                out.push_str(&" ".repeat(pad / 2));
                out.push(*cell);
                out.push_str(&" ".repeat(pad - pad / 2));
                out.push(if i + 1 == lanes { '|' } else { divider });
            }
            out.push('\n');
        }
        if let Some(modal) = modal_text(state.phase, state.score) {
            out.push_str(&modal);
            out.push('\n');
        }
        out
    }
}

fn put(grid: &mut [Vec<char>], row: usize, lane: Lane, lanes: usize, glyph: char) {
    if lane.0 < lanes {
        grid[row][lane.0] = glyph;
    }
}

fn modal_text(phase: Phase, score: u32) -> Option<String> {
    match phase {
        Phase::Start => Some("Press Enter to start".to_string()),
        Phase::Playing => None,
        Phase::GameOver => Some(format!("GAME OVER - score {score} - press R to play again")),
        Phase::Won => Some(format!("YOU WIN - score {score} - press R to play again")),
    }
}
