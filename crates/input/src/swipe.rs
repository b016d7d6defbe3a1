use crate::action::Action;

/// Horizontal travel needed before a touch counts as a swipe.
pub const DEFAULT_MIN_DISTANCE: f32 = 30.0;

/// Turns touch start/end points into lane-change actions.
#[derive(Debug, Clone)]
pub struct SwipeTracker {
    min_distance: f32,
    origin: Option<(f32, f32)>,
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_DISTANCE)
    }
}

impl SwipeTracker {
    pub fn new(min_distance: f32) -> Self {
        Self {
            min_distance,
            origin: None,
        }
    }

    /// Record where a touch began. A second `begin` replaces the first.
    pub fn begin(&mut self, x: f32, y: f32) {
        self.origin = Some((x, y));
    }

    /// Finish the touch. Horizontal travel that reaches the threshold and
    /// dominates vertical travel is a swipe; anything else is `Noop`.
    pub fn end(&mut self, x: f32, y: f32) -> Action {
        let Some((x0, y0)) = self.origin.take() else {
            return Action::Noop;
        };
        let dx = x - x0;
        let dy = y - y0;
        if dx.abs() < self.min_distance || dx.abs() <= dy.abs() {
            return Action::Noop;
        }
        let action = if dx < 0.0 {
            Action::MoveLeft
        } else {
            Action::MoveRight
        };
        tracing::trace!(dx, dy, ?action, "swipe");
        action
    }

    /// Drop an in-progress touch (e.g. touch cancelled).
    pub fn cancel(&mut self) {
        self.origin = None;
    }

    pub fn in_progress(&self) -> bool {
        self.origin.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swipe_left_and_right() {
        let mut s = SwipeTracker::default();
        s.begin(200.0, 300.0);
        assert_eq!(s.end(120.0, 310.0), Action::MoveLeft);
        s.begin(100.0, 300.0);
        assert_eq!(s.end(180.0, 290.0), Action::MoveRight);
    }

    #[test]
    fn short_travel_is_noop() {
        let mut s = SwipeTracker::default();
        s.begin(100.0, 100.0);
        assert_eq!(s.end(120.0, 100.0), Action::Noop);
    }

    #[test]
    fn vertical_swipe_is_noop() {
        let mut s = SwipeTracker::default();
        s.begin(100.0, 100.0);
        assert_eq!(s.end(140.0, 200.0), Action::Noop);
    }

    #[test]
    fn end_without_begin_is_noop() {
        let mut s = SwipeTracker::default();
        assert_eq!(s.end(0.0, 0.0), Action::Noop);
    }

    #[test]
    fn end_consumes_origin() {
        let mut s = SwipeTracker::default();
        s.begin(0.0, 0.0);
        assert!(s.in_progress());
        s.end(100.0, 0.0);
        assert!(!s.in_progress());
        assert_eq!(s.end(200.0, 0.0), Action::Noop);
    }

    #[test]
    fn cancel_drops_touch() {
        let mut s = SwipeTracker::new(10.0);
        s.begin(0.0, 0.0);
        s.cancel();
        assert_eq!(s.end(50.0, 0.0), Action::Noop);
    }
}
