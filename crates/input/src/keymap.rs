use crate::action::Action;

/// Map a key name (DOM `KeyboardEvent.key` style) to an action.
pub fn action_for_key(key: &str) -> Action {
    match key {
        "ArrowLeft" | "a" | "A" => Action::MoveLeft,
        "ArrowRight" | "d" | "D" => Action::MoveRight,
        "Enter" | " " => Action::Start,
        "r" | "R" => Action::Replay,
        "m" | "M" => Action::ToggleMute,
        _ => Action::Noop,
    }
}
