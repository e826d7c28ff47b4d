//! Per-frame keyboard input resource.
//!
//! Captures the keys the puzzle reacts to and exposes them to systems via the
//! [`InputState`] resource. Arrow keys steer the cursor and slide pieces;
//! Enter and Space both pick up / put down the selected piece.
use bevy_ecs::prelude::*;

use crate::components::slidetask::Axis;

/// Logical keys the puzzle listens to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    Enter,
    Space,
}

impl Key {
    /// Parse a key from its lowercase name (`left`, `enter`, ...).
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "left" => Some(Key::Left),
            "right" => Some(Key::Right),
            "up" => Some(Key::Up),
            "down" => Some(Key::Down),
            "enter" => Some(Key::Enter),
            "space" => Some(Key::Space),
            _ => None,
        }
    }
}

/// Direction pressed by the player, in screen terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// World axis this direction travels along: left/right map to Z, up/down to X.
    pub fn axis(self) -> Axis {
        match self {
            Direction::Left | Direction::Right => Axis::Z,
            Direction::Up | Direction::Down => Axis::X,
        }
    }

    /// Sign of travel along [`Direction::axis`]. Left is +Z, down is +X.
    pub fn sign(self) -> f32 {
        match self {
            Direction::Left | Direction::Down => 1.0,
            Direction::Right | Direction::Up => -1.0,
        }
    }
}

#[derive(Debug, Clone, Copy)]
/// Boolean key state with an associated keyboard binding.
pub struct BoolState {
    /// Whether the key is currently held down.
    pub active: bool,
    /// Whether the key was just pressed this frame.
    pub just_pressed: bool,
    /// Whether the key was just released this frame.
    pub just_released: bool,

    /// The key bound to this action.
    pub key_binding: Key,
}

impl BoolState {
    pub fn bound_to(key_binding: Key) -> Self {
        Self {
            active: false,
            just_pressed: false,
            just_released: false,
            key_binding,
        }
    }
}

/// Resource capturing the per-frame keyboard state relevant to the puzzle.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    pub direction_left: BoolState,
    pub direction_right: BoolState,
    pub direction_up: BoolState,
    pub direction_down: BoolState,
    pub confirm: BoolState,
    pub confirm_alt: BoolState,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            direction_left: BoolState::bound_to(Key::Left),
            direction_right: BoolState::bound_to(Key::Right),
            direction_up: BoolState::bound_to(Key::Up),
            direction_down: BoolState::bound_to(Key::Down),
            confirm: BoolState::bound_to(Key::Enter),
            confirm_alt: BoolState::bound_to(Key::Space),
        }
    }
}

impl InputState {
    /// All key states, for bulk updates.
    pub fn states_mut(&mut self) -> [&mut BoolState; 6] {
        [
            &mut self.direction_left,
            &mut self.direction_right,
            &mut self.direction_up,
            &mut self.direction_down,
            &mut self.confirm,
            &mut self.confirm_alt,
        ]
    }

    /// First direction pressed this frame, checked in the order left, right, up, down.
    pub fn pressed_direction(&self) -> Option<Direction> {
        [
            (self.direction_left, Direction::Left),
            (self.direction_right, Direction::Right),
            (self.direction_up, Direction::Up),
            (self.direction_down, Direction::Down),
        ]
        .into_iter()
        .find(|(state, _)| state.just_pressed)
        .map(|(_, direction)| direction)
    }

    /// Whether either confirm key was pressed this frame.
    pub fn confirm_pressed(&self) -> bool {
        self.confirm.just_pressed || self.confirm_alt.just_pressed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inputstate_default_key_bindings() {
        let input = InputState::default();
        assert_eq!(input.direction_left.key_binding, Key::Left);
        assert_eq!(input.direction_right.key_binding, Key::Right);
        assert_eq!(input.direction_up.key_binding, Key::Up);
        assert_eq!(input.direction_down.key_binding, Key::Down);
        assert_eq!(input.confirm.key_binding, Key::Enter);
        assert_eq!(input.confirm_alt.key_binding, Key::Space);
    }

    #[test]
    fn test_inputstate_default_nothing_pressed() {
        let input = InputState::default();
        assert_eq!(input.pressed_direction(), None);
        assert!(!input.confirm_pressed());
    }

    #[test]
    fn test_pressed_direction_priority() {
        let mut input = InputState::default();
        input.direction_down.just_pressed = true;
        input.direction_up.just_pressed = true;
        assert_eq!(input.pressed_direction(), Some(Direction::Up));
        input.direction_right.just_pressed = true;
        assert_eq!(input.pressed_direction(), Some(Direction::Right));
        input.direction_left.just_pressed = true;
        assert_eq!(input.pressed_direction(), Some(Direction::Left));
    }

    #[test]
    fn test_held_key_is_not_a_press() {
        let mut input = InputState::default();
        input.direction_left.active = true;
        input.confirm.active = true;
        assert_eq!(input.pressed_direction(), None);
        assert!(!input.confirm_pressed());
    }

    #[test]
    fn test_either_confirm_key_counts() {
        let mut input = InputState::default();
        input.confirm_alt.just_pressed = true;
        assert!(input.confirm_pressed());
    }

    #[test]
    fn test_direction_world_mapping() {
        assert_eq!(Direction::Left.axis(), Axis::Z);
        assert_eq!(Direction::Left.sign(), 1.0);
        assert_eq!(Direction::Right.sign(), -1.0);
        assert_eq!(Direction::Down.axis(), Axis::X);
        assert_eq!(Direction::Down.sign(), 1.0);
        assert_eq!(Direction::Up.sign(), -1.0);
    }

    #[test]
    fn test_key_from_name() {
        assert_eq!(Key::from_name("space"), Some(Key::Space));
        assert_eq!(Key::from_name("Left"), None);
        assert_eq!(Key::from_name("jump"), None);
    }
}
