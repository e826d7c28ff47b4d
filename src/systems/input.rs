//! Input systems.
//!
//! [`update_input_state`] samples a [`KeySource`] once per frame and writes
//! the result into [`crate::resources::input::InputState`]. Device polling
//! lives behind the trait so the puzzle can be driven by a window, a replay
//! script, or a test.
use bevy_ecs::prelude::*;

use crate::resources::input::{InputState, Key};

/// Edge-triggered view of a keyboard for the current frame.
pub trait KeySource {
    /// Whether the key is held down this frame.
    fn is_key_down(&self, key: Key) -> bool;
    /// Whether the key went down during this frame.
    fn is_key_pressed(&self, key: Key) -> bool;
    /// Whether the key went up during this frame.
    fn is_key_released(&self, key: Key) -> bool;
}

/// Poll `source` for every bound key and update the `InputState` resource.
pub fn update_input_state(world: &mut World, source: &impl KeySource) {
    let mut input = world.resource_mut::<InputState>();
    for state in input.states_mut() {
        let key = state.key_binding;
        state.active = source.is_key_down(key);
        state.just_pressed = source.is_key_pressed(key);
        state.just_released = source.is_key_released(key);
    }
}
