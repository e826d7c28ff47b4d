//! Text shown to the player.
//!
//! Instruction entities carry a [`DynamicText`]; the win detector overwrites
//! it with the win message. Drawing it is left to whatever front end hosts
//! the puzzle.

use std::fmt;

use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Debug, Default, PartialEq, Eq)]
pub struct DynamicText {
    pub content: String,
}

impl DynamicText {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// Replace the whole text.
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }
}

impl fmt::Display for DynamicText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.content)
    }
}
