//! Attachment of one entity to another.
//!
//! The player's smoke emitter is a separate entity; [`StuckTo`] keeps it on
//! the player piece, at a fixed offset, while the piece hovers and slides.

use bevy_ecs::prelude::{Component, Entity};
use glam::Vec3;

#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct StuckTo {
    /// Entity whose position is followed.
    pub target: Entity,
    /// Added to the target's position.
    pub offset: Vec3,
}

impl StuckTo {
    pub fn new(target: Entity) -> Self {
        Self {
            target,
            offset: Vec3::ZERO,
        }
    }

    pub fn with_offset(mut self, offset: Vec3) -> Self {
        self.offset = offset;
        self
    }

    /// Where the follower belongs when the target sits at `target_position`.
    pub fn follow(&self, target_position: Vec3) -> Vec3 {
        target_position + self.offset
    }
}
