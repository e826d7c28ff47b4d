//! Slide lifecycle events.
//!
//! [`SlideCommittedEvent`] is triggered by the selection state machine when a
//! piece is released in a direction; [`SlideFinishedEvent`] by the mover when
//! the piece has landed and is selectable again.
//!
//! # Related
//!
//! - [`crate::systems::selection::piece_selection_system`] – commits slides
//! - [`crate::systems::slide::slide_task_system`] – finishes them

use bevy_ecs::prelude::*;

use crate::components::slidetask::Axis;

/// Event triggered when a piece starts sliding.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct SlideCommittedEvent {
    pub entity: Entity,
    pub axis: Axis,
    /// Signed distance the piece will travel along `axis`.
    pub distance: f32,
    /// The obstacle the piece will come to rest against.
    pub obstacle: Entity,
}

/// Event triggered when a piece has landed.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideFinishedEvent {
    pub entity: Entity,
}
