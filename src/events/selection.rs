//! Cursor movement notifications.

use bevy_ecs::prelude::*;

/// Event triggered when the cursor moves from one piece to another.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionChangedEvent {
    /// The piece that was selected before.
    pub from: Entity,
    /// The piece that is selected now.
    pub to: Entity,
}
