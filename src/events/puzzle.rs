use bevy_ecs::prelude::*;

/// Event triggered once, on the frame the player piece first overlaps the target.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleSolvedEvent {
    pub player: Entity,
    pub target: Entity,
}
