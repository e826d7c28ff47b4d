use bevy_ecs::prelude::Resource;

/// Shared state of the selection state machine.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct SelectionState {
    /// Resting height of the hovering cursor. Captured once from the piece
    /// selected at startup and reused for every piece afterwards.
    pub hover_origin: f32,
    /// Seconds since the cursor last changed piece; drives the hover bob.
    pub hover_time: f32,
    /// Set once a piece changed state this frame; no other piece is processed after that.
    pub transitioned: bool,
}
