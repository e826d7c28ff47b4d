//! Movable puzzle piece.
//!
//! Every piece carries a [`PieceState`] driven by
//! [`piece_selection_system`](crate::systems::selection::piece_selection_system).
//! Only one piece is ever outside [`PieceState::Wait`]; that piece is the
//! cursor the player is steering.

use bevy_ecs::prelude::Component;

use crate::components::slidetask::Axis;

/// Selection/slide state of a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PieceState {
    /// Idle, not under the cursor.
    #[default]
    Wait,
    /// Under the cursor; arrows move the cursor to a neighbour.
    Selected,
    /// Picked up; arrows along the piece's axis slide it.
    Direction,
    /// Sliding; owned by the mover until it lands.
    Moving,
}

#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct Piece {
    pub state: PieceState,
    pub pending_x: f32,
    pub pending_z: f32,
}

impl Piece {
    pub fn new() -> Self {
        Self::default()
    }

    /// True for the one piece under the player's control.
    pub fn is_active(&self) -> bool {
        self.state != PieceState::Wait
    }

    /// Record the committed slide on `axis`, zeroing the other axis.
    pub fn set_pending(&mut self, axis: Axis, distance: f32) {
        match axis {
            Axis::X => {
                self.pending_x = distance;
                self.pending_z = 0.0;
            }
            Axis::Z => {
                self.pending_x = 0.0;
                self.pending_z = distance;
            }
        }
    }

    pub fn clear_pending(&mut self) {
        self.pending_x = 0.0;
        self.pending_z = 0.0;
    }
}
