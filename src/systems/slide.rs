//! Frame-distributed mover.
//!
//! [`slide_task_system`] advances every [`SlideTask`] by one frame's worth of
//! travel. A task suspends after applying its step and resumes on the next
//! frame; on its last frame it applies the exact leftover, snaps the piece on
//! the committed coordinate, hands the piece back to the cursor and removes
//! itself.

use bevy_ecs::prelude::*;
use log::debug;

use crate::components::mapposition::MapPosition;
use crate::components::piece::{Piece, PieceState};
use crate::components::slidetask::{SlideStep, SlideTask};
use crate::events::slide::SlideFinishedEvent;
use crate::resources::gameconfig::GameConfig;
use crate::resources::worldtime::WorldTime;

/// Advance all in-flight slides by `slide_speed * delta`.
///
/// # Ordering
///
/// Runs after the selection system so a slide committed this frame already
/// takes its first step.
pub fn slide_task_system(
    time: Res<WorldTime>,
    config: Res<GameConfig>,
    mut query: Query<(Entity, &mut SlideTask, &mut MapPosition, &mut Piece)>,
    mut commands: Commands,
) {
    let step = config.slide_speed * time.delta;
    for (entity, mut task, mut position, mut piece) in query.iter_mut() {
        let axis = task.axis;
        match task.advance(step) {
            SlideStep::Continue(displacement) => {
                let coord = axis.coord(position.pos);
                axis.set_coord(&mut position.pos, coord + displacement);
            }
            SlideStep::Finished(_) => {
                // landing on the stored target avoids accumulated rounding
                axis.set_coord(&mut position.pos, task.target);
                piece.state = PieceState::Selected;
                piece.clear_pending();
                commands.entity(entity).remove::<SlideTask>();
                debug!("Piece {:?} landed at {:?}", entity, position.pos);
                commands.trigger(SlideFinishedEvent { entity });
            }
        }
    }
}
