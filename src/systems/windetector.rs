//! Win detection.
//!
//! [`win_detector_system`] tests the player piece against the target every
//! frame until they overlap once. It then closes the
//! [`WinLatch`](crate::resources::winlatch::WinLatch), rewrites every
//! instruction text and never does anything again.

use bevy_ecs::prelude::*;
use log::info;

use crate::components::boxcollider::BoxCollider;
use crate::components::dynamictext::DynamicText;
use crate::components::mapposition::MapPosition;
use crate::components::tags::{Instruction, Player, Target};
use crate::events::puzzle::PuzzleSolvedEvent;
use crate::resources::winlatch::WinLatch;

pub fn win_detector_system(
    mut latch: ResMut<WinLatch>,
    players: Query<(Entity, &MapPosition, &BoxCollider), With<Player>>,
    targets: Query<(Entity, &MapPosition, &BoxCollider), With<Target>>,
    mut instructions: Query<&mut DynamicText, With<Instruction>>,
    mut commands: Commands,
) {
    if latch.is_solved() {
        return;
    }
    // presence of both is checked once by `setup_puzzle`
    let (Ok((player, player_pos, player_box)), Ok((target, target_pos, target_box))) =
        (players.single(), targets.single())
    else {
        return;
    };
    if !player_box.overlaps(player_pos.pos, target_box, target_pos.pos) {
        return;
    }

    latch.latch();
    for mut text in instructions.iter_mut() {
        text.set_content(latch.message.clone());
    }
    info!("Puzzle solved: {:?} reached {:?}", player, target);
    commands.trigger(PuzzleSolvedEvent { player, target });
}
