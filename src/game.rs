//! Puzzle setup and per-frame driving.
//!
//! The host calls these in order:
//!
//! 1. [`insert_resources`] with the loaded [`GameConfig`]
//! 2. [`crate::level::spawn_level`] to populate the world
//! 3. [`setup_puzzle`] once, to validate the board and pick the first piece
//! 4. [`run_frame`] every frame with the schedule from [`build_update_schedule`]

use std::fmt;

use bevy_ecs::prelude::*;
use bevy_ecs::schedule::ExecutorKind;
use glam::Vec3;
use log::info;

use crate::components::mapposition::MapPosition;
use crate::components::nodename::NodeName;
use crate::components::piece::{Piece, PieceState};
use crate::components::tags::{Instruction, Player, Target};
use crate::error::PuzzleError;
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::InputState;
use crate::resources::puzzlerng::PuzzleRng;
use crate::resources::selection::SelectionState;
use crate::resources::winlatch::WinLatch;
use crate::resources::worldtime::WorldTime;
use crate::systems::input::{KeySource, update_input_state};
use crate::systems::lifetime::lifetime_system;
use crate::systems::selection::piece_selection_system;
use crate::systems::slide::slide_task_system;
use crate::systems::smoke::{smoke_emitter_system, smoke_particle_system};
use crate::systems::stuckto::stuck_to_entity_system;
use crate::systems::time::update_world_time;
use crate::systems::windetector::win_detector_system;

/// Insert every resource the puzzle systems read.
///
/// The random source is seeded from `config.seed` when present.
pub fn insert_resources(world: &mut World, config: &GameConfig) {
    world.insert_resource(WorldTime::default().with_time_scale(1.0));
    world.insert_resource(InputState::default());
    world.insert_resource(SelectionState::default());
    world.insert_resource(WinLatch::new(config.win_message.clone()));
    world.insert_resource(match config.seed {
        Some(seed) => PuzzleRng::seeded(seed),
        None => PuzzleRng::from_entropy(),
    });
    world.insert_resource(config.clone());
}

/// Validate the spawned board and put the cursor on a random piece.
///
/// Returns the initially selected piece. Its height becomes the hover
/// baseline for every piece selected afterwards.
pub fn setup_puzzle(world: &mut World) -> Result<Entity, PuzzleError> {
    let mut pieces: Vec<Entity> = world
        .query_filtered::<Entity, With<Piece>>()
        .iter(world)
        .collect();
    if pieces.is_empty() {
        return Err(PuzzleError::NoPieces);
    }
    let players = world
        .query_filtered::<(), (With<Player>, With<Piece>)>()
        .iter(world)
        .count();
    if players != 1 {
        return Err(PuzzleError::PlayerCount(players));
    }
    let targets = world
        .query_filtered::<(), With<Target>>()
        .iter(world)
        .count();
    if targets != 1 {
        return Err(PuzzleError::TargetCount(targets));
    }
    let instructions = world
        .query_filtered::<(), With<Instruction>>()
        .iter(world)
        .count();
    if instructions == 0 {
        return Err(PuzzleError::MissingInstruction);
    }

    // query order is not part of the contract; sort so a seed replays
    pieces.sort();
    let index = world
        .get_resource_or_insert_with(PuzzleRng::default)
        .index(pieces.len());
    let selected = pieces[index];

    for &entity in &pieces {
        if let Some(mut piece) = world.get_mut::<Piece>(entity) {
            piece.state = if entity == selected {
                PieceState::Selected
            } else {
                PieceState::Wait
            };
        }
    }
    let origin = world
        .get::<MapPosition>(selected)
        .map(|position| position.pos.y)
        .unwrap_or_default();
    {
        let mut selection = world.get_resource_or_insert_with(SelectionState::default);
        selection.hover_origin = origin;
        selection.hover_time = 0.0;
        selection.transitioned = false;
    }

    info!(
        "Puzzle ready: {} pieces, cursor on {}",
        pieces.len(),
        display_name(world, selected)
    );
    Ok(selected)
}

/// Build the per-frame schedule.
///
/// Systems are chained, so commands issued by one are applied before the next
/// runs: a slide committed by the selection system takes its first step in
/// the same frame, and a freshly spawned puff already rises.
pub fn build_update_schedule() -> Schedule {
    let mut update = Schedule::default();
    update.set_executor_kind(ExecutorKind::SingleThreaded);
    update.add_systems(
        (
            piece_selection_system,
            slide_task_system,
            stuck_to_entity_system,
            smoke_emitter_system,
            smoke_particle_system,
            lifetime_system,
            win_detector_system,
        )
            .chain(),
    );
    update
}

/// Advance the puzzle by one frame of `dt` seconds.
pub fn run_frame(world: &mut World, update: &mut Schedule, dt: f32, keys: &impl KeySource) {
    update_input_state(world, keys);
    update_world_time(world, dt);
    update.run(world);
    world.clear_trackers();
}

/// One line of the board report printed by the host.
#[derive(Debug, Clone, PartialEq)]
pub struct PieceReport {
    pub entity: Entity,
    pub name: String,
    pub state: PieceState,
    pub position: Vec3,
}

impl fmt::Display for PieceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<12} {:<9?} x={:>7.3} y={:>7.3} z={:>7.3}",
            self.name, self.state, self.position.x, self.position.y, self.position.z
        )
    }
}

/// Snapshot of every piece, sorted by name.
pub fn piece_report(world: &mut World) -> Vec<PieceReport> {
    let mut report: Vec<PieceReport> = world
        .query::<(Entity, &Piece, &MapPosition, Option<&NodeName>)>()
        .iter(world)
        .map(|(entity, piece, position, name)| PieceReport {
            entity,
            name: name.map_or_else(|| format!("{entity:?}"), |n| n.as_str().to_string()),
            state: piece.state,
            position: position.pos,
        })
        .collect();
    report.sort_by(|a, b| a.name.cmp(&b.name));
    report
}

fn display_name(world: &World, entity: Entity) -> String {
    world
        .get::<NodeName>(entity)
        .map_or_else(|| format!("{entity:?}"), |n| n.as_str().to_string())
}
