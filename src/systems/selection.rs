//! Selection/direction state machine.
//!
//! [`piece_selection_system`] runs once per frame over every piece and moves
//! the single active piece through its states:
//!
//! ```text
//!  WAIT <--arrow--> SELECTED --confirm--> DIRECTION --arrow on axis--> MOVING
//!                      ^                     |                           |
//!                      +------confirm--------+        (mover lands) -----+
//! ```
//!
//! - SELECTED bobs above the hover baseline; an arrow hands the cursor to the
//!   nearest piece on that side.
//! - DIRECTION floats a little higher; an arrow along the piece's own axis
//!   resolves the slide with [`resolve_slide`] and hands the piece to the
//!   mover by inserting a [`SlideTask`]. A piece already touching an
//!   obstacle in that direction goes straight back to SELECTED.
//! - MOVING is owned by [`crate::systems::slide::slide_task_system`].
//!
//! Once one piece changes state, the remaining pieces are skipped for the
//! frame, so a cursor handed over this frame is not processed again until
//! the next one.

use bevy_ecs::prelude::*;
use bevy_ecs::query::Has;
use glam::Vec3;
use log::debug;

use crate::components::boxcollider::{Aabb, BoxCollider};
use crate::components::mapposition::MapPosition;
use crate::components::piece::{Piece, PieceState};
use crate::components::rotation::Rotation;
use crate::components::slidetask::SlideTask;
use crate::components::tags::Obstacle;
use crate::events::selection::SelectionChangedEvent;
use crate::events::slide::SlideCommittedEvent;
use crate::resources::input::{Direction, InputState};
use crate::resources::selection::SelectionState;
use crate::resources::worldtime::WorldTime;
use crate::systems::raycast::resolve_slide;

/// Slides shorter than this are treated as blocked.
const MIN_SLIDE_DISTANCE: f32 = 1e-4;

type PieceItem = (
    Entity,
    &'static mut Piece,
    &'static mut MapPosition,
    &'static BoxCollider,
    &'static Rotation,
    Has<Obstacle>,
);

type WallFilter = (With<Obstacle>, Without<Piece>);

/// Height of a selected piece `t` seconds after it got the cursor.
pub fn selected_hover(origin: f32, t: f32) -> f32 {
    origin + ((t * 4.0).cos() * 0.5).abs()
}

/// Height of a piece waiting for a slide direction.
pub fn direction_hover(origin: f32, t: f32) -> f32 {
    origin + 0.3 + ((t * 0.5).cos() * 0.1).abs()
}

/// Pick the piece the cursor moves to when `direction` is pressed.
///
/// Candidates are `(entity, position, box center)`. Only pieces whose box
/// center lies strictly on the pressed side of `current_center` qualify; the
/// one with the smallest squared distance to `current_position` wins, the
/// first one on ties.
pub fn find_next_selectable<I>(
    current: Entity,
    current_position: Vec3,
    current_center: Vec3,
    direction: Direction,
    candidates: I,
) -> Option<Entity>
where
    I: IntoIterator<Item = (Entity, Vec3, Vec3)>,
{
    let axis = direction.axis();
    let sign = direction.sign();
    let reference = axis.coord(current_center);

    candidates
        .into_iter()
        .filter(|(entity, _, center)| {
            *entity != current && (axis.coord(*center) - reference) * sign > 0.0
        })
        .map(|(entity, position, _)| (entity, position.distance_squared(current_position)))
        .min_by(|(_, a), (_, b)| a.total_cmp(b))
        .map(|(entity, _)| entity)
}

/// Drive the selection state machine for one frame.
pub fn piece_selection_system(
    time: Res<WorldTime>,
    input: Res<InputState>,
    mut selection: ResMut<SelectionState>,
    mut pieces: Query<PieceItem>,
    walls: Query<(Entity, &MapPosition, &BoxCollider), WallFilter>,
    mut commands: Commands,
) {
    selection.hover_time += time.delta;
    selection.transitioned = false;

    let order: Vec<Entity> = pieces.iter().map(|(entity, ..)| entity).collect();
    for entity in order {
        if selection.transitioned {
            break;
        }
        let Ok((_, piece, ..)) = pieces.get(entity) else {
            continue;
        };
        match piece.state {
            PieceState::Wait | PieceState::Moving => {}
            PieceState::Selected => {
                update_selected(entity, &input, &mut selection, &mut pieces, &mut commands)
            }
            PieceState::Direction => update_direction(
                entity,
                &input,
                &mut selection,
                &mut pieces,
                &walls,
                &mut commands,
            ),
        }
    }
}

fn set_state(pieces: &mut Query<PieceItem>, entity: Entity, state: PieceState) {
    if let Ok((_, mut piece, ..)) = pieces.get_mut(entity) {
        piece.state = state;
    }
}

fn set_height(pieces: &mut Query<PieceItem>, entity: Entity, y: f32) {
    if let Ok((_, _, mut position, ..)) = pieces.get_mut(entity) {
        position.pos.y = y;
    }
}

fn update_selected(
    entity: Entity,
    input: &InputState,
    selection: &mut SelectionState,
    pieces: &mut Query<PieceItem>,
    commands: &mut Commands,
) {
    let origin = selection.hover_origin;
    set_height(pieces, entity, selected_hover(origin, selection.hover_time));

    if let Some(direction) = input.pressed_direction() {
        let Ok((_, _, position, collider, ..)) = pieces.get(entity) else {
            return;
        };
        let current_position = position.pos;
        let current_center = collider.aabb(position.pos).center();
        let candidates = pieces
            .iter()
            .map(|(other, _, position, collider, ..)| {
                (other, position.pos, collider.aabb(position.pos).center())
            });
        let Some(next) = find_next_selectable(
            entity,
            current_position,
            current_center,
            direction,
            candidates,
        ) else {
            debug!("No piece to select {:?} of {:?}", direction, entity);
            return;
        };

        set_state(pieces, entity, PieceState::Wait);
        set_height(pieces, entity, origin);
        set_state(pieces, next, PieceState::Selected);
        selection.hover_time = 0.0;
        selection.transitioned = true;
        debug!("Selection moved {:?} from {:?} to {:?}", direction, entity, next);
        commands.trigger(SelectionChangedEvent {
            from: entity,
            to: next,
        });
    } else if input.confirm_pressed() {
        set_state(pieces, entity, PieceState::Direction);
        selection.transitioned = true;
        debug!("Piece {:?} picked up", entity);
    }
}

fn update_direction(
    entity: Entity,
    input: &InputState,
    selection: &mut SelectionState,
    pieces: &mut Query<PieceItem>,
    walls: &Query<(Entity, &MapPosition, &BoxCollider), WallFilter>,
    commands: &mut Commands,
) {
    set_height(
        pieces,
        entity,
        direction_hover(selection.hover_origin, selection.hover_time),
    );

    if input.confirm_pressed() {
        set_state(pieces, entity, PieceState::Selected);
        selection.transitioned = true;
        debug!("Piece {:?} put down", entity);
        return;
    }
    let Some(direction) = input.pressed_direction() else {
        return;
    };

    let Ok((_, _, position, collider, rotation, _)) = pieces.get(entity) else {
        return;
    };
    let axis = direction.axis();
    if axis != rotation.slide_axis() {
        debug!("Piece {:?} cannot slide {:?}", entity, direction);
        return;
    }
    let start = axis.coord(position.pos);
    let moving_box = collider.aabb(position.pos);

    let obstacles: Vec<(Entity, Aabb)> = pieces
        .iter()
        .filter(|(other, .., is_obstacle)| *other != entity && *is_obstacle)
        .map(|(other, _, position, collider, ..)| (other, collider.aabb(position.pos)))
        .chain(
            walls
                .iter()
                .map(|(wall, position, collider)| (wall, collider.aabb(position.pos))),
        )
        .collect();

    let Some(hit) = resolve_slide(&moving_box, axis, direction.sign(), obstacles) else {
        panic!(
            "slide of {:?} towards {:?} hit no obstacle; the level must be closed by walls",
            entity, direction
        );
    };
    if hit.distance.abs() < MIN_SLIDE_DISTANCE {
        // an empty slide lands at once: no task, no pending offset
        set_state(pieces, entity, PieceState::Selected);
        selection.transitioned = true;
        debug!("Piece {:?} is blocked {:?} by {:?}", entity, direction, hit.obstacle);
        return;
    }

    if let Ok((_, mut piece, ..)) = pieces.get_mut(entity) {
        piece.set_pending(axis, hit.distance);
        piece.state = PieceState::Moving;
    }
    commands
        .entity(entity)
        .insert(SlideTask::new(axis, hit.distance, start));
    selection.transitioned = true;
    debug!(
        "Piece {:?} slides {} along {:?} towards {:?}",
        entity, hit.distance, axis, hit.obstacle
    );
    commands.trigger(SlideCommittedEvent {
        entity,
        axis,
        distance: hit.distance,
        obstacle: hit.obstacle,
    });
}
