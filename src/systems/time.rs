//! Frame clock update.
//!
//! Called by the host before the schedule runs; not a system itself because
//! the delta comes from outside the world.
use bevy_ecs::prelude::*;

use crate::resources::worldtime::WorldTime;

/// Start a new frame of `dt` unscaled seconds on the `WorldTime` resource.
pub fn update_world_time(world: &mut World, dt: f32) {
    world.resource_mut::<WorldTime>().advance(dt);
}
