//! Particle expiry.
//!
//! [`lifetime_system`] ages every entity carrying a
//! [`Lifetime`](crate::components::lifetime::Lifetime) by the frame's scaled
//! delta and despawns those that ran out.

use bevy_ecs::prelude::*;
use log::trace;

use crate::components::lifetime::Lifetime;
use crate::resources::worldtime::WorldTime;

/// Age short-lived entities and despawn the expired ones.
///
/// # Ordering
///
/// Runs after the smoke systems, so a puff spawned this frame has already
/// lived one frame when it is first drawn.
pub fn lifetime_system(
    time: Res<WorldTime>,
    mut query: Query<(Entity, &mut Lifetime)>,
    mut commands: Commands,
) {
    for (entity, mut lifetime) in query.iter_mut() {
        if lifetime.tick(time.delta) {
            trace!("{:?} expired", entity);
            commands.entity(entity).try_despawn();
        }
    }
}
