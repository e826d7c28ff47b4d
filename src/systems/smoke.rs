//! Smoke systems.
//!
//! - [`smoke_emitter_system`] counts emitters down and spawns a particle at
//!   the emitter's position whenever the countdown runs out.
//! - [`smoke_particle_system`] makes particles rise.
//!
//! Particle expiry is handled by [`crate::systems::lifetime::lifetime_system`].

use bevy_ecs::prelude::*;
use log::trace;

use crate::components::lifetime::Lifetime;
use crate::components::mapposition::MapPosition;
use crate::components::smoke::{SmokeEmitter, SmokeParticle};
use crate::resources::gameconfig::GameConfig;
use crate::resources::puzzlerng::PuzzleRng;
use crate::resources::worldtime::WorldTime;

/// Count down emitters and spawn one particle each time a countdown reaches zero.
///
/// # Ordering
///
/// Runs after `stuck_to_entity_system` so puffs come out where the emitter is
/// this frame.
pub fn smoke_emitter_system(
    time: Res<WorldTime>,
    config: Res<GameConfig>,
    mut rng: ResMut<PuzzleRng>,
    mut emitters: Query<(&MapPosition, &mut SmokeEmitter)>,
    mut commands: Commands,
) {
    let dt = time.delta;
    for (position, mut emitter) in emitters.iter_mut() {
        emitter.ttl -= dt;
        if emitter.ttl > 0.0 {
            continue;
        }
        emitter.ttl = rng.range_f32(emitter.interval);
        let lifetime = rng.range_f32(emitter.particle_lifetime);
        commands.spawn((
            SmokeParticle::new(config.particle_rise_speed),
            MapPosition::from_vec(position.pos),
            Lifetime::new(lifetime),
        ));
        trace!("Smoke puff at {:?}, next in {}s", position.pos, emitter.ttl);
    }
}

/// Move particles up by `rise_speed * delta`.
pub fn smoke_particle_system(
    time: Res<WorldTime>,
    mut particles: Query<(&SmokeParticle, &mut MapPosition)>,
) {
    let dt = time.delta;
    for (particle, mut position) in particles.iter_mut() {
        position.pos.y += particle.rise_speed * dt;
    }
}
