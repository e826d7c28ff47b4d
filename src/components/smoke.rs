//! Smoke emitter and particle components.
//!
//! A [`SmokeEmitter`] counts down a randomized interval and spawns one
//! [`SmokeParticle`] at its own position every time the interval runs out.
//! Particles rise at a constant speed and carry a
//! [`Lifetime`](crate::components::lifetime::Lifetime) that removes them after a short,
//! randomized lifetime.
//!
//! # Related
//!
//! - [`crate::systems::smoke::smoke_emitter_system`] – countdown and spawning
//! - [`crate::systems::smoke::smoke_particle_system`] – particle rise
//! - [`crate::systems::lifetime::lifetime_system`] – particle expiry

use bevy_ecs::prelude::Component;

/// Seconds between two puffs, drawn uniformly from `[min, max)`.
pub const EMIT_INTERVAL: (f32, f32) = (0.5, 1.5);
/// Particle lifetime in seconds, drawn uniformly from `[min, max)`.
pub const PARTICLE_LIFETIME: (f32, f32) = (0.8, 1.8);

#[derive(Component, Debug, Clone, PartialEq)]
pub struct SmokeEmitter {
    /// Seconds left until the next puff.
    pub ttl: f32,
    /// Range the interval is redrawn from after each puff.
    pub interval: (f32, f32),
    /// Range spawned particle lifetimes are drawn from.
    pub particle_lifetime: (f32, f32),
}

impl SmokeEmitter {
    /// Emitter whose first puff comes after `ttl` seconds.
    pub fn new(ttl: f32) -> Self {
        Self {
            ttl,
            interval: EMIT_INTERVAL,
            particle_lifetime: PARTICLE_LIFETIME,
        }
    }
}

#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct SmokeParticle {
    /// Vertical speed in units per second.
    pub rise_speed: f32,
}

impl SmokeParticle {
    pub fn new(rise_speed: f32) -> Self {
        Self { rise_speed }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emitter_uses_default_ranges() {
        let emitter = SmokeEmitter::new(0.7);
        assert_eq!(emitter.ttl, 0.7);
        assert_eq!(emitter.interval, (0.5, 1.5));
        assert_eq!(emitter.particle_lifetime, (0.8, 1.8));
    }
}
