//! Remaining lifetime of short-lived entities.
//!
//! Smoke particles are spawned with a [`Lifetime`] drawn from the emitter's
//! range; [`lifetime_system`](crate::systems::lifetime::lifetime_system)
//! counts it down and despawns the particle once it runs out.

use bevy_ecs::prelude::Component;

#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Lifetime {
    /// Seconds left. The entity expires once this is zero or below.
    pub remaining: f32,
}

impl Lifetime {
    pub fn new(seconds: f32) -> Self {
        Lifetime { remaining: seconds }
    }

    /// Consume `dt` seconds and report whether the entity has expired.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.remaining -= dt;
        self.is_expired()
    }

    pub fn is_expired(&self) -> bool {
        self.remaining <= 0.0
    }
}
