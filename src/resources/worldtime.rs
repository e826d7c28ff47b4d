//! Simulation clock.
//!
//! Systems never read a wall clock; they read [`WorldTime::delta`], which the
//! host advances once per frame through
//! [`update_world_time`](crate::systems::time::update_world_time). A fixed
//! delta therefore replays a session exactly.

use bevy_ecs::prelude::Resource;

#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct WorldTime {
    /// Scaled seconds since the first frame.
    pub elapsed: f32,
    /// Scaled seconds covered by the current frame.
    pub delta: f32,
    /// Multiplier applied to every raw frame delta.
    pub time_scale: f32,
    /// Frames run so far.
    pub frame_count: u64,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            time_scale: 1.0,
            frame_count: 0,
        }
    }
}

impl WorldTime {
    pub fn with_time_scale(mut self, time_scale: f32) -> Self {
        self.time_scale = time_scale;
        self
    }

    /// Start a new frame lasting `raw_delta` unscaled seconds.
    pub fn advance(&mut self, raw_delta: f32) {
        self.delta = raw_delta * self.time_scale;
        self.elapsed += self.delta;
        self.frame_count += 1;
    }
}
