//! Seedable random source shared by the puzzle systems.
//!
//! Initial selection and smoke timings both draw from this resource, so a
//! fixed seed replays a session exactly.

use bevy_ecs::prelude::Resource;
use fastrand::Rng;

#[derive(Resource, Debug)]
pub struct PuzzleRng {
    rng: Rng,
}

impl PuzzleRng {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Rng::with_seed(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self { rng: Rng::new() }
    }

    /// Uniform draw from `[min, max)`. Degenerate ranges return `min`.
    pub fn range_f32(&mut self, range: (f32, f32)) -> f32 {
        scale_unit(self.rng.f32(), range)
    }

    /// Uniform index into a collection of `len` items.
    pub fn index(&mut self, len: usize) -> usize {
        self.rng.usize(0..len)
    }
}

/// Map `unit` in `[0, 1)` onto `[min, max)`.
///
/// Rounding can land a unit just below 1 exactly on `max`; such draws are
/// pulled back to the largest value below it.
fn scale_unit(unit: f32, (min, max): (f32, f32)) -> f32 {
    let range = max - min;
    if range < f32::EPSILON {
        return min;
    }
    let value = min + unit * range;
    if value < max { value } else { max.next_down() }
}

impl Default for PuzzleRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}
