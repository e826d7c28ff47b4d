//! Resumable slide record for the frame-distributed mover.
//!
//! A [`SlideTask`] is inserted on a piece when a slide is committed and is
//! advanced exactly once per frame by
//! [`slide_task_system`](crate::systems::slide::slide_task_system) until the
//! remaining distance is used up. Each task only touches its own entity, so
//! any number of them can be in flight at once.

use bevy_ecs::prelude::Component;
use glam::Vec3;

/// Horizontal world axis a piece can slide along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Z,
}

impl Axis {
    /// Coordinate of `v` along this axis.
    pub fn coord(self, v: Vec3) -> f32 {
        match self {
            Axis::X => v.x,
            Axis::Z => v.z,
        }
    }

    /// Overwrite the coordinate of `v` along this axis.
    pub fn set_coord(self, v: &mut Vec3, value: f32) {
        match self {
            Axis::X => v.x = value,
            Axis::Z => v.z = value,
        }
    }

    pub fn unit(self) -> Vec3 {
        match self {
            Axis::X => Vec3::X,
            Axis::Z => Vec3::Z,
        }
    }
}

/// Outcome of advancing a [`SlideTask`] by one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SlideStep {
    /// Move by this signed amount and resume next frame.
    Continue(f32),
    /// Move by this signed remainder; the slide is over.
    Finished(f32),
}

#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct SlideTask {
    pub axis: Axis,
    /// Unsigned distance still to travel.
    pub remaining: f32,
    /// `1.0` or `-1.0`.
    pub direction: f32,
    /// Coordinate along `axis` the piece ends on.
    pub target: f32,
}

impl SlideTask {
    /// Create a task that slides `distance` (signed) along `axis`, starting at `start`.
    pub fn new(axis: Axis, distance: f32, start: f32) -> Self {
        Self {
            axis,
            remaining: distance.abs(),
            direction: if distance < 0.0 { -1.0 } else { 1.0 },
            target: start + distance,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.remaining <= 0.0
    }

    /// Consume up to `step` units of the remaining distance.
    ///
    /// The last call hands back the exact leftover instead of a full step, so
    /// the sum of all displacements equals the committed distance.
    pub fn advance(&mut self, step: f32) -> SlideStep {
        if self.remaining > step {
            self.remaining -= step;
            SlideStep::Continue(self.direction * step)
        } else {
            let last = self.remaining;
            self.remaining = 0.0;
            SlideStep::Finished(self.direction * last)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn new_task_splits_sign_and_magnitude() {
        let task = SlideTask::new(Axis::X, -2.5, 4.0);
        assert!(approx_eq(task.remaining, 2.5));
        assert!(approx_eq(task.direction, -1.0));
        assert!(approx_eq(task.target, 1.5));
        assert!(!task.is_finished());
    }

    #[test]
    fn advance_takes_full_steps_then_the_remainder() {
        let mut task = SlideTask::new(Axis::Z, 2.5, 0.0);
        assert_eq!(task.advance(1.0), SlideStep::Continue(1.0));
        assert_eq!(task.advance(1.0), SlideStep::Continue(1.0));
        match task.advance(1.0) {
            SlideStep::Finished(last) => assert!(approx_eq(last, 0.5)),
            other => panic!("expected Finished, got {other:?}"),
        }
        assert!(task.is_finished());
    }

    #[test]
    fn negative_slides_move_backwards() {
        let mut task = SlideTask::new(Axis::X, -1.5, 0.0);
        assert_eq!(task.advance(1.0), SlideStep::Continue(-1.0));
        match task.advance(1.0) {
            SlideStep::Finished(last) => assert!(approx_eq(last, -0.5)),
            other => panic!("expected Finished, got {other:?}"),
        }
    }

    #[test]
    fn displacements_sum_to_distance() {
        let distance = 3.7;
        let mut task = SlideTask::new(Axis::Z, distance, 0.0);
        let mut total = 0.0;
        let mut frames = 0;
        loop {
            frames += 1;
            match task.advance(4.0 / 60.0) {
                SlideStep::Continue(d) => total += d,
                SlideStep::Finished(d) => {
                    total += d;
                    break;
                }
            }
        }
        assert!(approx_eq(total, distance));
        assert_eq!(frames, (distance / (4.0 / 60.0)).ceil() as usize);
    }

    #[test]
    fn axis_coordinates() {
        let mut v = Vec3::new(1.0, 2.0, 3.0);
        assert!(approx_eq(Axis::X.coord(v), 1.0));
        assert!(approx_eq(Axis::Z.coord(v), 3.0));
        Axis::Z.set_coord(&mut v, 7.0);
        assert_eq!(v, Vec3::new(1.0, 2.0, 7.0));
        assert_eq!(Axis::X.unit(), Vec3::X);
    }
}
