use bevy_ecs::prelude::Component;

use crate::components::slidetask::Axis;

/// Yaw of an entity around the vertical axis, in degrees.
///
/// Pieces only ever use two orientations: zero yaw lies along Z, anything else
/// lies along X. The orientation decides which axis a piece may slide on.
#[derive(Component, Clone, Debug, Copy, Default, PartialEq)]
pub struct Rotation {
    pub degrees: f32,
}

impl Rotation {
    pub fn new(degrees: f32) -> Self {
        Self { degrees }
    }

    /// The only axis a piece with this yaw is allowed to slide along.
    pub fn slide_axis(&self) -> Axis {
        if self.degrees == 0.0 { Axis::Z } else { Axis::X }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_yaw_slides_along_z() {
        assert_eq!(Rotation::default().slide_axis(), Axis::Z);
    }

    #[test]
    fn any_other_yaw_slides_along_x() {
        assert_eq!(Rotation::new(90.0).slide_axis(), Axis::X);
        assert_eq!(Rotation::new(-90.0).slide_axis(), Axis::X);
        assert_eq!(Rotation::new(1.5).slide_axis(), Axis::X);
    }
}
