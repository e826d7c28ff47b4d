//! Keeps attached entities on their targets.
//!
//! Entities carrying [`StuckTo`] are moved onto their target's
//! [`MapPosition`] plus offset every frame. A follower cannot itself be a
//! target.

use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::stuckto::StuckTo;

/// Move every follower onto its target.
///
/// # Ordering
///
/// Runs after the mover, so the follower sees the target's position for this
/// frame. Followers whose target is gone stay where they are.
pub fn stuck_to_entity_system(
    mut followers: Query<(&StuckTo, &mut MapPosition)>,
    targets: Query<&MapPosition, Without<StuckTo>>,
) {
    for (stuck_to, mut position) in followers.iter_mut() {
        if let Ok(target) = targets.get(stuck_to.target) {
            position.pos = stuck_to.follow(target.pos);
        }
    }
}
