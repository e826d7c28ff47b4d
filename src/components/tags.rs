//! Marker components.
//!
//! Capabilities of level entities are expressed by which of these tags they
//! carry; an entity can hold several (the player piece is a [`Player`] and an
//! [`Obstacle`] at once).

use bevy_ecs::prelude::Component;

/// Anything a slide ray must stop at: pieces and boundary walls.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Obstacle;

/// The goal piece. Exactly one per level.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Player;

/// The exit cell the player piece has to reach. Exactly one per level.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Target;

/// On-screen instruction text, rewritten once when the puzzle is solved.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Instruction;
