//! Rushblock: sliding-block puzzle logic on bevy_ecs.
//!
//! The crate exposes the puzzle's ECS components, resources, systems and
//! events, the level loader and the scripted-input host, for use by the
//! binary and by integration tests.

pub mod components;
pub mod error;
pub mod events;
pub mod game;
pub mod keyscript;
pub mod level;
pub mod resources;
pub mod systems;
