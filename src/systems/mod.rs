//! Puzzle systems.
//!
//! This module groups all ECS systems that advance the puzzle each frame,
//! plus the world-level helpers that feed them time and input.
//!
//! Submodules overview
//! - [`input`] – sample a [`input::KeySource`] into [`crate::resources::input::InputState`]
//! - [`lifetime`] – despawn particles whose time ran out
//! - [`raycast`] – ray/box geometry that resolves how far a piece can slide
//! - [`selection`] – the selection/direction state machine
//! - [`slide`] – the frame-distributed mover
//! - [`smoke`] – smoke emitters and rising particles
//! - [`stuckto`] – keep attached entities on their targets
//! - [`time`] – update simulation time and delta
//! - [`windetector`] – one-shot player/target overlap check

pub mod input;
pub mod lifetime;
pub mod raycast;
pub mod selection;
pub mod slide;
pub mod smoke;
pub mod stuckto;
pub mod time;
pub mod windetector;
