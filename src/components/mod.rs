//! ECS components for entities.
//!
//! This module groups all component types attached to puzzle entities.
//!
//! Submodules overview:
//! - [`boxcollider`] – axis-aligned box collider and the world [`boxcollider::Aabb`]
//! - [`dynamictext`] – text content shown by the UI layer
//! - [`lifetime`] – countdown that despawns short-lived entities
//! - [`mapposition`] – world-space position (pivot) for an entity
//! - [`nodename`] – name of the level node an entity came from
//! - [`piece`] – movable piece and its selection state
//! - [`rotation`] – yaw, which fixes a piece's slide axis
//! - [`slidetask`] – resumable per-piece slide record
//! - [`smoke`] – smoke emitter and particles
//! - [`stuckto`] – make an entity follow another one
//! - [`tags`] – obstacle/player/target/instruction markers

pub mod boxcollider;
pub mod dynamictext;
pub mod lifetime;
pub mod mapposition;
pub mod nodename;
pub mod piece;
pub mod rotation;
pub mod slidetask;
pub mod smoke;
pub mod stuckto;
pub mod tags;
