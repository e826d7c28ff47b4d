//! ECS resources made available to systems.
//!
//! Long-lived data injected into the ECS world and read by systems every
//! frame.
//!
//! Overview
//! - `gameconfig` – speeds, win message and host settings loaded from INI
//! - `input` – per-frame state of the keys the puzzle reacts to
//! - `puzzlerng` – seedable random source
//! - `selection` – hover baseline, hover timer and the per-frame transition flag
//! - `winlatch` – one-way solved flag
//! - `worldtime` – simulation time and delta
pub mod gameconfig;
pub mod input;
pub mod puzzlerng;
pub mod selection;
pub mod winlatch;
pub mod worldtime;
