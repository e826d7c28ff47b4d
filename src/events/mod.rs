//! Event types triggered by the puzzle systems.
//!
//! Events let the host (logging, UI, audio) react to what happens in the
//! puzzle without the systems knowing about it. They are delivered to
//! observers registered with `World::add_observer`.
//!
//! Submodules:
//! - [`puzzle`] – the puzzle has been solved
//! - [`selection`] – the cursor moved to another piece
//! - [`slide`] – a slide started or finished
pub mod puzzle;
pub mod selection;
pub mod slide;
