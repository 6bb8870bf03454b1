//! Platform abstraction layer
//!
//! Keyboard events are folded into an [`InputState`] that the simulation
//! samples once per tick.

pub mod input;

pub use input::{InputState, Key};
