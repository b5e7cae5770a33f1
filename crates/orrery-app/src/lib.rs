//! Orrery application shell.
//!
//! Wires the simulation core, scene, interaction model, and renderer into a
//! winit event loop.

pub mod frame;
pub mod window;
