//! Interaction state for the Orrery visualization: pause, theme, speed
//! overrides, pointer tracking, hover policy, and the control-panel model.
//!
//! Everything here is an explicit struct passed to the frame callback by
//! reference, so the whole interaction surface unit-tests without a window.

mod controller;
mod panel;
mod pointer;

pub use controller::{InteractionController, Theme};
pub use panel::{ControlPanel, SliderRow, Tooltip};
pub use pointer::PointerState;
