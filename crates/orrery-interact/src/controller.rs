//! Run/pause state, background theme, speed delegation, and hover policy.

use tracing::error;

use orrery_core::{BodyRegistry, RegistryError};
use orrery_scene::Hit;

/// Background theme. Night maps to a black backdrop, Day to white; there are
/// no intermediate states and no transition animation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Night,
    Day,
}

impl Theme {
    /// Clear color for this theme (linear RGBA).
    pub fn background(&self) -> [f64; 4] {
        match self {
            Theme::Night => [0.0, 0.0, 0.0, 1.0],
            Theme::Day => [1.0, 1.0, 1.0, 1.0],
        }
    }

    fn flipped(self) -> Self {
        match self {
            Theme::Night => Theme::Day,
            Theme::Day => Theme::Night,
        }
    }
}

/// Owns all interactive state mutated by input events.
#[derive(Debug, Default)]
pub struct InteractionController {
    paused: bool,
    theme: Theme,
    hovered: Option<&'static str>,
}

impl InteractionController {
    /// Starts running, in the night theme, with nothing hovered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether orbital advancement is currently suspended.
    pub fn paused(&self) -> bool {
        self.paused
    }

    /// Flips the run/pause state.
    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Label the pause control should display: the action a press would take.
    pub fn pause_label(&self) -> &'static str {
        if self.paused { "Resume" } else { "Pause" }
    }

    /// Current background theme.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Flips between the night and day backdrop.
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.flipped();
    }

    /// Applies a speed override for the named body.
    ///
    /// Range clamping happens at the input boundary; this accepts any finite
    /// value. An unknown name is an invariant violation (the panel is built
    /// from the same catalog), so it is logged and swallowed rather than
    /// crashing the frame loop.
    pub fn set_speed(&mut self, registry: &mut BodyRegistry, name: &str, speed: f32) {
        if let Err(RegistryError::NotFound(name)) = registry.set_speed(name, speed) {
            error!(body = %name, "speed override for unknown body");
        }
    }

    /// Resolves the hover target from a distance-sorted hit list.
    ///
    /// The nearest hit wins; the list is stably sorted, so equal distances
    /// fall back to catalog order. An empty list clears the hover.
    pub fn resolve_hover(&mut self, registry: &BodyRegistry, hits: &[Hit]) {
        self.hovered = hits
            .first()
            .map(|hit| registry.all()[hit.body_index].name);
    }

    /// Name of the currently hovered body, if any.
    pub fn hovered(&self) -> Option<&'static str> {
        self.hovered
    }
}
