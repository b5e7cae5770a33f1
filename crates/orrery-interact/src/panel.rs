//! Host-independent control panel model.
//!
//! One speed row per body in catalog order, a pause/resume control, a theme
//! control, and the hover tooltip. The host maps its input events onto
//! [`ControlPanel`] operations and reads widget values/labels back out; no
//! widget toolkit types appear here.

use tracing::info;

use orrery_core::{BodyRegistry, SPEED_MAX, SPEED_MIN, SPEED_STEP};

use crate::controller::InteractionController;
use crate::pointer::PointerState;

/// One labeled speed control, mirroring a body's current angular speed.
#[derive(Clone, Debug, PartialEq)]
pub struct SliderRow {
    /// Body name, shown as the row label.
    pub label: &'static str,
    /// Current slider value, always within [`SPEED_MIN`, `SPEED_MAX`].
    pub value: f32,
}

/// Hover tooltip state the host positions near the pointer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Tooltip {
    pub visible: bool,
    pub text: String,
    /// Screen position in physical pixels, offset from the pointer.
    pub x: f32,
    pub y: f32,
}

/// Pixel offset between the pointer and the tooltip corner.
const TOOLTIP_OFFSET: f32 = 10.0;

/// The interactive widget surface: slider rows plus a row cursor.
#[derive(Debug)]
pub struct ControlPanel {
    rows: Vec<SliderRow>,
    selected: usize,
}

impl ControlPanel {
    /// Builds one row per registry body, in catalog order, seeded with each
    /// body's current (catalog-default) speed.
    pub fn from_registry(registry: &BodyRegistry) -> Self {
        let rows = registry
            .all()
            .iter()
            .map(|body| SliderRow {
                label: body.name,
                value: body.angular_speed.clamp(SPEED_MIN, SPEED_MAX),
            })
            .collect();
        Self { rows, selected: 0 }
    }

    /// All rows in catalog order.
    pub fn rows(&self) -> &[SliderRow] {
        &self.rows
    }

    /// Index of the currently selected row.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Moves the row cursor down, wrapping at the end.
    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % self.rows.len();
    }

    /// Moves the row cursor up, wrapping at the start.
    pub fn select_prev(&mut self) {
        self.selected = (self.selected + self.rows.len() - 1) % self.rows.len();
    }

    /// Nudges the selected slider by `steps` increments of [`SPEED_STEP`],
    /// clamps to the control bounds, and pushes the new value through the
    /// controller to the registry.
    pub fn nudge(
        &mut self,
        steps: i32,
        controller: &mut InteractionController,
        registry: &mut BodyRegistry,
    ) {
        let row = &mut self.rows[self.selected];
        let value = (row.value + steps as f32 * SPEED_STEP).clamp(SPEED_MIN, SPEED_MAX);
        if value != row.value {
            row.value = value;
            controller.set_speed(registry, row.label, value);
            info!(body = row.label, speed = value, "slider adjusted");
        }
    }

    /// Derives the tooltip from the controller's hover target and the last
    /// pointer position.
    pub fn tooltip(controller: &InteractionController, pointer: &PointerState) -> Tooltip {
        match controller.hovered() {
            Some(name) if pointer.inside() => Tooltip {
                visible: true,
                text: name.to_string(),
                x: pointer.screen().x + TOOLTIP_OFFSET,
                y: pointer.screen().y + TOOLTIP_OFFSET,
            },
            _ => Tooltip::default(),
        }
    }
}
