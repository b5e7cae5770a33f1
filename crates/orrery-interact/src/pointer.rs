//! Last-known pointer state.
//!
//! Pointer-move events only record coordinates here; hover resolution is
//! deferred to the next frame tick, which decouples input rate from render
//! rate.

use glam::Vec2;

/// Frame-coherent pointer tracker.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerState {
    screen: Vec2,
    ndc: Vec2,
    inside: bool,
}

impl PointerState {
    /// Creates a tracker with the pointer outside the window.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a cursor-moved event, converting to normalized device
    /// coordinates for ray unprojection (x right, y up, both in [-1, 1]).
    pub fn on_cursor_moved(&mut self, x: f64, y: f64, width: u32, height: u32) {
        self.screen = Vec2::new(x as f32, y as f32);
        let w = width.max(1) as f32;
        let h = height.max(1) as f32;
        self.ndc = Vec2::new(
            (x as f32 / w) * 2.0 - 1.0,
            -((y as f32 / h) * 2.0 - 1.0),
        );
        self.inside = true;
    }

    /// Records that the cursor left the window; hover should clear.
    pub fn on_cursor_left(&mut self) {
        self.inside = false;
    }

    /// Last screen-space position in physical pixels.
    pub fn screen(&self) -> Vec2 {
        self.screen
    }

    /// Last normalized device coordinates.
    pub fn ndc(&self) -> Vec2 {
        self.ndc
    }

    /// Whether the pointer is currently over the window.
    pub fn inside(&self) -> bool {
        self.inside
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_of_window_maps_to_ndc_origin() {
        let mut pointer = PointerState::new();
        pointer.on_cursor_moved(640.0, 360.0, 1280, 720);
        assert!(pointer.ndc().length() < 1e-6);
    }

    #[test]
    fn test_corners_map_to_ndc_extremes() {
        let mut pointer = PointerState::new();
        pointer.on_cursor_moved(0.0, 0.0, 800, 600);
        assert!((pointer.ndc() - Vec2::new(-1.0, 1.0)).length() < 1e-6);
        pointer.on_cursor_moved(800.0, 600.0, 800, 600);
        assert!((pointer.ndc() - Vec2::new(1.0, -1.0)).length() < 1e-6);
    }

    #[test]
    fn test_cursor_left_marks_outside_but_keeps_position() {
        let mut pointer = PointerState::new();
        pointer.on_cursor_moved(10.0, 20.0, 100, 100);
        pointer.on_cursor_left();
        assert!(!pointer.inside());
        assert_eq!(pointer.screen(), Vec2::new(10.0, 20.0));
    }

    #[test]
    fn test_zero_size_window_does_not_divide_by_zero() {
        let mut pointer = PointerState::new();
        pointer.on_cursor_moved(5.0, 5.0, 0, 0);
        assert!(pointer.ndc().x.is_finite() && pointer.ndc().y.is_finite());
    }
}
