//! Surface size tracking that normalizes platform-specific resize behavior.
//!
//! Zero-size windows (common on Wayland before the compositor assigns a
//! size) are clamped to 1x1 to prevent wgpu panics; DPI changes are folded
//! into the same resize path.

/// Minimum surface dimension.
pub const MIN_SURFACE_DIMENSION: u32 = 1;

/// Tracks the physical pixel dimensions and scale factor of the output
/// surface. The resize handler is the only writer.
#[derive(Debug, Clone, Copy)]
pub struct SurfaceWrapper {
    physical_width: u32,
    physical_height: u32,
    scale_factor: f64,
}

impl SurfaceWrapper {
    /// Creates a wrapper from initial physical dimensions and scale factor.
    pub fn new(physical_width: u32, physical_height: u32, scale_factor: f64) -> Self {
        Self {
            physical_width: physical_width.max(MIN_SURFACE_DIMENSION),
            physical_height: physical_height.max(MIN_SURFACE_DIMENSION),
            scale_factor,
        }
    }

    /// Handle a window resize. Returns the clamped new dimensions if they
    /// actually changed.
    pub fn handle_resize(&mut self, width: u32, height: u32) -> Option<(u32, u32)> {
        let width = width.max(MIN_SURFACE_DIMENSION);
        let height = height.max(MIN_SURFACE_DIMENSION);
        if width == self.physical_width && height == self.physical_height {
            return None;
        }
        self.physical_width = width;
        self.physical_height = height;
        Some((width, height))
    }

    /// Handle a scale-factor change with the window's new inner size.
    pub fn handle_scale_factor_changed(
        &mut self,
        scale_factor: f64,
        width: u32,
        height: u32,
    ) -> Option<(u32, u32)> {
        self.scale_factor = scale_factor;
        self.handle_resize(width, height)
    }

    /// Current physical width in pixels.
    pub fn physical_width(&self) -> u32 {
        self.physical_width
    }

    /// Current physical height in pixels.
    pub fn physical_height(&self) -> u32 {
        self.physical_height
    }

    /// Width over height, for camera projection.
    pub fn aspect_ratio(&self) -> f32 {
        self.physical_width as f32 / self.physical_height.max(1) as f32
    }

    /// Current scale factor (physical pixels per logical pixel).
    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_size_is_clamped() {
        let wrapper = SurfaceWrapper::new(0, 0, 1.0);
        assert_eq!(wrapper.physical_width(), 1);
        assert_eq!(wrapper.physical_height(), 1);
    }

    #[test]
    fn test_resize_reports_change_once() {
        let mut wrapper = SurfaceWrapper::new(800, 600, 1.0);
        assert_eq!(wrapper.handle_resize(1024, 768), Some((1024, 768)));
        assert_eq!(wrapper.handle_resize(1024, 768), None);
    }

    #[test]
    fn test_resize_to_zero_clamps() {
        let mut wrapper = SurfaceWrapper::new(800, 600, 1.0);
        assert_eq!(wrapper.handle_resize(0, 600), Some((1, 600)));
    }

    #[test]
    fn test_scale_factor_change_updates_both() {
        let mut wrapper = SurfaceWrapper::new(800, 600, 1.0);
        let changed = wrapper.handle_scale_factor_changed(2.0, 1600, 1200);
        assert_eq!(changed, Some((1600, 1200)));
        assert_eq!(wrapper.scale_factor(), 2.0);
    }

    #[test]
    fn test_aspect_ratio() {
        let wrapper = SurfaceWrapper::new(1600, 900, 1.0);
        assert!((wrapper.aspect_ratio() - 16.0 / 9.0).abs() < 1e-6);
    }
}
