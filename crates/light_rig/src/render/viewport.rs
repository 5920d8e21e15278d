//! Viewport dimensions reported by the windowing host

/// Upper bound for the device pixel ratio passed to the renderer
pub const MAX_PIXEL_RATIO: f32 = 2.0;

/// Drawable area in CSS pixels plus the device pixel ratio
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Width in CSS pixels
    pub width: u32,
    /// Height in CSS pixels
    pub height: u32,
    /// Device pixels per CSS pixel
    pub device_pixel_ratio: f32,
}

impl Viewport {
    /// Create a viewport
    pub fn new(width: u32, height: u32, device_pixel_ratio: f32) -> Self {
        Self { width, height, device_pixel_ratio }
    }

    /// Width over height; a zero height is treated as one pixel
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }

    /// Whether either side is zero, as for a minimized window
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Pixel ratio handed to the renderer, capped at [`MAX_PIXEL_RATIO`]
    pub fn render_pixel_ratio(&self) -> f32 {
        self.device_pixel_ratio.min(MAX_PIXEL_RATIO)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(800, 600, 1.0)
    }
}
