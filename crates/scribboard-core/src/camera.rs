//! Camera module for pan/zoom transforms.

use kurbo::{Affine, Point, Size, Vec2};
use serde::{Deserialize, Serialize};

/// Smallest allowed zoom scale.
pub const MIN_ZOOM: f64 = 0.5;
/// Largest allowed zoom scale.
pub const MAX_ZOOM: f64 = 2.0;
/// Scale change per zoom step.
pub const ZOOM_STEP: f64 = 0.1;

/// Camera manages the view transform for the canvas.
///
/// Zoom is centered on the viewport: `scale_offset` shifts the scaled board
/// back by half the growth of the viewport, and is recomputed whenever the
/// scale or viewport size changes. Pan is kept in world units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    /// Accumulated pan, in world units.
    pub pan: Vec2,
    /// Current zoom scale, in `[MIN_ZOOM, MAX_ZOOM]`.
    scale: f64,
    /// Centering offset derived from `scale` and `viewport`.
    scale_offset: Vec2,
    /// Viewport size in screen pixels.
    viewport: Size,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            pan: Vec2::ZERO,
            scale: 1.0,
            scale_offset: Vec2::ZERO,
            viewport: Size::ZERO,
        }
    }
}

impl Camera {
    /// Create a new camera with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Camera for a viewport of the given size.
    pub fn with_viewport(viewport: Size) -> Self {
        let mut camera = Self::default();
        camera.set_viewport_size(viewport);
        camera
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn scale_offset(&self) -> Vec2 {
        self.scale_offset
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Get the affine transform for rendering.
    ///
    /// Translate by `pan * scale - scale_offset`, then scale.
    pub fn transform(&self) -> Affine {
        Affine::translate(self.pan * self.scale - self.scale_offset) * Affine::scale(self.scale)
    }

    /// Convert a screen point to world coordinates.
    pub fn screen_to_world(&self, screen_point: Point) -> Point {
        screen_to_world(screen_point, self.pan, self.scale, self.scale_offset)
    }

    /// Convert a world point to screen coordinates.
    pub fn world_to_screen(&self, world_point: Point) -> Point {
        self.transform() * world_point
    }

    /// Add a pointer drag delta to the pan offset.
    ///
    /// The render transform scales pan, so at zoom `s` the content moves
    /// `s` pixels per pointer pixel.
    pub fn pan_by(&mut self, delta: Vec2) {
        self.pan += delta;
    }

    /// Set the zoom scale, clamped and snapped to one decimal.
    pub fn set_scale(&mut self, scale: f64) {
        let snapped = (scale.clamp(MIN_ZOOM, MAX_ZOOM) * 10.0).round() / 10.0;
        if (snapped - self.scale).abs() > f64::EPSILON {
            log::debug!("Zoom {:.1} -> {:.1}", self.scale, snapped);
        }
        self.scale = snapped;
        self.update_scale_offset();
    }

    pub fn zoom_in(&mut self) {
        self.set_scale(self.scale + ZOOM_STEP);
    }

    pub fn zoom_out(&mut self) {
        self.set_scale(self.scale - ZOOM_STEP);
    }

    /// Reset zoom to 100%. Pan is kept.
    pub fn reset_zoom(&mut self) {
        self.set_scale(1.0);
    }

    /// Zoom as a whole percentage for display.
    pub fn zoom_percent(&self) -> u32 {
        (self.scale * 100.0).round() as u32
    }

    /// Update the viewport size and recompute the centering offset.
    pub fn set_viewport_size(&mut self, viewport: Size) {
        self.viewport = viewport;
        self.update_scale_offset();
    }

    fn update_scale_offset(&mut self) {
        self.scale_offset = scale_offset(self.viewport, self.scale);
    }
}

/// Centering offset for a viewport zoomed to `scale`.
pub fn scale_offset(viewport: Size, scale: f64) -> Vec2 {
    Vec2::new(
        (viewport.width * scale - viewport.width) / 2.0,
        (viewport.height * scale - viewport.height) / 2.0,
    )
}

/// Map a screen point to world coordinates.
pub fn screen_to_world(screen: Point, pan: Vec2, scale: f64, scale_offset: Vec2) -> Point {
    Point::new(
        (screen.x - pan.x * scale + scale_offset.x) / scale,
        (screen.y - pan.y * scale + scale_offset.y) / scale,
    )
}
