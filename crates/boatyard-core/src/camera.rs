//! Camera module for the yard map's pan/zoom transform.

use crate::config::ViewSettings;
use kurbo::{Affine, Point, Vec2};
use serde::{Deserialize, Serialize};

/// Camera converts between yard meters and screen pixels.
///
/// `screen = (world * pixels_per_meter + pan) * zoom`. Pan is stored in
/// unzoomed pixels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Camera {
    /// Current translation offset in unzoomed pixels.
    pub pan: Vec2,
    /// Current zoom level (1.0 = 100%).
    pub zoom: f64,
    /// View limits and scale.
    pub settings: ViewSettings,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(ViewSettings::default())
    }
}

impl Camera {
    /// Create a camera at 100% zoom with no pan.
    pub fn new(settings: ViewSettings) -> Self {
        Self {
            pan: Vec2::ZERO,
            zoom: 1.0,
            settings,
        }
    }

    /// Get the affine transform for rendering.
    ///
    /// This transform converts yard coordinates to screen coordinates.
    pub fn transform(&self) -> Affine {
        Affine::scale(self.zoom)
            * Affine::translate(self.pan)
            * Affine::scale(self.settings.pixels_per_meter)
    }

    /// Get the inverse transform for input handling.
    ///
    /// This transform converts screen coordinates to yard coordinates.
    pub fn inverse_transform(&self) -> Affine {
        Affine::scale(1.0 / self.settings.pixels_per_meter)
            * Affine::translate(-self.pan)
            * Affine::scale(1.0 / self.zoom)
    }

    /// Convert a screen point to yard coordinates.
    pub fn screen_to_world(&self, screen_point: Point) -> Point {
        self.inverse_transform() * screen_point
    }

    /// Convert a yard point to screen coordinates.
    pub fn world_to_screen(&self, world_point: Point) -> Point {
        self.transform() * world_point
    }

    /// Pan by a pointer delta in screen pixels.
    pub fn pan_by(&mut self, screen_delta: Vec2) {
        self.pan += screen_delta / self.zoom;
    }

    /// Change zoom by `delta`, kept within the configured range.
    ///
    /// Never panics on inconsistent limits; the lower limit wins.
    pub fn zoom_by(&mut self, delta: f64) {
        self.zoom = (self.zoom + delta)
            .min(self.settings.max_zoom)
            .max(self.settings.min_zoom);
    }

    pub fn zoom_in(&mut self) {
        self.zoom_by(self.settings.zoom_step);
    }

    pub fn zoom_out(&mut self) {
        self.zoom_by(-self.settings.zoom_step);
    }

    /// Reset to 100% zoom and the home pan.
    pub fn reset(&mut self) {
        self.zoom = 1.0;
        self.pan = self.settings.home_pan;
    }

    /// On-screen size of one yard meter in pixels.
    pub fn meters_to_pixels(&self) -> f64 {
        self.settings.pixels_per_meter * self.zoom
    }

    /// Zoom as a whole percentage for display.
    pub fn zoom_percent(&self) -> u32 {
        (self.zoom * 100.0).round() as u32
    }
}
