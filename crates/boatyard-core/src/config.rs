//! Tunable yard settings.
//!
//! Every field has a default, so a layout file only needs to name the
//! values it wants to change.

use crate::error::{YardError, YardResult};
use kurbo::Vec2;
use serde::{Deserialize, Serialize};

/// Snap activation radius in meters.
pub const SNAP_DISTANCE: f64 = 2.0;
/// Grid pitch for snapping in meters.
pub const SNAP_GRID_SIZE: f64 = 1.0;
/// Gap between the yard's left boundary and the first boat.
pub const EDGE_MARGIN: f64 = 0.35;
/// Gap between neighboring hulls in the default row.
pub const BOAT_GAP: f64 = 0.7;
/// Row used for the first boat in an empty yard.
pub const DEFAULT_ROW_Y: f64 = 20.0;
/// Screen pixels per yard meter at 100% zoom.
pub const PIXELS_PER_METER: f64 = 10.0;

/// Drag snapping settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SnapSettings {
    pub snap_distance: f64,
    pub grid_size: f64,
}

impl Default for SnapSettings {
    fn default() -> Self {
        Self {
            snap_distance: SNAP_DISTANCE,
            grid_size: SNAP_GRID_SIZE,
        }
    }
}

/// Default placement settings for newly added boats.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlacementSettings {
    pub edge_margin: f64,
    pub boat_gap: f64,
    pub default_row_y: f64,
}

impl Default for PlacementSettings {
    fn default() -> Self {
        Self {
            edge_margin: EDGE_MARGIN,
            boat_gap: BOAT_GAP,
            default_row_y: DEFAULT_ROW_Y,
        }
    }
}

/// View camera settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ViewSettings {
    pub pixels_per_meter: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
    /// Zoom change per zoom in/out step.
    pub zoom_step: f64,
    /// Pan restored by a view reset, in unzoomed pixels.
    pub home_pan: Vec2,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            pixels_per_meter: PIXELS_PER_METER,
            min_zoom: 0.1,
            max_zoom: 3.0,
            zoom_step: 0.2,
            home_pan: Vec2::new(50.0, 50.0),
        }
    }
}

/// All yard settings.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct YardSettings {
    pub snap: SnapSettings,
    pub placement: PlacementSettings,
    pub view: ViewSettings,
}

fn require_positive(field: &'static str, value: f64) -> YardResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(YardError::InvalidSetting { field, value })
    }
}

impl YardSettings {
    /// Check the values that later arithmetic divides by or clamps with.
    pub fn validate(&self) -> YardResult<()> {
        require_positive("snap.snapDistance", self.snap.snap_distance)?;
        require_positive("snap.gridSize", self.snap.grid_size)?;
        require_positive("view.pixelsPerMeter", self.view.pixels_per_meter)?;
        require_positive("view.minZoom", self.view.min_zoom)?;
        require_positive("view.maxZoom", self.view.max_zoom)?;
        require_positive("view.zoomStep", self.view.zoom_step)?;
        if self.view.min_zoom > self.view.max_zoom {
            return Err(YardError::InvalidSetting {
                field: "view.minZoom",
                value: self.view.min_zoom,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_settings_fall_back_to_defaults() {
        let settings: YardSettings =
            serde_json::from_str(r#"{ "snap": { "gridSize": 0.5 } }"#).unwrap();
        assert!((settings.snap.grid_size - 0.5).abs() < f64::EPSILON);
        assert!((settings.snap.snap_distance - SNAP_DISTANCE).abs() < f64::EPSILON);
        assert_eq!(settings.placement, PlacementSettings::default());
        assert_eq!(settings.view, ViewSettings::default());
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_inverted_zoom_limits_rejected() {
        let settings: YardSettings =
            serde_json::from_str(r#"{ "view": { "minZoom": 5, "maxZoom": 1 } }"#).unwrap();
        assert!(matches!(
            settings.validate(),
            Err(YardError::InvalidSetting { field: "view.minZoom", .. })
        ));
    }

    #[test]
    fn test_non_positive_scales_rejected() {
        let mut settings = YardSettings::default();
        settings.snap.grid_size = 0.0;
        assert!(matches!(
            settings.validate(),
            Err(YardError::InvalidSetting { field: "snap.gridSize", .. })
        ));

        let mut settings = YardSettings::default();
        settings.view.pixels_per_meter = f64::NAN;
        assert!(matches!(
            settings.validate(),
            Err(YardError::InvalidSetting { field: "view.pixelsPerMeter", .. })
        ));
    }
}
