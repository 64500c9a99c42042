//! Boat placement: default slots for new boats and snapping while dragging.

use crate::config::{PlacementSettings, SnapSettings};
use crate::model::{Boat, BoatId};
use kurbo::Point;

/// Which side of a neighbor a dragged boat docks on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DockSide {
    Left,
    Right,
}

/// A neighbor the dragged boat docked against.
#[derive(Debug, Clone, PartialEq)]
pub struct SnapTarget {
    /// The neighbor boat.
    pub boat_id: BoatId,
    /// Where the dragged boat ends up.
    pub point: Point,
    pub side: DockSide,
}

/// Result of a snap operation.
#[derive(Debug, Clone, PartialEq)]
pub struct SnapResult {
    /// The snapped point.
    pub point: Point,
    /// Whether the X coordinate was snapped.
    pub snapped_x: bool,
    /// Whether the Y coordinate was snapped.
    pub snapped_y: bool,
    /// Set when the boat docked beside a neighbor.
    pub target: Option<SnapTarget>,
}

impl SnapResult {
    /// Create a result with no snapping.
    pub fn none(point: Point) -> Self {
        Self {
            point,
            snapped_x: false,
            snapped_y: false,
            target: None,
        }
    }

    /// Check if any snapping occurred.
    pub fn is_snapped(&self) -> bool {
        self.snapped_x || self.snapped_y
    }
}

/// Position for a new boat of `width` using the default settings.
pub fn default_position(boats: &[Boat], width: f64) -> Point {
    default_position_with(&PlacementSettings::default(), boats, width)
}

/// Position for a new boat of `width`.
///
/// Boats fill a single row left to right. The first boat sits one edge
/// margin in from the yard's left boundary on the default row; later
/// boats go one gap to the right of the rightmost hull, on its row.
pub fn default_position_with(settings: &PlacementSettings, boats: &[Boat], width: f64) -> Point {
    let rightmost = boats.iter().reduce(|best, boat| {
        if boat.right_edge() > best.right_edge() {
            boat
        } else {
            best
        }
    });

    match rightmost {
        None => Point::new(settings.edge_margin + width / 2.0, settings.default_row_y),
        Some(boat) => Point::new(
            boat.right_edge() + settings.boat_gap + width / 2.0,
            boat.position.y,
        ),
    }
}

/// Snap each axis of a point to the grid when it lies within half the
/// snap distance of a grid line.
pub fn snap_to_grid(point: Point, settings: &SnapSettings) -> SnapResult {
    let grid_x = (point.x / settings.grid_size).round() * settings.grid_size;
    let grid_y = (point.y / settings.grid_size).round() * settings.grid_size;
    let threshold = settings.snap_distance / 2.0;

    let snapped_x = (point.x - grid_x).abs() < threshold;
    let snapped_y = (point.y - grid_y).abs() < threshold;

    SnapResult {
        point: Point::new(
            if snapped_x { grid_x } else { point.x },
            if snapped_y { grid_y } else { point.y },
        ),
        snapped_x,
        snapped_y,
        target: None,
    }
}

/// Try to dock `dragged` beside `neighbor` at the proposed point.
///
/// The neighbor must be within twice the snap distance, and the closer of
/// its two side-by-side slots within the snap distance of the proposed x.
/// Left wins when both slots are equally close. Y is never changed.
pub fn dock_beside(
    dragged: &Boat,
    neighbor: &Boat,
    proposed: Point,
    settings: &SnapSettings,
) -> Option<SnapTarget> {
    if proposed.distance(neighbor.position) >= settings.snap_distance * 2.0 {
        return None;
    }

    let total_width = (dragged.width + neighbor.width) / 2.0;
    let left_x = neighbor.position.x - total_width;
    let right_x = neighbor.position.x + total_width;
    let left_distance = (proposed.x - left_x).abs();
    let right_distance = (proposed.x - right_x).abs();

    if left_distance.min(right_distance) >= settings.snap_distance {
        return None;
    }

    let (x, side) = if left_distance <= right_distance {
        (left_x, DockSide::Left)
    } else {
        (right_x, DockSide::Right)
    };

    Some(SnapTarget {
        boat_id: neighbor.id.clone(),
        point: Point::new(x, proposed.y),
        side,
    })
}

/// Snap a dragged boat using the default settings.
pub fn snap(boats: &[Boat], dragged_id: &str, proposed: Point) -> SnapResult {
    snap_with(&SnapSettings::default(), boats, dragged_id, proposed)
}

/// Resolve where a dragged boat lands for a proposed center point.
///
/// Docking beside a neighbor takes priority over the grid. Neighbors are
/// tried in slice order and the first one that docks wins. An unknown
/// `dragged_id` leaves the proposed point untouched.
pub fn snap_with(
    settings: &SnapSettings,
    boats: &[Boat],
    dragged_id: &str,
    proposed: Point,
) -> SnapResult {
    let Some(dragged) = boats.iter().find(|b| b.id == dragged_id) else {
        log::warn!("Snap requested for unknown boat {}", dragged_id);
        return SnapResult::none(proposed);
    };

    let docked = boats
        .iter()
        .filter(|b| b.id != dragged_id)
        .find_map(|neighbor| dock_beside(dragged, neighbor, proposed, settings));

    match docked {
        Some(target) => {
            log::debug!(
                "Boat {} docks {:?} of {} at ({:.2}, {:.2})",
                dragged_id,
                target.side,
                target.boat_id,
                target.point.x,
                target.point.y
            );
            SnapResult {
                point: target.point,
                snapped_x: true,
                snapped_y: false,
                target: Some(target),
            }
        }
        None => snap_to_grid(proposed, settings),
    }
}
