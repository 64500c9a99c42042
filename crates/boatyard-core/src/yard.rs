//! Yard state and the interactions that change it.

use crate::camera::Camera;
use crate::config::YardSettings;
use crate::crane::{self, CraneAnalysis};
use crate::error::{YardError, YardResult};
use crate::model::{Boat, BoatId, BoatSpec, Crane, Obstacle, YardLayout};
use crate::placement::{self, SnapResult, SnapTarget};
use kurbo::Point;
use uuid::Uuid;

/// What the active pointer gesture is doing.
#[derive(Debug, Clone, PartialEq)]
pub enum PointerMode {
    /// Dragging a boat.
    DragBoat {
        boat_id: BoatId,
        /// Neighbor the boat is currently docked against.
        snap_target: Option<SnapTarget>,
    },
    /// Panning the view.
    Pan,
}

/// A pointer gesture between press and release.
#[derive(Debug, Clone, PartialEq)]
struct PointerSession {
    /// Last pointer position in screen pixels.
    last_screen: Point,
    mode: PointerMode,
}

/// The yard: boats, cranes, obstacles, the view, and the current selection.
#[derive(Debug, Clone)]
pub struct Yard {
    /// Yard extent in meters.
    pub width: f64,
    pub height: f64,
    /// Snap and placement settings. View settings live on the camera.
    settings: YardSettings,
    /// View transform.
    pub camera: Camera,
    boats: Vec<Boat>,
    cranes: Vec<Crane>,
    obstacles: Vec<Obstacle>,
    selected: Option<BoatId>,
    pointer: Option<PointerSession>,
}

impl Yard {
    /// Create an empty yard.
    pub fn empty(width: f64, height: f64, settings: YardSettings) -> Self {
        Self {
            width,
            height,
            settings,
            camera: Camera::new(settings.view),
            boats: Vec::new(),
            cranes: Vec::new(),
            obstacles: Vec::new(),
            selected: None,
            pointer: None,
        }
    }

    /// Create the built-in sample yard.
    pub fn sample() -> Self {
        let layout = crate::seed::default_layout();
        let mut yard = Self::empty(layout.width, layout.height, layout.settings);
        yard.boats = layout.boats;
        yard.cranes = layout.cranes;
        yard.obstacles = layout.obstacles;
        yard
    }

    /// Create a yard from a layout after validating it.
    pub fn from_layout(layout: YardLayout) -> YardResult<Self> {
        layout.validate()?;
        let mut yard = Self::empty(layout.width, layout.height, layout.settings);
        yard.boats = layout.boats;
        yard.cranes = layout.cranes;
        yard.obstacles = layout.obstacles;
        Ok(yard)
    }

    /// Snapshot the yard as a layout.
    pub fn layout(&self) -> YardLayout {
        YardLayout {
            width: self.width,
            height: self.height,
            boats: self.boats.clone(),
            cranes: self.cranes.clone(),
            obstacles: self.obstacles.clone(),
            settings: self.settings(),
        }
    }

    /// Current settings, with the view taken from the camera.
    pub fn settings(&self) -> YardSettings {
        YardSettings {
            view: self.camera.settings,
            ..self.settings
        }
    }

    /// Boats in insertion order.
    pub fn boats(&self) -> &[Boat] {
        &self.boats
    }

    pub fn cranes(&self) -> &[Crane] {
        &self.cranes
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    /// Get a boat by ID.
    pub fn get_boat(&self, id: &str) -> Option<&Boat> {
        self.boats.iter().find(|b| b.id == id)
    }

    fn get_boat_mut(&mut self, id: &str) -> YardResult<&mut Boat> {
        self.boats
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| YardError::BoatNotFound(id.to_string()))
    }

    pub fn is_empty(&self) -> bool {
        self.boats.is_empty()
    }

    pub fn len(&self) -> usize {
        self.boats.len()
    }

    /// Add a new boat at the next free slot in the row.
    pub fn add_boat(&mut self, spec: BoatSpec) -> YardResult<BoatId> {
        spec.validate()?;
        let position =
            placement::default_position_with(&self.settings.placement, &self.boats, spec.width);
        let id = format!("boat-{}", Uuid::new_v4());
        log::info!(
            "Adding boat {} ({}) at ({:.2}, {:.2})",
            spec.name,
            id,
            position.x,
            position.y
        );
        self.boats.push(Boat::from_spec(id.clone(), spec, position));
        Ok(id)
    }

    /// Edit a boat's details. Its position is left alone.
    pub fn update_boat(&mut self, id: &str, spec: BoatSpec) -> YardResult<()> {
        spec.validate()?;
        self.get_boat_mut(id)?.apply_spec(spec);
        Ok(())
    }

    /// Remove a boat, dropping it from the selection and any active drag.
    pub fn remove_boat(&mut self, id: &str) -> Option<Boat> {
        let index = self.boats.iter().position(|b| b.id == id)?;
        let boat = self.boats.remove(index);

        if self.selected.as_deref() == Some(id) {
            self.selected = None;
        }
        if self.dragged_boat() == Some(id) {
            self.pointer = None;
        }
        log::info!("Removed boat {} ({})", boat.name, boat.id);
        Some(boat)
    }

    /// Move a boat's center to `position`.
    pub fn move_boat(&mut self, id: &str, position: Point) -> YardResult<()> {
        self.get_boat_mut(id)?.position = position;
        Ok(())
    }

    /// Select a boat (replaces any previous selection).
    pub fn select(&mut self, id: &str) -> YardResult<()> {
        if self.get_boat(id).is_none() {
            return Err(YardError::BoatNotFound(id.to_string()));
        }
        self.selected = Some(id.to_string());
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// The selected boat with its current position.
    pub fn selected_boat(&self) -> Option<&Boat> {
        self.selected.as_deref().and_then(|id| self.get_boat(id))
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.as_deref() == Some(id)
    }

    /// First boat, in insertion order, whose hull covers a yard point.
    pub fn boat_at(&self, world_point: Point) -> Option<&Boat> {
        self.boats.iter().find(|b| b.contains(world_point))
    }

    /// Crane analysis for the selected boat, nearest crane first.
    pub fn crane_analysis(&self) -> Vec<CraneAnalysis<'_>> {
        crane::rank(&self.cranes, self.selected_boat())
    }

    /// Boats ordered left to right.
    pub fn boats_by_position(&self) -> Vec<&Boat> {
        let mut boats: Vec<&Boat> = self.boats.iter().collect();
        boats.sort_by(|a, b| a.position.x.total_cmp(&b.position.x));
        boats
    }

    /// Start a pointer gesture at a screen point.
    ///
    /// Pressing on a boat selects it and starts dragging it; pressing on
    /// empty yard starts panning. Returns the boat hit, if any.
    pub fn pointer_down(&mut self, screen_point: Point) -> Option<BoatId> {
        let world = self.camera.screen_to_world(screen_point);
        let hit = self.boat_at(world).map(|b| b.id.clone());

        let mode = match &hit {
            Some(id) => {
                self.selected = Some(id.clone());
                PointerMode::DragBoat {
                    boat_id: id.clone(),
                    snap_target: None,
                }
            }
            None => PointerMode::Pan,
        };
        self.pointer = Some(PointerSession {
            last_screen: screen_point,
            mode,
        });
        hit
    }

    /// Continue the pointer gesture.
    ///
    /// While dragging, the boat's center follows the pointer with snapping
    /// applied and the snap result is returned. While panning, the view
    /// moves with the pointer.
    pub fn pointer_move(&mut self, screen_point: Point) -> Option<SnapResult> {
        let mut session = self.pointer.take()?;
        let delta = screen_point - session.last_screen;
        session.last_screen = screen_point;

        let result = match &mut session.mode {
            PointerMode::DragBoat { boat_id, snap_target } => {
                let world = self.camera.screen_to_world(screen_point);
                let result =
                    placement::snap_with(&self.settings.snap, &self.boats, boat_id, world);
                *snap_target = result.target.clone();
                if let Err(err) = self.move_boat(boat_id, result.point) {
                    log::warn!("Drag target vanished: {}", err);
                }
                Some(result)
            }
            PointerMode::Pan => {
                self.camera.pan_by(delta);
                None
            }
        };

        self.pointer = Some(session);
        result
    }

    /// End the pointer gesture.
    pub fn pointer_up(&mut self) {
        self.pointer = None;
    }

    /// Mode of the active pointer gesture.
    pub fn pointer_mode(&self) -> Option<&PointerMode> {
        self.pointer.as_ref().map(|session| &session.mode)
    }

    /// Boat being dragged, if any.
    pub fn dragged_boat(&self) -> Option<&str> {
        match self.pointer_mode() {
            Some(PointerMode::DragBoat { boat_id, .. }) => Some(boat_id),
            _ => None,
        }
    }

    /// Neighbor the dragged boat is docked against, for drawing a guide.
    pub fn snap_target(&self) -> Option<&SnapTarget> {
        match self.pointer_mode() {
            Some(PointerMode::DragBoat { snap_target, .. }) => snap_target.as_ref(),
            _ => None,
        }
    }
}
