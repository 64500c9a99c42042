//! Yard entities: boats, cranes, obstacles and the layout that holds them.

use crate::config::YardSettings;
use crate::error::{YardError, YardResult};
use kurbo::{Point, Rect, Size};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Unique identifier for a boat.
pub type BoatId = String;

/// Hull type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoatKind {
    #[default]
    Motorboat,
    Sailboat,
}

/// Boat owner contact details.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Owner {
    pub name: String,
    pub phone: String,
}

/// Everything about a boat except its id and position.
///
/// This is the payload for adding a new boat or editing an existing one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoatSpec {
    pub name: String,
    /// Length in meters.
    pub length: f64,
    /// Width (beam) in meters.
    pub width: f64,
    /// Weight in tons.
    pub weight: f64,
    #[serde(rename = "type")]
    pub kind: BoatKind,
    pub has_mast: bool,
    pub owner: Owner,
}

impl BoatSpec {
    /// Check that the required text fields are present and that
    /// length, width and weight are finite and positive.
    pub fn validate(&self) -> YardResult<()> {
        if self.name.trim().is_empty() {
            return Err(YardError::MissingField("name"));
        }
        if self.owner.name.trim().is_empty() {
            return Err(YardError::MissingField("owner.name"));
        }
        if self.owner.phone.trim().is_empty() {
            return Err(YardError::MissingField("owner.phone"));
        }
        validate_dimensions(self.length, self.width, self.weight)
    }
}

/// Length, width and weight must be finite and positive.
fn validate_dimensions(length: f64, width: f64, weight: f64) -> YardResult<()> {
    for (field, value) in [("length", length), ("width", width), ("weight", weight)] {
        if !value.is_finite() || value <= 0.0 {
            return Err(YardError::InvalidDimension { field, value });
        }
    }
    Ok(())
}

/// A boat stored in the yard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Boat {
    pub id: BoatId,
    pub name: String,
    /// Length in meters, laid out along the yard's y axis.
    pub length: f64,
    /// Width in meters, laid out along the yard's x axis.
    pub width: f64,
    /// Weight in tons.
    pub weight: f64,
    #[serde(rename = "type")]
    pub kind: BoatKind,
    pub has_mast: bool,
    pub owner: Owner,
    /// Center of the hull in yard meters.
    pub position: Point,
}

impl Boat {
    /// Create a boat from a spec at the given position.
    pub fn from_spec(id: impl Into<BoatId>, spec: BoatSpec, position: Point) -> Self {
        Self {
            id: id.into(),
            name: spec.name,
            length: spec.length,
            width: spec.width,
            weight: spec.weight,
            kind: spec.kind,
            has_mast: spec.has_mast,
            owner: spec.owner,
            position,
        }
    }

    /// Extract the editable fields of this boat.
    pub fn spec(&self) -> BoatSpec {
        BoatSpec {
            name: self.name.clone(),
            length: self.length,
            width: self.width,
            weight: self.weight,
            kind: self.kind,
            has_mast: self.has_mast,
            owner: self.owner.clone(),
        }
    }

    /// Replace every field except id and position.
    pub fn apply_spec(&mut self, spec: BoatSpec) {
        self.name = spec.name;
        self.length = spec.length;
        self.width = spec.width;
        self.weight = spec.weight;
        self.kind = spec.kind;
        self.has_mast = spec.has_mast;
        self.owner = spec.owner;
    }

    /// Check the hull dimensions and weight.
    pub fn validate_dimensions(&self) -> YardResult<()> {
        validate_dimensions(self.length, self.width, self.weight)
    }

    /// X coordinate of the hull's right side.
    pub fn right_edge(&self) -> f64 {
        self.position.x + self.width / 2.0
    }

    /// Hull footprint on the yard, centered on the position.
    pub fn footprint(&self) -> Rect {
        Rect::from_center_size(self.position, Size::new(self.width, self.length))
    }

    /// Check if a yard point lies on the hull (edges included).
    pub fn contains(&self, point: Point) -> bool {
        let half_w = self.width / 2.0;
        let half_l = self.length / 2.0;
        point.x >= self.position.x - half_w
            && point.x <= self.position.x + half_w
            && point.y >= self.position.y - half_l
            && point.y <= self.position.y + half_l
    }
}

/// One step of a crane's lift capacity curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CapacityStep {
    /// Maximum reach in meters for this load.
    pub distance: f64,
    /// Maximum load in tons at that reach.
    pub weight: f64,
}

impl CapacityStep {
    pub fn new(distance: f64, weight: f64) -> Self {
        Self { distance, weight }
    }
}

/// A fixed crane with its capacity curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Crane {
    pub id: String,
    pub name: String,
    pub position: Point,
    /// Capacity steps in the order they were supplied.
    pub capacity_by_distance: Vec<CapacityStep>,
}

/// Obstacle category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObstacleKind {
    Building,
    Tree,
    Pole,
    #[default]
    Other,
}

/// A fixed obstacle in the yard. Drawn for reference only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: String,
    pub name: String,
    pub position: Point,
    pub width: f64,
    pub height: f64,
    #[serde(rename = "type")]
    pub kind: ObstacleKind,
}

impl Obstacle {
    /// Obstacle footprint, centered on the position.
    pub fn bounds(&self) -> Rect {
        Rect::from_center_size(self.position, Size::new(self.width, self.height))
    }
}

/// A complete yard description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YardLayout {
    /// Yard extent in meters.
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub boats: Vec<Boat>,
    #[serde(default)]
    pub cranes: Vec<Crane>,
    #[serde(default)]
    pub obstacles: Vec<Obstacle>,
    #[serde(default)]
    pub settings: YardSettings,
}

impl YardLayout {
    /// Serialize the layout to pretty JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parse a layout from JSON and validate it.
    pub fn from_json(json: &str) -> YardResult<Self> {
        let layout: YardLayout = serde_json::from_str(json)?;
        layout.validate()?;
        Ok(layout)
    }

    /// Check settings, boat dimensions and boat id uniqueness.
    pub fn validate(&self) -> YardResult<()> {
        self.settings.validate()?;
        for boat in &self.boats {
            boat.validate_dimensions()?;
        }
        self.check_unique_boats()
    }

    /// Read and parse a layout file.
    pub fn load(path: &Path) -> YardResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| {
            YardError::Io(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_json(&json)
    }

    fn check_unique_boats(&self) -> YardResult<()> {
        for (i, boat) in self.boats.iter().enumerate() {
            if self.boats[..i].iter().any(|other| other.id == boat.id) {
                return Err(YardError::DuplicateBoat(boat.id.clone()));
            }
        }
        Ok(())
    }
}
