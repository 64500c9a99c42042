//! Boatyard Core Library
//!
//! Crane reach analysis and boat placement for planning a winter boatyard.

pub mod camera;
pub mod config;
pub mod crane;
pub mod error;
pub mod model;
pub mod placement;
pub mod seed;
pub mod yard;

pub use kurbo;

pub use camera::Camera;
pub use config::{PlacementSettings, SnapSettings, ViewSettings, YardSettings};
pub use crane::{CraneAnalysis, CraneCapability, capable_cranes, evaluate, max_lift_distance, rank};
pub use error::{YardError, YardResult};
pub use model::{
    Boat, BoatId, BoatKind, BoatSpec, CapacityStep, Crane, Obstacle, ObstacleKind, Owner,
    YardLayout,
};
pub use placement::{DockSide, SnapResult, SnapTarget, default_position, snap};
pub use yard::{PointerMode, Yard};
