//! Crane reach analysis.
//!
//! A crane can lift a boat when the boat sits no farther from the crane
//! than the reach its capacity curve allows for the boat's weight.

use crate::model::{Boat, CapacityStep, Crane};
use serde::Serialize;

/// Result of checking one crane against one boat.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CraneCapability {
    pub can_lift: bool,
    /// Distance from crane to boat center in meters.
    pub actual_distance: f64,
    /// Reach allowed for the boat's weight in meters.
    pub max_distance: f64,
    /// Weight of the boat in tons.
    pub weight: f64,
}

impl CraneCapability {
    /// A record meaning "no analysis performed".
    pub fn neutral() -> Self {
        Self::default()
    }

    /// How far past the allowed reach the boat sits, if it cannot be lifted.
    ///
    /// The neutral record has no shortfall.
    pub fn shortfall(&self) -> Option<f64> {
        let analysed = self.actual_distance != 0.0 || self.max_distance != 0.0;
        if self.can_lift || !analysed {
            None
        } else {
            Some(self.actual_distance - self.max_distance)
        }
    }
}

/// A crane paired with its capability for the selected boat.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CraneAnalysis<'a> {
    pub crane: &'a Crane,
    #[serde(flatten)]
    pub capability: CraneCapability,
}

/// Reach allowed for `weight` by a capacity curve.
///
/// Takes the first step, in curve order, whose weight limit covers the
/// load. Returns 0 when no step does.
pub fn max_lift_distance(steps: &[CapacityStep], weight: f64) -> f64 {
    steps
        .iter()
        .find(|step| weight <= step.weight)
        .map_or(0.0, |step| step.distance)
}

/// Check whether `crane` can lift `boat` where it currently stands.
///
/// With no boat the neutral record is returned.
pub fn evaluate(crane: &Crane, boat: Option<&Boat>) -> CraneCapability {
    let Some(boat) = boat else {
        return CraneCapability::neutral();
    };

    let actual_distance = crane.position.distance(boat.position);
    let max_distance = max_lift_distance(&crane.capacity_by_distance, boat.weight);

    CraneCapability {
        can_lift: actual_distance <= max_distance,
        actual_distance,
        max_distance,
        weight: boat.weight,
    }
}

/// Analyse every crane for the selected boat, nearest first.
///
/// Without a selection the cranes keep their input order and carry the
/// neutral record. Cranes at equal distance keep their input order.
pub fn rank<'a>(cranes: &'a [Crane], selected: Option<&Boat>) -> Vec<CraneAnalysis<'a>> {
    let mut analyses: Vec<CraneAnalysis<'a>> = cranes
        .iter()
        .map(|crane| CraneAnalysis {
            crane,
            capability: evaluate(crane, selected),
        })
        .collect();

    if selected.is_some() {
        // Vec::sort_by is stable
        analyses.sort_by(|a, b| {
            a.capability
                .actual_distance
                .total_cmp(&b.capability.actual_distance)
        });
    }
    analyses
}

/// Cranes able to lift `boat`, nearest first.
pub fn capable_cranes<'a>(cranes: &'a [Crane], boat: &Boat) -> Vec<CraneAnalysis<'a>> {
    rank(cranes, Some(boat))
        .into_iter()
        .filter(|analysis| analysis.capability.can_lift)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BoatKind, BoatSpec, Owner};
    use kurbo::Point;

    fn curve() -> Vec<CapacityStep> {
        vec![
            CapacityStep::new(35.0, 2.0),
            CapacityStep::new(27.0, 3.0),
            CapacityStep::new(22.0, 4.0),
            CapacityStep::new(20.0, 5.0),
            CapacityStep::new(15.0, 8.0),
            CapacityStep::new(10.0, 12.0),
            CapacityStep::new(5.0, 18.0),
        ]
    }

    fn crane(id: &str, x: f64, y: f64) -> Crane {
        Crane {
            id: id.to_string(),
            name: id.to_string(),
            position: Point::new(x, y),
            capacity_by_distance: curve(),
        }
    }

    fn boat(weight: f64, x: f64, y: f64) -> Boat {
        let spec = BoatSpec {
            name: "test".to_string(),
            length: 8.0,
            width: 2.5,
            weight,
            kind: BoatKind::Sailboat,
            has_mast: true,
            owner: Owner::default(),
        };
        Boat::from_spec("boat", spec, Point::new(x, y))
    }

    #[test]
    fn test_max_lift_distance_first_match() {
        assert!((max_lift_distance(&curve(), 1.5) - 35.0).abs() < f64::EPSILON);
        assert!((max_lift_distance(&curve(), 2.0) - 35.0).abs() < f64::EPSILON);
        assert!((max_lift_distance(&curve(), 2.3) - 27.0).abs() < f64::EPSILON);
        assert!((max_lift_distance(&curve(), 6.0) - 15.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_max_lift_distance_too_heavy() {
        assert_eq!(max_lift_distance(&curve(), 20.0), 0.0);
        assert_eq!(max_lift_distance(&[], 1.0), 0.0);
    }

    #[test]
    fn test_max_lift_distance_keeps_curve_order() {
        // An unsorted curve is scanned as given, not searched.
        let steps = [CapacityStep::new(5.0, 18.0), CapacityStep::new(35.0, 2.0)];
        assert!((max_lift_distance(&steps, 1.0) - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_evaluate_within_reach() {
        let result = evaluate(&crane("c", 0.0, 0.0), Some(&boat(3.0, 3.0, 4.0)));
        assert!(result.can_lift);
        assert!((result.actual_distance - 5.0).abs() < 1e-12);
        assert!((result.max_distance - 27.0).abs() < f64::EPSILON);
        assert!((result.weight - 3.0).abs() < f64::EPSILON);
        assert_eq!(result.shortfall(), None);
    }

    #[test]
    fn test_evaluate_at_exact_reach() {
        let result = evaluate(&crane("c", 0.0, 0.0), Some(&boat(2.0, 35.0, 0.0)));
        assert!(result.can_lift);
    }

    #[test]
    fn test_evaluate_out_of_reach() {
        let result = evaluate(&crane("c", 5.0, 100.0), Some(&boat(6.0, 25.0, 100.0)));
        assert!(!result.can_lift);
        assert!((result.max_distance - 15.0).abs() < f64::EPSILON);
        let shortfall = result.shortfall().unwrap();
        assert!((shortfall - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_evaluate_too_heavy_for_any_step() {
        let result = evaluate(&crane("c", 0.0, 0.0), Some(&boat(25.0, 0.0, 0.0)));
        assert_eq!(result.max_distance, 0.0);
        // Distance 0 is still within a reach of 0.
        assert!(result.can_lift);
    }

    #[test]
    fn test_evaluate_without_boat_is_neutral() {
        let result = evaluate(&crane("c", 0.0, 0.0), None);
        assert_eq!(result, CraneCapability::neutral());
        assert!(!result.can_lift);
        assert_eq!(result.shortfall(), None);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let c = crane("c", 12.5, -3.0);
        let b = boat(1.0, -7.0, 40.25);
        let swapped_crane = crane("c", -7.0, 40.25);
        let swapped_boat = boat(1.0, 12.5, -3.0);
        let a = evaluate(&c, Some(&b)).actual_distance;
        let s = evaluate(&swapped_crane, Some(&swapped_boat)).actual_distance;
        assert!(a >= 0.0);
        assert!((a - s).abs() < 1e-12);
        assert!((a - (19.5f64.powi(2) + 43.25f64.powi(2)).sqrt()).abs() < 1e-9);
    }

    #[test]
    fn test_rank_without_selection_keeps_order() {
        let cranes = vec![crane("a", 70.0, 0.0), crane("b", 0.0, 0.0), crane("c", 30.0, 0.0)];
        let ranked = rank(&cranes, None);
        let ids: Vec<_> = ranked.iter().map(|r| r.crane.id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c"]);
        assert!(ranked.iter().all(|r| !r.capability.can_lift));
        assert!(ranked.iter().all(|r| r.capability.actual_distance == 0.0));
    }

    #[test]
    fn test_rank_sorts_by_distance() {
        let cranes = vec![
            crane("far", 70.0, 100.0),
            crane("near", 25.0, 100.0),
            crane("mid", 50.0, 100.0),
        ];
        let b = boat(1.5, 30.0, 100.0);
        let ranked = rank(&cranes, Some(&b));
        let ids: Vec<_> = ranked.iter().map(|r| r.crane.id.as_str()).collect();
        assert_eq!(ids, ["near", "mid", "far"]);
        assert!(ranked
            .windows(2)
            .all(|w| w[0].capability.actual_distance <= w[1].capability.actual_distance));
    }

    #[test]
    fn test_rank_is_stable_for_ties() {
        let cranes = vec![
            crane("left", 0.0, 0.0),
            crane("right", 20.0, 0.0),
            crane("above", 10.0, 10.0),
        ];
        let b = boat(1.0, 10.0, 0.0);
        let ranked = rank(&cranes, Some(&b));
        let ids: Vec<_> = ranked.iter().map(|r| r.crane.id.as_str()).collect();
        assert_eq!(ids, ["left", "right", "above"]);
    }

    #[test]
    fn test_capable_cranes_filters() {
        let cranes = vec![crane("near", 0.0, 0.0), crane("far", 100.0, 0.0)];
        let b = boat(4.0, 10.0, 0.0);
        let capable = capable_cranes(&cranes, &b);
        assert_eq!(capable.len(), 1);
        assert_eq!(capable[0].crane.id, "near");
    }
}
