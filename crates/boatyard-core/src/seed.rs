//! Built-in sample yard.

use crate::config::YardSettings;
use crate::model::{
    Boat, BoatKind, BoatSpec, CapacityStep, Crane, Obstacle, ObstacleKind, Owner, YardLayout,
};
use kurbo::Point;

/// Yard extent in meters.
const YARD_WIDTH: f64 = 250.0;
const YARD_HEIGHT: f64 = 150.0;
/// Row the sample boats and cranes stand on.
const SEED_ROW_Y: f64 = 100.0;

/// Shared capacity curve of the sample cranes (reach m, load t).
pub fn standard_capacity_curve() -> Vec<CapacityStep> {
    [
        (35.0, 2.0),
        (27.0, 3.0),
        (22.0, 4.0),
        (20.0, 5.0),
        (15.0, 8.0),
        (10.0, 12.0),
        (5.0, 18.0),
    ]
    .into_iter()
    .map(|(distance, weight)| CapacityStep::new(distance, weight))
    .collect()
}

/// One sample boat: name, x, weight (t), length, width, kind, mast, owner, phone.
type SeedBoat = (
    &'static str,
    f64,
    f64,
    f64,
    f64,
    BoatKind,
    bool,
    &'static str,
    &'static str,
);

const SEED_BOATS: [SeedBoat; 10] = [
    ("omega 36", 5.0, 6.0, 11.0, 3.36, BoatKind::Sailboat, false, "Johan Wallinder", "0706050270"),
    ("GrandBanks", 25.0, 1.5, 8.6, 2.8, BoatKind::Motorboat, false, "Mattias Eriksson", "0706050270"),
    ("Ockelbo DC 21", 50.0, 2.3, 8.1, 2.2, BoatKind::Motorboat, false, "Ägare 3", "1234567890"),
    ("Sjöstjärnan", 75.0, 1.8, 7.5, 2.4, BoatKind::Sailboat, true, "Anna Lindberg", "0701234567"),
    ("Havsörnen", 100.0, 3.2, 9.2, 3.1, BoatKind::Motorboat, false, "Erik Svensson", "0709876543"),
    ("Vindfågeln", 125.0, 2.1, 8.8, 2.6, BoatKind::Sailboat, true, "Maria Andersson", "0705555555"),
    ("Sjöfågeln", 150.0, 2.8, 8.5, 2.9, BoatKind::Motorboat, false, "Lars Johansson", "0704444444"),
    ("Brisen", 175.0, 1.6, 7.2, 2.3, BoatKind::Sailboat, true, "Karin Nilsson", "0703333333"),
    ("Stormen", 200.0, 4.5, 10.5, 3.4, BoatKind::Motorboat, false, "Per Gustafsson", "0702222222"),
    ("Lugnet", 225.0, 1.9, 7.8, 2.5, BoatKind::Sailboat, true, "Sofia Larsson", "0701111111"),
];

/// Sample boats, one every 25 m along the seed row.
pub fn default_boats() -> Vec<Boat> {
    SEED_BOATS
        .iter()
        .enumerate()
        .map(|(i, &(name, x, weight, length, width, kind, has_mast, owner, phone))| {
            let spec = BoatSpec {
                name: name.to_string(),
                length,
                width,
                weight,
                kind,
                has_mast,
                owner: Owner {
                    name: owner.to_string(),
                    phone: phone.to_string(),
                },
            };
            Boat::from_spec(format!("boat-{}", i + 1), spec, Point::new(x, SEED_ROW_Y))
        })
        .collect()
}

/// Sample cranes along the seed row.
pub fn default_cranes() -> Vec<Crane> {
    [5.0, 25.0, 50.0, 70.0]
        .into_iter()
        .enumerate()
        .map(|(i, x)| Crane {
            id: format!("crane-{}", i + 1),
            name: format!("Kran {}", i + 1),
            position: Point::new(x, SEED_ROW_Y),
            capacity_by_distance: standard_capacity_curve(),
        })
        .collect()
}

/// Sample obstacles: the clubhouse and a tree.
pub fn default_obstacles() -> Vec<Obstacle> {
    vec![
        Obstacle {
            id: "building-1".to_string(),
            name: "Klubbhus".to_string(),
            position: Point::new(15.0, 120.0),
            width: 8.0,
            height: 12.0,
            kind: ObstacleKind::Building,
        },
        Obstacle {
            id: "tree-1".to_string(),
            name: "Träd".to_string(),
            position: Point::new(40.0, 80.0),
            width: 3.0,
            height: 3.0,
            kind: ObstacleKind::Tree,
        },
    ]
}

/// The complete sample yard.
pub fn default_layout() -> YardLayout {
    YardLayout {
        width: YARD_WIDTH,
        height: YARD_HEIGHT,
        boats: default_boats(),
        cranes: default_cranes(),
        obstacles: default_obstacles(),
        settings: YardSettings::default(),
    }
}
