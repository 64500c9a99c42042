//! Boatyard application shell.
//!
//! Text reports over a [`Yard`] for the command-line front end.

use boatyard_core::{Boat, BoatKind, Yard};
use std::fmt::Write;

fn kind_label(kind: BoatKind) -> &'static str {
    match kind {
        BoatKind::Motorboat => "motorboat",
        BoatKind::Sailboat => "sailboat",
    }
}

/// Render the crane analysis for the selected boat.
pub fn crane_report(yard: &Yard) -> String {
    let mut out = String::new();
    let Some(boat) = yard.selected_boat() else {
        out.push_str("No boat selected\n");
        return out;
    };

    let _ = writeln!(
        out,
        "Crane analysis for {} ({} t at {:.1} m, {:.1} m)",
        boat.name, boat.weight, boat.position.x, boat.position.y
    );

    for analysis in yard.crane_analysis() {
        let cap = &analysis.capability;
        let status = if cap.can_lift { "can lift" } else { "out of reach" };
        let _ = write!(
            out,
            "  {:<10} {:<12} distance {:>6.1} m  max reach {} m  crane at ({}, {})",
            analysis.crane.name,
            status,
            cap.actual_distance,
            cap.max_distance,
            analysis.crane.position.x,
            analysis.crane.position.y
        );
        if let Some(shortfall) = cap.shortfall() {
            let _ = write!(out, "  {:.1} m beyond reach", shortfall);
        }
        out.push('\n');
    }
    out
}

fn position_line(index: usize, boat: &Boat) -> String {
    let mast = if boat.has_mast { ", mast" } else { "" };
    format!(
        "{:>3}. {} ({}{}) x={:.1} m y={:.1} m, {} x {} m",
        index + 1,
        boat.name,
        kind_label(boat.kind),
        mast,
        boat.position.x,
        boat.position.y,
        boat.length,
        boat.width
    )
}

/// Render all boats ordered left to right.
pub fn position_report(yard: &Yard) -> String {
    if yard.is_empty() {
        return "No boats in the yard\n".to_string();
    }

    let mut out = format!("Boat positions ({})\n", yard.len());
    for (index, boat) in yard.boats_by_position().into_iter().enumerate() {
        out.push_str(&position_line(index, boat));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crane_report_without_selection() {
        let yard = Yard::sample();
        assert_eq!(crane_report(&yard), "No boat selected\n");
    }

    #[test]
    fn test_crane_report_lists_nearest_first() {
        let mut yard = Yard::sample();
        yard.select("boat-1").unwrap();
        let report = crane_report(&yard);
        let lines: Vec<&str> = report.lines().collect();

        assert!(lines[0].starts_with("Crane analysis for omega 36"));
        assert_eq!(lines.len(), 5);
        assert!(lines[1].contains("Kran 1"));
        assert!(lines[1].contains("can lift"));
        // 6 t allows 15 m; Kran 2 stands 20 m away.
        assert!(lines[2].contains("Kran 2"));
        assert!(lines[2].contains("out of reach"));
        assert!(lines[2].contains("5.0 m beyond reach"));
    }

    #[test]
    fn test_position_report_order() {
        let mut yard = Yard::sample();
        yard.move_boat("boat-5", boatyard_core::kurbo::Point::new(0.0, 100.0))
            .unwrap();
        let report = position_report(&yard);
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines[0], "Boat positions (10)");
        assert!(lines[1].contains("Havsörnen"));
        assert!(lines[2].contains("omega 36"));
    }

    #[test]
    fn test_position_report_empty() {
        let yard = Yard::empty(10.0, 10.0, Default::default());
        assert_eq!(position_report(&yard), "No boats in the yard\n");
    }
}
