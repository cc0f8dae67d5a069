//! Geographic bounding box and the linear map projection.
//!
//! The dashboard maps are flat surfaces: a zone's position is its linear
//! interpolation across the operational bounding box, not a geodesic
//! projection. Good enough at this scale, and every consumer gets the same
//! normalized [0, 1] coordinates.

use serde::{Deserialize, Serialize};

use crate::models::ZoneRecord;

/// Geographic rectangle covered by a map surface, in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoBounds {
    pub north: f64,
    pub south: f64,
    pub west: f64,
    pub east: f64,
}

/// Operational bounding box for the Indian-waters dashboards.
pub const INDIAN_WATERS: GeoBounds = GeoBounds {
    north: 25.0,
    south: 8.0,
    west: 68.0,
    east: 85.0,
};

/// A zone's position on the map surface. Recomputed every render; both
/// coordinates are normalized to [0, 1] and usable directly as percentage
/// offsets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectedPoint {
    pub zone_id: String,
    pub x_norm: f64,
    pub y_norm: f64,
}

/// Normalize a coordinate pair into the bounding box. X runs west to east,
/// Y runs north to south (north is the top of the surface).
///
/// Positions outside the box clamp to the nearest edge instead of being
/// rejected: survey coordinates are approximate and a marker pinned to the
/// border beats a zone that silently vanishes. Known approximation, not a
/// validation step.
pub fn normalize(latitude: f64, longitude: f64, bounds: GeoBounds) -> (f64, f64) {
    let x_span = bounds.east - bounds.west;
    let y_span = bounds.north - bounds.south;

    let x = if x_span <= 0.0 {
        0.0
    } else {
        ((longitude - bounds.west) / x_span).clamp(0.0, 1.0)
    };
    let y = if y_span <= 0.0 {
        0.0
    } else {
        ((bounds.north - latitude) / y_span).clamp(0.0, 1.0)
    };
    (x, y)
}

/// Project a zone onto the map surface.
pub fn project(zone: &ZoneRecord, bounds: GeoBounds) -> ProjectedPoint {
    let (x_norm, y_norm) = normalize(zone.latitude, zone.longitude, bounds);
    ProjectedPoint {
        zone_id: zone.id.clone(),
        x_norm,
        y_norm,
    }
}

/// Format a coordinate pair the way mariners read it, e.g. "19.2°N, 72.8°E".
pub fn format_position(latitude: f64, longitude: f64) -> String {
    let ns = if latitude >= 0.0 { 'N' } else { 'S' };
    let ew = if longitude >= 0.0 { 'E' } else { 'W' };
    format!(
        "{:.1}\u{00b0}{}, {:.1}\u{00b0}{}",
        latitude.abs(),
        ns,
        longitude.abs(),
        ew
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DensityClass;
    use crate::zones::ZoneRegistry;

    fn test_zone(latitude: f64, longitude: f64) -> ZoneRecord {
        ZoneRecord {
            id: "t1".to_string(),
            name: "Test Zone".to_string(),
            latitude,
            longitude,
            temperature_c: 28.0,
            density_class: DensityClass::Medium,
            alert: None,
        }
    }

    #[test]
    fn test_project_inside_bounds() {
        let p = project(&test_zone(20.0, 70.0), INDIAN_WATERS);
        assert_eq!(p.zone_id, "t1");
        assert!((p.x_norm - 2.0 / 17.0).abs() < 1e-9);
        assert!((p.y_norm - 5.0 / 17.0).abs() < 1e-9);
    }

    #[test]
    fn test_project_corners() {
        let nw = project(&test_zone(25.0, 68.0), INDIAN_WATERS);
        assert!((nw.x_norm - 0.0).abs() < 1e-9);
        assert!((nw.y_norm - 0.0).abs() < 1e-9);

        let se = project(&test_zone(8.0, 85.0), INDIAN_WATERS);
        assert!((se.x_norm - 1.0).abs() < 1e-9);
        assert!((se.y_norm - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_project_clamps_east_overshoot() {
        // Longitude 90 sits east of the box; it pins to the right edge.
        let p = project(&test_zone(11.5, 90.0), INDIAN_WATERS);
        assert!((p.x_norm - 1.0).abs() < 1e-9);
        assert!(p.y_norm > 0.0 && p.y_norm < 1.0);
    }

    #[test]
    fn test_project_clamps_north_overshoot() {
        let p = project(&test_zone(30.0, 75.0), INDIAN_WATERS);
        assert!((p.y_norm - 0.0).abs() < 1e-9);
    }

    #[test]
    fn test_project_monotonic_in_longitude() {
        let a = project(&test_zone(15.0, 70.0), INDIAN_WATERS);
        let b = project(&test_zone(15.0, 75.0), INDIAN_WATERS);
        assert!(a.x_norm < b.x_norm);
    }

    #[test]
    fn test_project_inverts_latitude() {
        // North is up: a higher latitude lands closer to the top.
        let north = project(&test_zone(22.0, 75.0), INDIAN_WATERS);
        let south = project(&test_zone(10.0, 75.0), INDIAN_WATERS);
        assert!(north.y_norm < south.y_norm);
    }

    #[test]
    fn test_registry_zones_all_bounded() {
        for zone in ZoneRegistry::indian_waters().zones() {
            let p = project(zone, INDIAN_WATERS);
            assert!(
                (0.0..=1.0).contains(&p.x_norm),
                "{} x out of range",
                zone.id
            );
            assert!(
                (0.0..=1.0).contains(&p.y_norm),
                "{} y out of range",
                zone.id
            );
        }
    }

    #[test]
    fn test_normalize_degenerate_span() {
        let flat = GeoBounds {
            north: 10.0,
            south: 10.0,
            west: 70.0,
            east: 70.0,
        };
        let (x, y) = normalize(10.0, 70.0, flat);
        assert!((x - 0.0).abs() < 1e-9);
        assert!((y - 0.0).abs() < 1e-9);
    }

    #[test]
    fn test_format_position_hemispheres() {
        assert_eq!(format_position(19.2, 72.8), "19.2\u{00b0}N, 72.8\u{00b0}E");
        assert_eq!(format_position(-8.5, 72.8), "8.5\u{00b0}S, 72.8\u{00b0}E");
        assert_eq!(
            format_position(19.2, -110.4),
            "19.2\u{00b0}N, 110.4\u{00b0}W"
        );
    }
}
