//! Geographic helpers for beach lookup.
//!
//! The presentation layer uses these to relate a GPS fix to the
//! catalog: which beach is closest, and is the user actually standing
//! on it. Distances are great-circle (haversine), good to well under a
//! percent at beach scale.

use crate::beaches::{Beach, BEACH_REGISTRY};

const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Great-circle distance between two WGS84 points, in meters.
pub fn distance_meters(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lng = (lng2 - lng1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_M * c
}

/// The catalog beach closest to a position, with its distance in
/// meters. `None` only if the catalog were empty.
pub fn nearest_beach(lat: f64, lng: f64) -> Option<(&'static Beach, f64)> {
    BEACH_REGISTRY
        .iter()
        .map(|b| (b, distance_meters(lat, lng, b.lat, b.lng)))
        .min_by(|a, b| a.1.total_cmp(&b.1))
}

/// The beach whose display radius contains the position, if any.
/// Where radii overlap (some coves sit closer together than 500 m),
/// the nearest beach wins.
pub fn beach_containing(lat: f64, lng: f64) -> Option<&'static Beach> {
    nearest_beach(lat, lng)
        .filter(|(beach, dist)| *dist <= beach.radius_m)
        .map(|(beach, _)| beach)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::beaches::find_beach;

    #[test]
    fn test_distance_to_self_is_zero() {
        let d = distance_meters(16.3352, -61.7215, 16.3352, -61.7215);
        assert!(d.abs() < 1e-6, "distance to self should be ~0, got {}", d);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let a = distance_meters(16.3352, -61.7215, 15.8709, -61.5856);
        let b = distance_meters(15.8709, -61.5856, 16.3352, -61.7215);
        assert!((a - b).abs() < 1e-6);
    }

    #[test]
    fn test_known_distance_between_neighboring_beaches() {
        // Clugny and La Perle are ~800 m apart along the Sainte-Rose coast.
        let clugny = find_beach(1).unwrap();
        let perle = find_beach(2).unwrap();
        let d = distance_meters(clugny.lat, clugny.lng, perle.lat, perle.lng);
        assert!(
            (700.0..900.0).contains(&d),
            "Clugny–Perle distance should be ~800 m, got {:.0} m",
            d
        );
    }

    #[test]
    fn test_nearest_beach_at_beach_coordinates() {
        let malendure = find_beach(5).unwrap();
        let (nearest, dist) = nearest_beach(malendure.lat, malendure.lng)
            .expect("catalog is not empty");
        assert_eq!(nearest.id, 5);
        assert!(dist < 1.0);
    }

    #[test]
    fn test_beach_containing_inside_radius() {
        // ~100 m north of Malendure: still on the beach.
        let malendure = find_beach(5).unwrap();
        let beach = beach_containing(malendure.lat + 0.0009, malendure.lng)
            .expect("position 100 m away should be within the 500 m radius");
        assert_eq!(beach.id, 5);
    }

    #[test]
    fn test_beach_containing_offshore_is_none() {
        // Middle of the channel between the islands.
        assert!(beach_containing(16.05, -61.05).is_none());
    }
}
