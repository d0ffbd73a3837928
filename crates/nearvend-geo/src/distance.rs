use crate::GeoPoint;

/// Mean Earth radius used for great-circle distances.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.059;

/// Great-circle distance in metres between two points (haversine formula).
///
/// Symmetric, and zero exactly when the points coincide.
#[must_use]
pub fn great_circle_distance(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat_a = a.latitude().to_radians();
    let lat_b = b.latitude().to_radians();
    let d_lat = (b.latitude() - a.latitude()).to_radians();
    let d_lng = (b.longitude() - a.longitude()).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat_a.cos() * lat_b.cos() * (d_lng / 2.0).sin().powi(2);

    // Rounding can push h a hair above 1 for antipodal points.
    2.0 * EARTH_RADIUS_METERS * h.min(1.0).sqrt().asin()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(lat: f64, lng: f64) -> GeoPoint {
        GeoPoint::new(lat, lng).unwrap()
    }

    #[test]
    fn distance_to_self_is_zero() {
        for p in [point(0.0, 0.0), point(25.65, -100.29), point(-90.0, 180.0)] {
            assert_eq!(great_circle_distance(p, p), 0.0);
        }
    }

    #[test]
    fn distance_is_symmetric() {
        let london = point(51.500_7, 0.124_6);
        let new_york = point(40.689_2, -74.044_5);
        let there = great_circle_distance(london, new_york);
        let back = great_circle_distance(new_york, london);
        assert!((there - back).abs() < 1e-6);
        assert!((there - 5_591_206.8).abs() < 1.0, "got {there}");
    }

    #[test]
    fn distance_near_null_island() {
        let origin = point(0.0, 0.0);
        let cases = [
            (0.000_317_9, 50.0),
            (0.001_589, 250.0),
            (0.003_179, 500.0),
            (0.004_769, 750.0),
            (0.095_299, 15_000.0),
        ];
        for (offset, expected) in cases {
            let d = great_circle_distance(origin, point(offset, offset));
            assert!(d <= expected && expected - d < 15.0, "{offset}: {d}");
        }
    }

    #[test]
    fn antipodal_distance_is_half_circumference() {
        let d = great_circle_distance(point(0.0, 0.0), point(0.0, 180.0));
        assert!((d - std::f64::consts::PI * EARTH_RADIUS_METERS).abs() < 1e-3);
    }
}
