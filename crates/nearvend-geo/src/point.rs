use serde::{Deserialize, Serialize};

use crate::GeoError;

pub const MIN_LATITUDE: f64 = -90.0;
pub const MAX_LATITUDE: f64 = 90.0;
pub const MIN_LONGITUDE: f64 = -180.0;
pub const MAX_LONGITUDE: f64 = 180.0;

/// A validated WGS84 coordinate in degrees.
///
/// Construction goes through [`GeoPoint::new`], so a value of this type is
/// always inside the legal latitude/longitude ranges. Deserialization applies
/// the same check.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawGeoPoint")]
pub struct GeoPoint {
    latitude: f64,
    longitude: f64,
}

#[derive(Deserialize)]
struct RawGeoPoint {
    latitude: f64,
    longitude: f64,
}

impl TryFrom<RawGeoPoint> for GeoPoint {
    type Error = GeoError;

    fn try_from(raw: RawGeoPoint) -> Result<Self, Self::Error> {
        Self::new(raw.latitude, raw.longitude)
    }
}

impl GeoPoint {
    /// Build a point, rejecting non-finite or out-of-range coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`GeoError`] naming the offending coordinate.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, GeoError> {
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(GeoError::NonFinite);
        }
        if !(MIN_LATITUDE..=MAX_LATITUDE).contains(&latitude) {
            return Err(GeoError::LatitudeOutOfRange(latitude));
        }
        if !(MIN_LONGITUDE..=MAX_LONGITUDE).contains(&longitude) {
            return Err(GeoError::LongitudeOutOfRange(longitude));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    #[must_use]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    #[must_use]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_boundary_values() {
        assert!(GeoPoint::new(90.0, 180.0).is_ok());
        assert!(GeoPoint::new(-90.0, -180.0).is_ok());
        assert!(GeoPoint::new(0.0, 0.0).is_ok());
    }

    #[test]
    fn rejects_out_of_range_latitude() {
        assert_eq!(
            GeoPoint::new(90.5, 0.0),
            Err(GeoError::LatitudeOutOfRange(90.5))
        );
    }

    #[test]
    fn rejects_out_of_range_longitude() {
        // The HTTP layer historically defaulted missing coordinates to 360.
        assert_eq!(
            GeoPoint::new(0.0, 360.0),
            Err(GeoError::LongitudeOutOfRange(360.0))
        );
    }

    #[test]
    fn rejects_nan() {
        assert_eq!(GeoPoint::new(f64::NAN, 0.0), Err(GeoError::NonFinite));
        assert_eq!(
            GeoPoint::new(0.0, f64::INFINITY),
            Err(GeoError::NonFinite)
        );
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let point = GeoPoint::new(25.5, -100.25).unwrap();
        let json = serde_json::to_value(point).unwrap();
        assert_eq!(json["latitude"], 25.5);
        assert_eq!(json["longitude"], -100.25);
    }

    #[test]
    fn deserialize_validates_range() {
        let bad = serde_json::from_str::<GeoPoint>(r#"{"latitude": 91.0, "longitude": 0.0}"#);
        assert!(bad.is_err());

        let good: GeoPoint =
            serde_json::from_str(r#"{"latitude": 10.0, "longitude": 20.0}"#).unwrap();
        assert_eq!(good.latitude(), 10.0);
        assert_eq!(good.longitude(), 20.0);
    }
}
