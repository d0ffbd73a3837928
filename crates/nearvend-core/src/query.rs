//! Nearby-search request parameters.

use chrono::NaiveTime;
use nearvend_geo::GeoPoint;
use serde::Deserialize;

use crate::limits::{DEFAULT_SEARCH_DISTANCE_METERS, MAX_CLIENT_DISTANCE_METERS, MIN_DISTANCE_METERS};
use crate::parse;
use crate::InputError;

/// Raw query-string parameters for `GET /vendors/nearby`.
///
/// Everything stays a string so that malformed values surface as
/// [`InputError`] rather than an extractor rejection.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NearbyParams {
    pub lat: Option<String>,
    pub lng: Option<String>,
    pub distance: Option<String>,
    pub has_delivery: Option<String>,
    pub only_open_now: Option<String>,
    pub current_time: Option<String>,
}

/// A validated nearby search.
#[derive(Debug, Clone, PartialEq)]
pub struct NearbyQuery {
    pub client_location: GeoPoint,
    /// Search radius in metres, `0..=20_000`.
    pub radius_meters: u32,
    pub has_delivery: bool,
    pub only_open_now: bool,
    /// The client's local time of day, used for the open-now check.
    pub request_time: NaiveTime,
}

impl NearbyQuery {
    /// # Errors
    ///
    /// Returns [`InputError::OutOfRange`] if `radius_meters` exceeds the
    /// client search limit.
    pub fn new(
        client_location: GeoPoint,
        radius_meters: u32,
        has_delivery: bool,
        only_open_now: bool,
        request_time: NaiveTime,
    ) -> Result<Self, InputError> {
        let radius_meters = parse::within(
            "distance",
            i64::from(radius_meters),
            MIN_DISTANCE_METERS,
            MAX_CLIENT_DISTANCE_METERS,
        )?;
        Ok(Self {
            client_location,
            radius_meters,
            has_delivery,
            only_open_now,
            request_time,
        })
    }

    /// Validate raw parameters.
    ///
    /// `fallback_time` is used when `currentTime` is absent. Values that
    /// cannot be read at all are reported before values that are out of
    /// range.
    ///
    /// # Errors
    ///
    /// Returns [`InputError`] for a missing or malformed coordinate, a
    /// non-integer or out-of-range distance, or an unreadable time.
    pub fn from_params(params: &NearbyParams, fallback_time: NaiveTime) -> Result<Self, InputError> {
        let request_time = match parse::present(params.current_time.as_deref()) {
            Some(raw) => parse::time_of_day("currentTime", raw)?,
            None => fallback_time,
        };
        let distance = match parse::present(params.distance.as_deref()) {
            Some(raw) => parse::integer("distance", raw)?,
            None => i64::from(DEFAULT_SEARCH_DISTANCE_METERS),
        };
        let lat = parse::float("lat", parse::required("lat", params.lat.as_deref())?)?;
        let lng = parse::float("lng", parse::required("lng", params.lng.as_deref())?)?;

        let client_location = parse::location(lat, lng)?;
        let radius_meters = parse::within(
            "distance",
            distance,
            MIN_DISTANCE_METERS,
            MAX_CLIENT_DISTANCE_METERS,
        )?;

        Ok(Self {
            client_location,
            radius_meters,
            has_delivery: parse::flag(params.has_delivery.as_deref()),
            only_open_now: parse::flag(params.only_open_now.as_deref()),
            request_time,
        })
    }
}

/// Optional client position sent with a single-vendor lookup.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClientLocationParams {
    pub lat: Option<String>,
    pub lng: Option<String>,
}

impl ClientLocationParams {
    /// `None` when neither coordinate is sent.
    ///
    /// # Errors
    ///
    /// Returns [`InputError`] when only one coordinate is sent or either is
    /// invalid.
    pub fn resolve(&self) -> Result<Option<GeoPoint>, InputError> {
        let lat = parse::present(self.lat.as_deref());
        let lng = parse::present(self.lng.as_deref());
        match (lat, lng) {
            (None, None) => Ok(None),
            (Some(lat), Some(lng)) => {
                let point = parse::location(parse::float("lat", lat)?, parse::float("lng", lng)?)?;
                Ok(Some(point))
            }
            (None, Some(_)) => Err(InputError::Missing { field: "lat" }),
            (Some(_), None) => Err(InputError::Missing { field: "lng" }),
        }
    }
}
