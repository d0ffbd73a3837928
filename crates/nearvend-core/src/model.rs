//! Vendor aggregate as served by the API.
//!
//! A vendor owns at most one sale card, and a sale card owns exactly one
//! location. Field names on the wire are camelCase.

use chrono::{NaiveTime, Timelike};
use nearvend_geo::{encode_max, great_circle_distance, is_open_at, GeoPoint};
use serde::{Deserialize, Serialize, Serializer};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Picture {
    pub blob_key: String,
    pub alt_text: String,
}

/// Where a sale card operates and how far it will travel.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationRecord {
    pub id: i64,
    pub sale_point: GeoPoint,
    /// Full-precision hash of `sale_point`.
    pub geo_hash: String,
    /// Service radius in metres, `0..=2000`.
    pub radius: u32,
}

impl LocationRecord {
    /// Build a record whose hash is derived from `sale_point`.
    #[must_use]
    pub fn new(id: i64, sale_point: GeoPoint, radius: u32) -> Self {
        Self {
            id,
            sale_point,
            geo_hash: encode_max(sale_point),
            radius,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleCard {
    pub id: i64,
    pub business_name: String,
    pub description: String,
    pub has_delivery: bool,
    pub is_temporarily_closed: bool,
    #[serde(serialize_with = "serialize_time_of_day")]
    pub start_time: NaiveTime,
    #[serde(serialize_with = "serialize_time_of_day")]
    pub end_time: NaiveTime,
    pub location: LocationRecord,
    pub picture: Option<Picture>,
    /// Metres from the requesting client, set only on query responses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_from_client: Option<f64>,
}

impl SaleCard {
    /// Whether the daily window contains `now`. Ignores the closed flag.
    #[must_use]
    pub fn is_open_at(&self, now: NaiveTime) -> bool {
        is_open_at(self.start_time, self.end_time, now)
    }

    /// Great-circle distance from `client` to the sale point.
    #[must_use]
    pub fn distance_from(&self, client: GeoPoint) -> f64 {
        great_circle_distance(client, self.location.sale_point)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Vendor {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub profile_picture: Option<Picture>,
    pub sale_card: Option<SaleCard>,
}

impl Vendor {
    /// Set `distanceFromClient` on the sale card, if there is one.
    #[must_use]
    pub fn with_distance_from(mut self, client: GeoPoint) -> Self {
        if let Some(card) = self.sale_card.as_mut() {
            card.distance_from_client = Some(card.distance_from(client));
        }
        self
    }
}

/// `HH:MM`, or `HH:MM:SS` when the seconds are not zero.
#[must_use]
pub fn format_time_of_day(time: NaiveTime) -> String {
    if time.second() == 0 {
        time.format("%H:%M").to_string()
    } else {
        time.format("%H:%M:%S").to_string()
    }
}

fn serialize_time_of_day<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_time_of_day(*time))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hm(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn sample_vendor() -> Vendor {
        let point = GeoPoint::new(0.003_179, 0.003_179).unwrap();
        Vendor {
            id: "v-500".to_string(),
            first_name: "Ana".to_string(),
            last_name: "Lopez".to_string(),
            email: "ana@example.com".to_string(),
            phone_number: "5550100".to_string(),
            profile_picture: None,
            sale_card: Some(SaleCard {
                id: 7,
                business_name: "Tamales Ana".to_string(),
                description: "Tamales and atole".to_string(),
                has_delivery: true,
                is_temporarily_closed: false,
                start_time: hm(8, 0),
                end_time: hm(16, 0),
                location: LocationRecord::new(3, point, 500),
                picture: Some(Picture {
                    blob_key: "blob-1".to_string(),
                    alt_text: "stall".to_string(),
                }),
                distance_from_client: None,
            }),
        }
    }

    #[test]
    fn location_record_hash_is_full_precision() {
        let vendor = sample_vendor();
        let location = &vendor.sale_card.unwrap().location;
        assert_eq!(location.geo_hash, "s00000d6d");
    }

    #[test]
    fn serializes_camel_case_fields() {
        let json = serde_json::to_value(sample_vendor()).unwrap();
        let card = &json["saleCard"];
        assert_eq!(json["firstName"], "Ana");
        assert_eq!(json["phoneNumber"], "5550100");
        assert_eq!(card["businessName"], "Tamales Ana");
        assert_eq!(card["hasDelivery"], true);
        assert_eq!(card["isTemporarilyClosed"], false);
        assert_eq!(card["startTime"], "08:00");
        assert_eq!(card["endTime"], "16:00");
        assert_eq!(card["location"]["geoHash"], "s00000d6d");
        assert_eq!(card["location"]["radius"], 500);
        assert_eq!(card["location"]["salePoint"]["latitude"], 0.003_179);
        assert_eq!(card["picture"]["blobKey"], "blob-1");
        assert!(card.get("distanceFromClient").is_none());
    }

    #[test]
    fn with_distance_from_annotates_sale_card() {
        let vendor = sample_vendor().with_distance_from(GeoPoint::new(0.0, 0.0).unwrap());
        let distance = vendor
            .sale_card
            .and_then(|card| card.distance_from_client)
            .unwrap();
        assert!((distance - 499.91).abs() < 0.05, "distance = {distance}");
    }

    #[test]
    fn with_distance_from_without_card_is_noop() {
        let mut vendor = sample_vendor();
        vendor.sale_card = None;
        let annotated = vendor.clone().with_distance_from(GeoPoint::new(1.0, 1.0).unwrap());
        assert_eq!(annotated, vendor);
    }

    #[test]
    fn time_format_keeps_seconds_only_when_present() {
        assert_eq!(format_time_of_day(hm(7, 5)), "07:05");
        assert_eq!(
            format_time_of_day(NaiveTime::from_hms_opt(23, 59, 30).unwrap()),
            "23:59:30"
        );
    }

    #[test]
    fn card_open_check_uses_daily_window() {
        let card = sample_vendor().sale_card.unwrap();
        assert!(card.is_open_at(hm(12, 0)));
        assert!(!card.is_open_at(hm(8, 0)));
        assert!(!card.is_open_at(hm(20, 0)));
    }
}
