//! Joined vendor/sale-card/location row and its conversion to the domain
//! aggregate.

use chrono::NaiveTime;
use nearvend_core::{LocationRecord, Picture, SaleCard, Vendor};
use nearvend_geo::GeoPoint;

use crate::DbError;

/// Column list matching [`VendorRow`]. Callers append `FROM`/`WHERE`.
pub(crate) const VENDOR_COLUMNS: &str = "\
    v.id, v.first_name, v.last_name, v.email, v.phone_number, \
    v.profile_picture_blob_key, v.profile_picture_alt_text, \
    sc.id AS sale_card_id, sc.business_name, sc.description, \
    sc.has_delivery, sc.is_temporarily_closed, sc.start_time, sc.end_time, \
    sc.picture_blob_key, sc.picture_alt_text, \
    l.id AS location_id, l.latitude, l.longitude, l.geo_hash, l.radius";

/// One vendor with its sale card and location flattened. Card and location
/// columns are NULL when the vendor has no card.
#[derive(Debug, Clone, sqlx::FromRow)]
pub(crate) struct VendorRow {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub profile_picture_blob_key: Option<String>,
    pub profile_picture_alt_text: Option<String>,
    pub sale_card_id: Option<i64>,
    pub business_name: Option<String>,
    pub description: Option<String>,
    pub has_delivery: Option<bool>,
    pub is_temporarily_closed: Option<bool>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub picture_blob_key: Option<String>,
    pub picture_alt_text: Option<String>,
    pub location_id: Option<i64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub geo_hash: Option<String>,
    pub radius: Option<i32>,
}

fn picture(blob_key: Option<String>, alt_text: Option<String>) -> Option<Picture> {
    Some(Picture {
        blob_key: blob_key?,
        alt_text: alt_text.unwrap_or_default(),
    })
}

impl VendorRow {
    /// # Errors
    ///
    /// Returns [`DbError::CorruptRow`] when a sale card exists without a
    /// complete location, or the stored coordinates or radius are invalid.
    pub(crate) fn into_vendor(self) -> Result<Vendor, DbError> {
        let corrupt = |reason: &str| DbError::CorruptRow {
            id: self.id.clone(),
            reason: reason.to_string(),
        };

        let sale_card = match self.sale_card_id {
            None => None,
            Some(card_id) => {
                let (Some(location_id), Some(lat), Some(lng), Some(geo_hash), Some(radius)) = (
                    self.location_id,
                    self.latitude,
                    self.longitude,
                    self.geo_hash.clone(),
                    self.radius,
                ) else {
                    return Err(corrupt("sale card has no location"));
                };
                let (Some(start_time), Some(end_time)) = (self.start_time, self.end_time) else {
                    return Err(corrupt("sale card has no opening hours"));
                };
                let sale_point =
                    GeoPoint::new(lat, lng).map_err(|e| corrupt(&e.to_string()))?;
                let radius = u32::try_from(radius).map_err(|_| corrupt("negative radius"))?;

                Some(SaleCard {
                    id: card_id,
                    business_name: self.business_name.clone().unwrap_or_default(),
                    description: self.description.clone().unwrap_or_default(),
                    has_delivery: self.has_delivery.unwrap_or(false),
                    is_temporarily_closed: self.is_temporarily_closed.unwrap_or(false),
                    start_time,
                    end_time,
                    location: LocationRecord {
                        id: location_id,
                        sale_point,
                        geo_hash,
                        radius,
                    },
                    picture: picture(self.picture_blob_key.clone(), self.picture_alt_text.clone()),
                    distance_from_client: None,
                })
            }
        };

        Ok(Vendor {
            profile_picture: picture(self.profile_picture_blob_key, self.profile_picture_alt_text),
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone_number: self.phone_number,
            sale_card,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_row() -> VendorRow {
        VendorRow {
            id: "ana".into(),
            first_name: "Ana".into(),
            last_name: "Lopez".into(),
            email: "ana@example.com".into(),
            phone_number: "5550100".into(),
            profile_picture_blob_key: None,
            profile_picture_alt_text: None,
            sale_card_id: None,
            business_name: None,
            description: None,
            has_delivery: None,
            is_temporarily_closed: None,
            start_time: None,
            end_time: None,
            picture_blob_key: None,
            picture_alt_text: None,
            location_id: None,
            latitude: None,
            longitude: None,
            geo_hash: None,
            radius: None,
        }
    }

    fn carded_row() -> VendorRow {
        VendorRow {
            sale_card_id: Some(1),
            business_name: Some("Tamales Ana".into()),
            description: Some("Tamales".into()),
            has_delivery: Some(true),
            is_temporarily_closed: Some(false),
            start_time: NaiveTime::from_hms_opt(8, 0, 0),
            end_time: NaiveTime::from_hms_opt(16, 0, 0),
            location_id: Some(2),
            latitude: Some(0.003_179),
            longitude: Some(0.003_179),
            geo_hash: Some("s00000d6d".into()),
            radius: Some(500),
            ..bare_row()
        }
    }

    #[test]
    fn vendor_without_card_converts() {
        let vendor = bare_row().into_vendor().unwrap();
        assert!(vendor.sale_card.is_none());
        assert!(vendor.profile_picture.is_none());
    }

    #[test]
    fn vendor_with_card_converts() {
        let vendor = carded_row().into_vendor().unwrap();
        let card = vendor.sale_card.unwrap();
        assert_eq!(card.location.geo_hash, "s00000d6d");
        assert_eq!(card.location.radius, 500);
        assert!(card.has_delivery);
        assert!(card.picture.is_none());
    }

    #[test]
    fn card_without_location_is_corrupt() {
        let row = VendorRow {
            location_id: None,
            ..carded_row()
        };
        assert!(matches!(
            row.into_vendor(),
            Err(DbError::CorruptRow { ref id, .. }) if id == "ana"
        ));
    }

    #[test]
    fn out_of_range_coordinates_are_corrupt() {
        let row = VendorRow {
            latitude: Some(95.0),
            ..carded_row()
        };
        assert!(matches!(row.into_vendor(), Err(DbError::CorruptRow { .. })));
    }
}
