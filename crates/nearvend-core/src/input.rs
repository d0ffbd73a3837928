//! Request bodies for vendor registration, profile edits and sale cards.

use chrono::NaiveTime;
use nearvend_geo::{encode_max, GeoPoint};
use serde::Deserialize;

use crate::limits::{MAX_VENDOR_RADIUS_METERS, MIN_DISTANCE_METERS};
use crate::model::Picture;
use crate::parse;
use crate::InputError;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewVendor {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
}

impl NewVendor {
    /// # Errors
    ///
    /// Returns [`InputError`] for an empty field, a name that is not ASCII
    /// alphanumeric, a phone number with non-digits, or an email without `@`.
    pub fn validate(&self) -> Result<(), InputError> {
        parse::non_empty("id", &self.id)?;
        if self.id.chars().any(char::is_whitespace) {
            return Err(InputError::InvalidCharacters { field: "id" });
        }
        validate_name("firstName", &self.first_name)?;
        validate_name("lastName", &self.last_name)?;
        validate_phone(&self.phone_number)?;
        parse::non_empty("email", &self.email)?;
        if !self.email.contains('@') {
            return Err(InputError::Malformed {
                field: "email",
                expected: "email address",
                value: self.email.clone(),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorProfileUpdate {
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    #[serde(default)]
    pub profile_picture: Option<Picture>,
}

impl VendorProfileUpdate {
    /// # Errors
    ///
    /// Returns [`InputError`] under the same name and phone rules as
    /// registration, or for a picture with an empty key or alt text.
    pub fn validate(&self) -> Result<(), InputError> {
        validate_name("firstName", &self.first_name)?;
        validate_name("lastName", &self.last_name)?;
        validate_phone(&self.phone_number)?;
        if let Some(picture) = &self.profile_picture {
            validate_picture(picture)?;
        }
        Ok(())
    }
}

/// Sale card body as sent by a vendor.
///
/// A `geoHash` sent by the client is not part of this type and is ignored;
/// the stored hash is always computed from `latitude`/`longitude`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleCardInput {
    pub business_name: String,
    pub description: String,
    #[serde(default)]
    pub has_delivery: bool,
    #[serde(default)]
    pub is_temporarily_closed: bool,
    pub start_time: String,
    pub end_time: String,
    pub latitude: f64,
    pub longitude: f64,
    pub radius: i64,
    #[serde(default)]
    pub picture: Option<Picture>,
}

/// A sale card that passed validation, ready to persist.
#[derive(Debug, Clone, PartialEq)]
pub struct SaleCardDraft {
    pub business_name: String,
    pub description: String,
    pub has_delivery: bool,
    pub is_temporarily_closed: bool,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub sale_point: GeoPoint,
    pub geo_hash: String,
    pub radius: u32,
    pub picture: Option<Picture>,
}

impl SaleCardInput {
    /// Validate and derive the stored geohash.
    ///
    /// A window with `start > end` is an overnight window and is accepted.
    ///
    /// # Errors
    ///
    /// Returns [`InputError`] for empty text fields, unreadable times, an
    /// invalid location or a radius outside `0..=2000`.
    pub fn validate(&self) -> Result<SaleCardDraft, InputError> {
        parse::non_empty("businessName", &self.business_name)?;
        parse::non_empty("description", &self.description)?;
        let start_time = parse::time_of_day("startTime", &self.start_time)?;
        let end_time = parse::time_of_day("endTime", &self.end_time)?;
        let sale_point = parse::location(self.latitude, self.longitude)?;
        let radius = parse::within("radius", self.radius, MIN_DISTANCE_METERS, MAX_VENDOR_RADIUS_METERS)?;
        if let Some(picture) = &self.picture {
            validate_picture(picture)?;
        }

        Ok(SaleCardDraft {
            business_name: self.business_name.trim().to_string(),
            description: self.description.trim().to_string(),
            has_delivery: self.has_delivery,
            is_temporarily_closed: self.is_temporarily_closed,
            start_time,
            end_time,
            sale_point,
            geo_hash: encode_max(sale_point),
            radius,
            picture: self.picture.clone(),
        })
    }
}

fn validate_name(field: &'static str, value: &str) -> Result<(), InputError> {
    parse::non_empty(field, value)?;
    if value.chars().all(|c| c.is_ascii_alphanumeric()) {
        Ok(())
    } else {
        Err(InputError::InvalidCharacters { field })
    }
}

fn validate_phone(value: &str) -> Result<(), InputError> {
    parse::non_empty("phoneNumber", value)?;
    if value.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err(InputError::InvalidCharacters {
            field: "phoneNumber",
        })
    }
}

fn validate_picture(picture: &Picture) -> Result<(), InputError> {
    parse::non_empty("picture.blobKey", &picture.blob_key)?;
    parse::non_empty("picture.altText", &picture.alt_text)
}
