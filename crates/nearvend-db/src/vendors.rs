//! Database operations for the `vendors` table.

use nearvend_core::{NewVendor, Vendor, VendorProfileUpdate};
use sqlx::{PgExecutor, PgPool};

use crate::rows::{VendorRow, VENDOR_COLUMNS};
use crate::DbError;

/// Insert a new vendor without a sale card.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] on failure. A duplicate id surfaces as a unique
/// violation (`23505`).
pub async fn insert_vendor<'e, E>(executor: E, vendor: &NewVendor) -> Result<(), DbError>
where
    E: PgExecutor<'e>,
{
    sqlx::query(
        "INSERT INTO vendors (id, first_name, last_name, email, phone_number) \
         VALUES ($1, $2, $3, $4, $5)",
    )
    .bind(&vendor.id)
    .bind(&vendor.first_name)
    .bind(&vendor.last_name)
    .bind(&vendor.email)
    .bind(&vendor.phone_number)
    .execute(executor)
    .await?;
    Ok(())
}

/// Fetch a vendor together with its sale card, if any.
///
/// # Errors
///
/// Returns [`DbError::NotFound`] if no vendor has `id`, or
/// [`DbError::CorruptRow`] if the stored card is incomplete.
pub async fn get_vendor(pool: &PgPool, id: &str) -> Result<Vendor, DbError> {
    let sql = format!(
        "SELECT {VENDOR_COLUMNS} \
         FROM vendors v \
         LEFT JOIN sale_cards sc ON sc.vendor_id = v.id \
         LEFT JOIN sale_card_locations l ON l.sale_card_id = sc.id \
         WHERE v.id = $1"
    );
    let row = sqlx::query_as::<_, VendorRow>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or(DbError::NotFound)?;
    row.into_vendor()
}

/// Overwrite the editable profile fields of a vendor.
///
/// # Errors
///
/// Returns [`DbError::NotFound`] if no vendor has `id`.
pub async fn update_vendor_profile(
    pool: &PgPool,
    id: &str,
    update: &VendorProfileUpdate,
) -> Result<(), DbError> {
    let (blob_key, alt_text) = match &update.profile_picture {
        Some(picture) => (Some(&picture.blob_key), Some(&picture.alt_text)),
        None => (None, None),
    };
    let result = sqlx::query(
        "UPDATE vendors SET \
             first_name = $2, \
             last_name = $3, \
             phone_number = $4, \
             profile_picture_blob_key = $5, \
             profile_picture_alt_text = $6, \
             updated_at = NOW() \
         WHERE id = $1",
    )
    .bind(id)
    .bind(&update.first_name)
    .bind(&update.last_name)
    .bind(&update.phone_number)
    .bind(blob_key)
    .bind(alt_text)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(DbError::NotFound);
    }
    Ok(())
}
