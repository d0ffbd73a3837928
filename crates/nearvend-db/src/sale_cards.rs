//! Database operations for `sale_cards` and `sale_card_locations`.

use nearvend_core::SaleCardDraft;
use sqlx::{PgConnection, PgPool};

use crate::DbError;

/// Create or replace the sale card of `vendor_id`, returning the card id.
///
/// The card and its location are written in one transaction. The stored
/// geohash is the draft's, which is always derived from its coordinates.
///
/// # Errors
///
/// Returns [`DbError::NotFound`] if the vendor does not exist, or
/// [`DbError::Sqlx`] on any other failure.
pub async fn upsert_sale_card(
    pool: &PgPool,
    vendor_id: &str,
    draft: &SaleCardDraft,
) -> Result<i64, DbError> {
    let mut tx = pool.begin().await?;
    let card_id = write_sale_card(&mut *tx, vendor_id, draft).await?;
    tx.commit().await?;
    Ok(card_id)
}

pub(crate) async fn write_sale_card(
    conn: &mut PgConnection,
    vendor_id: &str,
    draft: &SaleCardDraft,
) -> Result<i64, DbError> {
    let exists: bool = sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM vendors WHERE id = $1)")
        .bind(vendor_id)
        .fetch_one(&mut *conn)
        .await?;
    if !exists {
        return Err(DbError::NotFound);
    }

    let radius = i32::try_from(draft.radius).map_err(|_| DbError::CorruptRow {
        id: vendor_id.to_string(),
        reason: format!("radius {} does not fit the column", draft.radius),
    })?;
    let (blob_key, alt_text) = match &draft.picture {
        Some(picture) => (Some(&picture.blob_key), Some(&picture.alt_text)),
        None => (None, None),
    };

    let card_id: i64 = sqlx::query_scalar(
        "INSERT INTO sale_cards (vendor_id, business_name, description, has_delivery, \
                                 is_temporarily_closed, start_time, end_time, \
                                 picture_blob_key, picture_alt_text) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
         ON CONFLICT (vendor_id) DO UPDATE SET \
             business_name = EXCLUDED.business_name, \
             description = EXCLUDED.description, \
             has_delivery = EXCLUDED.has_delivery, \
             is_temporarily_closed = EXCLUDED.is_temporarily_closed, \
             start_time = EXCLUDED.start_time, \
             end_time = EXCLUDED.end_time, \
             picture_blob_key = EXCLUDED.picture_blob_key, \
             picture_alt_text = EXCLUDED.picture_alt_text, \
             updated_at = NOW() \
         RETURNING id",
    )
    .bind(vendor_id)
    .bind(&draft.business_name)
    .bind(&draft.description)
    .bind(draft.has_delivery)
    .bind(draft.is_temporarily_closed)
    .bind(draft.start_time)
    .bind(draft.end_time)
    .bind(blob_key)
    .bind(alt_text)
    .fetch_one(&mut *conn)
    .await?;

    sqlx::query(
        "INSERT INTO sale_card_locations (sale_card_id, latitude, longitude, geo_hash, radius) \
         VALUES ($1, $2, $3, $4, $5) \
         ON CONFLICT (sale_card_id) DO UPDATE SET \
             latitude = EXCLUDED.latitude, \
             longitude = EXCLUDED.longitude, \
             geo_hash = EXCLUDED.geo_hash, \
             radius = EXCLUDED.radius",
    )
    .bind(card_id)
    .bind(draft.sale_point.latitude())
    .bind(draft.sale_point.longitude())
    .bind(&draft.geo_hash)
    .bind(radius)
    .execute(&mut *conn)
    .await?;

    Ok(card_id)
}

/// Remove the sale card of `vendor_id`; its location goes with it.
///
/// # Errors
///
/// Returns [`DbError::NotFound`] if the vendor has no sale card.
pub async fn delete_sale_card(pool: &PgPool, vendor_id: &str) -> Result<(), DbError> {
    let result = sqlx::query("DELETE FROM sale_cards WHERE vendor_id = $1")
        .bind(vendor_id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(DbError::NotFound);
    }
    Ok(())
}
