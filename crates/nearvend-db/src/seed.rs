use nearvend_core::SeedEntry;
use sqlx::PgPool;

use crate::sale_cards::write_sale_card;
use crate::DbError;

/// Upsert vendors and their sale cards from a seed file.
///
/// Returns the number of vendors processed. Everything runs in one
/// transaction, so a failure leaves the database untouched.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if any database operation fails.
pub async fn seed_vendors(pool: &PgPool, entries: &[SeedEntry]) -> Result<usize, DbError> {
    let mut tx = pool.begin().await?;
    let mut count = 0usize;

    for entry in entries {
        let vendor = &entry.vendor;
        sqlx::query(
            "INSERT INTO vendors (id, first_name, last_name, email, phone_number) \
             VALUES ($1, $2, $3, $4, $5) \
             ON CONFLICT (id) DO UPDATE SET \
                 first_name = EXCLUDED.first_name, \
                 last_name = EXCLUDED.last_name, \
                 email = EXCLUDED.email, \
                 phone_number = EXCLUDED.phone_number, \
                 updated_at = NOW()",
        )
        .bind(&vendor.id)
        .bind(&vendor.first_name)
        .bind(&vendor.last_name)
        .bind(&vendor.email)
        .bind(&vendor.phone_number)
        .execute(&mut *tx)
        .await?;

        if let Some(card) = &entry.sale_card {
            write_sale_card(&mut *tx, &vendor.id, card).await?;
        }

        count += 1;
    }

    tx.commit().await?;
    tracing::info!(vendors = count, "seeded vendors");
    Ok(count)
}
