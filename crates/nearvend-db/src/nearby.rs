//! Candidate lookup for nearby search: one index range scan over
//! `sale_card_locations.geo_hash`.

use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::rows::{VendorRow, VENDOR_COLUMNS};
use crate::DbError;

/// A half-open `[lower, upper)` range of stored geohashes plus the boolean
/// filters pushed down to the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeohashRange {
    pub lower: String,
    pub upper: String,
    /// Keep only cards that deliver.
    pub require_delivery: bool,
    /// Drop cards flagged as temporarily closed.
    pub exclude_closed: bool,
}

fn build_scan_query(range: &GeohashRange) -> QueryBuilder<'_, Postgres> {
    let mut qb = QueryBuilder::new(format!(
        "SELECT {VENDOR_COLUMNS} \
         FROM sale_card_locations l \
         JOIN sale_cards sc ON sc.id = l.sale_card_id \
         JOIN vendors v ON v.id = sc.vendor_id \
         WHERE l.geo_hash >= "
    ));
    qb.push_bind(range.lower.as_str());
    qb.push(" AND l.geo_hash < ");
    qb.push_bind(range.upper.as_str());
    if range.require_delivery {
        qb.push(" AND sc.has_delivery = TRUE");
    }
    if range.exclude_closed {
        qb.push(" AND sc.is_temporarily_closed = FALSE");
    }
    qb.push(" ORDER BY l.geo_hash, v.id");
    qb
}

/// Vendors whose sale-card location hash falls in `range`.
///
/// Distance and opening hours are not checked here.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails, or
/// [`DbError::CorruptRow`] if a matched row cannot be converted.
pub async fn scan_geohash_range(
    pool: &PgPool,
    range: &GeohashRange,
) -> Result<Vec<nearvend_core::Vendor>, DbError> {
    let rows = build_scan_query(range)
        .build_query_as::<VendorRow>()
        .fetch_all(pool)
        .await?;
    tracing::debug!(
        lower = %range.lower,
        rows = rows.len(),
        "geohash range scan"
    );
    rows.into_iter().map(VendorRow::into_vendor).collect()
}
