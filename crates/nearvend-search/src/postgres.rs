use nearvend_core::Vendor;
use nearvend_db::{scan_geohash_range, GeohashRange};
use sqlx::PgPool;

use crate::{CandidateStore, PrefixScan, StoreError};

/// [`CandidateStore`] over the `sale_card_locations` geohash index.
#[derive(Debug, Clone)]
pub struct PgCandidateStore {
    pool: PgPool,
}

impl PgCandidateStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

impl CandidateStore for PgCandidateStore {
    async fn scan(&self, scan: &PrefixScan) -> Result<Vec<Vendor>, StoreError> {
        let range = GeohashRange::from(scan);
        Ok(scan_geohash_range(&self.pool, &range).await?)
    }
}
