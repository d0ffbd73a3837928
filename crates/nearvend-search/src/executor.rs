use std::time::{Duration, Instant};

use futures::future::try_join_all;
use nearvend_core::{NearbyQuery, Vendor};
use nearvend_geo::plan;

use crate::{CandidateStore, PrefixScan, SearchError};

/// Runs nearby queries against a [`CandidateStore`].
#[derive(Debug, Clone)]
pub struct NearbySearch<S> {
    store: S,
    timeout: Duration,
}

impl<S: CandidateStore> NearbySearch<S> {
    /// `timeout` bounds the whole fan-out, not each scan.
    #[must_use]
    pub fn new(store: S, timeout: Duration) -> Self {
        Self { store, timeout }
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Vendors whose sale point lies within the query radius and that pass
    /// the requested filters, each annotated with `distanceFromClient`.
    ///
    /// Results come back in scan order and carry no ranking.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Store`] if any prefix scan fails, or
    /// [`SearchError::Timeout`] if the scans do not all finish within the
    /// deadline. No partial result is returned in either case.
    pub async fn execute(&self, query: &NearbyQuery) -> Result<Vec<Vendor>, SearchError> {
        let started = Instant::now();
        let covering = plan(query.client_location, query.radius_meters);
        if covering.prefixes.is_empty() {
            return Ok(Vec::new());
        }
        tracing::debug!(
            precision = covering.precision,
            center = %covering.center,
            prefixes = covering.prefixes.len(),
            radius_m = query.radius_meters,
            "planned nearby search"
        );

        let scans: Vec<PrefixScan> = covering
            .prefixes
            .iter()
            .map(|prefix| {
                PrefixScan::new(prefix.as_str(), query.has_delivery, query.only_open_now)
            })
            .collect();

        let fan_out = try_join_all(scans.iter().map(|scan| self.scan_one(scan)));
        let batches = tokio::time::timeout(self.timeout, fan_out)
            .await
            .map_err(|_| {
                let timeout_ms = u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX);
                tracing::error!(
                    prefixes = scans.len(),
                    timeout_ms,
                    "nearby search deadline elapsed"
                );
                SearchError::Timeout {
                    prefixes: scans.len(),
                    timeout_ms,
                }
            })??;

        let candidates: usize = batches.iter().map(Vec::len).sum();
        let survivors: Vec<Vendor> = batches
            .into_iter()
            .flatten()
            .filter_map(|vendor| admit(vendor, query))
            .collect();

        tracing::info!(
            candidates,
            survivors = survivors.len(),
            elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
            "nearby search complete"
        );
        Ok(survivors)
    }

    async fn scan_one(&self, scan: &PrefixScan) -> Result<Vec<Vendor>, SearchError> {
        match self.store.scan(scan).await {
            Ok(batch) => {
                tracing::debug!(prefix = %scan.prefix, candidates = batch.len(), "prefix scan");
                Ok(batch)
            }
            Err(source) => {
                tracing::warn!(prefix = %scan.prefix, error = %source, "prefix scan failed");
                Err(SearchError::Store {
                    prefix: scan.prefix.clone(),
                    source,
                })
            }
        }
    }
}

/// Exact distance and opening-hours check for one candidate. Returns the
/// vendor with its distance set, or `None` if it is out.
fn admit(mut vendor: Vendor, query: &NearbyQuery) -> Option<Vendor> {
    let card = vendor.sale_card.as_mut()?;
    let distance = card.distance_from(query.client_location);
    if distance > f64::from(query.radius_meters) {
        return None;
    }
    if query.only_open_now && !card.is_open_at(query.request_time) {
        return None;
    }
    card.distance_from_client = Some(distance);
    Some(vendor)
}
