use std::future::Future;

use nearvend_core::Vendor;

use crate::{PrefixScan, StoreError};

/// Source of raw search candidates.
///
/// One call serves one prefix. Implementations apply the hash range and the
/// boolean filters of [`PrefixScan`] (see [`PrefixScan::admits`]) and leave
/// distance and opening hours to the executor. Calls for different prefixes
/// run concurrently.
pub trait CandidateStore: Send + Sync {
    fn scan(
        &self,
        scan: &PrefixScan,
    ) -> impl Future<Output = Result<Vec<Vendor>, StoreError>> + Send;
}
