use thiserror::Error;

/// Failure reported by a [`crate::CandidateStore`].
pub type StoreError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("candidate scan for prefix '{prefix}' failed: {source}")]
    Store {
        prefix: String,
        #[source]
        source: StoreError,
    },

    #[error("nearby search over {prefixes} prefixes timed out after {timeout_ms} ms")]
    Timeout { prefixes: usize, timeout_ms: u64 },
}
