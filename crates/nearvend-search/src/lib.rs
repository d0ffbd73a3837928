//! Nearby vendor search.
//!
//! A query is planned into at most nine geohash prefixes. Each prefix becomes
//! one range scan against a [`CandidateStore`]; the scans run concurrently
//! under a single deadline, and the merged candidates are filtered by exact
//! distance and, when asked, by opening hours.

pub mod error;
pub mod executor;
pub mod postgres;
pub mod scan;
pub mod store;

pub use error::{SearchError, StoreError};
pub use executor::NearbySearch;
pub use postgres::PgCandidateStore;
pub use scan::{PrefixScan, HIGH_SENTINEL};
pub use store::CandidateStore;
