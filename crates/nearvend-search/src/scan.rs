//! One prefix range scan, as handed to a candidate store.

use nearvend_core::Vendor;
use nearvend_db::GeohashRange;

/// Sorts after every geohash symbol, so `[prefix, prefix + HIGH_SENTINEL)`
/// holds exactly the hashes that start with `prefix`.
pub const HIGH_SENTINEL: char = '\u{fffd}';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixScan {
    pub prefix: String,
    /// Keep only cards that deliver. Unset means no delivery predicate at all.
    pub require_delivery: bool,
    /// Drop cards flagged as temporarily closed.
    pub exclude_closed: bool,
}

impl PrefixScan {
    #[must_use]
    pub fn new(prefix: impl Into<String>, require_delivery: bool, exclude_closed: bool) -> Self {
        Self {
            prefix: prefix.into(),
            require_delivery,
            exclude_closed,
        }
    }

    /// Exclusive upper bound of the scanned hash range.
    #[must_use]
    pub fn upper_bound(&self) -> String {
        let mut upper = String::with_capacity(self.prefix.len() + HIGH_SENTINEL.len_utf8());
        upper.push_str(&self.prefix);
        upper.push(HIGH_SENTINEL);
        upper
    }

    /// Whether `geo_hash` falls inside `[prefix, upper_bound)`.
    #[must_use]
    pub fn covers_hash(&self, geo_hash: &str) -> bool {
        geo_hash >= self.prefix.as_str() && geo_hash < self.upper_bound().as_str()
    }

    /// The predicate a store applies per vendor: the card's hash is in range
    /// and the requested boolean filters hold. Vendors without a card never
    /// match.
    #[must_use]
    pub fn admits(&self, vendor: &Vendor) -> bool {
        let Some(card) = &vendor.sale_card else {
            return false;
        };
        self.covers_hash(&card.location.geo_hash)
            && (!self.require_delivery || card.has_delivery)
            && (!self.exclude_closed || !card.is_temporarily_closed)
    }
}

impl From<&PrefixScan> for GeohashRange {
    fn from(scan: &PrefixScan) -> Self {
        GeohashRange {
            lower: scan.prefix.clone(),
            upper: scan.upper_bound(),
            require_delivery: scan.require_delivery,
            exclude_closed: scan.exclude_closed,
        }
    }
}
