//! Turns a point and radius into the geohash prefixes worth scanning.

use std::collections::HashSet;

use crate::geohash::{determine_precision, encode};
use crate::neighbors::neighbors;
use crate::GeoPoint;

/// The 3x3 block of cells around a query point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoveringPlan {
    pub precision: usize,
    pub center: String,
    /// The eight neighbours in compass order followed by `center`, with any
    /// duplicates removed. Every prefix has length `precision`.
    pub prefixes: Vec<String>,
}

/// Plan the prefix scans for a search of `radius_meters` around `point`.
///
/// This is a coarse index-pruning step. Candidates from these cells can lie
/// outside the radius and must still be checked against the exact distance.
///
/// The block is not guaranteed to cover the whole disc. The precision
/// schedule can pick cells shorter than the radius (at 1000 m it picks
/// precision 6, whose cells are about 610 m tall), so a point inside the
/// radius but two cells away from the center is never scanned.
#[must_use]
pub fn plan(point: GeoPoint, radius_meters: u32) -> CoveringPlan {
    let precision = determine_precision(radius_meters);
    let center = encode(point, precision);

    // Near the poles at very low precision two compass steps can land on the
    // same cell; scanning it twice would return its vendors twice.
    let mut seen = HashSet::from([center.clone()]);
    let mut prefixes: Vec<String> = neighbors(&center)
        .into_iter()
        .filter(|prefix| seen.insert(prefix.clone()))
        .collect();
    prefixes.push(center.clone());

    CoveringPlan {
        precision,
        center,
        prefixes,
    }
}

/// Shorthand for [`plan`] when only the prefix list is needed.
#[must_use]
pub fn covering_prefixes(point: GeoPoint, radius_meters: u32) -> Vec<String> {
    plan(point, radius_meters).prefixes
}
