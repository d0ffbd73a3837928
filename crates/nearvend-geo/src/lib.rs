//! Geospatial primitives for nearby-vendor search.
//!
//! Everything here is pure and synchronous: encoding points into geohash
//! cells, expanding a cell into its eight neighbours, planning the set of
//! prefixes that cover a search radius, and the exact distance and
//! opening-hours predicates applied to candidates afterwards.

pub mod distance;
pub mod error;
pub mod geohash;
pub mod hours;
pub mod neighbors;
pub mod planner;
pub mod point;

pub use distance::{great_circle_distance, EARTH_RADIUS_METERS};
pub use error::GeoError;
pub use geohash::{
    decode_bounds, determine_precision, encode, encode_max, CellBounds, BASE32,
    MAX_CELL_HEIGHT_METERS, MAX_PRECISION,
};
pub use hours::{is_open_at, parse_time_of_day};
pub use neighbors::{adjacent, neighbors, Compass, Direction};
pub use planner::{covering_prefixes, plan, CoveringPlan};
pub use point::GeoPoint;
