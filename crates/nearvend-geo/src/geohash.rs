//! Geohash encoding and precision selection.
//!
//! A geohash interleaves longitude and latitude bisection decisions, longitude
//! first, and packs every five bits into one symbol of a 32-character
//! alphabet. Longer hashes name smaller cells, and points inside the same
//! cell share the full hash, which is what makes a prefix range scan over a
//! sorted string column a spatial index.

use crate::GeoPoint;

/// The geohash base-32 alphabet (no `a`, `i`, `l`, `o`).
pub const BASE32: &[u8; 32] = b"0123456789bcdefghjkmnpqrstuvwxyz";

/// Longest hash produced or stored. Vendor locations are persisted at this
/// precision.
pub const MAX_PRECISION: usize = 9;

/// Cell height the precision schedule starts shrinking from.
pub const MAX_CELL_HEIGHT_METERS: u32 = 5_000_000;

const BITS_PER_SYMBOL: u8 = 5;

/// Encode `point` into a geohash of `precision` symbols.
///
/// `precision` is clamped into `1..=MAX_PRECISION`.
#[must_use]
pub fn encode(point: GeoPoint, precision: usize) -> String {
    let precision = precision.clamp(1, MAX_PRECISION);
    let mut hash = String::with_capacity(precision);

    let (mut lat_min, mut lat_max) = (-90.0_f64, 90.0_f64);
    let (mut lng_min, mut lng_max) = (-180.0_f64, 180.0_f64);
    let mut index = 0_usize;
    let mut bit = 0_u8;
    let mut even_bit = true;

    while hash.len() < precision {
        if even_bit {
            let mid = (lng_min + lng_max) / 2.0;
            if point.longitude() >= mid {
                index = index * 2 + 1;
                lng_min = mid;
            } else {
                index *= 2;
                lng_max = mid;
            }
        } else {
            let mid = (lat_min + lat_max) / 2.0;
            if point.latitude() >= mid {
                index = index * 2 + 1;
                lat_min = mid;
            } else {
                index *= 2;
                lat_max = mid;
            }
        }
        even_bit = !even_bit;

        bit += 1;
        if bit == BITS_PER_SYMBOL {
            hash.push(char::from(BASE32[index]));
            bit = 0;
            index = 0;
        }
    }

    hash
}

/// Encode at [`MAX_PRECISION`]. This is the form stored for every vendor
/// location.
#[must_use]
pub fn encode_max(point: GeoPoint) -> String {
    encode(point, MAX_PRECISION)
}

/// Pick the hash length whose cell height first drops to `distance_meters`.
///
/// Starting from [`MAX_CELL_HEIGHT_METERS`], the height is divided by 4 when
/// the running precision is even and by 8 when it is odd (integer division),
/// and the precision is incremented after each division. The loop stops as
/// soon as the height is `<= distance_meters` or the precision reaches
/// [`MAX_PRECISION`], so the result is always in `1..=MAX_PRECISION`.
///
/// Fixed points: `0 -> 9`, `100 -> 7`, `1000 -> 6`, `20_000 -> 4`,
/// `5_000_000 -> 1`.
#[must_use]
pub fn determine_precision(distance_meters: u32) -> usize {
    let mut height = MAX_CELL_HEIGHT_METERS;
    let mut precision = 0_usize;

    loop {
        height /= if precision % 2 == 0 { 4 } else { 8 };
        precision += 1;
        if height <= distance_meters || precision == MAX_PRECISION {
            return precision;
        }
    }
}

/// Position of `symbol` in [`BASE32`], if it is a geohash symbol.
pub(crate) fn symbol_index(symbol: u8) -> Option<usize> {
    BASE32.iter().position(|&c| c == symbol)
}

/// `true` when `hash` is non-empty and every byte is a lowercase geohash symbol.
#[must_use]
pub fn is_valid(hash: &str) -> bool {
    !hash.is_empty() && hash.bytes().all(|b| symbol_index(b).is_some())
}

/// Latitude/longitude box covered by a geohash cell.
///
/// Minimum edges are inclusive and maximum edges exclusive, matching the
/// `>=` comparison used while encoding. The north pole and the antimeridian
/// at +180 are the exception: `encode` puts them in the topmost and
/// rightmost cells, so those outer edges are inclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellBounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl CellBounds {
    #[must_use]
    pub fn contains(&self, point: GeoPoint) -> bool {
        within_edge(self.min_lat, self.max_lat, 90.0, point.latitude())
            && within_edge(self.min_lng, self.max_lng, 180.0, point.longitude())
    }

    #[must_use]
    pub fn height_degrees(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    #[must_use]
    pub fn width_degrees(&self) -> f64 {
        self.max_lng - self.min_lng
    }
}

fn within_edge(min: f64, max: f64, global_max: f64, value: f64) -> bool {
    if max >= global_max {
        (min..=max).contains(&value)
    } else {
        (min..max).contains(&value)
    }
}

/// Decode a geohash into the bounds of its cell.
///
/// Returns `None` for an empty hash or one containing a non-geohash symbol.
/// Uppercase input is accepted.
#[must_use]
pub fn decode_bounds(hash: &str) -> Option<CellBounds> {
    if hash.is_empty() {
        return None;
    }

    let mut bounds = CellBounds {
        min_lat: -90.0,
        max_lat: 90.0,
        min_lng: -180.0,
        max_lng: 180.0,
    };
    let mut even_bit = true;

    for symbol in hash.bytes() {
        let index = symbol_index(symbol.to_ascii_lowercase())?;
        for shift in (0..BITS_PER_SYMBOL).rev() {
            let set = (index >> shift) & 1 == 1;
            if even_bit {
                let mid = (bounds.min_lng + bounds.max_lng) / 2.0;
                if set {
                    bounds.min_lng = mid;
                } else {
                    bounds.max_lng = mid;
                }
            } else {
                let mid = (bounds.min_lat + bounds.max_lat) / 2.0;
                if set {
                    bounds.min_lat = mid;
                } else {
                    bounds.max_lat = mid;
                }
            }
            even_bit = !even_bit;
        }
    }

    Some(bounds)
}
