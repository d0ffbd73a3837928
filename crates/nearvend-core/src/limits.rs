//! Bounds enforced on distances at the request boundary.

pub const MIN_DISTANCE_METERS: u32 = 0;

/// Largest search radius a client may ask for (20 km).
pub const MAX_CLIENT_DISTANCE_METERS: u32 = 20_000;

/// Largest service radius a vendor may declare (2 km).
pub const MAX_VENDOR_RADIUS_METERS: u32 = 2_000;

/// Search radius used when the client does not send one.
pub const DEFAULT_SEARCH_DISTANCE_METERS: u32 = 1_000;
