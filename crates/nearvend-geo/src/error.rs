use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeoError {
    #[error("latitude {0} is outside the legal range [-90, 90]")]
    LatitudeOutOfRange(f64),

    #[error("longitude {0} is outside the legal range [-180, 180]")]
    LongitudeOutOfRange(f64),

    #[error("coordinates must be finite numbers")]
    NonFinite,
}
