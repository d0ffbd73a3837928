use nearvend_geo::GeoError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read seed file {path}: {source}")]
    SeedFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse seed file: {0}")]
    SeedFileParse(#[from] serde_yaml::Error),

    #[error("seed validation error: {0}")]
    Validation(String),
}

/// Rejected client input, raised before any storage access.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("missing required parameter `{field}`")]
    Missing { field: &'static str },

    #[error("`{field}` is not a valid {expected}: {value:?}")]
    Malformed {
        field: &'static str,
        expected: &'static str,
        value: String,
    },

    #[error("`{field}` = {value} is outside the allowed range [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("invalid location: {0}")]
    InvalidLocation(#[from] GeoError),

    #[error("`{field}` must not be empty")]
    Empty { field: &'static str },

    #[error("`{field}` contains characters that are not allowed")]
    InvalidCharacters { field: &'static str },
}

impl InputError {
    /// `true` for input that could not be read at all, as opposed to input
    /// that parsed but broke a rule.
    #[must_use]
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::Missing { .. } | Self::Malformed { .. })
    }
}
