use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from the variables already in the process,
/// without reading `.env`.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;
    use std::path::PathBuf;
    use std::str::FromStr;

    fn parse_as<T>(var: &str, raw: &str) -> Result<T, ConfigError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        raw.trim()
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    }

    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let database_url = require("DATABASE_URL")?;
    let env = parse_environment(&or_default("NEARVEND_ENV", "development"));

    let bind_addr: SocketAddr =
        parse_as("NEARVEND_BIND_ADDR", &or_default("NEARVEND_BIND_ADDR", "0.0.0.0:3000"))?;
    let log_level = or_default("NEARVEND_LOG_LEVEL", "info");
    let seed_path = PathBuf::from(or_default("NEARVEND_SEED_PATH", "./config/vendors.yaml"));

    let db_max_connections: u32 = parse_as(
        "NEARVEND_DB_MAX_CONNECTIONS",
        &or_default("NEARVEND_DB_MAX_CONNECTIONS", "10"),
    )?;
    let db_min_connections: u32 = parse_as(
        "NEARVEND_DB_MIN_CONNECTIONS",
        &or_default("NEARVEND_DB_MIN_CONNECTIONS", "1"),
    )?;
    if db_min_connections > db_max_connections {
        return Err(ConfigError::InvalidEnvVar {
            var: "NEARVEND_DB_MIN_CONNECTIONS".to_string(),
            reason: format!(
                "min connections ({db_min_connections}) exceeds max connections ({db_max_connections})"
            ),
        });
    }
    let db_acquire_timeout_secs: u64 = parse_as(
        "NEARVEND_DB_ACQUIRE_TIMEOUT_SECS",
        &or_default("NEARVEND_DB_ACQUIRE_TIMEOUT_SECS", "10"),
    )?;

    let search_timeout_ms: u64 = parse_as(
        "NEARVEND_SEARCH_TIMEOUT_MS",
        &or_default("NEARVEND_SEARCH_TIMEOUT_MS", "5000"),
    )?;
    if search_timeout_ms == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "NEARVEND_SEARCH_TIMEOUT_MS".to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }
    let rate_limit_per_minute: u32 = parse_as(
        "NEARVEND_RATE_LIMIT_PER_MINUTE",
        &or_default("NEARVEND_RATE_LIMIT_PER_MINUTE", "120"),
    )?;

    Ok(AppConfig {
        database_url,
        env,
        bind_addr,
        log_level,
        seed_path,
        db_max_connections,
        db_min_connections,
        db_acquire_timeout_secs,
        search_timeout_ms,
        rate_limit_per_minute,
    })
}

/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}
