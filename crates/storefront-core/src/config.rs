use crate::app_config::{AppConfig, Environment};
use crate::error::ConfigError;

pub const DEFAULT_CATALOG_URL: &str = "https://fakestoreapi.com/products/";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function,
/// so tests can drive it from a plain `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| invalid(var, e.to_string()))
    };

    let env = parse_environment(&or_default("STOREFRONT_ENV", "development"))?;
    let log_level = or_default("STOREFRONT_LOG_LEVEL", "info");

    let catalog_url = or_default("STOREFRONT_CATALOG_URL", DEFAULT_CATALOG_URL);
    if !(catalog_url.starts_with("http://") || catalog_url.starts_with("https://")) {
        return Err(invalid(
            "STOREFRONT_CATALOG_URL",
            format!("\"{catalog_url}\" is not an http(s) URL"),
        ));
    }

    let request_timeout_secs = parse_u64("STOREFRONT_REQUEST_TIMEOUT_SECS", "30")?;
    if request_timeout_secs == 0 {
        return Err(invalid(
            "STOREFRONT_REQUEST_TIMEOUT_SECS",
            "must be greater than zero".to_string(),
        ));
    }

    let user_agent = or_default("STOREFRONT_USER_AGENT", "storefront/0.1 (catalog)");

    let stock_probability = or_default("STOREFRONT_STOCK_PROBABILITY", "0.8")
        .parse::<f64>()
        .map_err(|e| invalid("STOREFRONT_STOCK_PROBABILITY", e.to_string()))?;
    if !(0.0..=1.0).contains(&stock_probability) {
        return Err(invalid(
            "STOREFRONT_STOCK_PROBABILITY",
            format!("{stock_probability} is outside [0, 1]"),
        ));
    }

    Ok(AppConfig {
        env,
        log_level,
        catalog_url,
        request_timeout_secs,
        user_agent,
        stock_probability,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "STOREFRONT_ENV".to_string(),
            reason: format!("unknown environment \"{other}\""),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
