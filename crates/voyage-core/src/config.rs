use std::path::{Path, PathBuf};

use crate::app_config::{AppConfig, Environment};
use crate::error::ConfigError;
use crate::input::CampaignRequest;

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

/// Core parsing/validation, decoupled from the real environment so tests can
/// drive it with a `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let env = parse_environment(&or_default("VOYAGE_ENV", "development"))?;
    let log_level = or_default("VOYAGE_LOG_LEVEL", "info");
    let request_path = lookup("VOYAGE_REQUEST_PATH")
        .ok()
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from);
    let export_path = PathBuf::from(or_default(
        "VOYAGE_EXPORT_PATH",
        "./luxury-travel-campaign.csv",
    ));
    let preview_limit = parse_usize("VOYAGE_PREVIEW_LIMIT", "24")?;

    Ok(AppConfig {
        env,
        log_level,
        request_path,
        export_path,
        preview_limit,
    })
}

fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "VOYAGE_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

/// Read a raw campaign request from a YAML (or JSON) file.
///
/// The file is only parsed here; call [`crate::validate`] on the result.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read or parsed.
pub fn load_request(path: &Path) -> Result<CampaignRequest, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::RequestFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let request: CampaignRequest = serde_yaml::from_str(&content)?;
    tracing::debug!(path = %path.display(), "campaign request loaded");
    Ok(request)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
