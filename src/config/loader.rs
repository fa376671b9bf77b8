//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::SnapshotConfig;
use super::secret::secret_string;
use crate::domain::errors::SnapshotError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into SnapshotConfig
/// 4. Applies environment variable overrides (REGIONSNAP_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - A referenced environment variable is not set
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use regionsnap::config::loader::load_config;
///
/// let config = load_config("regionsnap.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<SnapshotConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(SnapshotError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        SnapshotError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    parse_config(&contents)
}

/// Parses configuration from TOML text
///
/// Same pipeline as [`load_config`] minus the file read.
pub fn parse_config(contents: &str) -> Result<SnapshotConfig> {
    let contents = substitute_env_vars(contents)?;

    let mut config: SnapshotConfig = toml::from_str(&contents)
        .map_err(|e| SnapshotError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    apply_env_overrides(&mut config);

    config.validate().map_err(|e| {
        SnapshotError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").expect("env var pattern is a valid regex")
    })
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are copied through untouched.
///
/// # Errors
///
/// Returns an error listing every referenced variable that is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = env_var_pattern();
    let mut result = String::new();
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(SnapshotError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using REGIONSNAP_* prefix
///
/// Environment variables follow the pattern: REGIONSNAP_<SECTION>_<KEY>
/// For example: REGIONSNAP_APPLICATION_LOG_LEVEL, REGIONSNAP_CLUSTER_AUTH_TOKEN
fn apply_env_overrides(config: &mut SnapshotConfig) {
    // Application overrides
    if let Ok(val) = std::env::var("REGIONSNAP_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    // Cluster overrides
    if let Ok(val) = std::env::var("REGIONSNAP_CLUSTER_CONNECT_TIMEOUT_SECONDS") {
        if let Ok(timeout) = val.parse() {
            config.cluster.connect_timeout_seconds = timeout;
        }
    }
    if let Ok(val) = std::env::var("REGIONSNAP_CLUSTER_AUTH_TOKEN") {
        config.cluster.auth_token = Some(secret_string(val));
    }

    // Security overrides
    if let Ok(val) = std::env::var("REGIONSNAP_SECURITY_ENABLED") {
        config.security.enabled = val.parse().unwrap_or(config.security.enabled);
    }
    if let Ok(val) = std::env::var("REGIONSNAP_SECURITY_PRINCIPAL") {
        config.security.principal = val;
    }
    if let Ok(val) = std::env::var("REGIONSNAP_SECURITY_READABLE_REGIONS") {
        config.security.readable_regions = val
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
    }

    // Logging overrides
    if let Ok(val) = std::env::var("REGIONSNAP_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("REGIONSNAP_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
}
