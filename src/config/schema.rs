//! Configuration schema types
//!
//! This module defines the configuration structure for regionsnap.

use crate::config::SecretString;
use serde::{Deserialize, Serialize};

/// Main regionsnap configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SnapshotConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Cluster members and transport settings
    #[serde(default)]
    pub cluster: ClusterConfig,

    /// Authorization policy
    #[serde(default)]
    pub security: SecurityConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl SnapshotConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.cluster.validate()?;
        self.security.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Cluster configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClusterConfig {
    /// Connect timeout for member endpoints in seconds
    ///
    /// Only the connection phase is bounded. Once a member accepts the request
    /// the export runs until the member answers.
    #[serde(default = "default_connect_timeout_seconds")]
    pub connect_timeout_seconds: u64,

    /// Bearer token presented to member endpoints (optional)
    /// Stored securely in memory and automatically zeroized on drop
    #[serde(default)]
    pub auth_token: Option<SecretString>,

    /// Known cluster members
    #[serde(default)]
    pub members: Vec<MemberConfig>,
}

impl ClusterConfig {
    fn validate(&self) -> Result<(), String> {
        if self.connect_timeout_seconds == 0 || self.connect_timeout_seconds > 300 {
            return Err(format!(
                "cluster.connect_timeout_seconds must be between 1 and 300, got {}",
                self.connect_timeout_seconds
            ));
        }

        let mut seen_ids = std::collections::HashSet::new();
        for member in &self.members {
            member.validate()?;
            if !seen_ids.insert(member.id.as_str()) {
                return Err(format!("Duplicate cluster member id '{}'", member.id));
            }
        }

        Ok(())
    }
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self {
            connect_timeout_seconds: default_connect_timeout_seconds(),
            auth_token: None,
            members: Vec::new(),
        }
    }
}

/// A cluster member entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberConfig {
    /// Unique member id
    pub id: String,

    /// Member name
    #[serde(default)]
    pub name: String,

    /// Base URL of the member's function endpoint
    pub endpoint: String,
}

impl MemberConfig {
    fn validate(&self) -> Result<(), String> {
        if self.id.trim().is_empty() {
            return Err("cluster.members[].id cannot be empty".to_string());
        }

        let endpoint = url::Url::parse(&self.endpoint).map_err(|e| {
            format!(
                "Invalid endpoint '{}' for cluster member '{}': {}",
                self.endpoint, self.id, e
            )
        })?;
        if endpoint.scheme() != "http" && endpoint.scheme() != "https" {
            return Err(format!(
                "Endpoint for cluster member '{}' must start with http:// or https://",
                self.id
            ));
        }

        Ok(())
    }
}

/// Authorization policy configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    /// Enforce the read policy; when false every region is readable
    #[serde(default)]
    pub enabled: bool,

    /// Principal the command runs as
    #[serde(default = "default_principal")]
    pub principal: String,

    /// Regions the principal may read (`*` allows all)
    #[serde(default)]
    pub readable_regions: Vec<String>,
}

impl SecurityConfig {
    fn validate(&self) -> Result<(), String> {
        if self.enabled && self.principal.trim().is_empty() {
            return Err("security.principal cannot be empty when security is enabled".to_string());
        }
        Ok(())
    }
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            principal: default_principal(),
            readable_regions: Vec::new(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log file path
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path cannot be empty when local logging is enabled".to_string());
        }

        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_connect_timeout_seconds() -> u64 {
    10
}

fn default_principal() -> String {
    "anonymous".to_string()
}

fn default_local_path() -> String {
    "/var/log/regionsnap".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}
