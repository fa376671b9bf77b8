//! Configuration management for regionsnap.
//!
//! # Overview
//!
//! regionsnap uses a TOML configuration file with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `REGIONSNAP_<SECTION>_<KEY>` environment overrides
//! - Default values for optional settings
//! - Validation on load
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [cluster]
//! connect_timeout_seconds = 10
//! auth_token = "${REGIONSNAP_CLUSTER_TOKEN}"
//!
//! [[cluster.members]]
//! id = "192.168.1.10(server1:5421)<v1>:41000"
//! name = "server1"
//! endpoint = "http://192.168.1.10:7070"
//!
//! [security]
//! enabled = true
//! principal = "operator"
//! readable_regions = ["orders", "customers"]
//!
//! [logging]
//! local_enabled = false
//! ```
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use regionsnap::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("regionsnap.toml")?;
//! println!("Known members: {}", config.cluster.members.len());
//! # Ok(())
//! # }
//! ```

pub mod loader;
pub mod schema;
pub mod secret;

// Re-export commonly used types
pub use loader::{load_config, parse_config};
pub use schema::{
    ApplicationConfig, ClusterConfig, LoggingConfig, MemberConfig, SecurityConfig,
    SnapshotConfig,
};
pub use secret::{secret_string, SecretString, SecretValue};
