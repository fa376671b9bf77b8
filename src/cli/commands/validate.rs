//! Validate config command implementation

use crate::config::load_config;
use crate::domain::outcome::{EXIT_SUCCESS, EXIT_USER_ERROR};
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        // load_config validates as part of loading
        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Configuration is invalid");
                println!("   Error: {e}");
                return Ok(EXIT_USER_ERROR);
            }
        };

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!(
            "  Connect Timeout: {}s",
            config.cluster.connect_timeout_seconds
        );
        println!(
            "  Auth Token: {}",
            if config.cluster.auth_token.is_some() {
                "configured"
            } else {
                "none"
            }
        );
        println!("  Members: {}", config.cluster.members.len());
        for member in &config.cluster.members {
            println!("    - {} [{}] at {}", member.name, member.id, member.endpoint);
        }
        if config.security.enabled {
            println!(
                "  Security: enabled (principal: {}, readable regions: {:?})",
                config.security.principal, config.security.readable_regions
            );
        } else {
            println!("  Security: disabled");
        }
        println!();

        Ok(EXIT_SUCCESS)
    }
}
