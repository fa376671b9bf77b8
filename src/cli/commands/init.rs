//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use crate::domain::outcome::{EXIT_SUCCESS, EXIT_SYSTEM_ERROR, EXIT_USER_ERROR};
use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "regionsnap.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing regionsnap configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(EXIT_USER_ERROR);
        }

        match fs::write(&self.output, sample_config()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. List your cluster members under [[cluster.members]]");
                println!("  2. Set REGIONSNAP_CLUSTER_AUTH_TOKEN if members require a token");
                println!("  3. Validate configuration: regionsnap validate-config");
                println!("  4. Run export: regionsnap export-data --region orders --member server1 --dir /snap");
                println!();
                Ok(EXIT_SUCCESS)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {}", e);
                Ok(EXIT_SYSTEM_ERROR)
            }
        }
    }
}

/// Sample configuration written by `init`
pub fn sample_config() -> &'static str {
    r#"# regionsnap configuration file

[application]
log_level = "info"

[cluster]
connect_timeout_seconds = 10
# auth_token = "${REGIONSNAP_CLUSTER_AUTH_TOKEN}"

[[cluster.members]]
id = "192.168.1.10(server1:4012)<v1>:41000"
name = "server1"
endpoint = "http://192.168.1.10:7070"

[[cluster.members]]
id = "192.168.1.11(server2:4013)<v1>:41000"
name = "server2"
endpoint = "http://192.168.1.11:7070"

[security]
enabled = false
principal = "anonymous"
# "*" grants read access to every region
readable_regions = ["*"]

[logging]
local_enabled = false
local_path = "/var/log/regionsnap"
local_rotation = "daily"  # daily | hourly | never
"#
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_config;
    use tempfile::TempDir;

    #[test]
    fn test_sample_config_is_valid() {
        let config = parse_config(sample_config()).unwrap();
        assert_eq!(config.cluster.members.len(), 2);
        assert_eq!(config.cluster.members[0].name, "server1");
        assert!(!config.security.enabled);
    }

    #[tokio::test]
    async fn test_init_refuses_to_overwrite() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("regionsnap.toml");
        fs::write(&output, "# existing").unwrap();

        let args = InitArgs {
            output: output.to_string_lossy().into_owned(),
            force: false,
        };
        assert_eq!(args.execute().await.unwrap(), EXIT_USER_ERROR);
        assert_eq!(fs::read_to_string(&output).unwrap(), "# existing");
    }

    #[tokio::test]
    async fn test_init_force_overwrites() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("regionsnap.toml");
        fs::write(&output, "# existing").unwrap();

        let args = InitArgs {
            output: output.to_string_lossy().into_owned(),
            force: true,
        };
        assert_eq!(args.execute().await.unwrap(), EXIT_SUCCESS);
        assert_eq!(fs::read_to_string(&output).unwrap(), sample_config());
    }
}
