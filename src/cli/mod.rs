//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for regionsnap using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// regionsnap - export region snapshots through a cluster member
#[derive(Parser, Debug)]
#[command(name = "regionsnap")]
#[command(version, about, long_about = None)]
#[command(author = "Regionsnap Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "regionsnap.toml", env = "REGIONSNAP_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "REGIONSNAP_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Export the data of a region to a snapshot file on a member
    ExportData(commands::export::ExportDataArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_export_data() {
        let cli = Cli::parse_from([
            "regionsnap",
            "export-data",
            "--region",
            "orders",
            "--member",
            "server1",
            "--file",
            "/tmp/orders.gfd",
        ]);
        assert_eq!(cli.config, "regionsnap.toml");
        match cli.command {
            Commands::ExportData(args) => {
                assert_eq!(args.region, "orders");
                assert_eq!(args.member, "server1");
                assert_eq!(args.file.as_deref(), Some("/tmp/orders.gfd"));
                assert!(args.dir.is_none());
                assert!(!args.parallel);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_export_data_parallel() {
        let cli = Cli::parse_from([
            "regionsnap",
            "export-data",
            "--region",
            "orders",
            "--member",
            "server1",
            "--dir",
            "/snap",
            "--parallel",
        ]);
        match cli.command {
            Commands::ExportData(args) => {
                assert_eq!(args.dir.as_deref(), Some("/snap"));
                assert!(args.parallel);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_export_data_requires_region_and_member() {
        assert!(Cli::try_parse_from(["regionsnap", "export-data", "--member", "m"]).is_err());
        assert!(Cli::try_parse_from(["regionsnap", "export-data", "--region", "r"]).is_err());
    }

    #[test]
    fn test_cli_parse_with_config() {
        let cli = Cli::parse_from(["regionsnap", "--config", "custom.toml", "validate-config"]);
        assert_eq!(cli.config, "custom.toml");
    }

    #[test]
    fn test_cli_parse_with_log_level() {
        let cli = Cli::parse_from(["regionsnap", "--log-level", "debug", "validate-config"]);
        assert_eq!(cli.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_cli_parse_validate_config() {
        let cli = Cli::parse_from(["regionsnap", "validate-config"]);
        assert!(matches!(cli.command, Commands::ValidateConfig(_)));
    }

    #[test]
    fn test_cli_parse_init() {
        let cli = Cli::parse_from(["regionsnap", "init", "--force"]);
        match cli.command {
            Commands::Init(args) => {
                assert!(args.force);
                assert_eq!(args.output, "regionsnap.toml");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
