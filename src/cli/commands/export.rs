//! Export data command implementation
//!
//! This module implements the `export-data` command, which asks one cluster
//! member to write a snapshot of a region.

use crate::adapters::build_export_dependencies;
use crate::config::load_config;
use crate::core::export::{
    CommandHandler, ExportDataCommand, ParsedArgs, OPTION_DIR, OPTION_FILE, OPTION_MEMBER,
    OPTION_PARALLEL, OPTION_REGION,
};
use crate::domain::outcome::{EXIT_SYSTEM_ERROR, EXIT_USER_ERROR};
use crate::domain::Outcome;
use clap::Args;

/// Arguments for the export-data command
#[derive(Args, Debug)]
pub struct ExportDataArgs {
    /// Region from which data will be exported
    #[arg(long)]
    pub region: String,

    /// Name or id of the member that will export the region
    #[arg(long)]
    pub member: String,

    /// File to which the exported data will be written (must end in .gfd)
    #[arg(long, value_name = "FILE")]
    pub file: Option<String>,

    /// Directory in which to write the snapshot file(s)
    #[arg(long, value_name = "DIR")]
    pub dir: Option<String>,

    /// Have every member write its local data into DIR
    #[arg(long)]
    pub parallel: bool,

    /// Print the outcome as JSON
    #[arg(long)]
    pub json: bool,
}

impl ExportDataArgs {
    /// Option map handed to the command handler
    pub fn to_parsed_args(&self) -> ParsedArgs {
        let mut args = ParsedArgs::new()
            .with(OPTION_REGION, self.region.as_str())
            .with(OPTION_MEMBER, self.member.as_str())
            .with(OPTION_PARALLEL, self.parallel.to_string());
        if let Some(file) = &self.file {
            args.insert(OPTION_FILE, file.as_str());
        }
        if let Some(dir) = &self.dir {
            args.insert(OPTION_DIR, dir.as_str());
        }
        args
    }

    /// Execute the export-data command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(region = %self.region, member = %self.member, "Starting export-data command");

        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load configuration");
                eprintln!("Failed to load configuration: {e}");
                return Ok(EXIT_USER_ERROR);
            }
        };

        let dependencies = match build_export_dependencies(&config) {
            Ok(d) => d,
            Err(e) => {
                tracing::error!(error = %e, "Failed to create export collaborators");
                eprintln!("Failed to initialize export: {e}");
                return Ok(EXIT_SYSTEM_ERROR);
            }
        };

        let command = ExportDataCommand::new(dependencies);
        let outcome = command.execute(self.to_parsed_args()).await;

        render_outcome(&outcome, self.json)?;
        Ok(outcome.exit_code())
    }
}

/// Print an outcome for a human or, with `json`, for a script
fn render_outcome(outcome: &Outcome, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(outcome)?);
        return Ok(());
    }

    match outcome {
        Outcome::Success(message) => println!("✅ {message}"),
        Outcome::UserError(message) => eprintln!("❌ {message}"),
        Outcome::SystemError(message) => eprintln!("❌ Error: {message}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> ExportDataArgs {
        ExportDataArgs {
            region: "/orders".to_string(),
            member: "server1".to_string(),
            file: None,
            dir: Some("/snap".to_string()),
            parallel: true,
            json: false,
        }
    }

    #[test]
    fn test_to_parsed_args() {
        let parsed = args().to_parsed_args();
        assert_eq!(parsed.get("region"), Some("/orders"));
        assert_eq!(parsed.get("member"), Some("server1"));
        assert_eq!(parsed.get("dir"), Some("/snap"));
        assert!(!parsed.contains("file"));
        assert_eq!(parsed.flag("parallel"), Ok(true));
    }

    #[test]
    fn test_to_parsed_args_single_file() {
        let mut args = args();
        args.dir = None;
        args.file = Some("/tmp/out.gfd".to_string());
        args.parallel = false;

        let parsed = args.to_parsed_args();
        assert_eq!(parsed.get("file"), Some("/tmp/out.gfd"));
        assert!(!parsed.contains("dir"));
        assert_eq!(parsed.flag("parallel"), Ok(false));
    }

    #[tokio::test]
    async fn test_missing_config_is_user_error() {
        let code = args()
            .execute("does-not-exist-regionsnap.toml")
            .await
            .unwrap();
        assert_eq!(code, EXIT_USER_ERROR);
    }
}
