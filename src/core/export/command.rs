//! export-data command - orchestrates a single-member region export
//!
//! Steps, each of which can end the invocation:
//!
//! 1. authorize read access to the region
//! 2. resolve the target member
//! 3. validate the output location
//! 4. dispatch the export function to the member
//! 5. reduce the member's answer into an [`Outcome`]

use super::handler::{CommandHandler, ParsedArgs};
use super::invoker::RemoteExportInvoker;
use super::reducer::reduce;
use super::resolver::TargetResolver;
use super::validator::validate_path;
use super::{
    EXPORT_DATA_ACTION, OPTION_DIR, OPTION_FILE, OPTION_MEMBER, OPTION_PARALLEL, OPTION_REGION,
};
use crate::adapters::cluster::{FunctionExecutor, NodeDirectory};
use crate::adapters::security::SecurityService;
use crate::domain::{ExportRequest, MemberRef, Outcome, RegionName};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::Instrument;
use uuid::Uuid;

/// Collaborators the export-data command needs
#[derive(Clone)]
pub struct ExportDependencies {
    /// Authorization check
    pub security: Arc<dyn SecurityService>,

    /// Member lookup
    pub directory: Arc<dyn NodeDirectory>,

    /// Remote function execution
    pub executor: Arc<dyn FunctionExecutor>,
}

/// The export-data command
///
/// Holds no per-invocation state, so one instance can serve concurrent
/// invocations.
#[derive(Clone)]
pub struct ExportDataCommand {
    security: Arc<dyn SecurityService>,
    resolver: TargetResolver,
    invoker: RemoteExportInvoker,
}

impl ExportDataCommand {
    /// Create the command with its collaborators
    pub fn new(dependencies: ExportDependencies) -> Self {
        Self {
            security: dependencies.security,
            resolver: TargetResolver::new(dependencies.directory),
            invoker: RemoteExportInvoker::new(dependencies.executor),
        }
    }

    /// Export one region through one member
    pub async fn export_data(&self, request: &ExportRequest) -> Outcome {
        let span = tracing::info_span!(
            "export_data",
            invocation_id = %Uuid::new_v4(),
            region = %request.region,
            member = %request.member,
            parallel = request.parallel,
        );

        async {
            let outcome = self.run(request).await;
            crate::log_outcome!(&outcome);
            outcome
        }
        .instrument(span)
        .await
    }

    async fn run(&self, request: &ExportRequest) -> Outcome {
        if let Err(e) = self.security.authorize_region_read(&request.region).await {
            return if e.is_user_error() {
                Outcome::UserError(e.to_string())
            } else {
                tracing::error!(error = %e, "Authorization check failed");
                Outcome::SystemError(e.to_string())
            };
        }

        let Some(target) = self.resolver.resolve(&request.member).await else {
            return Outcome::UserError(format!("Member {} not found", request.member));
        };

        if let Err(e) = validate_path(
            request.file_path.as_deref(),
            request.dir_path.as_deref(),
            request.parallel,
        ) {
            return e.into();
        }

        reduce(self.invoker.invoke(request, &target).await)
    }
}

/// Build an [`ExportRequest`] from shell-style options
///
/// # Errors
///
/// Returns a user error for a missing or blank region or member, or an
/// unparsable parallel flag.
pub fn request_from_args(args: &ParsedArgs) -> Result<ExportRequest, Outcome> {
    let region = args
        .get(OPTION_REGION)
        .ok_or_else(|| missing_option(OPTION_REGION))?;
    let region = RegionName::new(region).map_err(Outcome::UserError)?;

    let member = args
        .get(OPTION_MEMBER)
        .ok_or_else(|| missing_option(OPTION_MEMBER))?;
    let member = MemberRef::new(member).map_err(Outcome::UserError)?;

    let parallel = args.flag(OPTION_PARALLEL).map_err(Outcome::UserError)?;

    Ok(ExportRequest {
        region,
        file_path: args.get(OPTION_FILE).map(str::to_string),
        dir_path: args.get(OPTION_DIR).map(str::to_string),
        member,
        parallel,
    })
}

fn missing_option(option: &str) -> Outcome {
    Outcome::UserError(format!("Missing mandatory option \"{option}\""))
}

#[async_trait]
impl CommandHandler for ExportDataCommand {
    fn name(&self) -> &'static str {
        EXPORT_DATA_ACTION
    }

    async fn execute(&self, args: ParsedArgs) -> Outcome {
        match request_from_args(&args) {
            Ok(request) => self.export_data(&request).await,
            Err(outcome) => outcome,
        }
    }
}
