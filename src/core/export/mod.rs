//! Region export through a single cluster member
//!
//! - [`validator`] - output-location rules
//! - [`resolver`] - member lookup
//! - [`invoker`] - path computation and remote dispatch
//! - [`reducer`] - raw remote outcome to [`Outcome`](crate::domain::Outcome)
//! - [`command`] - the export-data command tying them together
//! - [`handler`] - the command handler capability

pub mod command;
pub mod handler;
pub mod invoker;
pub mod reducer;
pub mod resolver;
pub mod validator;

pub use command::{request_from_args, ExportDataCommand, ExportDependencies};
pub use handler::{CommandHandler, ParsedArgs};
pub use invoker::RemoteExportInvoker;
pub use reducer::reduce;
pub use resolver::TargetResolver;
pub use validator::{validate_path, PathError};

/// Extension a single snapshot file must have
pub const DATA_FILE_EXTENSION: &str = ".gfd";

/// Extension of the per-region file generated inside an output directory
pub const SNAPSHOT_FILE_EXTENSION: &str = ".gfd";

/// Id of the export function on cluster members
pub const EXPORT_DATA_FUNCTION_ID: &str = "export-data";

/// Action name used in fixed failure messages
pub const EXPORT_DATA_ACTION: &str = "export data";

/// Option names understood by [`ExportDataCommand`] as a [`CommandHandler`]
pub const OPTION_REGION: &str = "region";
/// Single snapshot file option
pub const OPTION_FILE: &str = "file";
/// Output directory option
pub const OPTION_DIR: &str = "dir";
/// Target member option
pub const OPTION_MEMBER: &str = "member";
/// Parallel export flag
pub const OPTION_PARALLEL: &str = "parallel";
