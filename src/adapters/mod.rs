//! External system integrations for regionsnap.
//!
//! - [`cluster`] - member lookup and remote function execution
//! - [`security`] - authorization checks
//!
//! # Design Pattern
//!
//! Each collaborator sits behind a trait ([`cluster::NodeDirectory`],
//! [`cluster::FunctionExecutor`], [`security::SecurityService`]) and is handed
//! to the command explicitly, so tests can substitute in-memory fakes:
//!
//! ```rust,no_run
//! use regionsnap::adapters::build_export_dependencies;
//! use regionsnap::config::SnapshotConfig;
//! use regionsnap::core::export::ExportDataCommand;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = SnapshotConfig::default();
//! let command = ExportDataCommand::new(build_export_dependencies(&config)?);
//! # Ok(())
//! # }
//! ```

pub mod cluster;
pub mod factory;
pub mod security;

pub use factory::build_export_dependencies;
