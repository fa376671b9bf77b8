//! Core command logic for regionsnap.
//!
//! # Modules
//!
//! - [`export`] - the export-data command and its pipeline
//!
//! # Export Workflow
//!
//! 1. **Authorize**: check read permission on the region
//! 2. **Resolve**: map the member name or id to a live member
//! 3. **Validate**: check the file/dir/parallel options
//! 4. **Dispatch**: run the export function on that member only
//! 5. **Reduce**: turn the member's answer into an [`Outcome`](crate::domain::Outcome)
//!
//! # Example
//!
//! ```rust,no_run
//! use regionsnap::adapters::build_export_dependencies;
//! use regionsnap::config::load_config;
//! use regionsnap::core::export::ExportDataCommand;
//! use regionsnap::domain::{ExportRequest, MemberRef, RegionName};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("regionsnap.toml")?;
//! let command = ExportDataCommand::new(build_export_dependencies(&config)?);
//!
//! let request = ExportRequest::new(RegionName::new("orders")?, MemberRef::new("server1")?)
//!     .with_file("/tmp/orders.gfd");
//! let outcome = command.export_data(&request).await;
//! println!("{outcome}");
//! # Ok(())
//! # }
//! ```

pub mod export;
