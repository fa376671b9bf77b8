// Regionsnap - Region snapshot export for cluster members
// Copyright (c) 2025 Regionsnap Contributors
// Licensed under the MIT License

//! # Regionsnap - Region snapshot export
//!
//! Regionsnap asks a single member of a distributed cache cluster to export the
//! contents of a region to a snapshot file on that member's filesystem.
//!
//! ## Overview
//!
//! An export request names a region, a target member and either a single file
//! or an output directory. The command:
//! - **Authorizes** the caller for read access to the region
//! - **Resolves** the member by name or id
//! - **Validates** the output location
//! - **Dispatches** the export function to the member
//! - **Reduces** the member's reply to one [`domain::Outcome`]
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - The export-data command and its pipeline
//! - [`adapters`] - Member directory, remote execution and authorization
//! - [`domain`] - Core domain types
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use regionsnap::adapters::build_export_dependencies;
//! use regionsnap::config::load_config;
//! use regionsnap::core::export::ExportDataCommand;
//! use regionsnap::domain::{ExportRequest, MemberRef, RegionName};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config("regionsnap.toml")?;
//!     let command = ExportDataCommand::new(build_export_dependencies(&config)?);
//!
//!     let request = ExportRequest::new(RegionName::new("orders")?, MemberRef::new("server1")?)
//!         .with_dir("/snap");
//!     let outcome = command.export_data(&request).await;
//!
//!     println!("{outcome}");
//!     std::process::exit(outcome.exit_code());
//! }
//! ```
//!
//! ## Error Handling
//!
//! Library plumbing returns [`domain::SnapshotError`]. The command itself never
//! fails with an error; every failure becomes a user or system
//! [`domain::Outcome`].

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
