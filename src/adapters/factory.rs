//! Collaborator factory
//!
//! Builds the concrete collaborators for the export-data command from
//! configuration.

use crate::adapters::cluster::{HttpFunctionExecutor, StaticNodeDirectory};
use crate::adapters::security::PolicySecurityService;
use crate::config::SnapshotConfig;
use crate::core::export::ExportDependencies;
use crate::domain::Result;
use std::sync::Arc;

/// Create the export-data collaborators described by `config`
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be created.
pub fn build_export_dependencies(config: &SnapshotConfig) -> Result<ExportDependencies> {
    tracing::info!(
        members = config.cluster.members.len(),
        security_enabled = config.security.enabled,
        "Creating export collaborators"
    );

    let executor = HttpFunctionExecutor::new(&config.cluster)?;

    Ok(ExportDependencies {
        security: Arc::new(PolicySecurityService::from_config(&config.security)),
        directory: Arc::new(StaticNodeDirectory::from_config(&config.cluster.members)),
        executor: Arc::new(executor),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MemberConfig;

    #[tokio::test]
    async fn test_build_from_config() {
        let mut config = SnapshotConfig::default();
        config.cluster.members.push(MemberConfig {
            id: "m-1".to_string(),
            name: "server1".to_string(),
            endpoint: "http://10.0.0.1:7070".to_string(),
        });

        let deps = build_export_dependencies(&config).unwrap();
        let member = deps.directory.find_by_name_or_id("server1").await;
        assert_eq!(member.map(|m| m.id), Some("m-1".to_string()));
    }
}
