//! Configuration-backed read policy

use super::SecurityService;
use crate::config::SecurityConfig;
use crate::domain::{RegionName, Result, SnapshotError};
use async_trait::async_trait;

const WILDCARD: &str = "*";

/// Grants `DATA:READ` on the regions listed in `[security] readable_regions`
///
/// Region names are compared without their leading `/`, so `orders` and
/// `/orders` refer to the same region. When the policy is disabled every read
/// is allowed.
#[derive(Debug, Clone)]
pub struct PolicySecurityService {
    enabled: bool,
    principal: String,
    readable_regions: Vec<String>,
}

impl PolicySecurityService {
    /// Create a policy from configuration
    pub fn from_config(config: &SecurityConfig) -> Self {
        Self {
            enabled: config.enabled,
            principal: config.principal.clone(),
            readable_regions: config
                .readable_regions
                .iter()
                .map(|r| r.trim_start_matches('/').to_string())
                .collect(),
        }
    }

    /// A policy that allows everything
    pub fn allow_all() -> Self {
        Self {
            enabled: false,
            principal: String::new(),
            readable_regions: Vec::new(),
        }
    }

    fn can_read(&self, region: &RegionName) -> bool {
        !self.enabled
            || self
                .readable_regions
                .iter()
                .any(|r| r == WILDCARD || r == region.file_stem())
    }
}

#[async_trait]
impl SecurityService for PolicySecurityService {
    async fn authorize_region_read(&self, region: &RegionName) -> Result<()> {
        if self.can_read(region) {
            return Ok(());
        }

        tracing::warn!(
            principal = %self.principal,
            region = %region,
            "Region read denied"
        );
        Err(SnapshotError::AccessDenied(format!(
            "{} not authorized for DATA:READ:{}",
            self.principal,
            region.file_stem()
        )))
    }
}
