//! Authorization checks
//!
//! The export command asks a [`SecurityService`] for read permission on the
//! region before contacting any member.

pub mod policy;

pub use policy::PolicySecurityService;

use crate::domain::{RegionName, Result};
use async_trait::async_trait;

/// Authorization capability injected into commands
#[async_trait]
pub trait SecurityService: Send + Sync {
    /// Check that the current principal may read `region`
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::AccessDenied`](crate::domain::SnapshotError::AccessDenied)
    /// when permission is missing. Any other error means the check itself
    /// could not be performed.
    async fn authorize_region_read(&self, region: &RegionName) -> Result<()>;
}
