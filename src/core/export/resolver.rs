//! Member resolution

use crate::adapters::cluster::NodeDirectory;
use crate::domain::{Member, MemberRef};
use std::sync::Arc;

/// Maps a caller-supplied member name or id to a live member
///
/// The match policy is the directory's; this type only adds logging.
#[derive(Clone)]
pub struct TargetResolver {
    directory: Arc<dyn NodeDirectory>,
}

impl TargetResolver {
    /// Create a resolver over a node directory
    pub fn new(directory: Arc<dyn NodeDirectory>) -> Self {
        Self { directory }
    }

    /// Resolve a member reference, `None` when no live member matches
    pub async fn resolve(&self, member: &MemberRef) -> Option<Member> {
        let resolved = self.directory.find_by_name_or_id(member.as_str()).await;
        match &resolved {
            Some(target) => tracing::debug!(member = %member, target = %target, "Member resolved"),
            None => tracing::info!(member = %member, "Member not found"),
        }
        resolved
    }
}
