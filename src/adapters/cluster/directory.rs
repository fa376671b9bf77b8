//! Static node directory backed by configuration

use super::traits::NodeDirectory;
use crate::config::MemberConfig;
use crate::domain::Member;
use async_trait::async_trait;

/// Node directory over a fixed member list
///
/// Resolution tries an exact id match first, then an exact, case-sensitive
/// name match. When several members share a name the first listed wins.
#[derive(Debug, Clone, Default)]
pub struct StaticNodeDirectory {
    members: Vec<Member>,
}

impl StaticNodeDirectory {
    /// Create a directory from member handles
    pub fn new(members: Vec<Member>) -> Self {
        Self { members }
    }

    /// Create a directory from the `[[cluster.members]]` configuration
    pub fn from_config(members: &[MemberConfig]) -> Self {
        Self::new(
            members
                .iter()
                .map(|m| Member::new(&m.id, &m.name, &m.endpoint))
                .collect(),
        )
    }

    /// All known members, in configuration order
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    fn lookup(&self, name_or_id: &str) -> Option<&Member> {
        self.members
            .iter()
            .find(|m| m.id == name_or_id)
            .or_else(|| self.members.iter().find(|m| m.name == name_or_id))
    }
}

#[async_trait]
impl NodeDirectory for StaticNodeDirectory {
    async fn find_by_name_or_id(&self, name_or_id: &str) -> Option<Member> {
        let found = self.lookup(name_or_id).cloned();
        tracing::debug!(
            name_or_id = %name_or_id,
            found = found.is_some(),
            known_members = self.members.len(),
            "Directory lookup"
        );
        found
    }
}
