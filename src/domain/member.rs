//! Cluster member handle

use serde::{Deserialize, Serialize};
use std::fmt;

/// A live, addressable cluster member
///
/// Produced by a [`NodeDirectory`](crate::adapters::cluster::NodeDirectory)
/// and borrowed by the function executor for the duration of one call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Unique member id, e.g. `192.168.1.10(server1:1234)<v1>:41000`
    pub id: String,

    /// Human-friendly member name, e.g. `server1`
    pub name: String,

    /// Base URL of the member's function endpoint
    pub endpoint: String,
}

impl Member {
    /// Creates a new member handle
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        endpoint: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            endpoint: endpoint.into(),
        }
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.name.is_empty() {
            write!(f, "{}", self.id)
        } else {
            write!(f, "{} ({})", self.name, self.id)
        }
    }
}
