//! Domain identifier types with validation
//!
//! Newtype wrappers for the two identifiers a caller hands to the export
//! command: the region to export and the member that should write it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Region name newtype wrapper
///
/// Regions may be addressed either by bare name (`orders`) or by region path
/// (`/orders`). The value is kept exactly as the caller supplied it, since that
/// is what the remote member expects; [`RegionName::file_stem`] gives the form
/// used to build default snapshot file names.
///
/// # Examples
///
/// ```
/// use regionsnap::domain::ids::RegionName;
///
/// let region = RegionName::new("/orders").unwrap();
/// assert_eq!(region.as_str(), "/orders");
/// assert_eq!(region.file_stem(), "orders");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RegionName(String);

impl RegionName {
    /// Creates a new RegionName
    ///
    /// # Returns
    ///
    /// Returns `Err` when the name is empty, whitespace only, or only separators
    pub fn new(name: impl Into<String>) -> Result<Self, String> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err("Region name cannot be empty".to_string());
        }
        if name.trim_start_matches('/').is_empty() {
            return Err(format!("Invalid region name: {name}"));
        }
        Ok(Self(name))
    }

    /// Returns the region name as supplied
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the name without the leading region path separator
    pub fn file_stem(&self) -> &str {
        self.0.trim_start_matches('/')
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for RegionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RegionName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for RegionName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Reference to a cluster member, by member id or member name
///
/// Whether the value is an id or a name is decided by the node directory
/// during resolution; this type only guarantees it is not blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MemberRef(String);

impl MemberRef {
    /// Creates a new MemberRef
    pub fn new(name_or_id: impl Into<String>) -> Result<Self, String> {
        let name_or_id = name_or_id.into();
        if name_or_id.trim().is_empty() {
            return Err("Member name or id cannot be empty".to_string());
        }
        Ok(Self(name_or_id))
    }

    /// Returns the member reference as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MemberRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MemberRef {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for MemberRef {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_name_valid() {
        let region = RegionName::new("orders").unwrap();
        assert_eq!(region.as_str(), "orders");
        assert_eq!(region.file_stem(), "orders");
    }

    #[test]
    fn test_region_name_with_path_separator() {
        let region = RegionName::new("/orders").unwrap();
        assert_eq!(region.as_str(), "/orders");
        assert_eq!(region.file_stem(), "orders");
        assert_eq!(region.to_string(), "/orders");
    }

    #[test]
    fn test_region_name_empty() {
        assert!(RegionName::new("").is_err());
        assert!(RegionName::new("   ").is_err());
        assert!(RegionName::new("/").is_err());
    }

    #[test]
    fn test_region_name_from_str() {
        let region = RegionName::from_str("customers").unwrap();
        assert_eq!(region.as_ref(), "customers");
    }

    #[test]
    fn test_member_ref_valid() {
        let member = MemberRef::new("server1").unwrap();
        assert_eq!(member.as_str(), "server1");
        assert_eq!(member.to_string(), "server1");
    }

    #[test]
    fn test_member_ref_empty() {
        assert!(MemberRef::new("").is_err());
        assert!(MemberRef::from_str("  ").is_err());
    }
}
