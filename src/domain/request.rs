//! Export request

use super::ids::{MemberRef, RegionName};

/// One export-data invocation's arguments
///
/// Built once per invocation and never mutated. Whether exactly one of
/// `file_path` / `dir_path` is present is checked by the path validator, not
/// by construction, so that the caller gets the specific error message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRequest {
    /// Region to export
    pub region: RegionName,

    /// Single snapshot file to write (single-file mode)
    pub file_path: Option<String>,

    /// Directory to write snapshot files into
    pub dir_path: Option<String>,

    /// Member that performs the export
    pub member: MemberRef,

    /// Whether every member writes its own partition's data into `dir_path`
    pub parallel: bool,
}

impl ExportRequest {
    /// Creates a request with no output location and parallel export disabled
    pub fn new(region: RegionName, member: MemberRef) -> Self {
        Self {
            region,
            file_path: None,
            dir_path: None,
            member,
            parallel: false,
        }
    }

    /// Sets the single snapshot file path
    pub fn with_file(mut self, file_path: impl Into<String>) -> Self {
        self.file_path = Some(file_path.into());
        self
    }

    /// Sets the output directory
    pub fn with_dir(mut self, dir_path: impl Into<String>) -> Self {
        self.dir_path = Some(dir_path.into());
        self
    }

    /// Enables or disables parallel export
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_request_builder() {
        let request = ExportRequest::new(
            RegionName::new("orders").unwrap(),
            MemberRef::new("server1").unwrap(),
        )
        .with_dir("/snap")
        .parallel(true);

        assert_eq!(request.region.as_str(), "orders");
        assert_eq!(request.member.as_str(), "server1");
        assert_eq!(request.dir_path.as_deref(), Some("/snap"));
        assert!(request.file_path.is_none());
        assert!(request.parallel);
    }
}
