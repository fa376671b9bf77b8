//! Remote export dispatch
//!
//! Computes the path the member should write to and runs the export function
//! on that one member. There is no fan-out and no retry.

use super::{EXPORT_DATA_FUNCTION_ID, SNAPSHOT_FILE_EXTENSION};
use crate::adapters::cluster::{FunctionExecutor, RawOutcome};
use crate::domain::{ExportRequest, Member, RegionName};
use std::sync::Arc;

/// Sends a validated export request to a resolved member
#[derive(Clone)]
pub struct RemoteExportInvoker {
    executor: Arc<dyn FunctionExecutor>,
}

impl RemoteExportInvoker {
    /// Create an invoker over a function executor
    pub fn new(executor: Arc<dyn FunctionExecutor>) -> Self {
        Self { executor }
    }

    /// Run the export function on `target` and return whatever it produced
    pub async fn invoke(&self, request: &ExportRequest, target: &Member) -> RawOutcome {
        let arguments = export_arguments(request);
        crate::log_dispatch!(target, EXPORT_DATA_FUNCTION_ID, &arguments);
        self.executor
            .execute(target, EXPORT_DATA_FUNCTION_ID, &arguments)
            .await
    }
}

/// Path the member writes to
///
/// With a directory this is the generated per-region file inside it, otherwise
/// the file path exactly as given.
pub fn effective_path(request: &ExportRequest) -> String {
    match (&request.dir_path, &request.file_path) {
        (Some(dir), _) => default_file_name(dir, &request.region),
        (None, Some(file)) => file.clone(),
        (None, None) => String::new(),
    }
}

/// Snapshot file name for `region` inside `dir`
///
/// ```
/// use regionsnap::core::export::invoker::default_file_name;
/// use regionsnap::domain::RegionName;
///
/// let region = RegionName::new("/orders").unwrap();
/// assert_eq!(default_file_name("/snap/", &region), "/snap/orders.gfd");
/// ```
pub fn default_file_name(dir: &str, region: &RegionName) -> String {
    format!(
        "{}/{}{}",
        dir.trim_end_matches('/'),
        region.file_stem(),
        SNAPSHOT_FILE_EXTENSION
    )
}

/// The three stringified arguments of the export function:
/// region, path, parallel flag
pub fn export_arguments(request: &ExportRequest) -> Vec<String> {
    vec![
        request.region.as_str().to_string(),
        effective_path(request),
        request.parallel.to_string(),
    ]
}
