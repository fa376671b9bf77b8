//! Result type alias for regionsnap

use super::errors::SnapshotError;

/// Result type alias for regionsnap operations
///
/// # Examples
///
/// ```
/// use regionsnap::domain::result::Result;
/// use regionsnap::domain::errors::SnapshotError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(SnapshotError::Validation("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, SnapshotError>;
