//! Output-location validation for export-data
//!
//! Rules are checked in order and the first violation wins:
//!
//! 1. one of `file` / `dir` must be given
//! 2. `file` and `dir` are mutually exclusive
//! 3. parallel export needs `dir`
//! 4. in single-file mode the file must carry [`DATA_FILE_EXTENSION`]
//!
//! The extension is not checked when a directory is given, because the file
//! name inside it is generated.

use super::DATA_FILE_EXTENSION;
use crate::domain::Outcome;
use thiserror::Error;

/// Why a combination of output options was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// Neither `file` nor `dir` was given
    #[error("Must specify a location to save snapshot")]
    MissingLocation,

    /// Both `file` and `dir` were given
    #[error("Options \"file\" and \"dir\" cannot be specified at the same time")]
    FileAndDir,

    /// Parallel export was requested without `dir`
    #[error("Must specify a directory to save snapshot files")]
    ParallelRequiresDir,

    /// The single snapshot file has the wrong extension
    #[error("Invalid file type, the file extension must be \"{required}\"")]
    InvalidExtension {
        /// The extension the file must end with
        required: &'static str,
    },
}

impl From<PathError> for Outcome {
    fn from(err: PathError) -> Self {
        Outcome::UserError(err.to_string())
    }
}

/// Validate the output-location options of an export
///
/// # Errors
///
/// Returns the first violated rule.
///
/// # Examples
///
/// ```
/// use regionsnap::core::export::validator::{validate_path, PathError};
///
/// assert!(validate_path(Some("/tmp/orders.gfd"), None, false).is_ok());
/// assert!(validate_path(None, Some("/tmp/snap"), true).is_ok());
/// assert_eq!(
///     validate_path(Some("/tmp/orders.gfd"), None, true),
///     Err(PathError::ParallelRequiresDir)
/// );
/// ```
pub fn validate_path(
    file_path: Option<&str>,
    dir_path: Option<&str>,
    parallel: bool,
) -> Result<(), PathError> {
    match (file_path, dir_path) {
        (None, None) => Err(PathError::MissingLocation),
        (Some(_), Some(_)) => Err(PathError::FileAndDir),
        (_, None) if parallel => Err(PathError::ParallelRequiresDir),
        (Some(file), None) if !file.ends_with(DATA_FILE_EXTENSION) => {
            Err(PathError::InvalidExtension {
                required: DATA_FILE_EXTENSION,
            })
        }
        _ => Ok(()),
    }
}
