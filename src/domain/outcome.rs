//! Command outcome
//!
//! The single value every command invocation produces. Presentation (printing,
//! exit codes) is left to the CLI layer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Exit code for a successful command
pub const EXIT_SUCCESS: i32 = 0;

/// Exit code for caller-correctable failures
pub const EXIT_USER_ERROR: i32 = 2;

/// Exit code for runtime or environment failures
pub const EXIT_SYSTEM_ERROR: i32 = 5;

/// Normalized result of a command invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "message", rename_all = "snake_case")]
pub enum Outcome {
    /// The command completed; carries the message reported by the cluster
    Success(String),

    /// Bad or missing options, unresolved member, or missing permission
    UserError(String),

    /// Cluster-side failure or unreachable member
    SystemError(String),
}

impl Outcome {
    /// Creates a user error outcome
    pub fn user_error(message: impl Into<String>) -> Self {
        Outcome::UserError(message.into())
    }

    /// Creates a system error outcome
    pub fn system_error(message: impl Into<String>) -> Self {
        Outcome::SystemError(message.into())
    }

    /// Returns the message carried by the outcome
    pub fn message(&self) -> &str {
        match self {
            Outcome::Success(m) | Outcome::UserError(m) | Outcome::SystemError(m) => m,
        }
    }

    /// Returns true for [`Outcome::Success`]
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// Process exit code for this outcome
    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::Success(_) => EXIT_SUCCESS,
            Outcome::UserError(_) => EXIT_USER_ERROR,
            Outcome::SystemError(_) => EXIT_SYSTEM_ERROR,
        }
    }

    /// Short label used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            Outcome::Success(_) => "success",
            Outcome::UserError(_) => "user_error",
            Outcome::SystemError(_) => "system_error",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(Outcome::Success("ok".to_string()).exit_code(), 0);
        assert_eq!(Outcome::user_error("bad").exit_code(), 2);
        assert_eq!(Outcome::system_error("down").exit_code(), 5);
    }

    #[test]
    fn test_message_and_kind() {
        let outcome = Outcome::system_error("Cache is closed");
        assert_eq!(outcome.message(), "Cache is closed");
        assert_eq!(outcome.kind(), "system_error");
        assert!(!outcome.is_success());
        assert_eq!(outcome.to_string(), "Cache is closed");
    }

    #[test]
    fn test_outcome_serializes_tagged() {
        let json = serde_json::to_value(Outcome::Success("done".to_string())).unwrap();
        assert_eq!(json["status"], "success");
        assert_eq!(json["message"], "done");
    }
}
