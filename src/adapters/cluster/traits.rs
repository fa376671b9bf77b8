//! Cluster collaborator traits
//!
//! The export command reaches the cluster only through these two traits, so
//! tests and alternative transports can plug in their own implementations.

use crate::domain::Member;
use async_trait::async_trait;
use std::fmt;

/// One entry collected from a remote function execution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FunctionResult {
    /// The function finished and reported a message
    Message(String),

    /// The function caught a failure and sent back its message
    Error(String),

    /// Anything the client does not know how to interpret
    Unrecognized,
}

/// Failure raised while executing a function on a member
///
/// These are the only two ways a dispatched call can fail without producing
/// collected results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteFailure {
    /// The member's runtime reported an operational fault (closed, shutting
    /// down, unavailable) while running the function
    RuntimeClosed {
        /// Diagnostic text reported by the member; may be empty
        message: String,
    },

    /// The member could not be reached, or left the cluster mid-call
    TargetUnreachable {
        /// The member that was addressed
        member: String,
    },
}

impl fmt::Display for RemoteFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemoteFailure::RuntimeClosed { message } => {
                write!(f, "member runtime closed: {message}")
            }
            RemoteFailure::TargetUnreachable { member } => {
                write!(f, "member {member} is unreachable")
            }
        }
    }
}

impl std::error::Error for RemoteFailure {}

/// Raw result of dispatching a function to a single member
pub type RawOutcome = std::result::Result<Vec<FunctionResult>, RemoteFailure>;

/// Lookup of live cluster members
#[async_trait]
pub trait NodeDirectory: Send + Sync {
    /// Find a live member by id or by name
    ///
    /// Returns `None` when no live member matches. The matching policy belongs
    /// to the implementation.
    async fn find_by_name_or_id(&self, name_or_id: &str) -> Option<Member>;
}

/// Executes a named function on exactly one member
#[async_trait]
pub trait FunctionExecutor: Send + Sync {
    /// Run `function_id` on `member` with the given stringified arguments and
    /// wait for the collected results
    ///
    /// A single attempt is made; implementations must not retry.
    async fn execute(
        &self,
        member: &Member,
        function_id: &str,
        arguments: &[String],
    ) -> RawOutcome;
}
