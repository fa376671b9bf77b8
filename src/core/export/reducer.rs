//! Reduction of a raw remote outcome into a command [`Outcome`]

use super::EXPORT_DATA_ACTION;
use crate::adapters::cluster::{FunctionResult, RawOutcome, RemoteFailure};
use crate::domain::Outcome;

/// Fixed message for a failed command that carries no diagnostic of its own
pub fn command_failure_message(action: &str) -> String {
    format!("Error occurred while executing : {action}")
}

/// Collapse a raw remote outcome into one [`Outcome`]
///
/// Only the first collected result is considered, since a single member was
/// contacted. Nothing is retried or merged.
pub fn reduce(raw: RawOutcome) -> Outcome {
    match raw {
        Ok(results) => match results.into_iter().next() {
            Some(FunctionResult::Message(message)) => Outcome::Success(message),
            Some(FunctionResult::Error(message)) if !message.is_empty() => {
                Outcome::SystemError(message)
            }
            Some(FunctionResult::Error(_)) | Some(FunctionResult::Unrecognized) | None => {
                Outcome::SystemError(command_failure_message(EXPORT_DATA_ACTION))
            }
        },
        Err(RemoteFailure::RuntimeClosed { message }) if !message.is_empty() => {
            Outcome::SystemError(message)
        }
        Err(RemoteFailure::RuntimeClosed { .. }) | Err(RemoteFailure::TargetUnreachable { .. }) => {
            Outcome::SystemError(command_failure_message(EXPORT_DATA_ACTION))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FAILURE: &str = "Error occurred while executing : export data";

    #[test]
    fn test_message_is_success() {
        let outcome = reduce(Ok(vec![FunctionResult::Message(
            "Data successfully exported from region : orders to file : /tmp/out.gfd on host : server1"
                .to_string(),
        )]));
        assert!(outcome.is_success());
        assert!(outcome.message().starts_with("Data successfully exported"));
    }

    #[test]
    fn test_only_first_result_counts() {
        let outcome = reduce(Ok(vec![
            FunctionResult::Message("first".to_string()),
            FunctionResult::Error("second".to_string()),
        ]));
        assert_eq!(outcome, Outcome::Success("first".to_string()));
    }

    #[test]
    fn test_error_result_is_system_error() {
        let outcome = reduce(Ok(vec![FunctionResult::Error(
            "Region orders not found".to_string(),
        )]));
        assert_eq!(
            outcome,
            Outcome::SystemError("Region orders not found".to_string())
        );
    }

    #[test]
    fn test_empty_error_falls_back() {
        let outcome = reduce(Ok(vec![FunctionResult::Error(String::new())]));
        assert_eq!(outcome, Outcome::SystemError(FAILURE.to_string()));
    }

    #[test]
    fn test_no_results() {
        assert_eq!(
            reduce(Ok(Vec::new())),
            Outcome::SystemError(FAILURE.to_string())
        );
    }

    #[test]
    fn test_unrecognized_result() {
        assert_eq!(
            reduce(Ok(vec![FunctionResult::Unrecognized])),
            Outcome::SystemError(FAILURE.to_string())
        );
    }

    #[test]
    fn test_runtime_closed_is_verbatim() {
        let outcome = reduce(Err(RemoteFailure::RuntimeClosed {
            message: "The cache is closed.".to_string(),
        }));
        assert_eq!(
            outcome,
            Outcome::SystemError("The cache is closed.".to_string())
        );
    }

    #[test]
    fn test_runtime_closed_without_detail() {
        let outcome = reduce(Err(RemoteFailure::RuntimeClosed {
            message: String::new(),
        }));
        assert_eq!(outcome, Outcome::SystemError(FAILURE.to_string()));
    }

    #[test]
    fn test_unreachable_uses_fixed_message() {
        let outcome = reduce(Err(RemoteFailure::TargetUnreachable {
            member: "server1".to_string(),
        }));
        assert_eq!(outcome, Outcome::SystemError(FAILURE.to_string()));
    }
}
