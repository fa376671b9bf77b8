//! Logging and observability
//!
//! Structured logging through `tracing`:
//! - Human-readable console output on stderr
//! - Optional JSON file output with rotation
//! - `RUST_LOG` overrides the configured level
//!
//! # Example
//!
//! ```no_run
//! use regionsnap::logging::init_logging;
//! use regionsnap::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!(region = "orders", "Exporting region");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard};

/// Log a function dispatch to a member
///
/// # Example
///
/// ```no_run
/// use regionsnap::log_dispatch;
/// use regionsnap::domain::Member;
///
/// let member = Member::new("m-1", "server1", "http://10.0.0.1:7070");
/// let arguments = vec!["orders".to_string()];
/// log_dispatch!(&member, "export-data", &arguments);
/// ```
#[macro_export]
macro_rules! log_dispatch {
    ($member:expr, $function_id:expr, $arguments:expr) => {
        tracing::info!(
            target_member = %$member,
            function_id = $function_id,
            arguments = ?$arguments,
            "Dispatching function to member"
        );
    };
}

/// Log the outcome of a command invocation at a level matching its kind
///
/// # Example
///
/// ```no_run
/// use regionsnap::log_outcome;
/// use regionsnap::domain::Outcome;
///
/// let outcome = Outcome::Success("done".to_string());
/// log_outcome!(&outcome);
/// ```
#[macro_export]
macro_rules! log_outcome {
    ($outcome:expr) => {{
        let outcome: &$crate::domain::Outcome = $outcome;
        match outcome {
            $crate::domain::Outcome::Success(_) => tracing::info!(
                outcome = outcome.kind(),
                detail = %outcome.message(),
                "Command completed"
            ),
            $crate::domain::Outcome::UserError(_) => tracing::warn!(
                outcome = outcome.kind(),
                detail = %outcome.message(),
                "Command rejected"
            ),
            $crate::domain::Outcome::SystemError(_) => tracing::error!(
                outcome = outcome.kind(),
                detail = %outcome.message(),
                "Command failed"
            ),
        }
    }};
}
