//! HTTP function executor
//!
//! Runs a function on a member by posting its arguments to the member's
//! function endpoint:
//!
//! ```text
//! POST {endpoint}/functions/{function_id}
//! {"arguments": ["orders", "/snap/orders.gfd", "false"]}
//! ```
//!
//! | Response                         | Raw outcome                          |
//! |----------------------------------|--------------------------------------|
//! | `200` + `{"results": [...]}`     | collected results                    |
//! | `503` + `{"message": "..."}`     | [`RemoteFailure::RuntimeClosed`]     |
//! | `404`, `410`, transport failure  | [`RemoteFailure::TargetUnreachable`] |
//! | any other status                 | [`RemoteFailure::RuntimeClosed`]     |

use super::traits::{FunctionExecutor, FunctionResult, RawOutcome, RemoteFailure};
use crate::config::{ClusterConfig, SecretString};
use crate::domain::{Member, Result, SnapshotError};
use async_trait::async_trait;
use reqwest::{Client, ClientBuilder, StatusCode};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Function executor speaking JSON over HTTP to member endpoints
pub struct HttpFunctionExecutor {
    client: Client,
    auth_token: Option<SecretString>,
}

#[derive(Serialize)]
struct ExecuteRequest<'a> {
    arguments: &'a [String],
}

#[derive(Deserialize)]
struct ExecuteResponse {
    #[serde(default)]
    results: Vec<WireResult>,
}

#[derive(Deserialize)]
struct WireResult {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    value: Option<serde_json::Value>,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
}

impl From<WireResult> for FunctionResult {
    fn from(wire: WireResult) -> Self {
        match (wire.kind.as_str(), wire.value) {
            ("message", Some(serde_json::Value::String(message))) => {
                FunctionResult::Message(message)
            }
            ("error", Some(serde_json::Value::String(message))) => FunctionResult::Error(message),
            ("error", None) => FunctionResult::Error(String::new()),
            _ => FunctionResult::Unrecognized,
        }
    }
}

impl HttpFunctionExecutor {
    /// Create an executor from the cluster configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: &ClusterConfig) -> Result<Self> {
        // No overall request timeout: an export may legitimately run for a long time
        let client = ClientBuilder::new()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .build()
            .map_err(|e| {
                SnapshotError::Configuration(format!("Failed to build HTTP client: {e}"))
            })?;

        Ok(Self {
            client,
            auth_token: config.auth_token.clone(),
        })
    }

    fn function_url(member: &Member, function_id: &str) -> String {
        format!(
            "{}/functions/{}",
            member.endpoint.trim_end_matches('/'),
            function_id
        )
    }

    fn unreachable(member: &Member) -> RemoteFailure {
        RemoteFailure::TargetUnreachable {
            member: member.to_string(),
        }
    }

    /// Pull the `message` field out of an error body, falling back to the raw text
    fn error_message(body: String) -> String {
        match serde_json::from_str::<ErrorBody>(&body) {
            Ok(parsed) => parsed.message,
            Err(_) => body.trim().to_string(),
        }
    }
}

#[async_trait]
impl FunctionExecutor for HttpFunctionExecutor {
    async fn execute(
        &self,
        member: &Member,
        function_id: &str,
        arguments: &[String],
    ) -> RawOutcome {
        let url = Self::function_url(member, function_id);

        let mut request = self.client.post(&url).json(&ExecuteRequest { arguments });
        if let Some(token) = &self.auth_token {
            let token: &str = token.expose_secret().as_ref();
            request = request.bearer_auth(token);
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(member = %member, url = %url, error = %e, "Member unreachable");
                return Err(Self::unreachable(member));
            }
        };

        let status = response.status();
        tracing::debug!(member = %member, status = %status, "Function response received");

        if status.is_success() {
            return match response.json::<ExecuteResponse>().await {
                Ok(body) => Ok(body.results.into_iter().map(FunctionResult::from).collect()),
                Err(e) if e.is_decode() => {
                    tracing::warn!(member = %member, error = %e, "Undecodable function results");
                    Ok(Vec::new())
                }
                Err(e) => {
                    tracing::warn!(member = %member, error = %e, "Connection lost reading results");
                    Err(Self::unreachable(member))
                }
            };
        }

        if status == StatusCode::NOT_FOUND || status == StatusCode::GONE {
            tracing::warn!(member = %member, status = %status, "Member no longer available");
            return Err(Self::unreachable(member));
        }

        let body = response.text().await.unwrap_or_default();
        let detail = Self::error_message(body);

        if status == StatusCode::SERVICE_UNAVAILABLE {
            return Err(RemoteFailure::RuntimeClosed { message: detail });
        }

        let message = if detail.is_empty() {
            format!("Member returned {status}")
        } else {
            format!("Member returned {status}: {detail}")
        };
        Err(RemoteFailure::RuntimeClosed { message })
    }
}
