//! Strategies for producing assistant replies.
//!
//! A [`Responder`] turns one prompt into one [`Reply`]. The session never sees
//! an error from a responder; failures are folded into `Reply` variants and
//! rendered as fixed apology text.

pub mod simulated;
pub mod webhook;

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::core::constants::{CONNECTION_FAILURE_REPLY, MALFORMED_REPLY};

pub use simulated::SimulatedResponder;
pub use webhook::WebhookResponder;

/// What a responder is asked to answer.
#[derive(Debug, Clone, Copy)]
pub struct ReplyRequest<'a> {
    pub prompt: &'a str,
    /// Display names of the sources enabled when the prompt was submitted.
    pub enabled_sources: &'a [String],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Success(String),
    /// A successful answer without usable reply text.
    Malformed,
    /// Unreachable endpoint, failure status, or an unreadable body. The reason
    /// is for logs only.
    TransportError(String),
}

impl Reply {
    /// Text appended to the transcript for this reply.
    pub fn into_content(self) -> String {
        match self {
            Reply::Success(text) => text,
            Reply::Malformed => MALFORMED_REPLY.to_string(),
            Reply::TransportError(_) => CONNECTION_FAILURE_REPLY.to_string(),
        }
    }
}

#[async_trait]
pub trait Responder: Send + Sync {
    fn kind(&self) -> ResponderKind;

    async fn respond(&self, request: ReplyRequest<'_>) -> Reply;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponderKind {
    Webhook,
    Simulated,
}

impl ResponderKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ResponderKind::Webhook => "webhook",
            ResponderKind::Simulated => "simulated",
        }
    }
}

impl fmt::Display for ResponderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResponderKind {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "webhook" | "remote" => Ok(ResponderKind::Webhook),
            "simulated" | "local" => Ok(ResponderKind::Simulated),
            other => Err(format!(
                "unknown responder '{other}' (expected 'webhook' or 'simulated')"
            )),
        }
    }
}

/// Fully resolved responder choice, ready to be built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponderSettings {
    pub kind: ResponderKind,
    pub endpoint: Option<String>,
    pub simulated_delay: Duration,
}

/// Errors raised while constructing a responder at startup.
#[derive(Debug)]
pub enum ResponderSetupError {
    /// Webhook mode was selected but no URL is configured.
    MissingEndpoint,
    /// The configured URL is not an absolute http(s) URL.
    InvalidEndpoint { endpoint: String, reason: String },
    /// The HTTP client could not be created.
    Client(reqwest::Error),
}

impl ResponderSetupError {
    pub fn quick_fixes(&self) -> Vec<String> {
        match self {
            ResponderSetupError::MissingEndpoint => vec![
                "insight-scout set endpoint https://example.com/webhook".to_string(),
                format!(
                    "export {}=https://example.com/webhook",
                    crate::core::constants::ENDPOINT_ENV_VAR
                ),
                "insight-scout --responder simulated".to_string(),
            ],
            ResponderSetupError::InvalidEndpoint { .. } => {
                vec!["insight-scout set endpoint https://example.com/webhook".to_string()]
            }
            ResponderSetupError::Client(_) => Vec::new(),
        }
    }
}

impl fmt::Display for ResponderSetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponderSetupError::MissingEndpoint => {
                write!(f, "No webhook endpoint configured for the webhook responder")
            }
            ResponderSetupError::InvalidEndpoint { endpoint, reason } => {
                write!(f, "Invalid webhook endpoint '{endpoint}': {reason}")
            }
            ResponderSetupError::Client(err) => {
                write!(f, "Failed to build HTTP client: {err}")
            }
        }
    }
}

impl std::error::Error for ResponderSetupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ResponderSetupError::Client(err) => Some(err),
            _ => None,
        }
    }
}

pub fn build_responder(
    settings: &ResponderSettings,
) -> Result<Arc<dyn Responder>, ResponderSetupError> {
    match settings.kind {
        ResponderKind::Webhook => {
            let endpoint = settings
                .endpoint
                .as_deref()
                .ok_or(ResponderSetupError::MissingEndpoint)?;
            Ok(Arc::new(WebhookResponder::new(endpoint)?))
        }
        ResponderKind::Simulated => Ok(Arc::new(SimulatedResponder::new(
            settings.simulated_delay,
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(kind: ResponderKind, endpoint: Option<&str>) -> ResponderSettings {
        ResponderSettings {
            kind,
            endpoint: endpoint.map(str::to_string),
            simulated_delay: Duration::ZERO,
        }
    }

    #[test]
    fn reply_content_uses_fixed_fallbacks() {
        assert_eq!(Reply::Success("hi".into()).into_content(), "hi");
        assert_eq!(Reply::Malformed.into_content(), MALFORMED_REPLY);
        assert_eq!(
            Reply::TransportError("timeout".into()).into_content(),
            CONNECTION_FAILURE_REPLY
        );
    }

    #[test]
    fn responder_kind_parses_aliases() {
        assert_eq!("Webhook".parse(), Ok(ResponderKind::Webhook));
        assert_eq!("local".parse(), Ok(ResponderKind::Simulated));
        assert!("carrier-pigeon".parse::<ResponderKind>().is_err());
    }

    #[test]
    fn webhook_without_endpoint_is_rejected() {
        let err = build_responder(&settings(ResponderKind::Webhook, None))
            .err()
            .expect("missing endpoint must fail");
        assert!(matches!(err, ResponderSetupError::MissingEndpoint));
        assert!(!err.quick_fixes().is_empty());
    }

    #[test]
    fn builds_the_requested_strategy() {
        let webhook = build_responder(&settings(
            ResponderKind::Webhook,
            Some("https://hooks.example.com/insights"),
        ))
        .expect("valid endpoint");
        assert_eq!(webhook.kind(), ResponderKind::Webhook);

        let simulated =
            build_responder(&settings(ResponderKind::Simulated, None)).expect("simulated");
        assert_eq!(simulated.kind(), ResponderKind::Simulated);
    }
}
