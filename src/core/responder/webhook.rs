use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Url};
use tracing::{debug, warn};

use super::{Reply, ReplyRequest, Responder, ResponderKind, ResponderSetupError};
use crate::api::parse_success_body;

/// Forwards each prompt to a webhook as a single `text/plain` POST.
///
/// There is no retry and no timeout beyond the transport defaults.
#[derive(Debug, Clone)]
pub struct WebhookResponder {
    client: Client,
    endpoint: Url,
}

impl WebhookResponder {
    pub fn new(endpoint: &str) -> Result<Self, ResponderSetupError> {
        let client = Client::builder()
            .build()
            .map_err(ResponderSetupError::Client)?;
        Self::with_client(client, endpoint)
    }

    pub fn with_client(client: Client, endpoint: &str) -> Result<Self, ResponderSetupError> {
        Ok(Self {
            client,
            endpoint: parse_endpoint(endpoint)?,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

/// Accepts absolute `http` and `https` URLs only.
pub fn parse_endpoint(endpoint: &str) -> Result<Url, ResponderSetupError> {
    let invalid = |reason: String| ResponderSetupError::InvalidEndpoint {
        endpoint: endpoint.to_string(),
        reason,
    };
    let url = Url::parse(endpoint.trim()).map_err(|err| invalid(err.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(invalid(format!("unsupported scheme '{other}'"))),
    }
}

#[async_trait]
impl Responder for WebhookResponder {
    fn kind(&self) -> ResponderKind {
        ResponderKind::Webhook
    }

    async fn respond(&self, request: ReplyRequest<'_>) -> Reply {
        debug!(endpoint = %self.endpoint, bytes = request.prompt.len(), "posting prompt to webhook");

        let response = match self
            .client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, "text/plain")
            .body(request.prompt.to_string())
            .send()
            .await
        {
            Ok(response) => response,
            Err(err) => {
                warn!(error = %err, "webhook request failed");
                return Reply::TransportError(err.to_string());
            }
        };

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "webhook returned a failure status");
            return Reply::TransportError(format!("HTTP {status}"));
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(err) => {
                warn!(error = %err, "failed to read webhook response body");
                return Reply::TransportError(err.to_string());
            }
        };

        let reply = parse_success_body(&body);
        match &reply {
            Reply::Malformed => warn!("webhook response carried no usable output field"),
            Reply::TransportError(reason) => warn!(%reason, "webhook response was not JSON"),
            Reply::Success(_) => debug!("webhook reply received"),
        }
        reply
    }
}
