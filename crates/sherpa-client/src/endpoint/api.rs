//! AgentClient trait implementation for EndpointClient.

use async_trait::async_trait;
use tracing::debug;

use crate::{AgentClient, AgentError, OutboundMessage, Reply};

use super::client::EndpointClient;

#[async_trait]
impl AgentClient for EndpointClient {
    async fn send_message(&self, message: &OutboundMessage) -> Result<Vec<Reply>, AgentError> {
        let url = self.message_url();
        let body = self.build_request_body(message);

        debug!(%url, "agent request");

        let response = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| AgentError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let text = text.chars().take(200).collect::<String>();
            return Err(AgentError::Endpoint(format!("HTTP {status}: {text}")));
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| AgentError::Format(e.to_string()))?;

        self.parse_replies(json)
    }
}
