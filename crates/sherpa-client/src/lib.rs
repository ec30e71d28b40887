//! Chat client for Eliza-style agent servers.
//!
//! Provides the conversational core of the sherpa assistant:
//! - Session management with an append-only transcript and fallback replies
//! - An HTTP endpoint client with configurable addressing and reply parsing
//! - A persisted session identity correlating the user with a remote room

pub mod endpoint;
pub mod identity;
pub mod session;

use async_trait::async_trait;

pub use endpoint::{AgentRoute, EndpointClient, EndpointConfig};
pub use identity::{default_identity_path, Identity};
pub use session::{ChatSession, SubmitOutcome};

/// Transport seam between the session core and the remote agent service.
///
/// One call is one user turn: the message goes out, and the agent's replies
/// come back as an ordered list. Implementations do not retry.
#[async_trait]
pub trait AgentClient: Send + Sync {
    async fn send_message(&self, message: &OutboundMessage) -> Result<Vec<Reply>, AgentError>;
}

/// One entry in a session transcript.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            text: text.into(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::Assistant,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Assistant,
}

/// A user turn as sent to the agent endpoint.
#[derive(Debug, Clone)]
pub struct OutboundMessage {
    pub text: String,
    pub user_id: String,
    pub user_name: String,
    pub room_id: Option<String>,
}

/// One reply object from the agent. Unknown fields are ignored; a missing
/// `text` deserializes as empty and is filtered out by the session.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct Reply {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AgentError {
    #[error("endpoint error: {0}")]
    Endpoint(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("malformed response: {0}")]
    Format(String),
}
