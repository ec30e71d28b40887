//! Async submit path for ChatSession.

use tracing::warn;

use crate::{AgentClient, AgentError, ChatMessage, OutboundMessage};

use super::manager::ChatSession;
use super::types::{BusyGuard, SubmitOutcome};

/// Fallback reply when the agent answered but the body was malformed,
/// the wrong shape, or carried no usable text.
pub const PROCESSING_FALLBACK: &str =
    "Sorry, I couldn't process your request right now. Please try again later.";

/// Fallback reply when the agent could not be reached at all.
pub const CONNECTION_FALLBACK: &str =
    "Sorry, I'm having trouble connecting to my backend. Please check that the agent server is running.";

impl ChatSession {
    /// Submit one user turn and reconcile the agent's response.
    ///
    /// The user message is appended before the round-trip starts. Blank
    /// input and overlapping submits are ignored. Exchange failures never
    /// escape: they are folded into the transcript as a fallback reply and
    /// recorded in `last_failure`.
    pub async fn submit(
        &mut self,
        client: &dyn AgentClient,
        text: impl AsRef<str>,
    ) -> SubmitOutcome {
        let text = text.as_ref().trim();
        if text.is_empty() {
            return SubmitOutcome::IgnoredEmpty;
        }
        let Some(_guard) = BusyGuard::try_acquire(&self.busy) else {
            return SubmitOutcome::IgnoredBusy;
        };

        self.last_failure = None;
        self.transcript.push(ChatMessage::user(text));

        let outbound = OutboundMessage {
            text: text.to_string(),
            user_id: self.identity.user_id.to_string(),
            user_name: self.identity.display_name.clone(),
            room_id: self.room.clone(),
        };

        match client.send_message(&outbound).await {
            Ok(replies) => {
                let usable: Vec<_> = replies
                    .into_iter()
                    .filter(|reply| !reply.text.is_empty())
                    .collect();
                if usable.is_empty() {
                    warn!("agent response carried no usable replies");
                    self.last_failure = Some("agent response carried no usable replies".into());
                    self.transcript
                        .push(ChatMessage::assistant(PROCESSING_FALLBACK));
                    return SubmitOutcome::Fallback;
                }

                let count = usable.len();
                for reply in usable {
                    self.transcript.push(ChatMessage::assistant(reply.text));
                }
                SubmitOutcome::Delivered { replies: count }
            }
            Err(e) => {
                warn!("agent request failed: {e}");
                let fallback = match e {
                    AgentError::Format(_) => PROCESSING_FALLBACK,
                    _ => CONNECTION_FALLBACK,
                };
                self.last_failure = Some(e.to_string());
                self.transcript.push(ChatMessage::assistant(fallback));
                SubmitOutcome::Fallback
            }
        }
    }
}
