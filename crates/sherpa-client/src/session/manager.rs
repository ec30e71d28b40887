//! ChatSession struct and transcript management.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::identity::Identity;
use crate::ChatMessage;

/// A conversation with the agent: a greeting-seeded transcript, the identity
/// attached to outbound messages, a busy flag, and the last recorded failure.
pub struct ChatSession {
    /// Ordered transcript, oldest first. Append-only between resets.
    pub(super) transcript: Vec<ChatMessage>,
    /// Assistant greeting that seeds the transcript.
    pub(super) greeting: String,
    /// Identity sent with every outbound message.
    pub(super) identity: Identity,
    /// Optional room id forwarded to the endpoint.
    pub(super) room: Option<String>,
    /// Whether a request is currently outstanding.
    pub(super) busy: AtomicBool,
    /// Most recent exchange failure, for observability only.
    pub(super) last_failure: Option<String>,
}

impl ChatSession {
    pub fn new(identity: Identity, greeting: impl Into<String>) -> Self {
        let greeting = greeting.into();
        Self {
            transcript: vec![ChatMessage::assistant(greeting.clone())],
            greeting,
            identity,
            room: None,
            busy: AtomicBool::new(false),
            last_failure: None,
        }
    }

    /// Forward a room id with every message. An empty id means none.
    pub fn with_room(mut self, room: impl Into<String>) -> Self {
        let room = room.into();
        self.room = (!room.is_empty()).then_some(room);
        self
    }

    /// Full transcript, oldest first.
    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    /// Whether a submit is currently in flight.
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Failure recorded by the last submit, if it fell back.
    pub fn last_failure(&self) -> Option<&str> {
        self.last_failure.as_deref()
    }

    /// Number of messages in the transcript.
    pub fn message_count(&self) -> usize {
        self.transcript.len()
    }

    /// Drop the conversation and start over from the seed greeting.
    /// The session identity is untouched.
    pub fn reset(&mut self) {
        self.transcript.clear();
        self.transcript
            .push(ChatMessage::assistant(self.greeting.clone()));
        self.last_failure = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Sender;

    fn session() -> ChatSession {
        ChatSession::new(Identity::generate("User"), "Welcome!")
    }

    #[test]
    fn new_session_is_seeded_with_greeting() {
        let session = session();
        assert_eq!(session.message_count(), 1);
        assert_eq!(session.transcript()[0].sender, Sender::Assistant);
        assert_eq!(session.transcript()[0].text, "Welcome!");
        assert!(!session.is_busy());
        assert!(session.last_failure().is_none());
    }

    #[test]
    fn reset_returns_to_seed_greeting() {
        let mut session = session();
        session.transcript.push(ChatMessage::user("hello"));
        session.transcript.push(ChatMessage::assistant("hi"));
        session.last_failure = Some("boom".into());

        session.reset();

        assert_eq!(session.message_count(), 1);
        assert_eq!(session.transcript()[0].text, "Welcome!");
        assert!(session.last_failure().is_none());
    }

    #[test]
    fn empty_room_means_none() {
        let session = session().with_room("");
        assert!(session.room.is_none());

        let session = ChatSession::new(Identity::generate("User"), "hi").with_room("room-7");
        assert_eq!(session.room.as_deref(), Some("room-7"));
    }
}
