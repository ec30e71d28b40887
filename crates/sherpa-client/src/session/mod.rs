//! Conversation session management.
//!
//! A `ChatSession` holds the transcript for one conversation, mediates
//! exchanges with the agent endpoint, and folds failures into the
//! transcript as fallback replies.

mod chat;
mod manager;
mod types;

pub use chat::{CONNECTION_FALLBACK, PROCESSING_FALLBACK};
pub use manager::ChatSession;
pub use types::SubmitOutcome;
