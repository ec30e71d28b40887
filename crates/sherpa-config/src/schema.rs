//! Configuration schema types for sherpa.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with defaults matching the stock agent setup.

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Greeting seeded into every fresh chat session.
pub const DEFAULT_GREETING: &str =
    "Hello! I'm your crypto assistant. How can I help you today?";

// =============================================================================
// Agent endpoint
// =============================================================================

/// How the remote agent endpoint is addressed and reached.
///
/// The wire contract moved around during development, so everything that
/// varied between server builds lives here instead of in code: the base URL,
/// whether the agent is addressed by name or by UUID, and the timeouts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Base URL of the agent server, scheme included.
    pub base_url: String,
    /// Path addressing style: "name" (`/{name}/message`) or
    /// "id" (`/api/agents/{uuid}/message`).
    pub addressing: String,
    /// Agent name used when addressing = "name".
    pub name: String,
    /// Agent UUID used when addressing = "id".
    pub id: String,
    /// TCP connect timeout in seconds (valid range: 1-300).
    pub connect_timeout_secs: u64,
    /// Whole-request timeout in seconds (valid range: 1-600).
    pub request_timeout_secs: u64,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3001".into(),
            addressing: "name".into(),
            name: "CryptoSherpa".into(),
            id: String::new(),
            connect_timeout_secs: 10,
            request_timeout_secs: 120,
        }
    }
}

// =============================================================================
// Chat
// =============================================================================

/// Per-session chat settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Assistant greeting that seeds a new transcript.
    pub greeting: String,
    /// Display name sent with every outbound message.
    pub display_name: String,
    /// Optional room id forwarded in the request body. Empty means none.
    pub room: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            greeting: DEFAULT_GREETING.into(),
            display_name: "User".into(),
            room: String::new(),
        }
    }
}

// =============================================================================
// Logging
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
        }
    }
}

// =============================================================================
// Root
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SherpaConfig {
    pub agent: AgentConfig,
    pub chat: ChatConfig,
    pub logging: LoggingConfig,
}
