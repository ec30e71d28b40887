//! Endpoint client struct, request building, and reply parsing.

use crate::{AgentError, OutboundMessage, Reply};

use super::config::EndpointConfig;

/// Agent endpoint client.
pub struct EndpointClient {
    pub(crate) config: EndpointConfig,
    pub(crate) http: reqwest::Client,
}

impl EndpointClient {
    pub fn new(config: EndpointConfig) -> Self {
        Self {
            http: reqwest::Client::builder()
                .connect_timeout(config.connect_timeout)
                .timeout(config.request_timeout)
                .build()
                .expect("failed to build HTTP client"),
            config,
        }
    }

    /// Full URL of the message endpoint.
    pub(crate) fn message_url(&self) -> String {
        format!(
            "{}{}",
            self.config.base_url.trim_end_matches('/'),
            self.config.route.message_path()
        )
    }

    /// Build the JSON request body for one user turn.
    pub(crate) fn build_request_body(&self, message: &OutboundMessage) -> serde_json::Value {
        let mut body = serde_json::json!({
            "text": message.text,
            "userId": message.user_id,
            "userName": message.user_name,
        });
        if let Some(ref room) = message.room_id {
            body["roomId"] = serde_json::json!(room);
        }
        body
    }

    /// Normalize a response body into the agent's ordered replies.
    ///
    /// Accepts both observed shapes: an array of reply objects, or a single
    /// reply object. Anything else is a format error.
    pub(crate) fn parse_replies(&self, json: serde_json::Value) -> Result<Vec<Reply>, AgentError> {
        match json {
            serde_json::Value::Array(items) => items
                .into_iter()
                .map(|item| {
                    serde_json::from_value::<Reply>(item)
                        .map_err(|e| AgentError::Format(format!("bad reply object: {e}")))
                })
                .collect(),
            json @ serde_json::Value::Object(_) => {
                let reply = serde_json::from_value::<Reply>(json)
                    .map_err(|e| AgentError::Format(format!("bad reply object: {e}")))?;
                Ok(vec![reply])
            }
            _ => Err(AgentError::Format(
                "expected an array of replies or a single reply object".into(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::config::AgentRoute;
    use super::*;

    fn client(base_url: &str) -> EndpointClient {
        EndpointClient::new(EndpointConfig::new(
            base_url,
            AgentRoute::Name("CryptoSherpa".into()),
        ))
    }

    fn outbound() -> OutboundMessage {
        OutboundMessage {
            text: "what is a wallet?".into(),
            user_id: "user-1".into(),
            user_name: "User".into(),
            room_id: None,
        }
    }

    #[test]
    fn message_url_joins_base_and_route() {
        assert_eq!(
            client("http://localhost:3001").message_url(),
            "http://localhost:3001/CryptoSherpa/message"
        );
    }

    #[test]
    fn message_url_tolerates_trailing_slash() {
        assert_eq!(
            client("http://localhost:3001/").message_url(),
            "http://localhost:3001/CryptoSherpa/message"
        );
    }

    #[test]
    fn request_body_without_room() {
        let body = client("http://x").build_request_body(&outbound());
        assert_eq!(body["text"], "what is a wallet?");
        assert_eq!(body["userId"], "user-1");
        assert_eq!(body["userName"], "User");
        assert!(body.get("roomId").is_none());
    }

    #[test]
    fn request_body_with_room() {
        let mut message = outbound();
        message.room_id = Some("room-7".into());
        let body = client("http://x").build_request_body(&message);
        assert_eq!(body["roomId"], "room-7");
    }

    #[test]
    fn parse_replies_array_preserves_order() {
        let json = serde_json::json!([{"text": "A"}, {"text": "B", "action": "NONE"}]);
        let replies = client("http://x").parse_replies(json).unwrap();
        let texts: Vec<_> = replies.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(texts, ["A", "B"]);
    }

    #[test]
    fn parse_replies_single_object() {
        let json = serde_json::json!({"text": "hello", "user": "agent"});
        let replies = client("http://x").parse_replies(json).unwrap();
        assert_eq!(replies.len(), 1);
        assert_eq!(replies[0].text, "hello");
    }

    #[test]
    fn parse_replies_object_without_text_is_empty_reply() {
        let json = serde_json::json!({"action": "IGNORE"});
        let replies = client("http://x").parse_replies(json).unwrap();
        assert_eq!(replies.len(), 1);
        assert!(replies[0].text.is_empty());
    }

    #[test]
    fn parse_replies_rejects_scalar_body() {
        let err = client("http://x")
            .parse_replies(serde_json::json!("just a string"))
            .unwrap_err();
        assert!(matches!(err, AgentError::Format(_)));
    }

    #[test]
    fn parse_replies_rejects_non_object_array_item() {
        let err = client("http://x")
            .parse_replies(serde_json::json!([{"text": "A"}, 42]))
            .unwrap_err();
        assert!(matches!(err, AgentError::Format(_)));
    }
}
