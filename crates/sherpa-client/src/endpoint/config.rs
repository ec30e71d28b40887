//! Agent endpoint configuration.

use std::time::Duration;

/// How the target agent is addressed on the URL path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AgentRoute {
    /// `/{name}/message` — agent addressed by character name.
    Name(String),
    /// `/api/agents/{uuid}/message` — agent addressed by UUID.
    Id(String),
}

impl AgentRoute {
    /// URL path of the message endpoint, without the base URL.
    pub fn message_path(&self) -> String {
        match self {
            AgentRoute::Name(name) => format!("/{name}/message"),
            AgentRoute::Id(id) => format!("/api/agents/{id}/message"),
        }
    }
}

/// Agent endpoint client configuration.
#[derive(Debug, Clone)]
pub struct EndpointConfig {
    pub base_url: String,
    pub route: AgentRoute,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl EndpointConfig {
    pub fn new(base_url: impl Into<String>, route: AgentRoute) -> Self {
        Self {
            base_url: base_url.into(),
            route,
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(120),
        }
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_route_path() {
        let route = AgentRoute::Name("CryptoSherpa".into());
        assert_eq!(route.message_path(), "/CryptoSherpa/message");
    }

    #[test]
    fn id_route_path() {
        let route = AgentRoute::Id("b850bc30-45f8-0041-a00a-83df46d8555d".into());
        assert_eq!(
            route.message_path(),
            "/api/agents/b850bc30-45f8-0041-a00a-83df46d8555d/message"
        );
    }

    #[test]
    fn config_defaults_and_builders() {
        let config = EndpointConfig::new("http://localhost:3001", AgentRoute::Name("a".into()))
            .with_connect_timeout(Duration::from_secs(5))
            .with_request_timeout(Duration::from_secs(30));
        assert_eq!(config.base_url, "http://localhost:3001");
        assert_eq!(config.connect_timeout, Duration::from_secs(5));
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }
}
