//! sherpa: terminal chat with a remote Eliza-style agent server.

mod cli;
mod repl;

use std::time::Duration;

use tracing_subscriber::EnvFilter;

use sherpa_client::{
    default_identity_path, AgentRoute, ChatSession, EndpointClient, EndpointConfig, Identity,
};
use sherpa_config::{AgentConfig, SherpaConfig};

#[tokio::main]
async fn main() {
    let args = cli::parse();
    if let Err(e) = run(args).await {
        eprintln!("sherpa: {e}");
        std::process::exit(1);
    }
}

async fn run(args: cli::Args) -> sherpa_common::Result<()> {
    let mut config = match &args.config {
        Some(path) => sherpa_config::load_from_path(path)?,
        None => sherpa_config::load_config()?,
    };
    apply_overrides(&mut config, &args);

    // Initialize logging: RUST_LOG wins, then --log-level, then the config.
    let level = args.log_level.as_deref().unwrap_or(&config.logging.level);
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .init();

    let identity_path = match &args.identity {
        Some(path) => path.clone(),
        None => default_identity_path()?,
    };
    let identity = Identity::load_or_generate(&identity_path, &config.chat.display_name)?;
    tracing::info!(user_id = %identity.user_id, "session identity ready");

    let endpoint = EndpointConfig::new(config.agent.base_url.clone(), agent_route(&config.agent))
        .with_connect_timeout(Duration::from_secs(config.agent.connect_timeout_secs))
        .with_request_timeout(Duration::from_secs(config.agent.request_timeout_secs));
    let client = EndpointClient::new(endpoint);

    let mut session =
        ChatSession::new(identity, config.chat.greeting.clone()).with_room(config.chat.room.clone());

    repl::run(&mut session, &client).await?;
    Ok(())
}

fn apply_overrides(config: &mut SherpaConfig, args: &cli::Args) {
    if let Some(base_url) = &args.base_url {
        config.agent.base_url = base_url.clone();
    }
    if let Some(agent) = &args.agent {
        config.agent.addressing = "name".into();
        config.agent.name = agent.clone();
    }
}

fn agent_route(agent: &AgentConfig) -> AgentRoute {
    match agent.addressing.as_str() {
        "id" => AgentRoute::Id(agent.id.clone()),
        _ => AgentRoute::Name(agent.name.clone()),
    }
}
