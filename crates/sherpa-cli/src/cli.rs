use std::path::PathBuf;

use clap::Parser;

/// Sherpa — terminal chat with a remote crypto-assistant agent.
#[derive(Parser, Debug)]
#[command(name = "sherpa", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Agent server base URL override.
    #[arg(long)]
    pub base_url: Option<String>,

    /// Agent name override (name addressing).
    #[arg(long)]
    pub agent: Option<String>,

    /// Identity file path override.
    #[arg(long)]
    pub identity: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}
