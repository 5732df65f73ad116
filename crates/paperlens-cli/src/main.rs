//! Paperlens CLI - command-line front door for the extraction engine.

mod cli;

use anyhow::Context;
use clap::Parser;
use cli::{Cli, Command};
use paperlens_engine::{Engine, EngineConfig};
use paperlens_gateway::{GatewayConfig, GeminiGateway};
use std::path::Path;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut gateway_config = match cli.api_key {
        Some(api_key) => GatewayConfig::new(api_key),
        None => GatewayConfig::from_env().context("no API key given")?,
    };
    if let Some(endpoint) = cli.endpoint {
        gateway_config = gateway_config.with_endpoint(endpoint);
    }

    let engine_config = if cli.aggressive {
        EngineConfig::aggressive()
    } else {
        EngineConfig::default()
    };
    let engine = Engine::new(GeminiGateway::new(gateway_config), engine_config);

    match cli.command {
        Command::Summary { text } => {
            let text = read_input(&text)?;
            let summary = engine.generate_summary(&text).await?;
            println!("{}", summary);
        }
        Command::Articles { summary } => {
            let summary = read_input(&summary)?;
            let articles = engine.extract_articles(&summary).await;
            println!("{}", serde_json::to_string_pretty(&articles)?);
        }
        Command::Novelty { text, summary } => {
            let text = read_input(&text)?;
            let summary = read_input(&summary)?;
            let score = engine.extract_novelty(&text, &summary).await;
            println!("{}", serde_json::to_string_pretty(&score)?);
        }
        Command::Mindmap { text } => {
            let text = read_input(&text)?;
            let mindmap = engine.generate_mindmap(&text).await?;
            println!("{}", mindmap);
        }
    }

    Ok(())
}

fn read_input(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}
