// ABOUTME: Server binary - authenticate the Garmin client, register tools, serve stdio
// ABOUTME: Exits non-zero when the client cannot be initialized
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Garmin Connect MCP Server Binary
//!
//! Initializes the authenticated Garmin client once, registers the tool
//! surface, and serves MCP over stdin/stdout until the client disconnects.

use anyhow::Result;
use clap::Parser;
use garmin_mcp_server::{
    config::environment::ServerConfig,
    garmin::{GarminClient, GarminConfig, TokenStore},
    logging,
    mcp::server::{McpServer, ServerResources},
    tools::ToolRegistry,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "garmin-mcp-server")]
#[command(about = "Garmin Connect MCP server - personal fitness data tools for LLMs")]
struct Args {
    /// Load environment variables from this file instead of ./.env
    #[arg(long)]
    env_file: Option<PathBuf>,

    /// Override the token directory (GARMINTOKENS)
    #[arg(long)]
    token_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(env_file) = &args.env_file {
        dotenvy::from_path(env_file)?;
    }

    let mut config = ServerConfig::from_env()?;
    if let Some(token_dir) = args.token_dir {
        config.token_dir = token_dir;
    }

    logging::init_from_env()?;

    info!("Starting Garmin Connect MCP server");
    info!("{}", config.summary());

    let store = TokenStore::with_blob(config.token_dir.clone(), config.token_base64_path.clone());
    let client = GarminClient::new(GarminConfig::default(), store);

    if let Err(e) = client.login(config.credentials()).await {
        error!("Failed to initialize Garmin Connect client: {e}");
        return Err(e.into());
    }

    let registry = ToolRegistry::full();
    info!("Registered {} tools", registry.len());

    let resources = Arc::new(ServerResources::new(Arc::new(client), registry));
    let server = McpServer::new(resources);

    server.run_stdio().await?;
    Ok(())
}
