//! MCP server entrypoint (stdio transport).
//!
//! Launches an MCP server that exposes the summarization tools and resources over stdio. Stdout
//! carries the protocol stream, so logs go to the log file (or stderr) only. Shares all runtime
//! configuration with the HTTP binary.
use anyhow::{Context, Result};
use rmcp::{service::ServiceExt, transport::stdio};
use rustysum::{config, logging, mcp::SummarizerMcpServer, service::SummarizationService};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    config::init_config();
    logging::init_file_tracing();

    let service = Arc::new(SummarizationService::from_config(config::get_config()));
    tracing::info!(
        chat_enabled = service.chat_enabled(),
        "Starting MCP server over stdio"
    );
    let server = SummarizerMcpServer::new(service);

    let running = server
        .serve(stdio())
        .await
        .context("failed to start MCP server over stdio")?;

    running
        .waiting()
        .await
        .context("MCP server terminated unexpectedly")?;

    Ok(())
}
