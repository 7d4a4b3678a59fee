//! Live Resin Mixing Calculator (resincalc)
//!
//! An MCP server for cartridge ratio and dilution formulation.

use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

mod build_info;
mod mcp;
mod mixing;
mod models;
mod tools;

use mcp::ResinCalcService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logging goes to stderr; stdout carries the MCP stdio transport
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("resincalc=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    build_info::print_startup_banner();
    eprintln!("Starting MCP server on stdio...");

    let service = ResinCalcService::new();

    let transport = (stdin(), stdout());
    let server = service.serve(transport).await?;
    tracing::info!("resincalc ready");

    server.waiting().await?;

    Ok(())
}
