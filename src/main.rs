use bolna_mcp::{
    config::{BolnaConfig, ObservabilityConfig},
    mcp::McpStdioServer,
    observability::init_logging,
    BolnaClient, APP_NAME, VERSION,
};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if it exists (optional - won't fail if missing)
    // This must happen before any config is read from environment
    if let Err(e) = dotenvy::dotenv() {
        if !e.to_string().contains("not found") {
            eprintln!("Warning: Error loading .env file: {}", e);
        }
    }

    let observability_config = ObservabilityConfig::from_env();
    init_logging(&observability_config)?;

    let config = BolnaConfig::from_env()?;

    info!(
        app_name = APP_NAME,
        version = VERSION,
        base_url = %config.base_url,
        timeout_seconds = config.timeout_seconds,
        "Starting Bolna MCP server"
    );

    let client = BolnaClient::new(config);
    let mut server = McpStdioServer::new(client);

    server.run().await?;
    Ok(())
}
