//! MCP Stdio Server
//!
//! Implements the stdio transport for MCP: reads line-delimited JSON-RPC
//! messages from stdin and writes responses to stdout. All logging goes to
//! stderr so the protocol channel stays clean.

use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, info, warn};

use crate::bolna::BolnaClient;
use crate::errors::Result;
use crate::mcp::handler::McpHandler;
use crate::mcp::protocol::{error_codes, JsonRpcError, JsonRpcResponse};

pub struct McpStdioServer {
    handler: McpHandler,
}

impl McpStdioServer {
    /// Create a new MCP stdio server over the given Bolna client
    pub fn new(client: BolnaClient) -> Self {
        Self { handler: McpHandler::new(client) }
    }

    /// Run the server over stdin/stdout
    ///
    /// Reads JSON-RPC messages from stdin (line-delimited), processes them
    /// through the handler, and writes responses to stdout. Exits cleanly on
    /// EOF.
    pub async fn run(&mut self) -> Result<()> {
        info!("Starting MCP stdio server");
        self.run_with(tokio::io::stdin(), tokio::io::stdout()).await?;
        info!("MCP stdio server shutting down (EOF received)");
        Ok(())
    }

    /// Run the server over arbitrary reader/writer pairs
    ///
    /// Split out from [`run`](Self::run) so the loop can be exercised against
    /// in-memory transports in tests.
    pub async fn run_with<R, W>(&mut self, reader: R, mut writer: W) -> Result<()>
    where
        R: AsyncRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let reader = BufReader::new(reader);
        let mut lines = reader.lines();

        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }

            debug!(line = %line, "Received input line");

            let request = match serde_json::from_str(&line) {
                Ok(req) => req,
                Err(e) => {
                    warn!(error = %e, line = %line, "Failed to parse JSON-RPC request");

                    let error_response = JsonRpcResponse::error(
                        None,
                        JsonRpcError {
                            code: error_codes::PARSE_ERROR,
                            message: format!("Parse error: {}", e),
                            data: None,
                        },
                    );

                    Self::write_response(&mut writer, &error_response).await?;
                    continue;
                }
            };

            let response = self.handler.handle_request(request).await;

            Self::write_response(&mut writer, &response).await?;
        }

        Ok(())
    }

    async fn write_response<W>(writer: &mut W, response: &JsonRpcResponse) -> Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        let json = serde_json::to_string(response)?;
        debug!(response = %json, "Writing response");

        writer.write_all(json.as_bytes()).await?;
        writer.write_all(b"\n").await?;
        writer.flush().await?;

        Ok(())
    }
}
