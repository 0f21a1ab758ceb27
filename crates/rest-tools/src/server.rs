//! MCP server over stdio.

use crate::error::{RestToolsError, Result};
use crate::executor::RequestExecutor;
use crate::tool::{Catalog, ToolOutcome, invoke};
use rmcp::model::{
    CallToolRequestParams, CallToolResult, Implementation, ListToolsResult,
    PaginatedRequestParams, ServerCapabilities, ServerInfo,
};
use rmcp::service::{RequestContext, RoleServer};
use rmcp::{ErrorData, ServerHandler, ServiceExt as _};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

/// Exposes a [`Catalog`] over one [`RequestExecutor`] as MCP tools.
#[derive(Debug, Clone)]
pub struct RestToolServer {
    name: String,
    version: String,
    instructions: Option<String>,
    catalog: Arc<Catalog>,
    executor: RequestExecutor,
}

impl RestToolServer {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        catalog: Catalog,
        executor: RequestExecutor,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            instructions: None,
            catalog: Arc::new(catalog),
            executor,
        }
    }

    #[must_use]
    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = Some(instructions.into());
        self
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Route one call by tool name. Unknown tools are a failure envelope, not a protocol error.
    pub async fn call(&self, name: &str, args: Value) -> ToolOutcome {
        let Some(tool) = self.catalog.find(name) else {
            debug!(tool = name, "unknown tool");
            return ToolOutcome::Failure(format!("Unknown tool: {name}"));
        };
        invoke(&self.executor, tool, args).await
    }
}

impl ServerHandler for RestToolServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: self.name.clone(),
                version: self.version.clone(),
                ..Default::default()
            },
            instructions: self.instructions.clone(),
            ..Default::default()
        }
    }

    fn list_tools(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> impl Future<Output = std::result::Result<ListToolsResult, ErrorData>> + Send + '_ {
        async move {
            let tools = self
                .catalog
                .tools()
                .iter()
                .map(crate::tool::ToolDef::to_mcp_tool)
                .collect();
            Ok(ListToolsResult::with_all_items(tools))
        }
    }

    fn call_tool(
        &self,
        request: CallToolRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> impl Future<Output = std::result::Result<CallToolResult, ErrorData>> + Send + '_ {
        async move {
            let args = Value::Object(request.arguments.unwrap_or_default());
            Ok(self.call(&request.name, args).await.into())
        }
    }
}

/// Serve over stdin/stdout until the peer disconnects.
///
/// # Errors
///
/// Returns [`RestToolsError::Runtime`] if the MCP handshake fails or the service ends with an
/// error.
pub async fn serve_stdio(server: RestToolServer) -> Result<()> {
    info!(
        server = %server.name,
        tools = server.catalog.len(),
        "serving MCP over stdio"
    );
    let running = server
        .serve(rmcp::transport::stdio())
        .await
        .map_err(|e| RestToolsError::Runtime(format!("MCP initialization failed: {e}")))?;
    let reason = running
        .waiting()
        .await
        .map_err(|e| RestToolsError::Runtime(format!("MCP service task failed: {e}")))?;
    info!(?reason, "MCP session ended");
    Ok(())
}
