//! Invocation gate
//!
//! Sits between a model's tool call and the endpoint that runs it. Every
//! call is resolved against the catalog and its arguments validated before
//! the invoker sees them.

use crate::catalog::ToolCatalog;
use crate::error::BridgeResult;
use crate::mcp::{McpToolResult, ToolCall, ToolInvoker};
use crate::schema::ValidatedArguments;
use tracing::{debug, instrument, warn};

/// Validating front for a [`ToolInvoker`]
pub struct InvocationGate<I> {
    catalog: ToolCatalog,
    invoker: I,
}

impl<I: ToolInvoker> InvocationGate<I> {
    /// Create a gate over a catalog and an invoker
    pub fn new(catalog: ToolCatalog, invoker: I) -> Self {
        Self { catalog, invoker }
    }

    /// Tools this gate accepts calls for
    pub fn catalog(&self) -> &ToolCatalog {
        &self.catalog
    }

    /// Resolve the tool and validate the call's arguments
    pub fn check(&self, call: &ToolCall) -> BridgeResult<ValidatedArguments> {
        self.catalog.check(call)
    }

    /// Validate the call and forward it to the invoker
    #[instrument(skip(self, call), fields(tool = %call.name), level = "debug")]
    pub async fn invoke(&self, call: &ToolCall) -> BridgeResult<McpToolResult> {
        let arguments = self.check(call)?;
        debug!("Forwarding validated call");
        let result = self
            .invoker
            .call_tool(&call.name, arguments.into_value())
            .await?;
        if result.is_error {
            warn!("Tool reported an error result");
        }
        Ok(result)
    }
}
