//! The tool-calling completion loop.
//!
//! One round trip per turn: the full message history and the registry's tool
//! declarations go out, and either the model's text or the executed tool's
//! result string comes back. There is no multi-step loop and no chaining of
//! tool calls within a turn.

use crate::llm::LLMClient;
use crate::memory::MemoryStore;
use crate::tools::{SaveMemoryTool, ToolRegistry};
use crate::types::{AgentError, ChatMessage, MessageRole, Result};
use std::sync::Arc;
use tracing::{debug, warn};

pub struct Agent {
    client: Box<dyn LLMClient>,
    tools: ToolRegistry,
}

impl Agent {
    pub fn new(client: Box<dyn LLMClient>, tools: ToolRegistry) -> Self {
        Self { client, tools }
    }

    /// Create an agent whose only capability is save_memory over the given
    /// store.
    pub fn with_save_memory(client: Box<dyn LLMClient>, store: MemoryStore) -> Self {
        let mut tools = ToolRegistry::new();
        tools.register(Arc::new(SaveMemoryTool::new(store)));
        Self::new(client, tools)
    }

    /// Produce the turn's output for the given message history.
    ///
    /// The history must be non-empty and begin with a system message. If the
    /// response carries tool invocations, the first one whose name is
    /// registered is executed and its result string is returned; invocations
    /// with unrecognized names are skipped while scanning. A response whose
    /// invocations are all unrecognized is an [`AgentError::UnsupportedTool`]
    /// fault. Without invocations, the model's text is returned verbatim.
    pub async fn respond(&self, messages: &[ChatMessage]) -> Result<String> {
        let first = messages.first().ok_or_else(|| {
            AgentError::InvalidInput("message history is empty".to_string())
        })?;
        if first.role != MessageRole::System {
            return Err(AgentError::InvalidInput(
                "message history must begin with a system message".to_string(),
            ));
        }

        let response = self.client.chat(messages, &self.tools.definitions()).await?;

        if response.tool_calls.is_empty() {
            debug!(finish_reason = %response.finish_reason, "model replied with text");
            return Ok(response.content);
        }

        for call in &response.tool_calls {
            if self.tools.has_tool(&call.name) {
                debug!(tool = %call.name, id = %call.id, "executing tool call");
                return self.tools.execute(&call.name, call.arguments.clone()).await;
            }
            warn!(tool = %call.name, "skipping unrecognized tool call");
        }

        Err(AgentError::UnsupportedTool(
            response.tool_calls[0].name.clone(),
        ))
    }
}
