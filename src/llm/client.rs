use crate::types::{ChatMessage, Result, ToolCall, ToolDefinition};
use async_trait::async_trait;

/// Generic LLM client trait for provider abstraction.
#[async_trait]
pub trait LLMClient: Send + Sync {
    /// Issue one completion request carrying the full message sequence and
    /// the advertised tool declarations.
    async fn chat(
        &self,
        messages: &[ChatMessage],
        tools: &[ToolDefinition],
    ) -> Result<LLMResponse>;

    /// Get the model name/identifier.
    fn model_name(&self) -> &str;
}

/// Response from an LLM completion request.
#[derive(Debug, Clone)]
pub struct LLMResponse {
    /// The text content of the response.
    pub content: String,
    /// Any tool calls requested by the model, in response order.
    pub tool_calls: Vec<ToolCall>,
    /// The reason generation stopped (e.g., "Stop", "ToolCalls").
    pub finish_reason: String,
}
