//! LLM client abstractions.
//!
//! The agent depends on the [`LLMClient`] trait, not on any specific
//! vendor's transport. One concrete implementation is provided for
//! OpenAI-compatible chat-completions endpoints.

/// Core LLM client trait and response types.
pub mod client;
/// OpenAI-compatible client implementation.
pub mod openai;

pub use client::{LLMClient, LLMResponse};
pub use openai::OpenAIClient;
