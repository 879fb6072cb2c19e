//! # Mnemo - a terminal chat agent that remembers
//!
//! Mnemo is a minimal conversational agent that lets a language model
//! persist and recall short free-text memories across a chat session. Each
//! turn is one round trip to an OpenAI-compatible completion endpoint with a
//! single exposed capability, `save_memory`; when the model invokes it, the
//! listed memories are appended to a flat text file, and the file's contents
//! are folded back into the system prompt on the next turn.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use mnemo::{Agent, ChatMessage, MemoryStore, OpenAIClient};
//!
//! let store = MemoryStore::new("memories.txt");
//! let client = OpenAIClient::new(api_key, api_base, model);
//! let agent = Agent::with_save_memory(Box::new(client), store.clone());
//!
//! let history = vec![
//!     ChatMessage::system(mnemo::prompt::build_system_prompt("", &store.load().await?)),
//!     ChatMessage::user("My favorite color is blue"),
//! ];
//! let reply = agent.respond(&history).await?;
//! ```
//!
//! ## Modules
//!
//! - [`agent`] - The tool-calling completion loop
//! - [`llm`] - LLM client trait and the OpenAI implementation
//! - [`tools`] - Tool trait, registry, and the save_memory capability
//! - [`memory`] - Flat-file append-only memory store
//! - [`prompt`] - System prompt construction
//! - [`config`] - Environment configuration
//! - [`types`] - Common types and error handling

/// The tool-calling completion loop.
pub mod agent;
/// Environment configuration.
pub mod config;
/// LLM client trait and implementations.
pub mod llm;
/// Flat-file memory store.
pub mod memory;
/// System prompt construction.
pub mod prompt;
/// Tool trait, registry, and built-in tools.
pub mod tools;
/// Core types (messages, tool declarations, errors).
pub mod types;

pub use agent::Agent;
pub use config::Config;
pub use llm::{LLMClient, LLMResponse, OpenAIClient};
pub use memory::MemoryStore;
pub use tools::{SaveMemoryTool, Tool, ToolRegistry};
pub use types::{AgentError, ChatMessage, MessageRole, Result, ToolCall, ToolDefinition};
