use crate::memory::MemoryStore;
use crate::tools::registry::Tool;
use crate::types::{AgentError, Result};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};

/// Persists free-text memories to the store.
pub struct SaveMemoryTool {
    store: MemoryStore,
}

impl SaveMemoryTool {
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }
}

#[derive(Debug, Deserialize)]
struct SaveMemoryArgs {
    memories: Vec<String>,
}

#[async_trait]
impl Tool for SaveMemoryTool {
    fn name(&self) -> &str {
        "save_memory"
    }

    fn description(&self) -> &str {
        "Save short free-text memories about the user for future conversations"
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "memories": {
                    "type": "array",
                    "items": { "type": "string" },
                    "description": "Short, self-contained facts worth remembering"
                }
            },
            "required": ["memories"]
        })
    }

    async fn execute(&self, args: Value) -> Result<String> {
        let args: SaveMemoryArgs = serde_json::from_value(args).map_err(|e| {
            AgentError::InvalidArguments(format!(
                "save_memory expects {{\"memories\": [string, ...]}}: {}",
                e
            ))
        })?;

        self.store.append(&args.memories).await
    }
}
