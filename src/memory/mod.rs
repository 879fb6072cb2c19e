//! Flat-file memory store.
//!
//! Memories live in a plain UTF-8 text file, one memory per line,
//! newline-terminated. The file is read wholesale on every prompt build and
//! appended to (never rewritten) when the model saves new memories.

use crate::types::{AgentError, Result};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

/// Append-only store of one-line memories.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    path: PathBuf,
}

impl MemoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every stored memory, in insertion order.
    ///
    /// A missing file is an empty store, not a fault.
    pub async fn load(&self) -> Result<Vec<String>> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(text) => Ok(text
                .lines()
                .filter(|line| !line.trim().is_empty())
                .map(str::to_string)
                .collect()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }

    /// Append a batch of memories and return the confirmation text.
    ///
    /// The whole batch is serialized into one buffer and written with a
    /// single append, so a fault writes nothing. Whitespace-only entries are
    /// skipped; embedded newlines are normalized to spaces so every stored
    /// memory stays one line.
    pub async fn append(&self, memories: &[String]) -> Result<String> {
        let lines: Vec<String> = memories
            .iter()
            .map(|m| normalize_line(m))
            .filter(|m| !m.is_empty())
            .collect();

        if lines.is_empty() {
            return Err(AgentError::InvalidArguments(
                "save_memory was called with no usable memories".to_string(),
            ));
        }

        let mut buf = lines.join("\n");
        buf.push('\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(buf.as_bytes()).await?;
        file.flush().await?;

        tracing::debug!(count = lines.len(), path = %self.path.display(), "appended memories");

        Ok(match lines.len() {
            1 => "Saved 1 memory.".to_string(),
            n => format!("Saved {} memories.", n),
        })
    }
}

/// Collapse a memory onto a single line.
fn normalize_line(memory: &str) -> String {
    memory
        .split(['\r', '\n'])
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
