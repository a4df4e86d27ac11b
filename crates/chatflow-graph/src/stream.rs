//! Streaming output for workflow execution.

use serde::{Deserialize, Serialize};

/// How the stream method should emit outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum StreamMode {
    /// Emit the full state after each step, plus a terminal chunk for the
    /// virtual end node once the chain finishes.
    Values,
    /// Emit one chunk per executed node with the state after that node.
    #[default]
    Updates,
}

/// A chunk of data emitted by the stream.
#[derive(Debug, Clone)]
pub struct StreamChunk<T> {
    /// The name of the node that produced this chunk.
    pub node: String,
    /// The state after the node ran.
    pub data: T,
}

impl<T> StreamChunk<T> {
    /// Create a new stream chunk.
    pub fn new(node: impl Into<String>, data: T) -> Self {
        Self {
            node: node.into(),
            data,
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Display for StreamChunk<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "StreamChunk({}: {:?})", self.node, self.data)
    }
}
