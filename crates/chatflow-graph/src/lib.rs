//! Linear state-graph runtime for conversation workflows.
//!
//! This crate provides a builder for workflows where named nodes communicate
//! by reading and writing a shared state. Nodes are async functions from
//! state to state; edges are unconditional transitions declared up front and
//! frozen at compile time. There is no branching and no dynamic routing: a
//! compiled graph is a deterministic chain from [`START`] to [`END`].
//!
//! # Example
//!
//! ```ignore
//! use chatflow_graph::{StateGraph, START, END};
//!
//! #[derive(Clone)]
//! struct State {
//!     text: String,
//! }
//!
//! let mut graph = StateGraph::<State>::new();
//!
//! graph.add_node("node_a", |mut state| async move {
//!     state.text.push_str("a");
//!     state
//! });
//!
//! graph.add_edge(START, "node_a");
//! graph.add_edge("node_a", END);
//!
//! let compiled = graph.compile()?;
//! let result = compiled.invoke(State { text: String::new() }).await;
//! // result.text == "a"
//! ```

pub mod checkpoint;
pub mod constants;
pub mod error;
pub mod graph;
pub mod stream;

pub use checkpoint::InMemorySaver;
pub use constants::{END, START};
pub use error::{GraphError, Result};
pub use graph::{CompiledGraph, GraphStructure, MessagesState, StateGraph, add_messages};
pub use stream::{StreamChunk, StreamMode};
