//! Core graph building blocks.
//!
//! - [`StateGraph`] - builder for linear stateful workflows
//! - [`add_messages`] - merge reducer for message lists
//! - [`MessagesState`] - trait for states carrying a transcript

pub mod message;
pub mod state;

pub use message::{MessagesState, add_messages};
pub use state::{CompiledGraph, GraphStructure, StateGraph};

pub use crate::constants::{END, START};
