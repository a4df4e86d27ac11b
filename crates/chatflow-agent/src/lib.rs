//! The chatflow conversation workflow.
//!
//! This crate defines the workflow graph, its state and its nodes: a
//! [`ChatState`] carrying the ordered transcript is passed through the single
//! [`chat_node`] step, which appends one fixed assistant reply and returns
//! the updated state. The wiring is `START -> chat_node -> END`.
//!
//! [`SessionStore`] adds per-thread, in-process conversation continuity on
//! top of the compiled graph.

pub mod graph;
pub mod nodes;
pub mod session;
pub mod state;

pub use graph::chat_graph;
pub use nodes::{CANNED_REPLY, CHAT_NODE, chat_node};
pub use session::{Session, SessionStore};
pub use state::ChatState;
