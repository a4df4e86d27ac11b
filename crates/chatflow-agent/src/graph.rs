//! Workflow graph wiring.

use chatflow_graph::{CompiledGraph, END, GraphError, START, StateGraph};

use crate::nodes::{CHAT_NODE, chat_node};
use crate::state::ChatState;

/// Build and compile the conversation workflow graph.
///
/// The declared wiring is `START -> chat_node -> END`: one unconditional
/// chain with a single processing step. This is the entire control-flow
/// surface of the workflow.
pub fn chat_graph() -> Result<CompiledGraph<ChatState>, GraphError> {
    let mut workflow = StateGraph::<ChatState>::new();

    workflow.add_node(CHAT_NODE, chat_node);
    workflow.add_edge(START, CHAT_NODE);
    workflow.add_edge(CHAT_NODE, END);

    workflow.compile()
}
