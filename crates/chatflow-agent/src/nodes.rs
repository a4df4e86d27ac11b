//! Workflow nodes.

use chatflow_core::messages::{AssistantMessage, Message};
use chatflow_graph::MessagesState;

use crate::state::ChatState;

/// Name of the single processing node in the workflow graph.
pub const CHAT_NODE: &str = "chat_node";

/// Fixed reply appended by [`chat_node`] on every invocation.
pub const CANNED_REPLY: &str = "This is a test message";

/// The single processing step of the workflow.
///
/// Appends exactly one assistant message with the canned reply and returns
/// the updated state. The transcript content is never inspected; the step is
/// deterministic, performs no I/O and cannot fail. The appended record
/// carries no id, so it always lands as a fresh entry under the
/// `add_messages` reducer.
pub async fn chat_node(mut state: ChatState) -> ChatState {
    state.update_messages(vec![Message::Assistant(AssistantMessage::new(
        CANNED_REPLY,
    ))]);
    state
}
