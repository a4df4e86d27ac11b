//! Message reducer and state contract.
//!
//! Nodes that extend a conversation do so through [`add_messages`], the merge
//! reducer that keeps transcript state append-only unless a message id
//! collides, and [`MessagesState`], the trait a workflow state implements to
//! opt into that reducer.

use std::collections::HashMap;

pub use chatflow_core::messages::HasId;

/// Merge two lists of messages, updating existing messages by ID.
///
/// The result is `left` with `right` folded in: a right-hand message whose id
/// matches a left-hand one replaces it in place; every other message — in
/// particular every id-less message — is appended in order. With no id
/// collisions this is a pure append, which is the common case for workflow
/// nodes that emit freshly constructed messages.
pub fn add_messages<T: Clone + HasId>(mut left: Vec<T>, right: Vec<T>) -> Vec<T> {
    let mut id_to_idx: HashMap<String, usize> = HashMap::new();
    for (idx, msg) in left.iter().enumerate() {
        if let Some(id) = msg.get_id() {
            id_to_idx.insert(id.to_string(), idx);
        }
    }

    for msg in right {
        match msg.get_id().map(str::to_string) {
            Some(id) => {
                if let Some(&existing_idx) = id_to_idx.get(&id) {
                    left[existing_idx] = msg;
                } else {
                    id_to_idx.insert(id, left.len());
                    left.push(msg);
                }
            }
            None => left.push(msg),
        }
    }

    left
}

/// A state schema with a messages field.
///
/// Implemented by workflow states whose transcript should be updated through
/// the [`add_messages`] reducer rather than by direct mutation.
pub trait MessagesState {
    /// The message type used in the state.
    type Message: Clone + HasId;

    /// Get the messages from the state.
    fn messages(&self) -> &Vec<Self::Message>;

    /// Get mutable reference to the messages.
    fn messages_mut(&mut self) -> &mut Vec<Self::Message>;

    /// Update messages using the [`add_messages`] reducer.
    fn update_messages(&mut self, new_messages: Vec<Self::Message>) {
        let current = std::mem::take(self.messages_mut());
        *self.messages_mut() = add_messages(current, new_messages);
    }
}
