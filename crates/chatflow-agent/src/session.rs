//! In-process conversation sessions.
//!
//! A session keys conversation state by thread id in an [`InMemorySaver`] so
//! consecutive sends on the same thread share one transcript. State lives
//! exactly as long as the process; a fresh process starts with no threads.

use std::sync::Arc;

use tracing::debug;
use uuid::Uuid;

use chatflow_core::messages::{Message, UserMessage};
use chatflow_graph::{CompiledGraph, GraphError, InMemorySaver};

use crate::graph::chat_graph;
use crate::state::ChatState;

/// Checkpoint key the conversation state is stored under.
const STATE_KEY: &str = "state";

/// Store of per-thread conversation sessions over the chat workflow.
///
/// Cloning the store shares the underlying graph and saver, so every clone
/// sees the same threads.
#[derive(Clone)]
pub struct SessionStore {
    graph: Arc<CompiledGraph<ChatState>>,
    saver: InMemorySaver,
}

impl SessionStore {
    /// Create a store running the standard chat workflow.
    pub fn new() -> Result<Self, GraphError> {
        Ok(Self {
            graph: Arc::new(chat_graph()?),
            saver: InMemorySaver::new(),
        })
    }

    /// Open the session for a thread id. State is created lazily on the
    /// first send.
    pub fn session(&self, thread_id: impl Into<String>) -> Session {
        Session {
            thread_id: thread_id.into(),
            graph: Arc::clone(&self.graph),
            saver: self.saver.clone(),
        }
    }

    /// Open a session under a freshly generated thread id.
    pub fn new_session(&self) -> Session {
        self.session(Uuid::new_v4().to_string())
    }

    /// List thread ids with stored state.
    pub fn threads(&self) -> Vec<String> {
        self.saver.list_threads()
    }
}

/// A single conversation thread.
pub struct Session {
    thread_id: String,
    graph: Arc<CompiledGraph<ChatState>>,
    saver: InMemorySaver,
}

impl Session {
    /// The thread id this session is stored under.
    pub fn thread_id(&self) -> &str {
        &self.thread_id
    }

    /// Current conversation state for this thread.
    pub fn state(&self) -> ChatState {
        self.saver
            .get(&self.thread_id, STATE_KEY)
            .unwrap_or_default()
    }

    /// Append a user message, run the workflow and store the result.
    pub async fn send(&self, content: impl Into<String>) -> Result<ChatState, GraphError> {
        let mut state = self.state();
        state
            .messages
            .push(Message::User(UserMessage::new(content)));

        debug!(
            thread_id = %self.thread_id,
            turns = state.messages.len(),
            "running chat workflow"
        );
        let state = self.graph.invoke(state).await;

        self.saver.put(&self.thread_id, STATE_KEY, &state)?;
        Ok(state)
    }

    /// Drop this thread's stored state.
    pub fn reset(&self) -> bool {
        self.saver.delete_thread(&self.thread_id)
    }
}
