//! In-memory checkpoint saver.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use serde::{Serialize, de::DeserializeOwned};

use crate::error::GraphError;

/// In-memory saver for workflow state, keyed by thread id.
///
/// Each thread owns an independent set of checkpoints; payloads are stored as
/// serialized JSON so the saver works for any serde-compatible state type.
/// Suitable for tests and in-process session continuity only — state lives
/// exactly as long as the process.
///
/// # Example
///
/// ```ignore
/// use chatflow_graph::InMemorySaver;
///
/// let saver = InMemorySaver::new();
/// saver.put("thread-1", "state", &my_state)?;
/// let state: Option<MyState> = saver.get("thread-1", "state");
/// ```
#[derive(Clone, Default)]
pub struct InMemorySaver {
    /// Thread ID -> checkpoint key -> serialized payload.
    #[allow(clippy::type_complexity)]
    storage: Arc<RwLock<HashMap<String, HashMap<String, Vec<u8>>>>>,
}

impl InMemorySaver {
    /// Create a new in-memory checkpoint saver.
    pub fn new() -> Self {
        Self::default()
    }

    /// Save a checkpoint for a given thread and key.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Serialization`] when the value cannot be
    /// serialized.
    pub fn put<T: Serialize>(
        &self,
        thread_id: &str,
        key: &str,
        value: &T,
    ) -> Result<(), GraphError> {
        let data = serde_json::to_vec(value)?;
        let mut storage = self.storage.write().expect("lock poisoned");
        storage
            .entry(thread_id.to_string())
            .or_default()
            .insert(key.to_string(), data);
        Ok(())
    }

    /// Retrieve a checkpoint for a given thread and key.
    ///
    /// Returns `None` when the checkpoint does not exist or no longer
    /// deserializes into `T`.
    pub fn get<T: DeserializeOwned>(&self, thread_id: &str, key: &str) -> Option<T> {
        let storage = self.storage.read().expect("lock poisoned");
        storage
            .get(thread_id)
            .and_then(|thread| thread.get(key))
            .and_then(|data| serde_json::from_slice(data).ok())
    }

    /// Check if a checkpoint exists for a given thread and key.
    pub fn has(&self, thread_id: &str, key: &str) -> bool {
        let storage = self.storage.read().expect("lock poisoned");
        storage
            .get(thread_id)
            .is_some_and(|thread| thread.contains_key(key))
    }

    /// Delete a checkpoint for a given thread and key.
    pub fn delete(&self, thread_id: &str, key: &str) -> bool {
        let mut storage = self.storage.write().expect("lock poisoned");
        storage
            .get_mut(thread_id)
            .is_some_and(|thread| thread.remove(key).is_some())
    }

    /// Delete all checkpoints for a given thread.
    pub fn delete_thread(&self, thread_id: &str) -> bool {
        let mut storage = self.storage.write().expect("lock poisoned");
        storage.remove(thread_id).is_some()
    }

    /// List all thread IDs with checkpoints.
    pub fn list_threads(&self) -> Vec<String> {
        let storage = self.storage.read().expect("lock poisoned");
        storage.keys().cloned().collect()
    }

    /// List all checkpoint keys for a given thread.
    pub fn list_keys(&self, thread_id: &str) -> Vec<String> {
        let storage = self.storage.read().expect("lock poisoned");
        storage
            .get(thread_id)
            .map(|thread| thread.keys().cloned().collect())
            .unwrap_or_default()
    }
}

impl std::fmt::Debug for InMemorySaver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let storage = self.storage.read().expect("lock poisoned");
        f.debug_struct("InMemorySaver")
            .field("threads", &storage.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
    struct TestState {
        messages: Vec<String>,
        count: u32,
    }

    #[test]
    fn test_put_and_get() {
        let saver = InMemorySaver::new();
        let state = TestState {
            messages: vec!["hello".to_string()],
            count: 1,
        };

        saver.put("thread-1", "state", &state).unwrap();
        let retrieved: Option<TestState> = saver.get("thread-1", "state");

        assert_eq!(retrieved, Some(state));
    }

    #[test]
    fn test_get_nonexistent() {
        let saver = InMemorySaver::new();
        let retrieved: Option<TestState> = saver.get("thread-1", "state");
        assert_eq!(retrieved, None);
    }

    #[test]
    fn test_has_and_delete() {
        let saver = InMemorySaver::new();
        let state = TestState {
            messages: vec![],
            count: 0,
        };

        assert!(!saver.has("thread-1", "state"));
        saver.put("thread-1", "state", &state).unwrap();
        assert!(saver.has("thread-1", "state"));

        assert!(saver.delete("thread-1", "state"));
        assert!(!saver.has("thread-1", "state"));
    }

    #[test]
    fn test_threads_are_independent() {
        let saver = InMemorySaver::new();

        let state1 = TestState {
            messages: vec!["thread1".to_string()],
            count: 1,
        };
        let state2 = TestState {
            messages: vec!["thread2".to_string()],
            count: 2,
        };

        saver.put("thread-1", "state", &state1).unwrap();
        saver.put("thread-2", "state", &state2).unwrap();

        assert_eq!(saver.get::<TestState>("thread-1", "state"), Some(state1));
        assert_eq!(saver.get::<TestState>("thread-2", "state"), Some(state2));

        assert!(saver.delete_thread("thread-1"));
        assert!(!saver.has("thread-1", "state"));
        assert!(saver.has("thread-2", "state"));
    }

    #[test]
    fn test_list_threads_and_keys() {
        let saver = InMemorySaver::new();
        let state = TestState {
            messages: vec![],
            count: 0,
        };

        saver.put("thread-1", "state", &state).unwrap();
        saver.put("thread-1", "meta", &state).unwrap();

        assert_eq!(saver.list_threads(), vec!["thread-1"]);
        let mut keys = saver.list_keys("thread-1");
        keys.sort();
        assert_eq!(keys, vec!["meta", "state"]);
    }
}
