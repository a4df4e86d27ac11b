//! Checkpointing for workflow state.
//!
//! Savers keep workflow state addressable by thread id so a conversation can
//! be resumed within the same process. Nothing here persists across process
//! runs.

pub mod memory;

pub use memory::InMemorySaver;
