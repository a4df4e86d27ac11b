//! Core message types for chatflow conversations.
//!
//! This crate provides the typed building blocks shared by the rest of the
//! workspace: the [`Message`] enum over the user / assistant / system roles,
//! the [`HasId`] trait used by the graph runtime's merge reducer, dict and
//! buffer-string conversion utilities, and an append-only transcript
//! container ([`ChatHistory`] / [`InMemoryChatHistory`]).
//!
//! Messages are immutable values: mutation means producing a new value or
//! pushing onto a transcript, never editing a record in place.

pub mod error;
pub mod history;
pub mod messages;

pub use error::{Error, Result};
pub use history::{ChatHistory, InMemoryChatHistory};
pub use messages::{
    AssistantMessage, HasId, Message, SystemMessage, UserMessage, get_buffer_string,
    message_from_dict, message_to_dict, messages_from_dict, messages_to_dict,
};
