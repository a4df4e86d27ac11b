//! Message types for conversation transcripts.
//!
//! This module provides one type per message role (user, assistant, system)
//! plus the unified [`Message`] enum that a transcript is made of. The serde
//! representation is the wire shape callers exchange: a record tagged by
//! `role` with a `content` string and optional `id` / `name` fields.

mod assistant;
mod base;
mod system;
mod user;
pub(crate) mod utils;

pub use assistant::AssistantMessage;
pub use base::{HasId, Message};
pub use system::SystemMessage;
pub use user::UserMessage;
pub use utils::{
    get_buffer_string, message_from_dict, message_to_dict, messages_from_dict, messages_to_dict,
};
