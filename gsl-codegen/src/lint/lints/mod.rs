//! Built-in lints.

mod duplicate_block;
mod missing_messages;
mod unknown_messages;

pub use duplicate_block::DuplicateBlockLint;
pub use missing_messages::MissingMessagesLint;
pub use unknown_messages::UnknownMessagesLint;
