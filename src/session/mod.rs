//! Session-scoped chat transcript and the submit handler that grows it.

mod message;
mod store;
mod turn;

pub use message::{Message, Role};
pub use store::Session;
pub use turn::{EMPTY_PROMPT_WARNING, Settings, SubmitOutcome, submit};
