//! Roast mentioned users with the chat model, using their recent messages.

mod handler;
mod history;
mod prompt;

pub use handler::{ROAST_FALLBACK_REPLY, handle_roast, is_roast_request};
pub use prompt::{Roastee, build_roast_prompt};
