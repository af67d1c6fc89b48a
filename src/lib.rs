pub mod bot;
pub mod capabilities;
pub mod config;
pub mod error;
pub mod lazy_question;
pub mod openrouter;
pub mod questions;
pub mod roast;
pub mod types;

pub use bot::run;
