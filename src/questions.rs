//! Duplicate-question tracking for `!help` requests.

mod format;
mod handler;
mod matcher;
mod normalize;
mod store;

pub use format::{NOT_FOUND_REPLY, format_lookup_reply, format_similar_questions};
pub use handler::{HELP_TRIGGER, answer_and_record, handle_help_question, help_question};
pub use matcher::{
    DEFAULT_LIMIT, DEFAULT_THRESHOLD, SimilarityConfig, SimilarityResult, find_similar_questions,
};
pub use normalize::{EnglishAnalyzer, NormalizedText, Normalizer, TextAnalyzer};
pub use store::{QuestionRecord, QuestionStore};
