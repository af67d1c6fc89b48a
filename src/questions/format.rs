//! Reply text for similar-question lookups.

use std::fmt::Write;

use super::matcher::SimilarityResult;

/// Reply used when no stored question is similar enough.
pub const NOT_FOUND_REPLY: &str = "This question hasn't been asked before.";

fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}

/// Summarise matches: total occurrences, then one bullet per question.
#[must_use]
pub fn format_similar_questions(matches: &[SimilarityResult]) -> String {
    let total: usize = matches.iter().map(|m| m.count).sum();

    let mut reply = format!(
        "I found {total} occurrence{} of similar questions:",
        plural(total)
    );
    for m in matches {
        let _ = write!(
            reply,
            "\n- \"{}\" ({} time{})",
            m.question,
            m.count,
            plural(m.count)
        );
    }
    reply
}

/// Reply for a lookup result, falling back to [`NOT_FOUND_REPLY`] when empty.
#[must_use]
pub fn format_lookup_reply(matches: &[SimilarityResult]) -> String {
    if matches.is_empty() {
        NOT_FOUND_REPLY.to_string()
    } else {
        format_similar_questions(matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::questions::{NormalizedText, QuestionStore};

    fn result(text: &str, count: usize) -> SimilarityResult {
        SimilarityResult {
            question: NormalizedText::from_normalized(text),
            count,
        }
    }

    #[test]
    fn summarises_total_and_lists_each_match() {
        let matches = vec![
            result("ask about recursion", 2),
            result("ask about recurse", 1),
        ];

        let reply = format_similar_questions(&matches);
        let lines: Vec<&str> = reply.lines().collect();

        assert_eq!(
            lines,
            vec![
                "I found 3 occurrences of similar questions:",
                "- \"ask about recursion\" (2 times)",
                "- \"ask about recurse\" (1 time)",
            ]
        );
    }

    #[test]
    fn uses_literal_normalized_text() {
        let store = QuestionStore::default();
        let matches = vec![SimilarityResult {
            question: store.normalizer().normalize("What is Big O?"),
            count: 1,
        }];

        assert_eq!(
            format_similar_questions(&matches),
            "I found 1 occurrence of similar questions:\n- \"what is big o\" (1 time)"
        );
    }

    #[test]
    fn empty_lookup_uses_not_found_reply() {
        assert_eq!(format_lookup_reply(&[]), NOT_FOUND_REPLY);
    }
}
