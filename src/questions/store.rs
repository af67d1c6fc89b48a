//! In-memory record of previously asked questions.

use std::collections::HashMap;

use log::debug;

use super::normalize::{NormalizedText, Normalizer};

/// A normalized question and how many times it was asked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionRecord {
    pub question: NormalizedText,
    pub count: usize,
}

/// Occurrence counts keyed by normalized question text.
///
/// Lives for the process lifetime only; nothing is persisted or evicted.
/// Records are kept in first-insertion order.
#[derive(Default)]
pub struct QuestionStore {
    normalizer: Normalizer,
    records: Vec<QuestionRecord>,
    index: HashMap<NormalizedText, usize>,
}

impl QuestionStore {
    #[must_use]
    pub fn new(normalizer: Normalizer) -> Self {
        Self {
            normalizer,
            records: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    /// Record one more occurrence of `raw_text`.
    pub fn add_question(&mut self, raw_text: &str) {
        let key = self.normalizer.normalize(raw_text);

        if let Some(&slot) = self.index.get(&key) {
            self.records[slot].count += 1;
            debug!(
                "Question '{}' now asked {} times",
                key, self.records[slot].count
            );
            return;
        }

        debug!("Recording new question '{key}'");
        self.index.insert(key.clone(), self.records.len());
        self.records.push(QuestionRecord {
            question: key,
            count: 1,
        });
    }

    /// Number of times text normalizing like `raw_text` was recorded, or 0.
    #[must_use]
    pub fn question_count(&self, raw_text: &str) -> usize {
        let key = self.normalizer.normalize(raw_text);
        self.index
            .get(&key)
            .map_or(0, |&slot| self.records[slot].count)
    }

    /// All records in first-insertion order.
    pub fn records(&self) -> &[QuestionRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_question_has_zero_count() {
        let store = QuestionStore::default();
        assert_eq!(store.question_count("anything?"), 0);
        assert!(store.is_empty());
    }

    #[test]
    fn add_increments_count_by_one() {
        let mut store = QuestionStore::default();
        let text = "Why is my borrow checker angry?";

        for expected in 1..=3 {
            let before = store.question_count(text);
            store.add_question(text);
            assert_eq!(store.question_count(text), before + 1);
            assert_eq!(store.question_count(text), expected);
        }
    }

    #[test]
    fn aggregates_case_and_punctuation_variants() {
        let mut store = QuestionStore::default();
        store.add_question("What is Big O?");
        store.add_question("what is big o");

        assert_eq!(store.question_count("WHAT IS BIG O"), 2);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn empty_questions_share_one_bucket() {
        let mut store = QuestionStore::default();
        store.add_question("");
        store.add_question("???");

        assert_eq!(store.question_count("!"), 2);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn len_tracks_distinct_keys_in_insertion_order() {
        let mut store = QuestionStore::default();
        store.add_question("second thing");
        store.add_question("first thing");
        store.add_question("Second thing!");

        let keys: Vec<&str> = store
            .records()
            .iter()
            .map(|record| record.question.as_str())
            .collect();
        assert_eq!(keys, vec!["second thing", "first thing"]);
        assert_eq!(store.records()[0].count, 2);
    }

    #[test]
    fn lookup_does_not_mutate() {
        let mut store = QuestionStore::default();
        store.add_question("how do lifetimes work");
        let _ = store.question_count("something else");

        assert_eq!(store.len(), 1);
    }
}
