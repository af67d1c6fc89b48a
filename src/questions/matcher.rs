//! Near-duplicate lookup by edit distance over normalized questions.

use log::debug;
use strsim::levenshtein;

use super::normalize::NormalizedText;
use super::store::QuestionStore;

/// Default maximum edit distance for a stored question to count as similar.
pub const DEFAULT_THRESHOLD: usize = 3;

/// Default number of matches returned.
pub const DEFAULT_LIMIT: usize = 5;

/// Tunables for [`find_similar_questions`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimilarityConfig {
    /// Maximum Levenshtein distance (inclusive).
    pub threshold: usize,
    /// Maximum number of results.
    pub limit: usize,
}

impl Default for SimilarityConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// A stored question close enough to the query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimilarityResult {
    pub question: NormalizedText,
    pub count: usize,
}

/// Find stored questions within `config.threshold` edits of `raw_question`.
///
/// Every stored key is compared (a full scan per call), so cost grows with
/// the number of distinct questions times key length squared. Results are
/// ordered by count, highest first; equal counts keep first-insertion order.
/// A stored key identical to the query is included.
#[must_use]
pub fn find_similar_questions(
    store: &QuestionStore,
    raw_question: &str,
    config: &SimilarityConfig,
) -> Vec<SimilarityResult> {
    let query = store.normalizer().normalize(raw_question);

    let mut matches: Vec<SimilarityResult> = store
        .records()
        .iter()
        .filter_map(|record| {
            let distance = levenshtein(query.as_str(), record.question.as_str());
            (distance <= config.threshold).then(|| {
                debug!(
                    "Similar question '{}' (distance {distance}, count {})",
                    record.question, record.count
                );
                SimilarityResult {
                    question: record.question.clone(),
                    count: record.count,
                }
            })
        })
        .collect();

    // Stable sort keeps insertion order among equal counts.
    matches.sort_by(|left, right| right.count.cmp(&left.count));
    matches.truncate(config.limit);
    matches
}
