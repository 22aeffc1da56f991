//! Goal-relevance scoring over free-text project descriptions.
//!
//! Matching is substring, not token, matching: an occurrence inside a larger
//! unrelated word still counts.

use serde::{Deserialize, Serialize};

use crate::taxonomy::Taxonomy;

/// Relevance of one goal to a scored text. The score is an occurrence
/// count, not a probability; returned scores are always at least 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelevanceResult {
    pub goal: String,
    pub score: u32,
}

/// Score a project description against every goal in the taxonomy.
///
/// Per goal, the score sums the non-overlapping occurrences of each of its
/// keywords in the lowercased text, so repeated mentions increase rank.
/// Goals with no matches are omitted. Results are sorted by score
/// descending; the stable sort keeps taxonomy definition order for ties,
/// making the output deterministic for identical input.
pub fn score(text: &str, taxonomy: &Taxonomy) -> Vec<RelevanceResult> {
    let normalized = text.to_lowercase();

    let mut results: Vec<RelevanceResult> = Vec::new();
    for goal in taxonomy.definitions() {
        let total: u32 = goal
            .keywords
            .iter()
            .map(|keyword| count_occurrences(&normalized, &keyword.to_lowercase()))
            .sum();
        if total > 0 {
            results.push(RelevanceResult {
                goal: goal.name.clone(),
                score: total,
            });
        }
    }

    results.sort_by(|a, b| b.score.cmp(&a.score));
    results
}

/// Non-overlapping occurrences of `needle` in `haystack`.
fn count_occurrences(haystack: &str, needle: &str) -> u32 {
    if needle.is_empty() {
        return 0;
    }
    haystack.matches(needle).count() as u32
}
