//! Live keyword feedback for authors drafting a project description.

use std::collections::HashSet;

use crate::taxonomy::Taxonomy;

/// Every taxonomy keyword, across all goals, that occurs at least once as a
/// substring of the lowercased text. Keywords shared by multiple goals
/// appear once; no ordering is guaranteed.
pub fn present_keywords(text: &str, taxonomy: &Taxonomy) -> HashSet<String> {
    let normalized = text.to_lowercase();

    let mut found = HashSet::new();
    for goal in taxonomy.definitions() {
        for keyword in &goal.keywords {
            if keyword.is_empty() {
                continue;
            }
            if normalized.contains(&keyword.to_lowercase()) {
                found.insert(keyword.clone());
            }
        }
    }
    found
}
