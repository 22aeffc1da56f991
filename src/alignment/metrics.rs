//! Suggested measurement indicators for selected goals.

use std::collections::HashMap;

use crate::taxonomy::Taxonomy;

/// Map each selected goal name to its suggested metrics.
///
/// Selections may come from stale or user-edited state, so a name the
/// taxonomy does not know maps to an empty list rather than an error.
pub fn suggest_metrics(
    selected: &[String],
    taxonomy: &Taxonomy,
) -> HashMap<String, Vec<String>> {
    selected
        .iter()
        .map(|name| {
            let metrics = taxonomy
                .get(name)
                .map(|goal| goal.suggested_metrics.clone())
                .unwrap_or_default();
            (name.clone(), metrics)
        })
        .collect()
}
