use serde::{Deserialize, Serialize};

/// One of the seventeen Sustainable Development Goals with its matching
/// keywords and suggested measurement indicators.
///
/// Immutable after taxonomy load. Keyword matching is case-insensitive and
/// keywords may overlap across goals.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalDefinition {
    pub name: String,
    pub keywords: Vec<String>,
    pub description: String,
    pub suggested_metrics: Vec<String>,
}
