//! Goal taxonomy: the fixed set of seventeen SDG definitions that the
//! scoring and suggestion engines match against.

use std::collections::HashMap;

use log::debug;

use crate::error::PlannerError;
use crate::models::GoalDefinition;

/// The built-in goal data, embedded so the store needs no filesystem access.
const GOALS_JSON: &str = include_str!("goals.json");

/// Read-only store of goal definitions, loaded once per session.
///
/// Definition order is preserved and used as the tie-break for relevance
/// ranking, so it must stay stable for the lifetime of the store.
#[derive(Debug, Clone)]
pub struct Taxonomy {
    definitions: Vec<GoalDefinition>,
    by_name: HashMap<String, usize>,
}

impl Taxonomy {
    /// Load the built-in seventeen-goal taxonomy.
    ///
    /// Fails fast if the embedded data is malformed or empty; a planner
    /// without goals is a configuration error, not a runtime condition.
    pub fn load() -> Result<Self, PlannerError> {
        let definitions: Vec<GoalDefinition> = serde_json::from_str(GOALS_JSON)
            .map_err(|e| PlannerError::TaxonomyData(e.to_string()))?;
        let taxonomy = Self::from_definitions(definitions)?;
        debug!("loaded taxonomy with {} goals", taxonomy.len());
        Ok(taxonomy)
    }

    /// Build a taxonomy from caller-supplied definitions.
    pub fn from_definitions(definitions: Vec<GoalDefinition>) -> Result<Self, PlannerError> {
        if definitions.is_empty() {
            return Err(PlannerError::EmptyTaxonomy);
        }

        let mut by_name = HashMap::with_capacity(definitions.len());
        for (index, goal) in definitions.iter().enumerate() {
            if by_name.insert(goal.name.clone(), index).is_some() {
                return Err(PlannerError::TaxonomyData(format!(
                    "duplicate goal name: {}",
                    goal.name
                )));
            }
        }

        Ok(Self {
            definitions,
            by_name,
        })
    }

    /// All goal definitions in their original order.
    pub fn definitions(&self) -> &[GoalDefinition] {
        &self.definitions
    }

    pub fn get(&self, name: &str) -> Option<&GoalDefinition> {
        self.by_name.get(name).map(|&index| &self.definitions[index])
    }

    pub fn goal_names(&self) -> Vec<&str> {
        self.definitions.iter().map(|g| g.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}
