//! Activity-related data models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::PlannerError;

pub const IMPACT_RATING_MIN: i64 = 1;
pub const IMPACT_RATING_MAX: i64 = 10;

/// Input data for adding an activity to the ledger.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityInput {
    pub name: String,
    pub goal_tag: String,
    pub budget: f64,
    pub time: f64,
    pub personnel: f64,
    pub impact_rating: i64,
}

impl ActivityInput {
    /// Reject negative resource requests and out-of-range impact ratings.
    pub fn validate(&self) -> Result<(), PlannerError> {
        if self.name.trim().is_empty() {
            return Err(PlannerError::InvalidRecord {
                reason: "activity name is empty".to_string(),
            });
        }
        if self.budget < 0.0 || self.time < 0.0 || self.personnel < 0.0 {
            return Err(PlannerError::InvalidRecord {
                reason: format!(
                    "activity '{}' has a negative resource request",
                    self.name
                ),
            });
        }
        if self.impact_rating < IMPACT_RATING_MIN || self.impact_rating > IMPACT_RATING_MAX {
            return Err(PlannerError::InvalidRecord {
                reason: format!(
                    "activity '{}' has impact rating {} outside {}-{}",
                    self.name, self.impact_rating, IMPACT_RATING_MIN, IMPACT_RATING_MAX
                ),
            });
        }
        Ok(())
    }
}

/// An activity as stored by the ledger. Stamped with an id and timestamp at
/// add time and never mutated afterwards; corrections are a new add.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityRecord {
    pub id: String,
    pub name: String,
    pub goal_tag: String,
    pub budget: f64,
    pub time: f64,
    pub personnel: f64,
    pub impact_rating: i64,
    pub recorded_at: DateTime<Utc>,
}

impl ActivityRecord {
    /// Total requested resources across all three dimensions.
    pub fn resource_total(&self) -> f64 {
        self.budget + self.time + self.personnel
    }
}
