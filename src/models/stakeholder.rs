//! Stakeholder-related data models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::PlannerError;
use crate::models::activity::{IMPACT_RATING_MAX, IMPACT_RATING_MIN};

/// Input data for registering a stakeholder.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StakeholderInput {
    pub name: String,
    pub category: String,
    /// Combined interest/influence level on the same 1-10 scale the
    /// activity impact rating uses.
    pub interest_influence: i64,
    pub strategies: Vec<String>,
}

impl StakeholderInput {
    pub fn validate(&self) -> Result<(), PlannerError> {
        if self.name.trim().is_empty() {
            return Err(PlannerError::InvalidRecord {
                reason: "stakeholder name is empty".to_string(),
            });
        }
        if self.interest_influence < IMPACT_RATING_MIN
            || self.interest_influence > IMPACT_RATING_MAX
        {
            return Err(PlannerError::InvalidRecord {
                reason: format!(
                    "stakeholder '{}' has interest/influence {} outside {}-{}",
                    self.name, self.interest_influence, IMPACT_RATING_MIN, IMPACT_RATING_MAX
                ),
            });
        }
        Ok(())
    }
}

/// A stakeholder as stored by the register, stamped at add time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StakeholderRecord {
    pub id: String,
    pub name: String,
    pub category: String,
    pub interest_influence: i64,
    pub strategies: Vec<String>,
    pub recorded_at: DateTime<Utc>,
}
