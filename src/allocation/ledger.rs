//! Session-scoped, append-only collection of activity records.

use chrono::Utc;
use log::debug;
use uuid::Uuid;

use crate::error::PlannerError;
use crate::models::{ActivityInput, ActivityRecord};

/// Ordered ledger of activities for one planning session.
///
/// There is no update or delete: a correction is modeled as a new add, and
/// the caller owns one ledger per session. `all()` returns records in
/// insertion order.
#[derive(Debug, Default)]
pub struct ActivityLedger {
    records: Vec<ActivityRecord>,
}

impl ActivityLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and append an activity, stamping it with an id and the add
    /// time. Returns the stored record.
    pub fn add(&mut self, input: ActivityInput) -> Result<ActivityRecord, PlannerError> {
        input.validate()?;

        let record = ActivityRecord {
            id: Uuid::new_v4().to_string(),
            name: input.name,
            goal_tag: input.goal_tag,
            budget: input.budget,
            time: input.time,
            personnel: input.personnel,
            impact_rating: input.impact_rating,
            recorded_at: Utc::now(),
        };

        debug!("ledger: added activity '{}' ({})", record.name, record.id);
        self.records.push(record.clone());
        Ok(record)
    }

    /// All records in insertion order.
    pub fn all(&self) -> &[ActivityRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
