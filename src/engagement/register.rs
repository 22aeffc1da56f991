use chrono::Utc;
use log::debug;
use uuid::Uuid;

use crate::error::PlannerError;
use crate::models::{StakeholderInput, StakeholderRecord};

/// Append-only register of stakeholders for one planning session.
/// Same ownership rules as the activity ledger: no update or delete,
/// insertion order preserved.
#[derive(Debug, Default)]
pub struct StakeholderRegister {
    records: Vec<StakeholderRecord>,
}

impl StakeholderRegister {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and append a stakeholder, stamping it with an id and the
    /// add time. Returns the stored record.
    pub fn add(&mut self, input: StakeholderInput) -> Result<StakeholderRecord, PlannerError> {
        input.validate()?;

        let record = StakeholderRecord {
            id: Uuid::new_v4().to_string(),
            name: input.name,
            category: input.category,
            interest_influence: input.interest_influence,
            strategies: input.strategies,
            recorded_at: Utc::now(),
        };

        debug!(
            "register: added stakeholder '{}' ({})",
            record.name, record.id
        );
        self.records.push(record.clone());
        Ok(record)
    }

    /// All records in insertion order.
    pub fn all(&self) -> &[StakeholderRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
