//! Phase-plan derivation for a goal-aligned project.

pub mod config;

pub use config::TimelineConfig;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::PlannerError;

/// One dated phase of a generated project plan. Derived, never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelinePhase {
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub description: String,
    pub goals: Vec<String>,
}

/// Derive a phase plan: a fixed-length initiation phase, one implementation
/// phase per `months_per_phase` project months (at least one), and a
/// fixed-length closure phase. Phases are contiguous; each starts where the
/// previous one ended.
pub fn generate_timeline(
    start: NaiveDate,
    duration_months: u32,
    goals: &[String],
    config: &TimelineConfig,
) -> Result<Vec<TimelinePhase>, PlannerError> {
    if goals.is_empty() {
        return Err(PlannerError::NoGoalsSelected);
    }

    let mut phases = Vec::new();
    let mut current = start;

    let initiation_end = current + Duration::weeks(config.initiation_weeks);
    phases.push(TimelinePhase {
        name: "Project Initiation".to_string(),
        start_date: current,
        end_date: initiation_end,
        description: "Set up project team, define scope, and create detailed project plan."
            .to_string(),
        goals: goals.to_vec(),
    });
    current = initiation_end;

    let num_phases = std::cmp::max(1, duration_months / config.months_per_phase.max(1));
    // Implementation spans duration_months at 30 days per month, split evenly.
    let phase_days = i64::from(duration_months) * 30 / i64::from(num_phases);
    let focus: Vec<&str> = goals.iter().take(2).map(String::as_str).collect();

    for i in 0..num_phases {
        let end = current + Duration::days(phase_days);
        phases.push(TimelinePhase {
            name: format!("Implementation Phase {}", i + 1),
            start_date: current,
            end_date: end,
            description: format!(
                "Execute project activities related to {}.",
                focus.join(", ")
            ),
            goals: goals.to_vec(),
        });
        current = end;
    }

    phases.push(TimelinePhase {
        name: "Project Closure".to_string(),
        start_date: current,
        end_date: current + Duration::weeks(config.closure_weeks),
        description:
            "Evaluate project outcomes, document lessons learned, and plan for sustainability."
                .to_string(),
        goals: goals.to_vec(),
    });

    Ok(phases)
}
