//! Efficiency ranking of activities against resource ceilings.
//!
//! This is a reporting tool, not an optimizer: it orders activities by a
//! greedy impact-per-resource metric and totals usage against the supplied
//! ceilings. It never rejects an over-budget allocation and performs no
//! knapsack-style selection.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::PlannerError;
use crate::models::ActivityRecord;

/// Caller-supplied resource ceilings for usage reporting.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceCeilings {
    pub budget: f64,
    /// Person-months.
    pub time: f64,
    pub personnel: f64,
}

impl Default for ResourceCeilings {
    fn default() -> Self {
        Self {
            budget: 100_000.0,
            time: 24.0,
            personnel: 10.0,
        }
    }
}

/// Resources summed across all ranked activities.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceUsage {
    pub budget: f64,
    pub time: f64,
    pub personnel: f64,
}

/// Usage totals paired with the ceilings they are reported against.
/// Recomputed on every ranking call, never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationSummary {
    pub used: ResourceUsage,
    pub ceilings: ResourceCeilings,
}

/// One activity with its computed efficiency.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedActivity {
    pub record: ActivityRecord,
    /// Impact rating divided by total requested resources.
    pub efficiency: f64,
}

/// Ranked activities plus the resource-usage summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingOutcome {
    pub ranked: Vec<RankedActivity>,
    pub summary: AllocationSummary,
}

/// Rank activities by `impact_rating / (budget + time + personnel)`,
/// descending, and total resource usage against the supplied ceilings.
///
/// A record whose resource total is not positive has no defined efficiency
/// and fails the whole call with `ZeroResourceActivity`; the ranking never
/// carries an infinity or NaN.
pub fn rank(
    records: &[ActivityRecord],
    ceilings: &ResourceCeilings,
) -> Result<RankingOutcome, PlannerError> {
    let mut ranked = Vec::with_capacity(records.len());
    let mut used = ResourceUsage::default();

    for record in records {
        let total = record.resource_total();
        if total <= 0.0 {
            return Err(PlannerError::ZeroResourceActivity {
                name: record.name.clone(),
            });
        }

        used.budget += record.budget;
        used.time += record.time;
        used.personnel += record.personnel;

        ranked.push(RankedActivity {
            record: record.clone(),
            efficiency: record.impact_rating as f64 / total,
        });
    }

    // Stable sort keeps insertion order for equal efficiencies.
    ranked.sort_by(|a, b| b.efficiency.total_cmp(&a.efficiency));

    debug!("ranked {} activities", ranked.len());
    Ok(RankingOutcome {
        ranked,
        summary: AllocationSummary {
            used,
            ceilings: ceilings.clone(),
        },
    })
}
