pub mod ledger;
pub mod ranking;

pub use ledger::ActivityLedger;
pub use ranking::{
    rank, AllocationSummary, RankedActivity, RankingOutcome, ResourceCeilings, ResourceUsage,
};
