pub mod feedback;
pub mod metrics;
pub mod scoring;

pub use feedback::present_keywords;
pub use metrics::suggest_metrics;
pub use scoring::{score, RelevanceResult};
