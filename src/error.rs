use thiserror::Error;

/// Errors surfaced by the planning engines. Everything except the taxonomy
/// variants is recoverable by the caller (re-prompt, skip the record).
#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("taxonomy contains no goal definitions")]
    EmptyTaxonomy,

    #[error("taxonomy data is invalid: {0}")]
    TaxonomyData(String),

    #[error("invalid record: {reason}")]
    InvalidRecord { reason: String },

    /// An activity requesting zero total resources has no defined efficiency.
    #[error("activity '{name}' requests no resources, efficiency is undefined")]
    ZeroResourceActivity { name: String },

    #[error("no goals selected")]
    NoGoalsSelected,
}
