/// Tunable phase lengths for timeline generation.
#[derive(Debug, Clone)]
pub struct TimelineConfig {
    /// Length of the initiation phase before implementation starts.
    pub initiation_weeks: i64,

    /// Length of the closure phase after implementation ends.
    pub closure_weeks: i64,

    /// One implementation phase per this many project months.
    pub months_per_phase: u32,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            initiation_weeks: 4,
            closure_weeks: 4,
            months_per_phase: 3,
        }
    }
}
