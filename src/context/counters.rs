use std::time::Duration;

/// Counts for various things which count, roughly, during a search.
///
/// Counts are reset at the start of each search.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Counters {
    /// A count of every resolution step, i.e. every clause used to resolve a goal.
    pub steps: usize,

    /// A count of lists of goals found in the cache.
    pub cache_hits: usize,

    /// A count of lists of goals cut as a repeat of some list of goals on the same path.
    pub cycles: usize,

    /// The greatest number of lists of goals open at once.
    pub max_depth: usize,

    /// The time taken during a search.
    pub time: Duration,
}

impl std::fmt::Display for Counters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "steps: {}, cache hits: {}, cycles: {}, max depth: {}, time: {:.2?}",
            self.steps, self.cache_hits, self.cycles, self.max_depth, self.time
        )
    }
}
