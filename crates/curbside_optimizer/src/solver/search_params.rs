use jiff::SignedDuration;

#[derive(Clone, Debug)]
pub struct RouteSearchParams {
    /// Working-set cap applied after the prefilter. Bounds the branching
    /// factor of the otherwise exponential permutation search.
    pub max_bins: usize,

    /// Wall-clock budget for one search invocation. Polled cooperatively at
    /// recursion boundaries; on expiry the search unwinds with the best
    /// solution recorded so far.
    pub time_budget: SignedDuration,

    /// Soft stopping threshold: a partial route counts as complete once its
    /// load reaches this fraction of vehicle capacity. Kept below 1.0 for
    /// operating margin.
    pub capacity_stop_fraction: f64,
}

impl Default for RouteSearchParams {
    fn default() -> Self {
        Self {
            max_bins: 10,
            time_budget: SignedDuration::from_secs(1),
            capacity_stop_fraction: 0.9,
        }
    }
}
