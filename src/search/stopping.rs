use std::time::{Duration, Instant};

/** decides when a search should give up.
Searches poll `is_finished` at the top of every expansion, so cancellation is
cooperative and the overrun is bounded by a single expansion. */
pub trait StoppingCriterion {
    /// true if the search should stop
    fn is_finished(&self) -> bool;
}

/** stops when a wall-clock budget is exhausted, measured from construction */
#[derive(Debug, Clone)]
pub struct TimeStoppingCriterion {
    /// instant the criterion was created
    start: Instant,
    /// time budget
    max_time: Duration,
}

impl TimeStoppingCriterion {
    /// creates a criterion allowing t_max seconds from now
    pub fn new(t_max: f32) -> Self {
        Self { start: Instant::now(), max_time: Duration::from_secs_f32(t_max) }
    }
}

impl StoppingCriterion for TimeStoppingCriterion {
    fn is_finished(&self) -> bool {
        self.start.elapsed() >= self.max_time
    }
}

/** never stops (exhaustive search; deterministic tests) */
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverStoppingCriterion;

impl StoppingCriterion for NeverStoppingCriterion {
    fn is_finished(&self) -> bool { false }
}
