//! Timed placement of an event on the shared timeline.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::{TimeCode, TIME_EPSILON_SECS};

/// An event's placement on the shared timeline. Both bounds are inclusive.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimeRegion {
    pub start: TimeCode,
    pub end: TimeCode,
}

impl TimeRegion {
    /// Create a region. `start` must not be after `end`.
    pub fn new(start: TimeCode, end: TimeCode) -> Self {
        assert!(
            start.as_secs() <= end.as_secs(),
            "TimeRegion start must be <= end"
        );
        Self { start, end }
    }

    pub fn from_secs(start: f64, end: f64) -> Self {
        Self::new(TimeCode::from_secs(start), TimeCode::from_secs(end))
    }

    pub fn duration(&self) -> TimeCode {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start.approx_eq(self.end)
    }

    /// Inclusive containment test, tolerant at the boundaries.
    pub fn contains(&self, t: TimeCode) -> bool {
        t.as_secs() >= self.start.as_secs() - TIME_EPSILON_SECS
            && t.as_secs() <= self.end.as_secs() + TIME_EPSILON_SECS
    }

    /// Convert a global timeline time to a time local to this region's start.
    pub fn to_local(&self, global: TimeCode) -> TimeCode {
        global - self.start
    }

    /// Convert a region-local time to the global timeline.
    pub fn to_global(&self, local: TimeCode) -> TimeCode {
        self.start + local
    }
}

impl fmt::Display for TimeRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} .. {}]", self.start, self.end)
    }
}
