// src/insights/placeholders.rs
//! Stand-ins for historical data the service does not provide.
//!
//! Synthesized dates and growth figures are heuristics, not measurements. They
//! are drawn through [`PlaceholderSource`] so callers and tests control them.

use chrono::{DateTime, Utc};
use rand::Rng;
use std::ops::Range;

/// Growth percentages are drawn from this half-open range
pub const GROWTH_RANGE: Range<i32> = 5..25;

pub trait PlaceholderSource {
    /// Reference point for synthesized event dates
    fn now(&self) -> DateTime<Utc>;

    /// Placeholder growth percentage within [`GROWTH_RANGE`]
    fn growth_percent(&self) -> i32;
}

/// Wall clock and thread-local randomness
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomPlaceholders;

impl PlaceholderSource for RandomPlaceholders {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn growth_percent(&self) -> i32 {
        rand::thread_rng().gen_range(GROWTH_RANGE)
    }
}

/// Deterministic values, for reproducible output
#[derive(Debug, Clone, Copy)]
pub struct FixedPlaceholders {
    pub now: DateTime<Utc>,
    pub growth: i32,
}

impl PlaceholderSource for FixedPlaceholders {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }

    fn growth_percent(&self) -> i32 {
        self.growth
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_growth_in_range() {
        let source = RandomPlaceholders;
        for _ in 0..500 {
            assert!(GROWTH_RANGE.contains(&source.growth_percent()));
        }
    }
}
