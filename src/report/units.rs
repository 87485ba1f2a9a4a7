//! Time units and the scaling factors derived from them.

use serde::{Deserialize, Serialize};

/// A unit of time for rate and duration conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Nanoseconds,
    Microseconds,
    Milliseconds,
    Seconds,
    Minutes,
    Hours,
    Days,
}

impl TimeUnit {
    /// Length of one unit in nanoseconds.
    pub const fn as_nanos(self) -> u64 {
        match self {
            Self::Nanoseconds => 1,
            Self::Microseconds => 1_000,
            Self::Milliseconds => 1_000_000,
            Self::Seconds => 1_000_000_000,
            Self::Minutes => 60 * 1_000_000_000,
            Self::Hours => 3_600 * 1_000_000_000,
            Self::Days => 86_400 * 1_000_000_000,
        }
    }

    /// Length of one unit in seconds, as an exact ratio.
    pub fn as_secs_f64(self) -> f64 {
        self.as_nanos() as f64 / 1e9
    }

    /// Factor applied to per-second rates to express them in this unit.
    pub fn rate_factor(self) -> f64 {
        self.as_secs_f64()
    }

    /// Factor applied to nanosecond durations to express them in this unit.
    pub fn duration_factor(self) -> f64 {
        1.0 / self.as_nanos() as f64
    }

    /// Convert a period expressed in this unit to whole seconds, truncating.
    pub fn interval_secs(self, period: u64) -> u64 {
        (period as u128 * self.as_nanos() as u128 / 1_000_000_000) as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_factors() {
        assert_eq!(TimeUnit::Seconds.rate_factor(), 1.0);
        assert_eq!(TimeUnit::Minutes.rate_factor(), 60.0);
        assert_eq!(TimeUnit::Milliseconds.rate_factor(), 1e-3);
    }

    #[test]
    fn test_duration_factors() {
        assert_eq!(TimeUnit::Nanoseconds.duration_factor(), 1.0);
        assert_eq!(TimeUnit::Milliseconds.duration_factor(), 1e-6);
        assert_eq!(TimeUnit::Seconds.duration_factor(), 1e-9);
    }

    #[test]
    fn test_interval_conversion() {
        assert_eq!(TimeUnit::Seconds.interval_secs(10), 10);
        assert_eq!(TimeUnit::Minutes.interval_secs(2), 120);
        assert_eq!(TimeUnit::Milliseconds.interval_secs(500), 0);
        assert_eq!(TimeUnit::Days.interval_secs(1), 86_400);
    }

    #[test]
    fn test_serde_names() {
        let unit: TimeUnit = serde_yaml::from_str("milliseconds").unwrap();
        assert_eq!(unit, TimeUnit::Milliseconds);
        assert_eq!(serde_yaml::to_string(&TimeUnit::Minutes).unwrap().trim(), "minutes");
    }
}
