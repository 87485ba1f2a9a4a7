//! Configuration for the collectd reporter.
//!
//! Configuration can be built in code through [`crate::report::ReporterBuilder`]
//! or loaded from a YAML document. All fields have defaults: no prefix,
//! rates in seconds, durations in milliseconds, a 10 second reporting
//! period.

use crate::core::{ReporterError, Result};
use crate::report::TimeUnit;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Reporter configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReporterConfig {
    /// Prefix prepended to every metric identifier
    pub prefix: Option<String>,
    /// Unit rates are converted to before emission
    pub rate_unit: TimeUnit,
    /// Unit durations are converted to before emission
    pub duration_unit: TimeUnit,
    /// Reporting period for the periodic schedule
    #[serde(with = "humantime_serde")]
    pub period: Duration,
}

impl Default for ReporterConfig {
    fn default() -> Self {
        Self {
            prefix: None,
            rate_unit: TimeUnit::Seconds,
            duration_unit: TimeUnit::Milliseconds,
            period: Duration::from_secs(10),
        }
    }
}

impl ReporterConfig {
    /// Parse a configuration from a YAML document and validate it.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if let Some(prefix) = &self.prefix {
            if prefix.trim().is_empty() {
                return Err(ReporterError::config(
                    "prefix must not be empty; omit it instead",
                ));
            }
        }
        if self.period < Duration::from_secs(1) {
            return Err(ReporterError::config(format!(
                "reporting period must be at least one second, got {:?}",
                self.period
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ReporterConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.prefix, None);
        assert_eq!(config.rate_unit, TimeUnit::Seconds);
        assert_eq!(config.duration_unit, TimeUnit::Milliseconds);
        assert_eq!(config.period, Duration::from_secs(10));
    }

    #[test]
    fn test_yaml_config() {
        let yaml = r#"
prefix: host1
rate_unit: minutes
duration_unit: microseconds
period: 30s
"#;
        let config = ReporterConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.prefix.as_deref(), Some("host1"));
        assert_eq!(config.rate_unit, TimeUnit::Minutes);
        assert_eq!(config.duration_unit, TimeUnit::Microseconds);
        assert_eq!(config.period, Duration::from_secs(30));
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = ReporterConfig::from_yaml("period: 1m").unwrap();
        assert_eq!(config.period, Duration::from_secs(60));
        assert_eq!(config.rate_unit, TimeUnit::Seconds);
        assert_eq!(config.prefix, None);
    }

    #[test]
    fn test_config_validation() {
        let mut config = ReporterConfig::default();
        config.period = Duration::from_millis(100);
        assert!(config.validate().is_err());

        let mut config = ReporterConfig::default();
        config.prefix = Some("  ".to_string());
        assert!(config.validate().is_err());
    }
}
