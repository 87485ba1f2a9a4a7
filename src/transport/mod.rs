//! The transport contract for delivering samples to a collectd daemon.
//!
//! The wire encoding of a single sample and the socket lifecycle belong to
//! the transport implementation; the reporter only asks three questions:
//! are we connected, connect, send this sample.

use crate::core::Result;
use async_trait::async_trait;

/// Kind tag attached to every sample, matching the collectd data source
/// types the daemon distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleKind {
    Gauge,
    Counter,
}

/// A sample's numeric payload. Counters travel as integers, gauges as
/// doubles, mirroring the collectd value types.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SampleValue {
    Gauge(f64),
    Counter(u64),
}

impl SampleValue {
    pub fn kind(&self) -> SampleKind {
        match self {
            Self::Gauge(_) => SampleKind::Gauge,
            Self::Counter(_) => SampleKind::Counter,
        }
    }

    pub fn as_f64(&self) -> f64 {
        match *self {
            Self::Gauge(v) => v,
            Self::Counter(c) => c as f64,
        }
    }
}

/// One (identifier, sub-field, value, timestamp, interval) tuple bound for
/// the daemon.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    /// Wire identifier, prefix already applied
    pub name: String,
    /// Sub-field for multi-field metric shapes; `None` for the single-field
    /// gauge and counter shapes
    pub type_instance: Option<String>,
    pub value: SampleValue,
    /// Seconds since epoch, captured once at cycle start
    pub timestamp: u64,
    /// Reporting interval in seconds, recorded by the most recent start
    pub interval: u64,
}

impl Sample {
    pub fn kind(&self) -> SampleKind {
        self.value.kind()
    }
}

/// Client owning the connection to the statistics daemon.
///
/// `connect` and `send` may block on network I/O; cancellation and timeouts
/// are the implementation's responsibility. The reporter performs no retries
/// of its own — a failed cycle is abandoned and the next one reconnects.
#[async_trait]
pub trait Transport: Send {
    /// Human-readable target for diagnostics, e.g. `"collectd:25826"`.
    fn endpoint(&self) -> String;

    fn is_connected(&self) -> bool;

    async fn connect(&mut self) -> Result<()>;

    async fn send(&mut self, sample: &Sample) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_kind_follows_value() {
        let sample = Sample {
            name: "a".to_string(),
            type_instance: None,
            value: SampleValue::Counter(3),
            timestamp: 0,
            interval: 10,
        };
        assert_eq!(sample.kind(), SampleKind::Counter);
        assert_eq!(sample.value.as_f64(), 3.0);
    }
}
