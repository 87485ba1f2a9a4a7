//! Read-only snapshots of the five metric shapes.
//!
//! A snapshot is materialized by the registry once per reporting cycle and
//! never mutated afterwards; the flattener only reads from it.

/// The current value of a registered gauge.
///
/// Gauges may be registered over arbitrary payloads; only the numeric
/// variants ever reach the wire (see [`GaugeValue::as_f64`]).
#[derive(Debug, Clone, PartialEq)]
pub enum GaugeValue {
    Signed(i64),
    Unsigned(u64),
    Float(f64),
    Text(String),
    Bool(bool),
}

impl From<i64> for GaugeValue {
    fn from(value: i64) -> Self {
        Self::Signed(value)
    }
}

impl From<u64> for GaugeValue {
    fn from(value: u64) -> Self {
        Self::Unsigned(value)
    }
}

impl From<f64> for GaugeValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for GaugeValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<bool> for GaugeValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// Statistical summary of a recorded distribution.
///
/// An empty distribution reports whatever the registry's own convention is
/// (typically all zeros); the reporter forwards it without special-casing.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DistributionSnapshot {
    pub max: f64,
    pub mean: f64,
    pub min: f64,
    pub stddev: f64,
    pub median: f64,
    pub p75: f64,
    pub p95: f64,
    pub p98: f64,
    pub p99: f64,
    pub p999: f64,
}

/// Snapshot of a value-distribution histogram.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HistogramSnapshot {
    /// Total number of recorded observations
    pub count: u64,
    pub values: DistributionSnapshot,
}

/// Snapshot of an event-rate meter.
///
/// Rates are per-second; the flattener scales them to the configured rate
/// unit.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MeterSnapshot {
    pub count: u64,
    pub m1_rate: f64,
    pub m5_rate: f64,
    pub m15_rate: f64,
    pub mean_rate: f64,
}

/// Snapshot of a latency timer: a distribution of durations plus an
/// invocation-rate meter.
///
/// Durations are in nanoseconds (the registry's internal unit); the
/// flattener scales them to the configured duration unit.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TimerSnapshot {
    pub durations: DistributionSnapshot,
    pub rates: MeterSnapshot,
}

/// One metric's read-only state at flatten time.
#[derive(Debug, Clone, PartialEq)]
pub enum MetricSnapshot {
    Gauge(GaugeValue),
    Counter(u64),
    Histogram(HistogramSnapshot),
    Meter(MeterSnapshot),
    Timer(TimerSnapshot),
}

impl MetricSnapshot {
    /// Returns the kind this snapshot belongs to.
    pub fn kind(&self) -> MetricKind {
        match self {
            Self::Gauge(_) => MetricKind::Gauge,
            Self::Counter(_) => MetricKind::Counter,
            Self::Histogram(_) => MetricKind::Histogram,
            Self::Meter(_) => MetricKind::Meter,
            Self::Timer(_) => MetricKind::Timer,
        }
    }
}

/// The five metric kinds, in the order a reporting cycle visits them.
///
/// Consumers rely on grouped-by-kind emission within one cycle, so the
/// iteration order in [`MetricKind::ALL`] is a contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricKind {
    Gauge,
    Counter,
    Histogram,
    Meter,
    Timer,
}

impl MetricKind {
    /// All kinds in reporting order.
    pub const ALL: [MetricKind; 5] = [
        MetricKind::Gauge,
        MetricKind::Counter,
        MetricKind::Histogram,
        MetricKind::Meter,
        MetricKind::Timer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gauge => "gauge",
            Self::Counter => "counter",
            Self::Histogram => "histogram",
            Self::Meter => "meter",
            Self::Timer => "timer",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reporting_order() {
        assert_eq!(
            MetricKind::ALL,
            [
                MetricKind::Gauge,
                MetricKind::Counter,
                MetricKind::Histogram,
                MetricKind::Meter,
                MetricKind::Timer,
            ]
        );
    }

    #[test]
    fn test_snapshot_kind() {
        assert_eq!(MetricSnapshot::Counter(7).kind(), MetricKind::Counter);
        assert_eq!(
            MetricSnapshot::Gauge(GaugeValue::from(42.0)).kind(),
            MetricKind::Gauge
        );
        assert_eq!(
            MetricSnapshot::Timer(TimerSnapshot::default()).kind(),
            MetricKind::Timer
        );
    }
}
