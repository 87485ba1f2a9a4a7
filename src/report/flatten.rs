//! Flattening metric snapshots into ordered sample streams.
//!
//! The sub-field order emitted for each shape is a contract: monitoring
//! dashboards key on stable ordering, so the sequences below never change.

use crate::metrics::{DistributionSnapshot, MeterSnapshot, MetricSnapshot};
use crate::report::TimeUnit;
use crate::transport::{Sample, SampleValue};

/// Scaling factors applied while flattening, derived once from the
/// configured units.
#[derive(Debug, Clone, Copy)]
pub struct ScaleContext {
    rate_factor: f64,
    duration_factor: f64,
}

impl ScaleContext {
    pub fn new(rate_unit: TimeUnit, duration_unit: TimeUnit) -> Self {
        Self {
            rate_factor: rate_unit.rate_factor(),
            duration_factor: duration_unit.duration_factor(),
        }
    }

    /// Convert a per-second rate to the configured rate unit.
    pub fn rate(&self, value: f64) -> f64 {
        value * self.rate_factor
    }

    /// Convert a nanosecond duration to the configured duration unit.
    pub fn duration(&self, value: f64) -> f64 {
        value * self.duration_factor
    }
}

/// Produce the ordered samples for one metric's snapshot.
///
/// Gauges emit at most one sample (none when the value is not numeric),
/// counters exactly one, histograms 11, meters 5 and timers 15. Counter and
/// gauge values are never unit-converted.
pub fn flatten(
    name: &str,
    metric: &MetricSnapshot,
    scale: &ScaleContext,
    timestamp: u64,
    interval: u64,
) -> Vec<Sample> {
    let mut samples = Vec::new();
    let gauge = |sub: Option<&str>, value: f64| Sample {
        name: name.to_string(),
        type_instance: sub.map(str::to_string),
        value: SampleValue::Gauge(value),
        timestamp,
        interval,
    };

    match metric {
        MetricSnapshot::Gauge(value) => match value.as_f64() {
            Some(v) => samples.push(gauge(None, v)),
            None => {
                tracing::debug!(metric = name, "skipping non-numeric gauge value");
            },
        },
        MetricSnapshot::Counter(count) => samples.push(Sample {
            name: name.to_string(),
            type_instance: None,
            value: SampleValue::Counter(*count),
            timestamp,
            interval,
        }),
        MetricSnapshot::Histogram(histogram) => {
            // count is gauge-typed even though it is a monotonic total;
            // dashboards key on the existing tag.
            samples.push(gauge(Some("count"), histogram.count as f64));
            for (sub, value) in distribution_fields(&histogram.values) {
                samples.push(gauge(Some(sub), value));
            }
        },
        MetricSnapshot::Meter(meter) => {
            push_metered(&mut samples, meter, scale, &gauge);
        },
        MetricSnapshot::Timer(timer) => {
            for (sub, value) in distribution_fields(&timer.durations) {
                samples.push(gauge(Some(sub), scale.duration(value)));
            }
            push_metered(&mut samples, &timer.rates, scale, &gauge);
        },
    }
    samples
}

/// The rate block shared by meters and timers: count unscaled, rates
/// converted to the rate unit.
fn push_metered(
    samples: &mut Vec<Sample>,
    meter: &MeterSnapshot,
    scale: &ScaleContext,
    gauge: &impl Fn(Option<&str>, f64) -> Sample,
) {
    samples.push(gauge(Some("count"), meter.count as f64));
    samples.push(gauge(Some("m1_rate"), scale.rate(meter.m1_rate)));
    samples.push(gauge(Some("m5_rate"), scale.rate(meter.m5_rate)));
    samples.push(gauge(Some("m15_rate"), scale.rate(meter.m15_rate)));
    samples.push(gauge(Some("mean_rate"), scale.rate(meter.mean_rate)));
}

/// Distribution sub-fields in wire order.
fn distribution_fields(dist: &DistributionSnapshot) -> [(&'static str, f64); 10] {
    [
        ("max", dist.max),
        ("mean", dist.mean),
        ("min", dist.min),
        ("stddev", dist.stddev),
        ("p50", dist.median),
        ("p75", dist.p75),
        ("p95", dist.p95),
        ("p98", dist.p98),
        ("p99", dist.p99),
        ("p999", dist.p999),
    ]
}
