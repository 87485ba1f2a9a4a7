//! Metric snapshot types and the registry seam.

pub mod registry;
pub mod types;

pub use registry::{MetricFilter, MetricSource};
pub use types::{
    DistributionSnapshot, GaugeValue, HistogramSnapshot, MeterSnapshot, MetricKind,
    MetricSnapshot, TimerSnapshot,
};
