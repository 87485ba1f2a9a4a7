//! Periodic reporter that ships in-process metrics to a collectd daemon.
//!
//! A [`Reporter`] drains a metrics registry on a fixed schedule, flattens
//! each of the five metric shapes (gauge, counter, histogram, meter, timer)
//! into an ordered stream of timestamped samples, and hands them to a
//! [`Transport`] that owns the connection to the daemon.
//!
//! ```no_run
//! # use collectd_reporter::{Reporter, TimeUnit};
//! # fn demo(registry: impl collectd_reporter::MetricSource + 'static,
//! #         transport: impl collectd_reporter::Transport + 'static) {
//! let mut reporter = Reporter::builder(registry)
//!     .prefixed_with("host1")
//!     .convert_rates_to(TimeUnit::Seconds)
//!     .convert_durations_to(TimeUnit::Milliseconds)
//!     .build(transport);
//! reporter.start(10, TimeUnit::Seconds).unwrap();
//! # }
//! ```
//!
//! A transport failure abandons the running cycle with a warning; the next
//! scheduled cycle reconnects. Nothing here ever panics the host process.

pub mod core;
pub mod metrics;
pub mod report;
pub mod transport;

pub use crate::core::{ReporterConfig, ReporterError, Result};
pub use crate::metrics::{
    DistributionSnapshot, GaugeValue, HistogramSnapshot, MeterSnapshot, MetricFilter, MetricKind,
    MetricSnapshot, MetricSource, TimerSnapshot,
};
pub use crate::report::{CycleOutcome, Reporter, ReporterBuilder, TimeUnit};
pub use crate::transport::{Sample, SampleKind, SampleValue, Transport};
