//! The reporter: builder surface and the periodic schedule.

use crate::core::{ReporterConfig, ReporterError, Result};
use crate::metrics::{MetricFilter, MetricSource};
use crate::report::clock::{Clock, SystemClock};
use crate::report::cycle::{run_cycle, CycleOutcome, CycleParams};
use crate::report::flatten::ScaleContext;
use crate::report::TimeUnit;
use crate::transport::Transport;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

/// State shared between the reporter handle and the scheduler task.
///
/// Mutated only by `start`; read-only during cycles. The transport sits
/// behind one async mutex, so at most one cycle touches it at a time.
struct ReportingState<S> {
    source: S,
    transport: Mutex<Box<dyn Transport>>,
    clock: Arc<dyn Clock>,
    prefix: Option<String>,
    filter: MetricFilter,
    scale: ScaleContext,
    /// Interval in seconds stamped on every sample; 0 until `start` runs
    interval_secs: AtomicU64,
}

impl<S: MetricSource> ReportingState<S> {
    async fn run_once(&self) -> CycleOutcome {
        let timestamp = self.clock.now_secs();
        let interval = self.interval_secs.load(Ordering::Relaxed);
        let mut transport = self.transport.lock().await;
        run_cycle(
            &self.source,
            transport.as_mut(),
            CycleParams {
                prefix: self.prefix.as_deref(),
                filter: &self.filter,
                scale: &self.scale,
                timestamp,
                interval,
            },
        )
        .await
    }
}

/// Periodic reporter publishing registry snapshots to a collectd daemon.
pub struct Reporter<S: MetricSource + 'static> {
    state: Arc<ReportingState<S>>,
    shutdown: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl<S: MetricSource + 'static> Reporter<S> {
    /// Returns a new [`ReporterBuilder`] over the given metric source.
    ///
    /// Defaults to the system clock, no prefix, rates in seconds, durations
    /// in milliseconds and no filtering.
    pub fn builder(source: S) -> ReporterBuilder<S> {
        ReporterBuilder {
            source,
            clock: Arc::new(SystemClock),
            prefix: None,
            rate_unit: TimeUnit::Seconds,
            duration_unit: TimeUnit::Milliseconds,
            filter: MetricFilter::accept_all(),
        }
    }

    /// Run a single reporting cycle now, outside the schedule.
    pub async fn report_once(&self) -> CycleOutcome {
        self.state.run_once().await
    }

    /// Start the periodic schedule with the given period.
    ///
    /// The period is converted to a whole-second interval and stamped on
    /// every sample of subsequent cycles; changing it requires `stop` and a
    /// fresh `start`. The first cycle fires one period after this call.
    pub fn start(&mut self, period: u64, unit: TimeUnit) -> Result<()> {
        if self.handle.is_some() {
            return Err(ReporterError::schedule("reporter already started"));
        }
        if period == 0 {
            return Err(ReporterError::config("reporting period must be positive"));
        }
        let secs = unit.interval_secs(period);
        if secs == 0 {
            return Err(ReporterError::config(
                "reporting period must be at least one second",
            ));
        }

        self.state.interval_secs.store(secs, Ordering::Relaxed);
        self.shutdown.store(false, Ordering::Relaxed);

        let state = Arc::clone(&self.state);
        let shutdown = Arc::clone(&self.shutdown);
        let every = Duration::from_secs(secs);
        let handle = tokio::spawn(async move {
            let first = tokio::time::Instant::now() + every;
            let mut ticker = tokio::time::interval_at(first, every);
            loop {
                ticker.tick().await;
                if shutdown.load(Ordering::Relaxed) {
                    break;
                }
                // Outcome is logged inside the cycle; nothing escapes here.
                state.run_once().await;
            }
        });
        self.handle = Some(handle);
        tracing::debug!(interval_secs = secs, "collectd reporter started");
        Ok(())
    }

    /// Start the periodic schedule from a `Duration`, e.g. a configured
    /// [`ReporterConfig::period`].
    pub fn start_interval(&mut self, every: Duration) -> Result<()> {
        self.start(every.as_secs(), TimeUnit::Seconds)
    }

    /// Stop the periodic schedule. Idempotent.
    pub fn stop(&mut self) {
        self.shutdown.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    /// Whether the periodic schedule is running.
    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    /// The interval currently stamped on samples, in seconds.
    pub fn interval_secs(&self) -> u64 {
        self.state.interval_secs.load(Ordering::Relaxed)
    }
}

impl<S: MetricSource + 'static> Drop for Reporter<S> {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Builder for [`Reporter`] instances.
pub struct ReporterBuilder<S> {
    source: S,
    clock: Arc<dyn Clock>,
    prefix: Option<String>,
    rate_unit: TimeUnit,
    duration_unit: TimeUnit,
    filter: MetricFilter,
}

impl<S: MetricSource + 'static> ReporterBuilder<S> {
    /// Apply prefix and unit settings from a loaded configuration.
    pub fn with_config(mut self, config: &ReporterConfig) -> Self {
        self.prefix = config.prefix.clone();
        self.rate_unit = config.rate_unit;
        self.duration_unit = config.duration_unit;
        self
    }

    /// Use the given clock for cycle timestamps.
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Prefix every metric identifier with the given string.
    pub fn prefixed_with(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Convert rates to the given time unit.
    pub fn convert_rates_to(mut self, unit: TimeUnit) -> Self {
        self.rate_unit = unit;
        self
    }

    /// Convert durations to the given time unit.
    pub fn convert_durations_to(mut self, unit: TimeUnit) -> Self {
        self.duration_unit = unit;
        self
    }

    /// Only report metrics matching the given filter.
    pub fn filter(mut self, filter: MetricFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Build a reporter sending samples through the given transport.
    pub fn build(self, transport: impl Transport + 'static) -> Reporter<S> {
        Reporter {
            state: Arc::new(ReportingState {
                source: self.source,
                transport: Mutex::new(Box::new(transport)),
                clock: self.clock,
                prefix: self.prefix,
                filter: self.filter,
                scale: ScaleContext::new(self.rate_unit, self.duration_unit),
                interval_secs: AtomicU64::new(0),
            }),
            shutdown: Arc::new(AtomicBool::new(false)),
            handle: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::{MetricKind, MetricSnapshot};
    use async_trait::async_trait;
    use std::collections::BTreeMap;

    struct EmptySource;

    impl MetricSource for EmptySource {
        fn snapshot(&self, _kind: MetricKind) -> BTreeMap<String, MetricSnapshot> {
            BTreeMap::new()
        }
    }

    struct NullTransport;

    #[async_trait]
    impl Transport for NullTransport {
        fn endpoint(&self) -> String {
            "null".to_string()
        }

        fn is_connected(&self) -> bool {
            true
        }

        async fn connect(&mut self) -> Result<()> {
            Ok(())
        }

        async fn send(&mut self, _sample: &crate::transport::Sample) -> Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_start_rejects_zero_period() {
        let mut reporter = Reporter::builder(EmptySource).build(NullTransport);
        assert!(reporter.start(0, TimeUnit::Seconds).is_err());
        assert!(reporter.start(500, TimeUnit::Milliseconds).is_err());
        assert!(!reporter.is_running());
    }

    #[tokio::test]
    async fn test_start_twice_is_an_error() {
        let mut reporter = Reporter::builder(EmptySource).build(NullTransport);
        reporter.start(10, TimeUnit::Seconds).unwrap();
        assert!(reporter.start(10, TimeUnit::Seconds).is_err());
        reporter.stop();
        assert!(!reporter.is_running());
        // restart after stop is allowed
        reporter.start(5, TimeUnit::Seconds).unwrap();
        assert_eq!(reporter.interval_secs(), 5);
    }

    #[tokio::test]
    async fn test_interval_converted_to_seconds() {
        let mut reporter = Reporter::builder(EmptySource).build(NullTransport);
        reporter.start(2, TimeUnit::Minutes).unwrap();
        assert_eq!(reporter.interval_secs(), 120);
    }

    #[tokio::test]
    async fn test_interval_is_zero_before_start() {
        let reporter = Reporter::builder(EmptySource).build(NullTransport);
        assert_eq!(reporter.interval_secs(), 0);
        let outcome = reporter.report_once().await;
        assert_eq!(outcome.sent(), 0);
    }
}
