//! One reporting pass over the registry.

use crate::metrics::{MetricFilter, MetricKind, MetricSource};
use crate::report::flatten::{flatten, ScaleContext};
use crate::report::name::metric_name;
use crate::transport::Transport;

/// Outcome of a single reporting cycle.
///
/// A transport failure abandons the remainder of the cycle; it is reported
/// here and logged, never propagated to the scheduler.
#[derive(Debug, Clone, PartialEq)]
pub enum CycleOutcome {
    /// All five kinds were visited.
    Completed { sent: usize },
    /// The cycle was cut short by a transport failure after `sent` samples.
    Aborted { sent: usize, reason: String },
}

impl CycleOutcome {
    /// Number of samples delivered before the cycle ended.
    pub fn sent(&self) -> usize {
        match self {
            Self::Completed { sent } | Self::Aborted { sent, .. } => *sent,
        }
    }

    pub fn is_aborted(&self) -> bool {
        matches!(self, Self::Aborted { .. })
    }
}

/// Per-cycle parameters, derived from the reporter's state at cycle start.
#[derive(Debug, Clone)]
pub struct CycleParams<'a> {
    pub prefix: Option<&'a str>,
    pub filter: &'a MetricFilter,
    pub scale: &'a ScaleContext,
    /// Seconds since epoch, captured once for the whole cycle
    pub timestamp: u64,
    /// Interval stamped on every sample, in seconds
    pub interval: u64,
}

/// Run one reporting cycle: connect if needed, then visit kinds in the
/// fixed order gauges, counters, histograms, meters, timers, sending every
/// flattened sample.
pub async fn run_cycle<S, T>(source: &S, transport: &mut T, params: CycleParams<'_>) -> CycleOutcome
where
    S: MetricSource + ?Sized,
    T: Transport + ?Sized,
{
    let mut sent = 0;

    if !transport.is_connected() {
        if let Err(err) = transport.connect().await {
            tracing::warn!(
                endpoint = %transport.endpoint(),
                error = %err,
                "unable to connect to collectd, abandoning cycle"
            );
            return CycleOutcome::Aborted {
                sent,
                reason: err.to_string(),
            };
        }
    }

    for kind in MetricKind::ALL {
        for (name, metric) in source.snapshot(kind) {
            if !params.filter.accepts(&name, &metric) {
                continue;
            }
            let wire_name = metric_name(params.prefix, &[&name]);
            for sample in flatten(
                &wire_name,
                &metric,
                params.scale,
                params.timestamp,
                params.interval,
            ) {
                if let Err(err) = transport.send(&sample).await {
                    tracing::warn!(
                        endpoint = %transport.endpoint(),
                        metric = %wire_name,
                        error = %err,
                        "unable to report to collectd, abandoning cycle"
                    );
                    return CycleOutcome::Aborted {
                        sent,
                        reason: err.to_string(),
                    };
                }
                sent += 1;
            }
        }
    }

    tracing::debug!(sent, timestamp = params.timestamp, "reporting cycle complete");
    CycleOutcome::Completed { sent }
}
