//! The seam between the reporter and the metrics registry.
//!
//! The registry itself lives elsewhere; the reporter only ever sees it
//! through [`MetricSource`], one identifier-sorted snapshot per kind per
//! cycle.

use crate::metrics::{MetricKind, MetricSnapshot};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Snapshot interface the reporter consumes from the registry.
///
/// The returned map is materialized fresh for each call and discarded after
/// the cycle completes. `BTreeMap` supplies the identifier-sorted iteration
/// order the reporting contract requires.
pub trait MetricSource: Send + Sync {
    fn snapshot(&self, kind: MetricKind) -> BTreeMap<String, MetricSnapshot>;
}

impl<S: MetricSource + ?Sized> MetricSource for Arc<S> {
    fn snapshot(&self, kind: MetricKind) -> BTreeMap<String, MetricSnapshot> {
        (**self).snapshot(kind)
    }
}

/// Predicate deciding which metrics a cycle reports.
#[derive(Clone)]
pub struct MetricFilter(Arc<dyn Fn(&str, &MetricSnapshot) -> bool + Send + Sync>);

impl MetricFilter {
    /// A filter accepting every metric. This is the default.
    pub fn accept_all() -> Self {
        Self(Arc::new(|_, _| true))
    }

    /// Build a filter from a predicate over (identifier, state).
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&str, &MetricSnapshot) -> bool + Send + Sync + 'static,
    {
        Self(Arc::new(predicate))
    }

    pub fn accepts(&self, name: &str, metric: &MetricSnapshot) -> bool {
        (self.0)(name, metric)
    }
}

impl Default for MetricFilter {
    fn default() -> Self {
        Self::accept_all()
    }
}

impl fmt::Debug for MetricFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("MetricFilter")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::GaugeValue;

    #[test]
    fn test_accept_all() {
        let filter = MetricFilter::default();
        assert!(filter.accepts("anything", &MetricSnapshot::Counter(0)));
    }

    #[test]
    fn test_custom_predicate() {
        let filter = MetricFilter::new(|name, _| name.starts_with("jvm."));
        assert!(filter.accepts("jvm.threads", &MetricSnapshot::Counter(1)));
        assert!(!filter.accepts(
            "http.requests",
            &MetricSnapshot::Gauge(GaugeValue::from(1.0))
        ));
    }
}
