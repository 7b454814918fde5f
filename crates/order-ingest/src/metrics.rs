//! # Order Metrics
//!
//! [`MetricsRecorder`] owns the two business instruments of the order pipeline:
//!
//! - `orders_created_total` - monotonic counter of successfully stored orders
//! - `order_value_amount` - distribution of the amount of each stored order
//!
//! Values are kept in-process so an exporter can pull a [`MetricsSnapshot`] whenever it
//! wants (the recorder never pushes). The [`global`](MetricsRecorder::global) recorder
//! also forwards every sample to the [`metrics`] facade, labelled with
//! `meter="Orion.Orders"`. When the host installs a recorder for that facade (e.g. a
//! Prometheus exporter) the same instruments show up there; without one the forwarding
//! is a no-op. Recorders built with [`new`](MetricsRecorder::new) stay private to their
//! owner, so separate systems in one process never mix their totals.
//!
//! ## Memory Ordering
//!
//! The distribution sits behind a [`parking_lot::Mutex`]. The counter is an `AtomicU64`
//! that is only bumped while that lock is held, and [`MetricsRecorder::snapshot`] reads
//! it under the same guard, so a snapshot always has
//! `orders_created_total == order_value.count`. [`MetricsRecorder::orders_created`]
//! reads the counter without locking.

use parking_lot::Mutex;
use serde::Serialize;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, OnceLock};

/// Meter/scope name the instruments belong to. Sent as the `meter` label on the facade.
pub const METER_NAME: &str = "Orion.Orders";
pub const ORDERS_CREATED_TOTAL: &str = "orders_created_total";
pub const ORDER_VALUE_AMOUNT: &str = "order_value_amount";

/// Upper bounds (inclusive) of the default value buckets. `+Inf` is implicit.
pub const DEFAULT_VALUE_BUCKETS: [f64; 12] = [
    1.0, 5.0, 10.0, 25.0, 50.0, 100.0, 250.0, 500.0, 1_000.0, 2_500.0, 5_000.0, 10_000.0,
];

static GLOBAL: OnceLock<Arc<MetricsRecorder>> = OnceLock::new();

/// Counter plus value distribution for created orders.
#[derive(Debug)]
pub struct MetricsRecorder {
    orders_created: AtomicU64,
    order_value: Mutex<Distribution>,
    forward_to_facade: bool,
}

impl Default for MetricsRecorder {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsRecorder {
    /// A fresh recorder with [`DEFAULT_VALUE_BUCKETS`].
    pub fn new() -> Self {
        Self::with_buckets(DEFAULT_VALUE_BUCKETS.to_vec())
    }

    /// A fresh recorder with custom bucket bounds. Non-finite bounds are dropped and the
    /// rest sorted and deduplicated.
    pub fn with_buckets(mut bounds: Vec<f64>) -> Self {
        bounds.retain(|b| b.is_finite());
        bounds.sort_by(f64::total_cmp);
        bounds.dedup();
        Self {
            orders_created: AtomicU64::new(0),
            order_value: Mutex::new(Distribution::new(bounds)),
            forward_to_facade: false,
        }
    }

    /// The process-wide recorder. Initialised on first use; every caller gets the same
    /// instance, so concurrent first calls cannot create the instruments twice.
    ///
    /// This is the only recorder that forwards to the [`metrics`] facade.
    pub fn global() -> Arc<MetricsRecorder> {
        GLOBAL
            .get_or_init(|| {
                describe_instruments();
                Arc::new(MetricsRecorder {
                    forward_to_facade: true,
                    ..MetricsRecorder::new()
                })
            })
            .clone()
    }

    /// Counts one created order and records its amount.
    ///
    /// `amount` must be finite and non-negative. Validation belongs to the caller; this
    /// method does not fail.
    pub fn record_creation(&self, amount: f64) {
        debug_assert!(amount.is_finite() && amount >= 0.0, "unvalidated amount {amount}");

        {
            let mut order_value = self.order_value.lock();
            self.orders_created.fetch_add(1, Ordering::SeqCst);
            order_value.record(amount);
        }

        if self.forward_to_facade {
            ::metrics::counter!(ORDERS_CREATED_TOTAL, "meter" => METER_NAME).increment(1);
            ::metrics::histogram!(ORDER_VALUE_AMOUNT, "meter" => METER_NAME).record(amount);
        }
    }

    /// Current value of `orders_created_total`.
    pub fn orders_created(&self) -> u64 {
        self.orders_created.load(Ordering::SeqCst)
    }

    /// Both instruments as of one instant. The counter always equals the sample count.
    pub fn snapshot(&self) -> MetricsSnapshot {
        let order_value = self.order_value.lock();
        MetricsSnapshot {
            orders_created_total: self.orders_created.load(Ordering::SeqCst),
            order_value: order_value.snapshot(),
        }
    }
}

fn describe_instruments() {
    ::metrics::describe_counter!(
        ORDERS_CREATED_TOTAL,
        ::metrics::Unit::Count,
        "Orders successfully created"
    );
    ::metrics::describe_histogram!(ORDER_VALUE_AMOUNT, "Amount of each created order");
}

#[derive(Debug)]
struct Distribution {
    bounds: Vec<f64>,
    // One slot per bound plus the trailing +Inf slot. Not cumulative.
    counts: Vec<u64>,
    count: u64,
    sum: f64,
    min: f64,
    max: f64,
}

impl Distribution {
    fn new(bounds: Vec<f64>) -> Self {
        let counts = vec![0; bounds.len() + 1];
        Self {
            bounds,
            counts,
            count: 0,
            sum: 0.0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }

    fn record(&mut self, value: f64) {
        let slot = self.bounds.partition_point(|bound| *bound < value);
        self.counts[slot] += 1;
        self.count += 1;
        self.sum += value;
        self.min = self.min.min(value);
        self.max = self.max.max(value);
    }

    fn snapshot(&self) -> DistributionSnapshot {
        let mut cumulative = 0;
        let buckets = self
            .bounds
            .iter()
            .copied()
            .chain(std::iter::once(f64::INFINITY))
            .zip(&self.counts)
            .map(|(le, count)| {
                cumulative += count;
                Bucket {
                    le,
                    count: cumulative,
                }
            })
            .collect();

        let seen = self.count > 0;
        DistributionSnapshot {
            count: self.count,
            sum: self.sum,
            min: seen.then_some(self.min),
            max: seen.then_some(self.max),
            buckets,
        }
    }
}

/// One cumulative histogram bucket: samples `<= le`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bucket {
    pub le: f64,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistributionSnapshot {
    pub count: u64,
    pub sum: f64,
    pub min: Option<f64>,
    pub max: Option<f64>,
    /// Cumulative buckets in ascending order; the last one is `+Inf` and equals `count`.
    pub buckets: Vec<Bucket>,
}

impl DistributionSnapshot {
    pub fn mean(&self) -> Option<f64> {
        (self.count > 0).then(|| self.sum / self.count as f64)
    }
}

/// Point-in-time copy of both instruments.
///
/// `Display` renders the Prometheus text exposition format.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsSnapshot {
    pub orders_created_total: u64,
    pub order_value: DistributionSnapshot,
}

impl MetricsSnapshot {
    pub fn render_prometheus(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for MetricsSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# HELP {ORDERS_CREATED_TOTAL} Orders successfully created.")?;
        writeln!(f, "# TYPE {ORDERS_CREATED_TOTAL} counter")?;
        writeln!(f, "{ORDERS_CREATED_TOTAL} {}", self.orders_created_total)?;

        writeln!(f, "# HELP {ORDER_VALUE_AMOUNT} Amount of each created order.")?;
        writeln!(f, "# TYPE {ORDER_VALUE_AMOUNT} histogram")?;
        for bucket in &self.order_value.buckets {
            if bucket.le.is_infinite() {
                writeln!(f, "{ORDER_VALUE_AMOUNT}_bucket{{le=\"+Inf\"}} {}", bucket.count)?;
            } else {
                writeln!(f, "{ORDER_VALUE_AMOUNT}_bucket{{le=\"{}\"}} {}", bucket.le, bucket.count)?;
            }
        }
        writeln!(f, "{ORDER_VALUE_AMOUNT}_sum {}", self.order_value.sum)?;
        writeln!(f, "{ORDER_VALUE_AMOUNT}_count {}", self.order_value.count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicBool;
    use std::thread;

    #[test]
    fn test_empty_recorder() {
        let snapshot = MetricsRecorder::new().snapshot();
        assert_eq!(snapshot.orders_created_total, 0);
        assert_eq!(snapshot.order_value.count, 0);
        assert_eq!(snapshot.order_value.min, None);
        assert_eq!(snapshot.order_value.mean(), None);
        assert_eq!(snapshot.order_value.buckets.len(), DEFAULT_VALUE_BUCKETS.len() + 1);
        assert!(snapshot.order_value.buckets.iter().all(|b| b.count == 0));
    }

    #[test]
    fn test_record_creation_updates_both_instruments() {
        let recorder = MetricsRecorder::with_buckets(vec![10.0, 50.0]);
        recorder.record_creation(42.5);
        recorder.record_creation(10.0);
        recorder.record_creation(75.0);

        let snapshot = recorder.snapshot();
        assert_eq!(snapshot.orders_created_total, 3);
        assert_eq!(snapshot.order_value.count, 3);
        assert_eq!(snapshot.order_value.sum, 127.5);
        assert_eq!(snapshot.order_value.min, Some(10.0));
        assert_eq!(snapshot.order_value.max, Some(75.0));
        // Bounds are inclusive: 10.0 lands in le="10".
        assert_eq!(
            snapshot.order_value.buckets,
            vec![
                Bucket { le: 10.0, count: 1 },
                Bucket { le: 50.0, count: 2 },
                Bucket { le: f64::INFINITY, count: 3 },
            ]
        );
    }

    #[test]
    fn test_bucket_bounds_are_normalised() {
        let recorder = MetricsRecorder::with_buckets(vec![5.0, f64::NAN, 1.0, 5.0, f64::INFINITY]);
        let les: Vec<f64> = recorder
            .snapshot()
            .order_value
            .buckets
            .iter()
            .map(|b| b.le)
            .collect();
        assert_eq!(les, vec![1.0, 5.0, f64::INFINITY]);
    }

    #[test]
    fn test_concurrent_recording_loses_nothing() {
        let recorder = Arc::new(MetricsRecorder::new());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let recorder = recorder.clone();
                thread::spawn(move || {
                    for _ in 0..1_000 {
                        recorder.record_creation(2.0);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let snapshot = recorder.snapshot();
        assert_eq!(snapshot.orders_created_total, 8_000);
        assert_eq!(snapshot.order_value.count, 8_000);
        assert_eq!(snapshot.order_value.sum, 16_000.0);
    }

    #[test]
    fn test_snapshot_never_splits_a_recording() {
        let recorder = Arc::new(MetricsRecorder::new());
        let done = Arc::new(AtomicBool::new(false));

        let writers: Vec<_> = (0..4)
            .map(|_| {
                let recorder = recorder.clone();
                let done = done.clone();
                thread::spawn(move || {
                    while !done.load(Ordering::Relaxed) {
                        recorder.record_creation(1.0);
                    }
                })
            })
            .collect();

        let mut torn = 0;
        for _ in 0..20_000 {
            let snapshot = recorder.snapshot();
            if snapshot.orders_created_total != snapshot.order_value.count {
                torn += 1;
            }
        }
        done.store(true, Ordering::Relaxed);
        for writer in writers {
            writer.join().unwrap();
        }

        assert_eq!(torn, 0, "snapshots saw the counter and distribution disagree");
        let last = recorder.snapshot();
        assert_eq!(last.orders_created_total, last.order_value.count);
    }

    #[test]
    fn test_global_is_a_single_instance() {
        assert!(Arc::ptr_eq(&MetricsRecorder::global(), &MetricsRecorder::global()));
    }

    #[test]
    fn test_only_global_forwards_to_facade() {
        assert!(MetricsRecorder::global().forward_to_facade);
        assert!(!MetricsRecorder::new().forward_to_facade);
        assert!(!MetricsRecorder::with_buckets(vec![1.0]).forward_to_facade);
    }

    #[test]
    fn test_prometheus_rendering() {
        let recorder = MetricsRecorder::with_buckets(vec![1.0, 2.5]);
        recorder.record_creation(2.0);

        let text = recorder.snapshot().render_prometheus();
        assert!(text.contains("# TYPE orders_created_total counter\norders_created_total 1\n"));
        assert!(text.contains("order_value_amount_bucket{le=\"1\"} 0\n"));
        assert!(text.contains("order_value_amount_bucket{le=\"2.5\"} 1\n"));
        assert!(text.contains("order_value_amount_bucket{le=\"+Inf\"} 1\n"));
        assert!(text.contains("order_value_amount_sum 2\n"));
        assert!(text.ends_with("order_value_amount_count 1\n"));
    }
}
