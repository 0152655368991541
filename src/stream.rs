//! Consumer-facing interpolation stream.
//!
//! [`InterpolationStream`] owns the ordered buffer, the interpolation
//! cursor, and the stream configuration, and keeps counters for
//! observability. It is sugar over the raw primitives in [`crate::buffer`]
//! and [`crate::engine`]; callers that need to own the cursor themselves can
//! use those directly.

use crate::buffer::SnapshotBuffer;
use crate::config::{ConfigError, StreamConfig};
use crate::engine::compute;
use crate::snapshot::Snapshot;
use crate::stats::StreamStats;

/// Reconstructs a smooth stream of interpolated snapshots from irregular,
/// jittered arrivals.
///
/// Feed arrivals in with [`push`](Self::push) as they come off the network,
/// and call [`step`](Self::step) once per local tick. The stream assumes
/// serial access; wrap it in a lock if arrivals come from another thread.
#[derive(Debug, Clone)]
pub struct InterpolationStream<S: Snapshot> {
    buffer: SnapshotBuffer<S>,
    interpolation_time: f64,
    config: StreamConfig,
    stats: StreamStats,
}

impl<S: Snapshot> InterpolationStream<S> {
    /// Create a stream with the default configuration.
    pub fn new() -> Self {
        Self {
            buffer: SnapshotBuffer::new(),
            interpolation_time: 0.0,
            config: StreamConfig::default(),
            stats: StreamStats::default(),
        }
    }

    /// Create a stream with a custom, validated configuration.
    pub fn with_config(config: StreamConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            buffer: SnapshotBuffer::new(),
            interpolation_time: 0.0,
            config,
            stats: StreamStats::default(),
        })
    }

    /// Offer an incoming snapshot to the buffer. Stale or unsafe snapshots
    /// are dropped silently; the return value reports admission.
    pub fn push(&mut self, snapshot: S) -> bool {
        let admitted = self.buffer.insert_if_new_enough(snapshot);
        if admitted {
            self.stats.snapshots_admitted += 1;
        } else {
            self.stats.snapshots_rejected += 1;
        }
        admitted
    }

    /// Advance the stream by one tick and sample it.
    ///
    /// Returns `None` while the buffer is underfull or still warming; the
    /// caller keeps displaying its previous state in that case.
    pub fn step(&mut self, local_time: f64, delta_time: f64) -> Option<S> {
        let len_before = self.buffer.len();
        let catching_up = len_before > self.config.catchup_threshold;

        let result = compute(
            local_time,
            delta_time,
            &mut self.interpolation_time,
            self.config.buffer_time,
            &mut self.buffer,
            self.config.catchup_threshold,
            self.config.catchup_multiplier,
        );

        match &result {
            Some(_) => {
                self.stats.steps_applied += 1;
                self.stats.segments_crossed += (len_before - self.buffer.len()) as u64;
                if catching_up {
                    self.stats.catchup_steps += 1;
                }
                if let (Some(first), Some(second)) = (self.buffer.first(), self.buffer.second()) {
                    let span = second.remote_time() - first.remote_time();
                    if self.interpolation_time >= span {
                        self.stats.overshoot_steps += 1;
                    }
                }
            }
            None => self.stats.steps_waiting += 1,
        }
        result
    }

    /// Whether enough snapshots are buffered to form a segment.
    pub fn ready(&self) -> bool {
        self.buffer.len() >= 2
    }

    /// Number of buffered snapshots.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Whether the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Current interpolation cursor: local time elapsed since the front
    /// snapshot became the interpolation origin.
    pub fn interpolation_time(&self) -> f64 {
        self.interpolation_time
    }

    pub fn config(&self) -> &StreamConfig {
        &self.config
    }

    /// Cumulative counters. These survive [`reset`](Self::reset).
    pub fn stats(&self) -> &StreamStats {
        &self.stats
    }

    /// Read access to the underlying buffer.
    pub fn buffer(&self) -> &SnapshotBuffer<S> {
        &self.buffer
    }

    /// Drop all buffered snapshots and rewind the cursor, e.g. on teleport
    /// or reconnect. Counters are kept.
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.interpolation_time = 0.0;
    }
}

impl<S: Snapshot> Default for InterpolationStream<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Scalar {
        remote: f64,
        local: f64,
        value: f64,
    }

    impl Snapshot for Scalar {
        fn remote_time(&self) -> f64 {
            self.remote
        }
        fn local_time(&self) -> f64 {
            self.local
        }
        fn interpolate(&self, to: &Self, t: f64) -> Self {
            Self {
                remote: self.remote,
                local: self.local,
                value: self.value + (to.value - self.value) * t,
            }
        }
    }

    fn scalar(remote: f64, value: f64) -> Scalar {
        Scalar {
            remote,
            local: remote,
            value,
        }
    }

    #[test]
    fn test_push_counts_admission_outcome() {
        let mut stream = InterpolationStream::new();
        assert!(stream.push(scalar(1.0, 1.0)));
        assert!(!stream.push(scalar(0.5, 0.5)));
        assert_eq!(stream.stats().snapshots_admitted, 1);
        assert_eq!(stream.stats().snapshots_rejected, 1);
    }

    #[test]
    fn test_step_waits_then_applies() {
        let config = StreamConfig::default().with_buffer_time(0.1);
        let mut stream = InterpolationStream::with_config(config).unwrap();

        assert!(stream.step(0.0, 0.016).is_none());
        stream.push(scalar(0.0, 0.0));
        stream.push(scalar(1.0, 10.0));

        let out = stream.step(2.0, 0.5).unwrap();
        assert!((out.value - 5.0).abs() < 1e-9);
        assert_eq!(stream.stats().steps_waiting, 1);
        assert_eq!(stream.stats().steps_applied, 1);
    }

    #[test]
    fn test_overshoot_is_counted() {
        let config = StreamConfig::default().with_buffer_time(0.1);
        let mut stream = InterpolationStream::with_config(config).unwrap();
        stream.push(scalar(0.0, 0.0));
        stream.push(scalar(1.0, 10.0));

        let out = stream.step(5.0, 2.0).unwrap();
        assert!((out.value - 10.0).abs() < 1e-9);
        assert_eq!(stream.stats().overshoot_steps, 1);
    }

    #[test]
    fn test_invalid_config_is_refused() {
        let config = StreamConfig::default().with_buffer_time(f64::INFINITY);
        assert!(InterpolationStream::<Scalar>::with_config(config).is_err());
    }

    #[test]
    fn test_reset_clears_buffer_and_cursor_but_keeps_stats() {
        let config = StreamConfig::default().with_buffer_time(0.1);
        let mut stream = InterpolationStream::with_config(config).unwrap();
        stream.push(scalar(0.0, 0.0));
        stream.push(scalar(1.0, 10.0));
        stream.step(2.0, 0.5);

        stream.reset();
        assert!(stream.is_empty());
        assert_eq!(stream.interpolation_time(), 0.0);
        assert_eq!(stream.stats().steps_applied, 1);
    }
}
