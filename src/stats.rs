//! Stream statistics: admission and stepping counters with a coarse
//! health assessment.

/// Stream health indicator.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum StreamHealth {
    #[default]
    Good,
    Fair,
    Poor,
}

/// Rejection ratio (0.0-1.0) below which a stream is considered Good.
pub const GOOD_REJECT_RATIO: f32 = 0.05;
/// Stall ratio (0.0-1.0) below which a stream is considered Good.
pub const GOOD_STALL_RATIO: f32 = 0.02;
/// Rejection ratio below which a stream is considered Fair (above Good).
pub const FAIR_REJECT_RATIO: f32 = 0.15;
/// Stall ratio below which a stream is considered Fair (above Good).
pub const FAIR_STALL_RATIO: f32 = 0.10;

/// Assesses stream health from the admission rejection ratio and the
/// fraction of applied steps spent stalled at the newest snapshot.
pub fn assess_stream_health(reject_ratio: f32, stall_ratio: f32) -> StreamHealth {
    if reject_ratio < GOOD_REJECT_RATIO && stall_ratio < GOOD_STALL_RATIO {
        StreamHealth::Good
    } else if reject_ratio < FAIR_REJECT_RATIO && stall_ratio < FAIR_STALL_RATIO {
        StreamHealth::Fair
    } else {
        StreamHealth::Poor
    }
}

/// Cumulative counters for a single interpolation stream.
#[derive(Debug, Default, Clone)]
pub struct StreamStats {
    /// Snapshots admitted into the buffer.
    pub snapshots_admitted: u64,
    /// Snapshots rejected as stale or unsafe.
    pub snapshots_rejected: u64,
    /// Steps that produced an interpolated snapshot.
    pub steps_applied: u64,
    /// Steps that produced nothing (buffer underfull or still warming).
    pub steps_waiting: u64,
    /// Applied steps that held the newest snapshot instead of interpolating.
    pub overshoot_steps: u64,
    /// Applied steps taken with catch-up engaged.
    pub catchup_steps: u64,
    /// Buffer segments crossed and consumed by the cursor.
    pub segments_crossed: u64,
}

impl StreamStats {
    /// Fraction of incoming snapshots that were rejected.
    pub fn reject_ratio(&self) -> f32 {
        let total = self.snapshots_admitted + self.snapshots_rejected;
        if total == 0 {
            0.0
        } else {
            self.snapshots_rejected as f32 / total as f32
        }
    }

    /// Fraction of applied steps spent stalled at the newest snapshot.
    pub fn stall_ratio(&self) -> f32 {
        if self.steps_applied == 0 {
            0.0
        } else {
            self.overshoot_steps as f32 / self.steps_applied as f32
        }
    }

    /// Coarse health classification of this stream.
    pub fn health(&self) -> StreamHealth {
        assess_stream_health(self.reject_ratio(), self.stall_ratio())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_thresholds() {
        assert_eq!(assess_stream_health(0.01, 0.0), StreamHealth::Good);
        assert_eq!(assess_stream_health(0.10, 0.05), StreamHealth::Fair);
        assert_eq!(assess_stream_health(0.30, 0.25), StreamHealth::Poor);
    }

    #[test]
    fn test_ratios_guard_against_empty_counters() {
        let stats = StreamStats::default();
        assert_eq!(stats.reject_ratio(), 0.0);
        assert_eq!(stats.stall_ratio(), 0.0);
        assert_eq!(stats.health(), StreamHealth::Good);
    }

    #[test]
    fn test_reject_ratio() {
        let stats = StreamStats {
            snapshots_admitted: 90,
            snapshots_rejected: 10,
            ..Default::default()
        };
        assert!((stats.reject_ratio() - 0.1).abs() < 1e-6);
        assert_eq!(stats.health(), StreamHealth::Fair);
    }
}
