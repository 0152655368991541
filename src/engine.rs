//! Stepping engine: advances the interpolation cursor once per local tick
//! and emits an interpolated snapshot from the front of the buffer.
//!
//! The engine passes through four derived states, none of them stored:
//! underfull (fewer than two snapshots), warming (second snapshot has not
//! aged past the jitter buffer), interpolating (cursor inside the front
//! segment), and overshoot (cursor past the newest segment, holding the
//! newest snapshot until more data arrives).

use crate::buffer::SnapshotBuffer;
use crate::snapshot::Snapshot;

/// Advance the interpolation cursor by one tick and sample the buffer.
///
/// `interpolation_time` is the local time elapsed since the front snapshot
/// became the interpolation origin; it is advanced by `delta_time` (scaled
/// by catch-up when the buffer holds more than `catchup_threshold` entries)
/// and reduced by each segment span the cursor crosses. Crossed segments are
/// popped from the front of `buffer`.
///
/// Returns `None` without touching the cursor while the buffer holds fewer
/// than two snapshots, or while the second snapshot is younger than
/// `buffer_time` on the local clock. Once the cursor runs past the newest
/// segment the newest snapshot is returned unchanged; the engine never
/// extrapolates.
///
/// `delta_time == 0.0` is legal and idempotent: the cursor stays put and the
/// previous sample is produced again. The cursor is never reset here; it
/// starts at whatever the caller passed in.
pub fn compute<S: Snapshot>(
    local_time: f64,
    delta_time: f64,
    interpolation_time: &mut f64,
    buffer_time: f64,
    buffer: &mut SnapshotBuffer<S>,
    catchup_threshold: usize,
    catchup_multiplier: f64,
) -> Option<S> {
    if buffer.len() < 2 {
        return None;
    }

    // Age gate on the local clock: the segment endpoint must have sat in
    // the buffer for at least buffer_time before it is safe to consume.
    if buffer.second()?.local_time() > local_time - buffer_time {
        return None;
    }

    let excess = buffer.len().saturating_sub(catchup_threshold);
    let effective_delta = delta_time * (1.0 + excess as f64 * catchup_multiplier);
    *interpolation_time += effective_delta;

    // Cross whole segments, keeping the front pair resident so there is
    // always a segment to sample.
    while buffer.len() >= 3 {
        let span = {
            let first = buffer.first()?;
            let second = buffer.second()?;
            second.remote_time() - first.remote_time()
        };
        if *interpolation_time < span {
            break;
        }
        *interpolation_time -= span;
        buffer.pop_front();
    }

    let first = buffer.first()?;
    let second = buffer.second()?;
    let span = second.remote_time() - first.remote_time();

    if *interpolation_time >= span {
        // Overshoot: hold the newest snapshot as-is. The cursor keeps its
        // surplus, which the next admitted snapshot consumes naturally.
        return Some(second.clone());
    }

    // Span is strictly positive by the buffer's ordering invariant.
    let t = *interpolation_time / span;
    Some(first.interpolate(second, t))
}
