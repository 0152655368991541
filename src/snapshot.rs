//! Snapshot contract for interpolation.
//!
//! A [`Snapshot`] is a timestamped sample of remote state that knows how to
//! interpolate toward another sample of the same type.

/// A timestamped sample of remote state.
///
/// `remote_time` is the producer's clock reading for the sample and drives
/// buffer ordering. `local_time` is the consumer's clock reading at arrival
/// and drives only the jitter-buffer age gate, so clock offset between peers
/// never breaks buffering.
///
/// Implementations choose their own payload interpolation (component-wise
/// lerp for vectors, normalized lerp for rotations). The stepping engine
/// treats `t = 0` as `self` and `t = 1` as `to`, and never calls with `t`
/// outside `[0, 1]`.
pub trait Snapshot: Clone {
    /// Producer-clock time this sample describes, in seconds.
    fn remote_time(&self) -> f64;

    /// Consumer-clock time this sample arrived, in seconds.
    fn local_time(&self) -> f64;

    /// Interpolate the payload toward `to` by factor `t`.
    ///
    /// Timestamps on the returned snapshot are unspecified and must not be
    /// consumed.
    fn interpolate(&self, to: &Self, t: f64) -> Self;
}
