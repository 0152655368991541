//! Ready-made snapshot types for the common game payloads: positions and
//! full transforms.

use crate::snapshot::Snapshot;

fn lerp3(a: [f32; 3], b: [f32; 3], t: f32) -> [f32; 3] {
    [
        a[0] + (b[0] - a[0]) * t,
        a[1] + (b[1] - a[1]) * t,
        a[2] + (b[2] - a[2]) * t,
    ]
}

/// Normalized quaternion lerp over the shortest arc, `[x, y, z, w]` layout.
fn nlerp(a: [f32; 4], mut b: [f32; 4], t: f32) -> [f32; 4] {
    let dot = a[0] * b[0] + a[1] * b[1] + a[2] * b[2] + a[3] * b[3];
    if dot < 0.0 {
        for c in &mut b {
            *c = -*c;
        }
    }
    let mut out = [
        a[0] + (b[0] - a[0]) * t,
        a[1] + (b[1] - a[1]) * t,
        a[2] + (b[2] - a[2]) * t,
        a[3] + (b[3] - a[3]) * t,
    ];
    let norm = (out[0] * out[0] + out[1] * out[1] + out[2] * out[2] + out[3] * out[3]).sqrt();
    if norm > f32::EPSILON {
        for c in &mut out {
            *c /= norm;
        }
        out
    } else {
        // Antipodal endpoints collapse the lerp; keep the origin rotation
        a
    }
}

/// A timestamped position sample with component-wise linear interpolation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionSnapshot {
    pub remote_time: f64,
    pub local_time: f64,
    pub position: [f32; 3],
}

impl PositionSnapshot {
    pub fn new(remote_time: f64, local_time: f64, position: [f32; 3]) -> Self {
        Self {
            remote_time,
            local_time,
            position,
        }
    }
}

impl Snapshot for PositionSnapshot {
    fn remote_time(&self) -> f64 {
        self.remote_time
    }

    fn local_time(&self) -> f64 {
        self.local_time
    }

    fn interpolate(&self, to: &Self, t: f64) -> Self {
        Self {
            remote_time: self.remote_time,
            local_time: self.local_time,
            position: lerp3(self.position, to.position, t as f32),
        }
    }
}

/// A timestamped transform sample: lerped position plus a unit quaternion
/// rotation blended with a shortest-arc normalized lerp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformSnapshot {
    pub remote_time: f64,
    pub local_time: f64,
    pub position: [f32; 3],
    /// Unit quaternion, `[x, y, z, w]`.
    pub rotation: [f32; 4],
}

impl TransformSnapshot {
    pub fn new(
        remote_time: f64,
        local_time: f64,
        position: [f32; 3],
        rotation: [f32; 4],
    ) -> Self {
        Self {
            remote_time,
            local_time,
            position,
            rotation,
        }
    }
}

impl Snapshot for TransformSnapshot {
    fn remote_time(&self) -> f64 {
        self.remote_time
    }

    fn local_time(&self) -> f64 {
        self.local_time
    }

    fn interpolate(&self, to: &Self, t: f64) -> Self {
        Self {
            remote_time: self.remote_time,
            local_time: self.local_time,
            position: lerp3(self.position, to.position, t as f32),
            rotation: nlerp(self.rotation, to.rotation, t as f32),
        }
    }
}
