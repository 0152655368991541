//! # Snapnet
//!
//! Snapshot interpolation for smooth client-side rendering in networked
//! games.
//!
//! A remote peer emits timestamped state samples at an irregular cadence
//! over a lossy, jitter-prone channel; snapnet reconstructs a smooth,
//! monotonically advancing stream of interpolated states suitable for
//! display. Snapshots sit in a small jitter buffer until they have aged
//! past a configurable depth, the engine interpolates between the two
//! oldest, and a bounded catch-up drains any backlog. The engine never
//! extrapolates past the newest sample: on starvation it holds the last
//! known state instead of guessing.
//!
//! ## Features
//!
//! - **Strict admission**: late or duplicate arrivals can never disturb the
//!   segment currently being interpolated
//! - **Local-clock jitter buffer**: peer clock offset cannot break buffering
//! - **Bounded catch-up**: the cursor accelerates proportionally to buffer
//!   excess, draining backlog without teleporting
//! - **No extrapolation**: starvation holds the newest snapshot as-is
//! - **Payload-agnostic**: any [`Snapshot`] impl interpolates; position and
//!   transform payloads ship ready-made
//!
//! ## Quick Start
//!
//! ```
//! use snapnet::prelude::*;
//!
//! let mut stream = InterpolationStream::new();
//!
//! // Arrivals from the network: remote timestamp, local timestamp, payload.
//! stream.push(PositionSnapshot::new(0.0, 0.0, [0.0, 0.0, 0.0]));
//! stream.push(PositionSnapshot::new(0.1, 0.1, [1.0, 0.0, 0.0]));
//!
//! // Once per frame: advance and render whatever comes out.
//! if let Some(state) = stream.step(1.0, 0.016) {
//!     println!("render at {:?}", state.position);
//! }
//! ```

pub mod buffer;
pub mod config;
pub mod engine;
pub mod simulator;
pub mod snapshot;
pub mod stats;
pub mod stream;
pub mod transform;


pub use buffer::SnapshotBuffer;
pub use config::{ConfigError, StreamConfig};
pub use engine::compute;
pub use simulator::{Arrival, FeedConfig, FeedSimulator};
pub use snapshot::Snapshot;
pub use stats::{assess_stream_health, StreamHealth, StreamStats};
pub use stream::InterpolationStream;
pub use transform::{PositionSnapshot, TransformSnapshot};

/// Prelude: import everything commonly needed.
pub mod prelude {
    pub use crate::{
        ConfigError, InterpolationStream, PositionSnapshot, Snapshot, SnapshotBuffer,
        StreamConfig, StreamHealth, StreamStats, TransformSnapshot,
    };
}
