//! Smooth client demo: a simulated remote peer orbits the origin and sends
//! position snapshots across a lossy, jittery link; the stream reconstructs
//! a smooth view on the consumer side.
//!
//! Run with: `cargo run --example smooth_client`

use snapnet::prelude::*;
use snapnet::simulator::{FeedConfig, FeedSimulator};

fn main() {
    let config = StreamConfig::for_send_rate(20.0);
    let mut stream = InterpolationStream::with_config(config).expect("valid config");

    let mut feed = FeedSimulator::new(FeedConfig {
        send_interval: 0.05,
        latency: 0.08,
        jitter: 0.03,
        packet_loss: 0.05,
        duplicate_chance: 0.02,
    });

    let dt = 1.0 / 60.0;
    for frame in 0..600u32 {
        let local_time = frame as f64 * dt;

        for arrival in feed.poll(local_time) {
            let position = [
                arrival.remote_time.sin() as f32,
                0.0,
                arrival.remote_time.cos() as f32,
            ];
            stream.push(PositionSnapshot::new(
                arrival.remote_time,
                arrival.local_time,
                position,
            ));
        }

        if let Some(state) = stream.step(local_time, dt) {
            if frame % 30 == 0 {
                println!(
                    "t={:5.2}s  x={:+.3}  z={:+.3}  buffered={}",
                    local_time,
                    state.position[0],
                    state.position[2],
                    stream.len()
                );
            }
        }
    }

    let stats = stream.stats();
    println!(
        "admitted={} rejected={} applied={} waiting={} stalled={} health={:?}",
        stats.snapshots_admitted,
        stats.snapshots_rejected,
        stats.steps_applied,
        stats.steps_waiting,
        stats.overshoot_steps,
        stats.health()
    );
}
