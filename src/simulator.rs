//! Feed simulator for testing: a producer emitting snapshots at a fixed
//! cadence across a link with latency, jitter, packet loss, and duplicates.
//!
//! Runs on a pure `f64` clock so interpolation behavior can be exercised in
//! tests, benches, and demos without sockets or wall time. Jitter makes
//! deliveries arrive out of order, which is exactly what the buffer's
//! admission rules must absorb.

use rand::Rng;

/// Configuration for the simulated producer and link.
#[derive(Debug, Clone)]
pub struct FeedConfig {
    /// Seconds between producer sends.
    pub send_interval: f64,
    /// Base one-way latency in seconds.
    pub latency: f64,
    /// Maximum extra delivery delay in seconds, drawn uniformly per send.
    pub jitter: f64,
    /// Probability in `[0, 1]` that a send is dropped.
    pub packet_loss: f32,
    /// Probability in `[0, 1]` that a send is delivered twice.
    pub duplicate_chance: f32,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            send_interval: 1.0 / 30.0,
            latency: 0.05,
            jitter: 0.0,
            packet_loss: 0.0,
            duplicate_chance: 0.0,
        }
    }
}

/// A snapshot arrival: the producer-clock time it describes and the
/// consumer-clock time it was delivered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arrival {
    pub remote_time: f64,
    pub local_time: f64,
}

/// Simulates a remote producer feeding snapshots across an imperfect link.
#[derive(Debug)]
pub struct FeedSimulator {
    config: FeedConfig,
    in_flight: Vec<Arrival>,
    next_send: f64,
}

impl FeedSimulator {
    pub fn new(config: FeedConfig) -> Self {
        Self {
            config,
            in_flight: Vec::new(),
            next_send: 0.0,
        }
    }

    /// Advance the simulation to `local_time` and collect every arrival
    /// delivered by then. Arrivals are returned in delivery order, which
    /// under jitter is not send order.
    pub fn poll(&mut self, local_time: f64) -> Vec<Arrival> {
        let mut rng = rand::rng();

        // Emit sends whose producer-clock time has passed
        while self.next_send <= local_time {
            let remote_time = self.next_send;
            self.next_send += self.config.send_interval;

            if self.config.packet_loss > 0.0 && rng.random::<f32>() < self.config.packet_loss {
                continue;
            }

            let jitter = if self.config.jitter > 0.0 {
                rng.random_range(0.0..self.config.jitter)
            } else {
                0.0
            };
            let deliver_at = remote_time + self.config.latency + jitter;
            self.in_flight.push(Arrival {
                remote_time,
                local_time: deliver_at,
            });

            if self.config.duplicate_chance > 0.0
                && rng.random::<f32>() < self.config.duplicate_chance
            {
                let extra = if self.config.jitter > 0.0 {
                    rng.random_range(0.0..self.config.jitter)
                } else {
                    0.0
                };
                self.in_flight.push(Arrival {
                    remote_time,
                    local_time: deliver_at + extra,
                });
            }
        }

        // Drain deliveries that are due, earliest first
        self.in_flight
            .sort_by(|a, b| a.local_time.total_cmp(&b.local_time));
        let due = self
            .in_flight
            .iter()
            .take_while(|a| a.local_time <= local_time)
            .count();
        self.in_flight.drain(..due).collect()
    }

    /// Sends emitted but not yet delivered.
    pub fn pending_count(&self) -> usize {
        self.in_flight.len()
    }
}
