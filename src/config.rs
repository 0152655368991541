//! Stream configuration constants and structures.
//!
//! [`StreamConfig`] controls the tunable parameters of an interpolation
//! stream: jitter buffer depth and catch-up behavior.

/// Default producer send rate the buffer depth is derived from.
pub const DEFAULT_SEND_RATE_HZ: f64 = 30.0;
/// Default buffer depth as a multiple of the send interval.
pub const DEFAULT_BUFFER_TIME_MULTIPLIER: f64 = 3.0;
/// Default buffered-snapshot count above which catch-up engages.
pub const DEFAULT_CATCHUP_THRESHOLD: usize = 4;
/// Default per-excess-snapshot cursor speed-up fraction.
pub const DEFAULT_CATCHUP_MULTIPLIER: f64 = 0.1;

/// Configuration validation error.
#[derive(Debug, Clone)]
pub enum ConfigError {
    InvalidBufferTime,
    InvalidCatchupMultiplier,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidBufferTime => {
                write!(f, "buffer_time must be finite and >= 0.0")
            }
            ConfigError::InvalidCatchupMultiplier => {
                write!(f, "catchup_multiplier must be finite and >= 0.0")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Tunable parameters for an interpolation stream.
#[derive(Debug, Clone)]
pub struct StreamConfig {
    /// Minimum local-clock age a snapshot must reach before it can serve as
    /// an interpolation endpoint, in seconds. This is the jitter buffer
    /// depth: larger values absorb more jitter at the cost of latency.
    pub buffer_time: f64,
    /// Buffered-snapshot count above which the cursor speeds up to drain
    /// the backlog.
    pub catchup_threshold: usize,
    /// Fractional cursor speed-up per snapshot over the threshold. Zero
    /// disables catch-up.
    pub catchup_multiplier: f64,
}

impl StreamConfig {
    /// Derive the buffer depth from the producer's send rate, covering
    /// [`DEFAULT_BUFFER_TIME_MULTIPLIER`] dropped or delayed sends.
    pub fn for_send_rate(send_rate_hz: f64) -> Self {
        Self {
            buffer_time: DEFAULT_BUFFER_TIME_MULTIPLIER / send_rate_hz,
            catchup_threshold: DEFAULT_CATCHUP_THRESHOLD,
            catchup_multiplier: DEFAULT_CATCHUP_MULTIPLIER,
        }
    }

    pub fn with_buffer_time(mut self, seconds: f64) -> Self {
        self.buffer_time = seconds;
        self
    }

    pub fn with_catchup(mut self, threshold: usize, multiplier: f64) -> Self {
        self.catchup_threshold = threshold;
        self.catchup_multiplier = multiplier;
        self
    }

    /// Validates the configuration, returning an error if any values are
    /// invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.buffer_time.is_finite() || self.buffer_time < 0.0 {
            return Err(ConfigError::InvalidBufferTime);
        }
        if !self.catchup_multiplier.is_finite() || self.catchup_multiplier < 0.0 {
            return Err(ConfigError::InvalidCatchupMultiplier);
        }
        Ok(())
    }
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self::for_send_rate(DEFAULT_SEND_RATE_HZ)
    }
}
