use rand::Rng;
use std::ops::Range;
use std::time::Duration;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const CONTROLLER_PORT: u16 = 8080;

pub struct StreamerConfig {
    pub host: String,
    pub port: u16,
    pub connect_timeout: Duration,
    pub timing: StreamTiming,
}

impl StreamerConfig {
    /// Builds the config from compiled-in defaults plus an optional host
    /// override from the command line.
    pub fn new(host: Option<String>) -> Self {
        StreamerConfig {
            host: host.unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: CONTROLLER_PORT,
            connect_timeout: Duration::from_secs(10),
            timing: StreamTiming::default(),
        }
    }
}

/// Cadence and phase-length ranges of the stream. The cadence sleep is not
/// compensated for send latency, so the effective rate sits slightly under
/// `1 / cadence`, same as the receiving app sees from a real remote.
#[derive(Clone)]
pub struct StreamTiming {
    pub cadence: Duration,
    pub hold_secs: Range<f64>,
    pub pause_secs: Range<f64>,
}

impl Default for StreamTiming {
    fn default() -> Self {
        StreamTiming {
            cadence: Duration::from_millis(200),
            hold_secs: 1.0..3.0,
            pause_secs: 1.0..2.0,
        }
    }
}

impl StreamTiming {
    /// Draws a random hold duration for the next active phase.
    pub fn hold(&self) -> Duration {
        Duration::from_secs_f64(rand::rng().random_range(self.hold_secs.clone()))
    }

    /// Draws a random pause duration for the next still phase.
    pub fn pause(&self) -> Duration {
        Duration::from_secs_f64(rand::rng().random_range(self.pause_secs.clone()))
    }
}
