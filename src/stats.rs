use std::time::Duration;

/// Running lowest/average tracker for one timed phase of the run loop.
#[derive(Default)]
pub struct PhaseTimer {
    total: Duration,
    lowest: Option<Duration>,
    samples: u64,
}

impl PhaseTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, elapsed: Duration) {
        self.total += elapsed;
        self.lowest = Some(match self.lowest {
            Some(lowest) => lowest.min(elapsed),
            None => elapsed,
        });
        self.samples += 1;
    }

    /// Lowest recorded duration, in milliseconds.
    pub fn lowest_ms(&self) -> f64 {
        self.lowest.map(to_ms).unwrap_or(0.0)
    }

    /// Average over all recorded durations, in milliseconds.
    pub fn average_ms(&self) -> f64 {
        if self.samples == 0 {
            return 0.0;
        }

        to_ms(self.total) / self.samples as f64
    }
}

fn to_ms(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1_000.0
}
