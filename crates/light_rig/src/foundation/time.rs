//! Time management utilities

use std::time::Instant;

/// Elapsed-time source for the render loop
///
/// Realtime clocks read the wall clock; fixed-step clocks advance by a
/// constant amount per sample, which keeps headless runs deterministic.
#[derive(Debug, Clone)]
pub struct Clock {
    source: ClockSource,
    samples: u64,
}

#[derive(Debug, Clone)]
enum ClockSource {
    Realtime(Instant),
    FixedStep(f32),
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock {
    /// Create a clock that starts now
    pub fn new() -> Self {
        Self {
            source: ClockSource::Realtime(Instant::now()),
            samples: 0,
        }
    }

    /// Create a clock that advances `step` seconds per sample
    pub fn fixed_step(step: f32) -> Self {
        Self {
            source: ClockSource::FixedStep(step),
            samples: 0,
        }
    }

    /// Seconds since the clock started
    ///
    /// A fixed-step clock reports `step * n` for the n-th sample, starting at zero.
    pub fn elapsed_secs(&mut self) -> f32 {
        let elapsed = match self.source {
            ClockSource::Realtime(start) => start.elapsed().as_secs_f32(),
            ClockSource::FixedStep(step) => step * self.samples as f32,
        };
        self.samples += 1;
        elapsed
    }

    /// Number of times the clock has been sampled
    pub fn samples(&self) -> u64 {
        self.samples
    }

    /// Restart from zero
    pub fn reset(&mut self) {
        if let ClockSource::Realtime(start) = &mut self.source {
            *start = Instant::now();
        }
        self.samples = 0;
    }
}
