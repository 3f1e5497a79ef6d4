//! Frame schedulers.

use std::thread;
use std::time::{Duration, Instant};

/// Source of frame ticks.
///
/// Each call blocks until the next frame is due and returns the elapsed
/// milliseconds for that frame, or `None` once the schedule is exhausted.
pub trait Scheduler {
    fn next_tick(&mut self) -> Option<f64>;
}

/// Real-time scheduler firing at a fixed frame rate.
#[derive(Debug)]
pub struct IntervalScheduler {
    start: Instant,
    interval: Duration,
    next_due: Instant,
    remaining: Option<u64>,
}

impl IntervalScheduler {
    /// Tick `fps` times per second, forever. An `fps` of 0 is treated as 1.
    pub fn new(fps: u32) -> Self {
        let start = Instant::now();
        Self {
            start,
            interval: frame_interval(fps),
            next_due: start,
            remaining: None,
        }
    }

    /// Stop after `frames` ticks.
    pub fn with_frame_limit(mut self, frames: u64) -> Self {
        self.remaining = Some(frames);
        self
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}

impl Scheduler for IntervalScheduler {
    fn next_tick(&mut self) -> Option<f64> {
        if let Some(remaining) = self.remaining.as_mut() {
            if *remaining == 0 {
                return None;
            }
            *remaining -= 1;
        }

        let now = Instant::now();
        if self.next_due > now {
            thread::sleep(self.next_due - now);
        }

        // Drop missed frames rather than bursting to catch up
        let now = Instant::now();
        self.next_due += self.interval;
        if self.next_due < now {
            self.next_due = now + self.interval;
        }

        Some(now.duration_since(self.start).as_secs_f64() * 1000.0)
    }
}

/// Synthetic clock that advances a fixed step per tick without sleeping.
#[derive(Debug, Clone)]
pub struct FixedStepScheduler {
    elapsed_ms: f64,
    step_ms: f64,
    remaining: u64,
}

impl FixedStepScheduler {
    /// `frames` ticks at `start_ms`, `start_ms + step_ms`, ...
    pub fn new(start_ms: f64, step_ms: f64, frames: u64) -> Self {
        Self {
            elapsed_ms: start_ms,
            step_ms,
            remaining: frames,
        }
    }
}

impl Scheduler for FixedStepScheduler {
    fn next_tick(&mut self) -> Option<f64> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let now = self.elapsed_ms;
        self.elapsed_ms += self.step_ms;
        Some(now)
    }
}

/// Duration of one frame at `fps`.
pub fn frame_interval(fps: u32) -> Duration {
    Duration::from_nanos(1_000_000_000 / u64::from(fps.max(1)))
}
