//! The frame loop: tick, compute, present, repeat.

use std::io;
use std::sync::{Arc, Mutex};

use super::cancel::CancellationToken;
use super::scheduler::Scheduler;

/// Destination for finished frames.
pub trait FrameSink {
    fn present(&mut self, frame: &str) -> io::Result<()>;
}

/// Collects every frame; useful for snapshots and tests.
impl FrameSink for Vec<String> {
    fn present(&mut self, frame: &str) -> io::Result<()> {
        self.push(frame.to_string());
        Ok(())
    }
}

/// Latest-frame slot shared between an animation thread and its reader.
#[derive(Debug, Clone, Default)]
pub struct SharedFrame {
    slot: Arc<Mutex<Option<String>>>,
}

impl SharedFrame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recently presented frame, if any.
    pub fn latest(&self) -> Option<String> {
        let slot = self.slot.lock().ok()?;
        slot.clone()
    }
}

impl FrameSink for SharedFrame {
    fn present(&mut self, frame: &str) -> io::Result<()> {
        if let Ok(mut slot) = self.slot.lock() {
            *slot = Some(frame.to_string());
        }
        Ok(())
    }
}

/// Summary of a finished animation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnimationStats {
    /// Frames computed and presented
    pub frames: u64,
    /// Whether the loop ended because the token was cancelled
    pub cancelled: bool,
}

/// Drive `compute` from `scheduler` into `sink` until the schedule runs out
/// or `token` is cancelled.
///
/// The token is checked before and after waiting for each tick, so a
/// cancellation never waits on more than the frame already in progress.
/// Errors from the sink end the loop.
pub fn run_animation<S, F, K>(
    scheduler: &mut S,
    token: &CancellationToken,
    mut compute: F,
    sink: &mut K,
) -> io::Result<AnimationStats>
where
    S: Scheduler + ?Sized,
    F: FnMut(f64) -> String,
    K: FrameSink + ?Sized,
{
    let mut stats = AnimationStats::default();

    loop {
        if token.is_cancelled() {
            stats.cancelled = true;
            break;
        }
        let Some(elapsed_ms) = scheduler.next_tick() else {
            break;
        };
        if token.is_cancelled() {
            stats.cancelled = true;
            break;
        }

        let frame = compute(elapsed_ms);
        sink.present(&frame)?;
        stats.frames += 1;
    }

    log::debug!(
        "Animation stopped after {} frames (cancelled: {})",
        stats.frames,
        stats.cancelled
    );
    Ok(stats)
}
