//! Background animation threads.

use std::io;
use std::thread::{self, JoinHandle};

use super::cancel::CancellationToken;
use super::driver::{run_animation, AnimationStats, SharedFrame};
use super::scheduler::IntervalScheduler;
use crate::projector::AsciiProjector;

/// A projector animating on its own thread.
///
/// Each instance owns its projector, clock and frame slot, so several can
/// run side by side without sharing any state. The latest frame is read
/// with [`latest_frame`](Self::latest_frame).
pub struct AnimationThread {
    name: String,
    frame: SharedFrame,
    stop: CancellationToken,
    handle: Option<JoinHandle<io::Result<AnimationStats>>>,
}

impl std::fmt::Debug for AnimationThread {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnimationThread")
            .field("name", &self.name)
            .field("is_running", &self.is_running())
            .finish_non_exhaustive()
    }
}

impl AnimationThread {
    /// Start animating `projector` at `fps`, optionally for `frames` ticks.
    ///
    /// The thread stops when `parent` is cancelled, when [`stop`](Self::stop)
    /// is called, or when the frame limit is reached.
    pub fn spawn(
        name: &str,
        mut projector: AsciiProjector,
        fps: u32,
        frames: Option<u64>,
        parent: &CancellationToken,
    ) -> io::Result<Self> {
        let frame = SharedFrame::new();
        let stop = parent.child();

        let mut sink = frame.clone();
        let token = stop.clone();

        let handle = thread::Builder::new()
            .name(format!("animation-{}", name))
            .spawn(move || {
                let mut scheduler = IntervalScheduler::new(fps);
                if let Some(frames) = frames {
                    scheduler = scheduler.with_frame_limit(frames);
                }
                run_animation(
                    &mut scheduler,
                    &token,
                    |elapsed_ms| projector.render_text(elapsed_ms),
                    &mut sink,
                )
            })?;

        log::info!("Started {} animation at {} fps", name, fps);

        Ok(Self {
            name: name.to_string(),
            frame,
            stop,
            handle: Some(handle),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Latest rendered frame, or `None` before the first tick.
    pub fn latest_frame(&self) -> Option<String> {
        self.frame.latest()
    }

    /// Check if the animation thread is still running.
    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Signal the thread to stop and wait for it.
    ///
    /// Returns `None` if the thread was already joined or failed.
    pub fn stop(&mut self) -> Option<AnimationStats> {
        self.stop.cancel();
        let handle = self.handle.take()?;
        match handle.join() {
            Ok(Ok(stats)) => Some(stats),
            Ok(Err(e)) => {
                log::warn!("{} animation failed: {}", self.name, e);
                None
            }
            Err(_) => {
                log::error!("{} animation thread panicked", self.name);
                None
            }
        }
    }
}

impl Drop for AnimationThread {
    fn drop(&mut self) {
        self.stop();
    }
}
