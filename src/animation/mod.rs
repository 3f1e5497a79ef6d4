//! Frame scheduling and animation loops.
//!
//! Rendering is decoupled from timing: a [`Scheduler`] decides when frames
//! happen and [`run_animation`] drives any frame function into any
//! [`FrameSink`] until the schedule ends or a [`CancellationToken`] fires.

mod cancel;
mod driver;
mod scheduler;
mod thread;

pub use cancel::{cancel_on_ctrlc, CancellationToken};
pub use driver::{run_animation, AnimationStats, FrameSink, SharedFrame};
pub use scheduler::{frame_interval, FixedStepScheduler, IntervalScheduler, Scheduler};
pub use thread::AnimationThread;
