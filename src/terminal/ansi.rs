//! In-place ANSI frame output with cursor restore.

use std::io::{self, Write};
use std::panic;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::animation::FrameSink;

pub const HIDE_CURSOR: &str = "\x1b[?25l";
pub const SHOW_CURSOR: &str = "\x1b[?25h";
pub const CLEAR_SCREEN: &str = "\x1b[2J";
pub const CURSOR_HOME: &str = "\x1b[H";

/// Set while some sink has the cursor hidden (read by the panic hook)
static CURSOR_HIDDEN: AtomicBool = AtomicBool::new(false);

/// Draws each frame over the previous one.
///
/// The first frame clears the screen and hides the cursor; every frame
/// then homes the cursor and overwrites the block. The cursor is shown
/// again when the sink is dropped, including on panic.
pub struct TerminalSink<W: Write> {
    out: W,
    started: bool,
}

impl<W: Write> TerminalSink<W> {
    pub fn new(out: W) -> Self {
        install_panic_hook();
        Self {
            out,
            started: false,
        }
    }

    /// Restore the cursor and leave the output below the last frame.
    ///
    /// After calling this, the sink's drop is a no-op.
    pub fn finish(&mut self) -> io::Result<()> {
        if self.started {
            self.started = false;
            CURSOR_HIDDEN.store(false, Ordering::SeqCst);
            write!(self.out, "\n{}", SHOW_CURSOR)?;
            self.out.flush()?;
        }
        Ok(())
    }

    /// Consume the sink and return the writer.
    pub fn into_inner(mut self) -> io::Result<W>
    where
        W: Default,
    {
        self.finish()?;
        Ok(std::mem::take(&mut self.out))
    }
}

impl<W: Write> FrameSink for TerminalSink<W> {
    fn present(&mut self, frame: &str) -> io::Result<()> {
        if !self.started {
            write!(self.out, "{}{}", CLEAR_SCREEN, HIDE_CURSOR)?;
            self.started = true;
            CURSOR_HIDDEN.store(true, Ordering::SeqCst);
        }
        write!(self.out, "{}{}", CURSOR_HOME, frame)?;
        self.out.flush()
    }
}

impl<W: Write> Drop for TerminalSink<W> {
    fn drop(&mut self) {
        // Best-effort cleanup, errors ignored
        let _ = self.finish();
    }
}

fn install_panic_hook() {
    static INSTALLED: AtomicBool = AtomicBool::new(false);
    if INSTALLED.swap(true, Ordering::SeqCst) {
        return;
    }

    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        if CURSOR_HIDDEN.swap(false, Ordering::SeqCst) {
            let mut stdout = io::stdout();
            let _ = write!(stdout, "{}", SHOW_CURSOR);
            let _ = stdout.flush();
        }
        default_hook(info);
    }));
}
