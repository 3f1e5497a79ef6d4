//! Terminal presentation: ANSI in-place drawing and text block layout.

mod ansi;
mod layout;

pub use ansi::{TerminalSink, CLEAR_SCREEN, CURSOR_HOME, HIDE_CURSOR, SHOW_CURSOR};
pub use layout::{compose_horizontal, with_banner};
