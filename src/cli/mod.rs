//! Command-line interface definitions and helpers.
//!
//! This module contains all CLI argument parsing, enums, and subcommand handlers.

mod args;
mod commands;
mod enums;

pub use args::{Args, Command, ConfigAction, RunArgs};
pub use commands::{
    handle_config_action, log_level, render_frame, resolve_seed, run, run_flame, run_logo,
    run_show, AppError,
};
pub use enums::{PaletteArg, Shape};
