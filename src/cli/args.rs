//! CLI argument parsing with clap.

use clap::{ArgAction, Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

use super::enums::{PaletteArg, Shape};

/// Spinning ASCII logo and flame for the terminal
#[derive(Parser, Debug)]
#[command(name = "ascii-projector")]
#[command(version, about = "3D wireframes and particles rendered as ASCII art", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Config file path
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Log more (-v info, -vv debug, -vvv trace)
    #[arg(long, short, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

/// Timing options shared by the animating subcommands.
#[derive(ClapArgs, Debug, Clone, Default, PartialEq, Eq)]
pub struct RunArgs {
    /// Frames per second (overrides config)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=240))]
    pub fps: Option<u32>,

    /// Stop after this many frames (default: run until Ctrl+C)
    #[arg(long)]
    pub frames: Option<u64>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Animate the spinning cube logo
    Logo {
        #[command(flatten)]
        run: RunArgs,

        /// Hide the banner line
        #[arg(long)]
        no_banner: bool,

        /// Shading palette (overrides config)
        #[arg(long)]
        palette: Option<PaletteArg>,
    },
    /// Animate the particle flame
    Flame {
        #[command(flatten)]
        run: RunArgs,

        /// Particle seed for a reproducible flame
        #[arg(long)]
        seed: Option<u64>,

        /// Particle palette (overrides config)
        #[arg(long)]
        palette: Option<PaletteArg>,
    },
    /// Animate logo and flame side by side
    Show {
        #[command(flatten)]
        run: RunArgs,

        /// Particle seed for a reproducible flame
        #[arg(long)]
        seed: Option<u64>,

        /// Columns between the two blocks
        #[arg(long, default_value = "4")]
        gap: usize,
    },
    /// Print a single frame and exit
    Frame {
        /// What to render
        shape: Shape,

        /// Elapsed time in milliseconds
        #[arg(long, default_value = "0")]
        at: f64,

        /// Particle seed (flame only)
        #[arg(long)]
        seed: Option<u64>,

        /// Hide the banner line (logo only)
        #[arg(long)]
        no_banner: bool,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Create default config file
    Init,
}
