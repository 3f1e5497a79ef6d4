//! Subcommand handlers.

use std::io::{self, Write};
use std::path::Path;

use super::args::{Args, Command, ConfigAction, RunArgs};
use super::enums::Shape;
use crate::animation::{
    run_animation, AnimationStats, AnimationThread, CancellationToken, IntervalScheduler,
    Scheduler,
};
use crate::config::{self, Config, ConfigError};
use crate::projector::{AsciiProjector, Palette};
use crate::terminal::{compose_horizontal, with_banner, TerminalSink};

/// Errors surfaced to the user by the command-line tool.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to install Ctrl+C handler: {0}")]
    Signal(#[from] ctrlc::Error),

    #[error("Config file already exists: {}", .0.display())]
    ConfigExists(std::path::PathBuf),
}

/// Log level for a `-v` count.
pub fn log_level(verbose: u8) -> log::LevelFilter {
    match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    }
}

/// Run the parsed command, writing frames and reports to `out`.
///
/// Animations stop when `token` is cancelled.
pub fn run(args: Args, token: &CancellationToken, out: &mut dyn Write) -> Result<(), AppError> {
    let config_path = args.config.as_deref();

    match args.command {
        Command::Config { action } => handle_config_action(action, config_path, out),
        Command::Logo {
            run,
            no_banner,
            palette,
        } => {
            let mut config = Config::load(config_path)?;
            if let Some(palette) = palette {
                config.logo.palette = Palette::from(palette).name().to_string();
            }
            run_logo(&config, &run, no_banner, token, out).map(|_| ())
        }
        Command::Flame { run, seed, palette } => {
            let mut config = Config::load(config_path)?;
            if let Some(palette) = palette {
                config.flame.palette = Palette::from(palette).name().to_string();
            }
            run_flame(&config, &run, seed, token, out).map(|_| ())
        }
        Command::Show { run, seed, gap } => {
            let config = Config::load(config_path)?;
            run_show(&config, &run, seed, gap, token, out).map(|_| ())
        }
        Command::Frame {
            shape,
            at,
            seed,
            no_banner,
        } => {
            let config = Config::load(config_path)?;
            let frame = render_frame(&config, shape, at, seed, no_banner);
            writeln!(out, "{}", frame)?;
            Ok(())
        }
    }
}

/// Seed for the flame: CLI first, then config, then random.
pub fn resolve_seed(cli: Option<u64>, config: &Config) -> u64 {
    let seed = cli.or(config.flame.seed).unwrap_or_else(rand::random);
    log::debug!("Flame seed: {}", seed);
    seed
}

fn scheduler_for(config: &Config, run: &RunArgs) -> IntervalScheduler {
    let fps = run.fps.unwrap_or(config.animation.fps);
    let scheduler = IntervalScheduler::new(fps);
    match run.frames {
        Some(frames) => scheduler.with_frame_limit(frames),
        None => scheduler,
    }
}

fn logo_banner(config: &Config, no_banner: bool) -> &str {
    if no_banner {
        ""
    } else {
        &config.logo.banner
    }
}

/// Animate the cube logo in place until cancelled or out of frames.
pub fn run_logo(
    config: &Config,
    run: &RunArgs,
    no_banner: bool,
    token: &CancellationToken,
    out: &mut dyn Write,
) -> Result<AnimationStats, AppError> {
    let mut projector = AsciiProjector::logo(&config.logo);
    let banner = logo_banner(config, no_banner);
    let width = config.logo.width;
    let mut scheduler = scheduler_for(config, run);

    animate(&mut scheduler, token, out, |t| {
        with_banner(banner, &projector.render_text(t), width)
    })
}

/// Animate the particle flame in place until cancelled or out of frames.
pub fn run_flame(
    config: &Config,
    run: &RunArgs,
    seed: Option<u64>,
    token: &CancellationToken,
    out: &mut dyn Write,
) -> Result<AnimationStats, AppError> {
    let mut projector = AsciiProjector::flame(&config.flame, resolve_seed(seed, config));
    let mut scheduler = scheduler_for(config, run);

    animate(&mut scheduler, token, out, |t| projector.render_text(t))
}

/// Animate logo and flame side by side, each on its own thread.
///
/// The calling thread composes and presents the latest frame from each.
pub fn run_show(
    config: &Config,
    run: &RunArgs,
    seed: Option<u64>,
    gap: usize,
    token: &CancellationToken,
    out: &mut dyn Write,
) -> Result<AnimationStats, AppError> {
    let fps = run.fps.unwrap_or(config.animation.fps);
    let logo = AnimationThread::spawn(
        "logo",
        AsciiProjector::logo(&config.logo),
        fps,
        None,
        token,
    )?;
    let flame = AnimationThread::spawn(
        "flame",
        AsciiProjector::flame(&config.flame, resolve_seed(seed, config)),
        fps,
        None,
        token,
    )?;

    let banner = config.logo.banner.as_str();
    let width = config.logo.width;
    let mut scheduler = scheduler_for(config, run);

    // Both threads stop on drop once presenting ends
    animate(&mut scheduler, token, out, |_| {
        let logo_frame = logo.latest_frame().unwrap_or_default();
        let flame_frame = flame.latest_frame().unwrap_or_default();
        let logo_block = with_banner(banner, &logo_frame, width);
        compose_horizontal(&[&logo_block, &flame_frame], gap)
    })
}

fn animate<S, F>(
    scheduler: &mut S,
    token: &CancellationToken,
    out: &mut dyn Write,
    compute: F,
) -> Result<AnimationStats, AppError>
where
    S: Scheduler + ?Sized,
    F: FnMut(f64) -> String,
{
    let mut sink = TerminalSink::new(out);
    let stats = run_animation(scheduler, token, compute, &mut sink)?;
    sink.finish()?;
    log::info!(
        "Presented {} frames{}",
        stats.frames,
        if stats.cancelled { " (interrupted)" } else { "" }
    );
    Ok(stats)
}

/// A single frame of `shape` at `elapsed_ms` as plain text.
pub fn render_frame(
    config: &Config,
    shape: Shape,
    elapsed_ms: f64,
    seed: Option<u64>,
    no_banner: bool,
) -> String {
    log::debug!("Rendering one {} frame at {}ms", shape.name(), elapsed_ms);
    match shape {
        Shape::Logo => {
            let mut projector = AsciiProjector::logo(&config.logo);
            let text = projector.render_text(elapsed_ms);
            with_banner(logo_banner(config, no_banner), &text, config.logo.width)
        }
        Shape::Flame => {
            let mut projector = AsciiProjector::flame(&config.flame, resolve_seed(seed, config));
            projector.render_text(elapsed_ms)
        }
    }
}

/// Handle config subcommand actions.
pub fn handle_config_action(
    action: ConfigAction,
    path: Option<&Path>,
    out: &mut dyn Write,
) -> Result<(), AppError> {
    let config_path = path
        .map(Path::to_path_buf)
        .unwrap_or_else(config::default_path);

    match action {
        ConfigAction::Show => {
            let config = Config::load(path)?;
            let status = if config_path.exists() {
                "exists"
            } else {
                "not found, using defaults"
            };
            writeln!(out, "# Config file: {} ({})", config_path.display(), status)?;
            write!(out, "{}", config.to_toml()?)?;
        }
        ConfigAction::Init => {
            if config_path.exists() {
                return Err(AppError::ConfigExists(config_path));
            }

            if let Some(parent) = config_path.parent() {
                std::fs::create_dir_all(parent)?;
            }

            let contents = format!(
                "# ascii-projector configuration\n\
                 # A palette is either a built-in name (shade, flame, blocks, minimal)\n\
                 # or a literal string of characters from lightest to densest.\n\n{}",
                Config::default().to_toml()?
            );
            std::fs::write(&config_path, contents)?;
            log::info!("Wrote default config to {}", config_path.display());
            writeln!(out, "Created config file: {}", config_path.display())?;
        }
    }
    Ok(())
}
