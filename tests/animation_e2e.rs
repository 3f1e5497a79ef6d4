//! End-to-end animation runs: projectors driven by schedulers into sinks.

use std::thread;
use std::time::{Duration, Instant};

use ascii_projector::animation::{
    run_animation, AnimationThread, CancellationToken, FixedStepScheduler, IntervalScheduler,
};
use ascii_projector::cli::{run, Args, RunArgs};
use ascii_projector::config::Config;
use ascii_projector::projector::AsciiProjector;
use ascii_projector::terminal::{CURSOR_HOME, HIDE_CURSOR, SHOW_CURSOR};
use clap::Parser;

#[test]
fn test_fixed_step_frames_match_direct_render() {
    let mut animated = AsciiProjector::cube_logo();
    let mut direct = AsciiProjector::cube_logo();

    let mut frames: Vec<String> = Vec::new();
    let mut scheduler = FixedStepScheduler::new(0.0, 250.0, 8);
    let stats = run_animation(
        &mut scheduler,
        &CancellationToken::new(),
        |t| animated.render_text(t),
        &mut frames,
    )
    .unwrap();

    assert_eq!(stats.frames, 8);
    for (i, frame) in frames.iter().enumerate() {
        assert_eq!(frame, &direct.render_text(i as f64 * 250.0), "frame {}", i);
    }
}

#[test]
fn test_cancel_before_first_tick_draws_nothing() {
    let token = CancellationToken::new();
    token.cancel();
    let mut projector = AsciiProjector::flame_icon(1);
    let mut frames: Vec<String> = Vec::new();
    let stats = run_animation(
        &mut IntervalScheduler::new(60),
        &token,
        |t| projector.render_text(t),
        &mut frames,
    )
    .unwrap();
    assert_eq!(stats.frames, 0);
    assert!(frames.is_empty());
}

#[test]
fn test_real_time_cancel_is_prompt() {
    let token = CancellationToken::new();
    let remote = token.clone();
    let canceller = thread::spawn(move || {
        thread::sleep(Duration::from_millis(50));
        remote.cancel();
    });

    let mut projector = AsciiProjector::cube_logo();
    let mut frames: Vec<String> = Vec::new();
    let started = Instant::now();
    let stats = run_animation(
        &mut IntervalScheduler::new(60),
        &token,
        |t| projector.render_text(t),
        &mut frames,
    )
    .unwrap();
    canceller.join().unwrap();

    assert!(stats.cancelled);
    assert!(started.elapsed() < Duration::from_secs(2));
    assert_eq!(frames.len() as u64, stats.frames);
}

#[test]
fn test_two_threads_are_independent() {
    let root = CancellationToken::new();
    let mut logo =
        AnimationThread::spawn("logo", AsciiProjector::cube_logo(), 120, None, &root).unwrap();
    let mut flame =
        AnimationThread::spawn("flame", AsciiProjector::flame_icon(4), 120, None, &root).unwrap();

    // Stopping one leaves the other running
    let logo_stats = logo.stop().unwrap();
    assert!(logo_stats.cancelled);
    assert!(flame.is_running());

    let deadline = Instant::now() + Duration::from_secs(5);
    while flame.latest_frame().is_none() && Instant::now() < deadline {
        thread::sleep(Duration::from_millis(1));
    }
    let frame = flame.latest_frame().unwrap();
    assert_eq!(frame.lines().count(), 15);

    root.cancel();
    assert!(flame.stop().unwrap().cancelled);
}

#[test]
fn test_cli_logo_writes_ansi_frames() {
    let args = Args::parse_from(["ascii-projector", "logo", "--fps", "240", "--frames", "4"]);
    // Only load defaults; a user config file must not affect this test
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "").unwrap();
    let args = Args {
        config: Some(path),
        ..args
    };

    let mut out = Vec::new();
    run(args, &CancellationToken::new(), &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.contains(HIDE_CURSOR));
    assert!(text.ends_with(SHOW_CURSOR));
    assert_eq!(text.matches(CURSOR_HOME).count(), 4);
}

#[test]
fn test_cli_frame_prints_plain_text() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "").unwrap();

    let args = Args::parse_from([
        "ascii-projector",
        "frame",
        "logo",
        "--no-banner",
        "--at",
        "1000",
        "--config",
        path.to_str().unwrap(),
    ]);
    let mut out = Vec::new();
    run(args, &CancellationToken::new(), &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(!text.contains('\x1b'));
    let expected = AsciiProjector::cube_logo().render_text(1000.0);
    assert_eq!(text, format!("{}\n", expected));
}

#[test]
fn test_show_runs_for_frame_limit() {
    let run_args = RunArgs {
        fps: Some(120),
        frames: Some(6),
    };
    let mut out = Vec::new();
    let stats = ascii_projector::cli::run_show(
        &Config::default(),
        &run_args,
        Some(8),
        2,
        &CancellationToken::new(),
        &mut out,
    )
    .unwrap();
    assert_eq!(stats.frames, 6);
    assert!(!stats.cancelled);
}
