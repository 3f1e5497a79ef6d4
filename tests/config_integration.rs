//! Config file loading against real files on disk.

use std::fs;

use ascii_projector::config::{Config, ConfigError};
use ascii_projector::projector::AsciiProjector;
use tempfile::TempDir;

fn write_config(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("config.toml");
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_empty_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "");
    assert_eq!(Config::load(Some(&path)).unwrap(), Config::default());
}

#[test]
fn test_partial_sections_merge_with_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[animation]
fps = 30

[logo]
width = 60
banner = ""
"#,
    );
    let config = Config::load(Some(&path)).unwrap();
    assert_eq!(config.animation.fps, 30);
    assert_eq!(config.logo.width, 60);
    assert_eq!(config.logo.height, 30);
    assert!(config.logo.banner.is_empty());
    assert_eq!(config.flame, Default::default());
}

#[test]
fn test_loaded_config_drives_projector() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[flame]
width = 21
height = 9
particles = 40
palette = "ab"
seed = 17
"#,
    );
    let config = Config::load(Some(&path)).unwrap();
    let mut flame = AsciiProjector::flame(&config.flame, config.flame.seed.unwrap_or(0));
    assert_eq!(flame.source().points().len(), 40);

    let text = flame.render_text(0.0);
    let rows: Vec<&str> = text.lines().collect();
    assert_eq!(rows.len(), 9);
    assert!(rows.iter().all(|r| r.chars().count() == 21));
    assert!(text.chars().all(|c| matches!(c, 'a' | 'b' | ' ' | '\n')));
}

#[test]
fn test_missing_explicit_file_is_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nope.toml");
    let err = Config::load(Some(&path)).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
    assert!(err.to_string().contains("nope.toml"));
}

#[test]
fn test_malformed_toml_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[logo\nwidth = ");
    let err = Config::load(Some(&path)).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn test_wrong_type_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[animation]\nfps = \"fast\"\n");
    assert!(matches!(
        Config::load(Some(&path)).unwrap_err(),
        ConfigError::Parse { .. }
    ));
}

#[test]
fn test_invalid_values_rejected() {
    let dir = TempDir::new().unwrap();
    for contents in [
        "[animation]\nfps = 0\n",
        "[logo]\nwidth = 0\n",
        "[flame]\nheight = 5000\n",
        "[logo]\npalette = \"\"\n",
        "[logo]\nshade_depth = 0.0\n",
        "[flame]\ndistance = nan\n",
    ] {
        let path = write_config(&dir, contents);
        let err = Config::load(Some(&path)).unwrap_err();
        assert!(
            matches!(err, ConfigError::Invalid(_)),
            "{:?} should be invalid, got {:?}",
            contents,
            err
        );
    }
}

#[test]
fn test_written_defaults_load_back() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, &Config::default().to_toml().unwrap());
    assert_eq!(Config::load(Some(&path)).unwrap(), Config::default());
}
