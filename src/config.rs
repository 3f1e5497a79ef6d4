//! Configuration file handling for ascii-projector.
//!
//! Loads configuration from `~/.config/ascii-projector/config.toml` or a custom path.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::projector::{
    CameraConfig, Flicker, Spin, DEFAULT_PARTICLE_COUNT, DEFAULT_RADIUS_FACTOR,
    DEFAULT_SHADE_DEPTH,
};

/// Banner printed above the cube logo.
pub const DEFAULT_BANNER: &str = "T R Ē S O R   D Ẽ S I G N";

/// Largest accepted grid dimension in either direction.
pub const MAX_DIMENSION: u16 = 1000;

/// Configuration file structure for ascii-projector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub animation: AnimationConfig,
    #[serde(default)]
    pub logo: LogoConfig,
    #[serde(default)]
    pub flame: FlameConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Target frames per second
    pub fps: u32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self { fps: 60 }
    }
}

/// Wireframe cube settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogoConfig {
    pub width: u16,
    pub height: u16,
    pub distance: f64,
    pub focal_scale: f64,
    /// Angular velocity about X, Y and Z in radians per millisecond
    pub spin: [f64; 3],
    /// Shading ramp, lightest to densest, or a built-in palette name
    pub palette: String,
    /// Depth mapped onto the densest shade
    pub shade_depth: f64,
    /// Text shown above the cube; empty to disable
    pub banner: String,
}

impl Default for LogoConfig {
    fn default() -> Self {
        let camera = CameraConfig::LOGO;
        Self {
            width: camera.width,
            height: camera.height,
            distance: camera.distance,
            focal_scale: camera.focal_scale,
            spin: [Spin::LOGO.x, Spin::LOGO.y, Spin::LOGO.z],
            palette: ".:-~=+*#%@".to_string(),
            shade_depth: DEFAULT_SHADE_DEPTH,
            banner: DEFAULT_BANNER.to_string(),
        }
    }
}

impl LogoConfig {
    pub fn camera(&self) -> CameraConfig {
        CameraConfig {
            distance: self.distance,
            focal_scale: self.focal_scale,
            width: self.width,
            height: self.height,
            ..CameraConfig::LOGO
        }
    }

    pub fn spin(&self) -> Spin {
        let [x, y, z] = self.spin;
        Spin { x, y, z }
    }
}

/// Particle flame settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlameConfig {
    pub width: u16,
    pub height: u16,
    pub distance: f64,
    pub focal_scale: f64,
    pub vertical_stretch: f64,
    pub vertical_anchor: f64,
    /// Turn rate about the vertical axis in radians per millisecond
    pub spin_y: f64,
    pub particles: usize,
    pub radius_factor: f64,
    /// Particle characters, lightest to densest, or a built-in palette name
    pub palette: String,
    /// Flicker amplitude in object units; 0 disables the wobble
    pub flicker: f64,
    /// Fixed particle seed; random when unset
    pub seed: Option<u64>,
}

impl Default for FlameConfig {
    fn default() -> Self {
        let camera = CameraConfig::FLAME;
        Self {
            width: camera.width,
            height: camera.height,
            distance: camera.distance,
            focal_scale: camera.focal_scale,
            vertical_stretch: camera.vertical_stretch,
            vertical_anchor: camera.vertical_anchor,
            spin_y: Spin::FLAME.y,
            particles: DEFAULT_PARTICLE_COUNT,
            radius_factor: DEFAULT_RADIUS_FACTOR,
            palette: ".:*@#".to_string(),
            flicker: Flicker::default().amplitude,
            seed: None,
        }
    }
}

impl FlameConfig {
    pub fn camera(&self) -> CameraConfig {
        CameraConfig {
            distance: self.distance,
            focal_scale: self.focal_scale,
            width: self.width,
            height: self.height,
            vertical_stretch: self.vertical_stretch,
            vertical_anchor: self.vertical_anchor,
        }
    }

    pub fn spin(&self) -> Spin {
        Spin {
            y: self.spin_y,
            ..Spin::default()
        }
    }

    /// Flicker with the configured amplitude, or `None` when disabled.
    pub fn flicker(&self) -> Option<Flicker> {
        if self.flicker == 0.0 {
            return None;
        }
        Some(Flicker {
            amplitude: self.flicker,
            ..Flicker::default()
        })
    }
}

impl Config {
    /// Load configuration.
    ///
    /// With an explicit path the file must exist. Without one the default
    /// path is tried and a missing file yields the built-in defaults.
    /// Either way a file that exists but fails to parse or validate is an error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load_from(path),
            None => {
                let path = default_path();
                if path.exists() {
                    Self::load_from(&path)
                } else {
                    log::debug!("No config file at {}, using defaults", path.display());
                    Ok(Config::default())
                }
            }
        }
    }

    /// Load and validate a specific file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;
        config.validate()?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Reject values the renderer cannot use.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.animation.fps == 0 || self.animation.fps > 240 {
            return Err(ConfigError::Invalid(format!(
                "animation.fps must be between 1 and 240, got {}",
                self.animation.fps
            )));
        }

        check_dimensions("logo", self.logo.width, self.logo.height)?;
        check_camera("logo", &self.logo.camera())?;
        check_palette("logo", &self.logo.palette)?;
        if !(self.logo.shade_depth.is_finite() && self.logo.shade_depth > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "logo.shade_depth must be positive, got {}",
                self.logo.shade_depth
            )));
        }
        if self.logo.spin.iter().any(|s| !s.is_finite()) {
            return Err(ConfigError::Invalid("logo.spin must be finite".to_string()));
        }

        check_dimensions("flame", self.flame.width, self.flame.height)?;
        check_camera("flame", &self.flame.camera())?;
        check_palette("flame", &self.flame.palette)?;
        for (name, value) in [
            ("spin_y", self.flame.spin_y),
            ("radius_factor", self.flame.radius_factor),
            ("flicker", self.flame.flicker),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::Invalid(format!(
                    "flame.{} must be finite, got {}",
                    name, value
                )));
            }
        }

        Ok(())
    }

    /// Render as TOML, as written by `config init`.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(ConfigError::Serialize)
    }
}

fn check_dimensions(section: &str, width: u16, height: u16) -> Result<(), ConfigError> {
    if width == 0 || height == 0 {
        return Err(ConfigError::Invalid(format!(
            "{}: width and height must be greater than 0, got {}x{}",
            section, width, height
        )));
    }
    if width > MAX_DIMENSION || height > MAX_DIMENSION {
        return Err(ConfigError::Invalid(format!(
            "{}: {}x{} exceeds maximum {}x{}",
            section, width, height, MAX_DIMENSION, MAX_DIMENSION
        )));
    }
    Ok(())
}

fn check_camera(section: &str, camera: &CameraConfig) -> Result<(), ConfigError> {
    for (name, value) in [
        ("distance", camera.distance),
        ("focal_scale", camera.focal_scale),
        ("vertical_stretch", camera.vertical_stretch),
        ("vertical_anchor", camera.vertical_anchor),
    ] {
        if !value.is_finite() {
            return Err(ConfigError::Invalid(format!(
                "{}.{} must be finite, got {}",
                section, name, value
            )));
        }
    }
    Ok(())
}

fn check_palette(section: &str, palette: &str) -> Result<(), ConfigError> {
    if palette.is_empty() {
        return Err(ConfigError::Invalid(format!(
            "{}.palette must not be empty",
            section
        )));
    }
    if palette.chars().any(char::is_control) {
        return Err(ConfigError::Invalid(format!(
            "{}.palette must not contain control characters",
            section
        )));
    }
    Ok(())
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("ascii-projector").join("config.toml"))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config/ascii-projector/config.toml")
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_builtin_cameras() {
        let config = Config::default();
        assert_eq!(config.animation.fps, 60);
        assert_eq!(config.logo.camera(), CameraConfig::LOGO);
        assert_eq!(config.flame.camera(), CameraConfig::FLAME);
        assert_eq!(config.logo.spin(), Spin::LOGO);
        assert_eq!(config.flame.spin(), Spin::FLAME);
        assert_eq!(config.flame.flicker(), Some(Flicker::default()));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config: Config = toml::from_str(
            r#"
[logo]
width = 40

[flame]
particles = 0
"#,
        )
        .unwrap();
        assert_eq!(config.logo.width, 40);
        assert_eq!(config.logo.height, 30);
        assert_eq!(config.flame.particles, 0);
        assert_eq!(config.flame.palette, ".:*@#");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_flicker_disables() {
        let flame = FlameConfig {
            flicker: 0.0,
            ..FlameConfig::default()
        };
        assert_eq!(flame.flicker(), None);
    }

    #[test]
    fn test_validate_rejects_zero_dimensions() {
        let mut config = Config::default();
        config.logo.height = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_validate_rejects_empty_palette() {
        let mut config = Config::default();
        config.flame.palette.clear();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("flame.palette"));
    }

    #[test]
    fn test_validate_rejects_zero_fps() {
        let mut config = Config::default();
        config.animation.fps = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_non_positive_shade_depth() {
        let mut config = Config::default();
        config.logo.shade_depth = 0.0;
        assert!(config.validate().is_err());
        config.logo.shade_depth = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_to_toml_roundtrips() {
        let mut config = Config::default();
        config.flame.seed = Some(42);
        let text = config.to_toml().unwrap();
        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_default_path_ends_with_config_toml() {
        let path = default_path();
        assert!(path.ends_with("ascii-projector/config.toml"));
    }
}
