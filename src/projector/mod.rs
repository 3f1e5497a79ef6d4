//! 3D point cloud to ASCII projector.
//!
//! A frame is a pure function of elapsed time (plus the random palette pick
//! in particle mode):
//!
//! 1. **Point source** - fixed cube wireframe or sampled flame particles
//! 2. **Transform** - optional flicker, then rotation about Y, X and Z
//! 3. **Projection** - perspective divide onto the character grid
//! 4. **Rasterization** - z-buffered points or depth-shaded segments
//!
//! # Example
//! ```
//! use ascii_projector::projector::AsciiProjector;
//!
//! let mut logo = AsciiProjector::cube_logo();
//! let text = logo.render_text(1_000.0);
//! assert_eq!(text.lines().count(), 30);
//! ```

mod camera;
mod charset;
mod geometry;
mod raster;
mod transform;

pub use camera::{project, CameraConfig, Projection};
pub use charset::{
    resolve_palette, shade_for_depth, Palette, BLOCKS_CHARSET, FLAME_CHARSET, MINIMAL_CHARSET,
    SHADE_CHARSET,
};
pub use geometry::{
    Edge, Point3D, PointSource, RenderMode, DEFAULT_PARTICLE_COUNT, DEFAULT_RADIUS_FACTOR,
};
pub use raster::{draw_points, draw_segments, DepthBuffer, FrameBuffers};
pub use transform::{rotate, Flicker, Rotation, RotationState, Spin};

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::{FlameConfig, LogoConfig};
use crate::frame::Grid;

/// Default depth mapped onto the full shading palette.
pub const DEFAULT_SHADE_DEPTH: f64 = 4.0;

/// Renders one point source through a fixed camera.
///
/// The point set is sampled once at construction; each call to
/// [`render`](Self::render) rotates, projects and rasterizes it into
/// buffers that are reused from the previous frame.
#[derive(Debug, Clone)]
pub struct AsciiProjector {
    source: PointSource,
    camera: CameraConfig,
    spin: Spin,
    flicker: Option<Flicker>,
    palette: Vec<char>,
    shade_depth: f64,
    rng: StdRng,
    buffers: FrameBuffers,
    projected: Vec<Option<Projection>>,
}

impl AsciiProjector {
    /// Build a projector from its parts.
    ///
    /// `rng` drives the per-frame palette pick in particle mode.
    pub fn new(
        source: PointSource,
        camera: CameraConfig,
        spin: Spin,
        flicker: Option<Flicker>,
        palette: Vec<char>,
        shade_depth: f64,
        rng: StdRng,
    ) -> Self {
        let buffers = FrameBuffers::new(camera.width, camera.height);
        let projected = Vec::with_capacity(source.points().len());
        Self {
            source,
            camera,
            spin,
            flicker,
            palette,
            shade_depth,
            rng,
            buffers,
            projected,
        }
    }

    /// The spinning wireframe cube described by `config`.
    pub fn logo(config: &LogoConfig) -> Self {
        Self::new(
            PointSource::cube(),
            config.camera(),
            config.spin(),
            None,
            resolve_palette(&config.palette),
            config.shade_depth,
            StdRng::seed_from_u64(0),
        )
    }

    /// A flickering particle flame described by `config`.
    ///
    /// The same `seed` always yields the same particle positions.
    pub fn flame(config: &FlameConfig, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let source = PointSource::flame(config.particles, config.radius_factor, &mut rng);
        log::debug!(
            "Sampled {} flame particles (seed {})",
            source.points().len(),
            seed
        );
        Self::new(
            source,
            config.camera(),
            config.spin(),
            config.flicker(),
            resolve_palette(&config.palette),
            DEFAULT_SHADE_DEPTH,
            rng,
        )
    }

    /// The cube logo with built-in defaults.
    pub fn cube_logo() -> Self {
        Self::logo(&LogoConfig::default())
    }

    /// The flame icon with built-in defaults.
    pub fn flame_icon(seed: u64) -> Self {
        Self::flame(&FlameConfig::default(), seed)
    }

    pub fn source(&self) -> &PointSource {
        &self.source
    }

    pub fn camera(&self) -> &CameraConfig {
        &self.camera
    }

    pub fn mode(&self) -> RenderMode {
        self.source.mode()
    }

    /// Project every point for `elapsed_ms` without rasterizing.
    ///
    /// Entries are `None` for points culled behind the camera; indices match
    /// the point source.
    pub fn project_all(&self, elapsed_ms: f64) -> Vec<Option<Projection>> {
        let mut out = Vec::with_capacity(self.source.points().len());
        self.project_into(elapsed_ms, &mut out);
        out
    }

    fn project_into(&self, elapsed_ms: f64, out: &mut Vec<Option<Projection>>) {
        let rotation = Rotation::new(self.spin.angles_at(elapsed_ms));
        out.clear();
        out.extend(self.source.points().iter().map(|&p| {
            let p = match &self.flicker {
                Some(flicker) => flicker.apply(p, elapsed_ms),
                None => p,
            };
            project(rotation.apply(p), &self.camera)
        }));
    }

    /// Render the frame for `elapsed_ms` and return the grid.
    pub fn render(&mut self, elapsed_ms: f64) -> &Grid {
        let mut projected = std::mem::take(&mut self.projected);
        self.project_into(elapsed_ms, &mut projected);

        self.buffers.clear();
        match self.source.mode() {
            RenderMode::Particles => {
                draw_points(
                    &mut self.buffers,
                    projected.iter().flatten().copied(),
                    &self.palette,
                    &mut self.rng,
                );
            }
            RenderMode::Wireframe => {
                draw_segments(
                    &mut self.buffers,
                    &projected,
                    self.source.edges(),
                    &self.palette,
                    self.shade_depth,
                );
            }
        }

        self.projected = projected;
        &self.buffers.grid
    }

    /// Render the frame for `elapsed_ms` as a newline-separated text block.
    pub fn render_text(&mut self, elapsed_ms: f64) -> String {
        self.render(elapsed_ms).to_string_display()
    }

    /// Depth buffer of the most recent frame.
    pub fn depth_buffer(&self) -> &DepthBuffer {
        &self.buffers.depth
    }
}
