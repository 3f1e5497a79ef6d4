//! Point and edge sources for the projector.

use std::f64::consts::TAU;

use rand::Rng;

/// A point in normalized object space (roughly [-1, 1] on each axis).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3D {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// A line segment between two entries of a point list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge(pub usize, pub usize);

/// How a point source is rasterized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Vertices joined by edges, shaded by depth.
    #[default]
    Wireframe,
    /// Individual particles, z-buffered, random palette pick.
    Particles,
}

/// Default number of flame particles.
pub const DEFAULT_PARTICLE_COUNT: usize = 100;

/// Default horizontal radius of the flame base.
pub const DEFAULT_RADIUS_FACTOR: f64 = 0.8;

#[rustfmt::skip]
const CUBE_VERTICES: [Point3D; 8] = [
    Point3D::new(-1.0, -1.0, -1.0),
    Point3D::new( 1.0, -1.0, -1.0),
    Point3D::new( 1.0,  1.0, -1.0),
    Point3D::new(-1.0,  1.0, -1.0),
    Point3D::new(-1.0, -1.0,  1.0),
    Point3D::new( 1.0, -1.0,  1.0),
    Point3D::new( 1.0,  1.0,  1.0),
    Point3D::new(-1.0,  1.0,  1.0),
];

#[rustfmt::skip]
const CUBE_EDGES: [Edge; 12] = [
    // z = -1 face
    Edge(0, 1), Edge(1, 2), Edge(2, 3), Edge(3, 0),
    // z = +1 face
    Edge(4, 5), Edge(5, 6), Edge(6, 7), Edge(7, 4),
    // connecting
    Edge(0, 4), Edge(1, 5), Edge(2, 6), Edge(3, 7),
];

/// Immutable set of points (and edges, for wireframes) shared by every frame.
#[derive(Debug, Clone, PartialEq)]
pub struct PointSource {
    mode: RenderMode,
    points: Vec<Point3D>,
    edges: Vec<Edge>,
}

impl PointSource {
    /// The unit cube: 8 vertices at (±1, ±1, ±1) and its 12 edges.
    pub fn cube() -> Self {
        Self::wireframe(CUBE_VERTICES.to_vec(), CUBE_EDGES.to_vec())
    }

    /// A custom wireframe. Edges referencing missing points are kept but
    /// never drawn.
    pub fn wireframe(points: Vec<Point3D>, edges: Vec<Edge>) -> Self {
        Self {
            mode: RenderMode::Wireframe,
            points,
            edges,
        }
    }

    /// Sample `count` particles in a teardrop silhouette.
    ///
    /// Each sample draws an angle and a radius `sqrt(u)`; its height is the
    /// radius squared and its cross-section narrows linearly with height,
    /// giving a wide base and a pointed tip.
    pub fn flame<R: Rng + ?Sized>(count: usize, radius_factor: f64, rng: &mut R) -> Self {
        let points = (0..count)
            .map(|_| {
                let t = rng.gen::<f64>() * TAU;
                let r = rng.gen::<f64>().sqrt();
                let y_norm = r * r;
                let width = (1.0 - y_norm) * radius_factor;
                Point3D {
                    x: t.cos() * width,
                    y: (y_norm - 0.5) * 2.0,
                    z: t.sin() * width,
                }
            })
            .collect();

        Self {
            mode: RenderMode::Particles,
            points,
            edges: Vec::new(),
        }
    }

    /// Build the default source for a render mode.
    ///
    /// `count` only applies to particles; wireframes are always the cube.
    pub fn generate<R: Rng + ?Sized>(mode: RenderMode, count: Option<usize>, rng: &mut R) -> Self {
        match mode {
            RenderMode::Wireframe => Self::cube(),
            RenderMode::Particles => Self::flame(
                count.unwrap_or(DEFAULT_PARTICLE_COUNT),
                DEFAULT_RADIUS_FACTOR,
                rng,
            ),
        }
    }

    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    pub fn points(&self) -> &[Point3D] {
        &self.points
    }

    /// Edge list; empty for particle sources.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }
}
