//! Rasterization of projected samples into a grid.
//!
//! Depth convention: a larger translated z wins a contested cell. Point draws
//! test against the depth buffer with a strict comparison; segment draws
//! overwrite unconditionally (last edge drawn wins) and record their depth so
//! the buffer always reflects the sample that owns each cell.

use rand::Rng;

use super::camera::Projection;
use super::charset::shade_for_depth;
use super::geometry::Edge;
use crate::frame::Grid;

/// Per-cell depth of the winning sample, parallel to a [`Grid`].
#[derive(Debug, Clone, PartialEq)]
pub struct DepthBuffer {
    depths: Vec<f64>,
    width: u16,
    height: u16,
}

impl DepthBuffer {
    /// A buffer where every cell is unclaimed (negative infinity).
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            depths: vec![f64::NEG_INFINITY; (width as usize) * (height as usize)],
            width,
            height,
        }
    }

    pub fn clear(&mut self) {
        self.depths.fill(f64::NEG_INFINITY);
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn at(&self, idx: usize) -> f64 {
        self.depths.get(idx).copied().unwrap_or(f64::NEG_INFINITY)
    }

    /// Claim `idx` for `depth` if it beats the current owner.
    pub fn test_and_set(&mut self, idx: usize, depth: f64) -> bool {
        match self.depths.get_mut(idx) {
            Some(current) if depth > *current => {
                *current = depth;
                true
            }
            _ => false,
        }
    }

    fn set(&mut self, idx: usize, depth: f64) {
        if let Some(current) = self.depths.get_mut(idx) {
            *current = depth;
        }
    }
}

/// Grid and depth buffer reused across frames.
#[derive(Debug, Clone)]
pub struct FrameBuffers {
    pub grid: Grid,
    pub depth: DepthBuffer,
}

impl FrameBuffers {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            grid: Grid::new(width, height),
            depth: DepthBuffer::new(width, height),
        }
    }

    /// Reset both buffers for a new frame.
    pub fn clear(&mut self) {
        self.grid.clear();
        self.depth.clear();
    }
}

/// Draw particles, nearest-wins by depth, each with a random palette entry.
///
/// Returns the number of cells written.
pub fn draw_points<R, I>(
    buffers: &mut FrameBuffers,
    projected: I,
    palette: &[char],
    rng: &mut R,
) -> usize
where
    R: Rng + ?Sized,
    I: IntoIterator<Item = Projection>,
{
    if palette.is_empty() {
        return 0;
    }

    let mut written = 0;
    for p in projected {
        let (x, y) = p.cell();
        let Some(idx) = buffers.grid.index_of(x, y) else {
            continue;
        };
        if buffers.depth.test_and_set(idx, p.depth) {
            let c = palette[rng.gen_range(0..palette.len())];
            buffers.grid.set_at(idx, c);
            written += 1;
        }
    }
    written
}

/// Draw wireframe edges between projected vertices.
///
/// Edges are processed in order. An edge is skipped if either endpoint is
/// missing or was culled. Each edge gets one character, shaded by the average
/// depth of its endpoints. Returns the number of edges drawn.
pub fn draw_segments(
    buffers: &mut FrameBuffers,
    vertices: &[Option<Projection>],
    edges: &[Edge],
    palette: &[char],
    shade_depth: f64,
) -> usize {
    let mut drawn = 0;
    for &Edge(a, b) in edges {
        let (Some(Some(p1)), Some(Some(p2))) = (vertices.get(a), vertices.get(b)) else {
            continue;
        };
        let avg = (p1.depth + p2.depth) / 2.0;
        let Some(c) = shade_for_depth(palette, avg, shade_depth) else {
            continue;
        };
        draw_line(buffers, p1, p2, c, avg);
        drawn += 1;
    }
    drawn
}

/// Walk from `p1` to `p2` in evenly spaced samples, one per cell of length.
///
/// The segment is first clipped to the grid (plus a one-cell margin), so the
/// sample count follows the visible span rather than the full projected
/// length. A segment that lies inside the margin is sampled end to end.
fn draw_line(buffers: &mut FrameBuffers, p1: &Projection, p2: &Projection, c: char, depth: f64) {
    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;
    let distance = (dx * dx + dy * dy).sqrt();
    if !distance.is_finite() {
        return;
    }

    let bounds = ClipRect {
        min_x: -1.0,
        min_y: -1.0,
        max_x: f64::from(buffers.grid.width()),
        max_y: f64::from(buffers.grid.height()),
    };
    let Some((t0, t1)) = bounds.clip(p1.x, p1.y, dx, dy) else {
        return;
    };

    let span = t1 - t0;
    let steps = ((span * distance).ceil() as usize).max(1);

    for i in 0..=steps {
        let t = t0 + span * (i as f64 / steps as f64);
        let x = (p1.x + t * dx).round() as i64;
        let y = (p1.y + t * dy).round() as i64;
        if let Some(idx) = buffers.grid.index_of(x, y) {
            buffers.grid.set_at(idx, c);
            buffers.depth.set(idx, depth);
        }
    }
}

/// Axis-aligned clip window in screen coordinates.
#[derive(Debug, Clone, Copy)]
struct ClipRect {
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
}

impl ClipRect {
    /// Liang-Barsky: the parameter range `[t0, t1]` of `(x, y) + t * (dx, dy)`,
    /// `t` in `[0, 1]`, that lies inside the window, or `None` if no part does.
    fn clip(&self, x: f64, y: f64, dx: f64, dy: f64) -> Option<(f64, f64)> {
        let mut t0 = 0.0_f64;
        let mut t1 = 1.0_f64;
        for (p, q) in [
            (-dx, x - self.min_x),
            (dx, self.max_x - x),
            (-dy, y - self.min_y),
            (dy, self.max_y - y),
        ] {
            if p == 0.0 {
                // Parallel to this edge
                if q < 0.0 {
                    return None;
                }
                continue;
            }
            let r = q / p;
            if p < 0.0 {
                if r > t1 {
                    return None;
                }
                t0 = t0.max(r);
            } else {
                if r < t0 {
                    return None;
                }
                t1 = t1.min(r);
            }
        }
        Some((t0, t1))
    }
}
