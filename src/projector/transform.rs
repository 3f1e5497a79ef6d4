//! Rotation and per-point perturbation.
//!
//! Angles are always derived from elapsed time rather than accumulated, so
//! a given timestamp always produces the same orientation.

use super::geometry::Point3D;

/// Rotation angles in radians, one per axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RotationState {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Angular velocity per axis, in radians per millisecond.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Spin {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Spin {
    /// Cube spin: all three axes at different rates.
    pub const LOGO: Spin = Spin {
        x: 0.0003,
        y: 0.0002,
        z: 0.0001,
    };

    /// Flame spin: a slow turn about the vertical axis only.
    pub const FLAME: Spin = Spin {
        x: 0.0,
        y: 0.0001,
        z: 0.0,
    };

    /// Orientation after `elapsed_ms` milliseconds.
    pub fn angles_at(&self, elapsed_ms: f64) -> RotationState {
        RotationState {
            x: self.x * elapsed_ms,
            y: self.y * elapsed_ms,
            z: self.z * elapsed_ms,
        }
    }
}

/// Precomputed sines and cosines for one frame.
#[derive(Debug, Clone, Copy)]
pub struct Rotation {
    sin_x: f64,
    cos_x: f64,
    sin_y: f64,
    cos_y: f64,
    sin_z: f64,
    cos_z: f64,
}

impl Rotation {
    pub fn new(angles: RotationState) -> Self {
        let (sin_x, cos_x) = angles.x.sin_cos();
        let (sin_y, cos_y) = angles.y.sin_cos();
        let (sin_z, cos_z) = angles.z.sin_cos();
        Self {
            sin_x,
            cos_x,
            sin_y,
            cos_y,
            sin_z,
            cos_z,
        }
    }

    /// Rotate about Y, then X, then Z.
    pub fn apply(&self, p: Point3D) -> Point3D {
        // Y
        let x1 = p.x * self.cos_y - p.z * self.sin_y;
        let z1 = p.x * self.sin_y + p.z * self.cos_y;
        // X
        let y2 = p.y * self.cos_x - z1 * self.sin_x;
        let z2 = p.y * self.sin_x + z1 * self.cos_x;
        // Z
        let x3 = x1 * self.cos_z - y2 * self.sin_z;
        let y3 = x1 * self.sin_z + y2 * self.cos_z;

        Point3D {
            x: x3,
            y: y3,
            z: z2,
        }
    }
}

/// Rotate a single point. Prefer [`Rotation`] when transforming many points
/// with the same angles.
pub fn rotate(point: Point3D, angles: RotationState) -> Point3D {
    Rotation::new(angles).apply(point)
}

/// Sinusoidal wobble applied to particles before rotation.
///
/// Each axis uses its own time rate and a phase proportional to the point's
/// height, so columns of particles sway independently.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Flicker {
    pub amplitude: f64,
    pub x_rate: f64,
    pub x_phase: f64,
    pub y_rate: f64,
    pub y_phase: f64,
}

impl Default for Flicker {
    fn default() -> Self {
        Self {
            amplitude: 0.1,
            x_rate: 0.0008,
            x_phase: 3.0,
            y_rate: 0.00134,
            y_phase: 5.0,
        }
    }
}

impl Flicker {
    /// Offset a copy of `p` for time `elapsed_ms`. The stored point is untouched.
    pub fn apply(&self, p: Point3D, elapsed_ms: f64) -> Point3D {
        let dx = (elapsed_ms * self.x_rate + p.y * self.x_phase).sin() * self.amplitude;
        let dy = (elapsed_ms * self.y_rate + p.y * self.y_phase).sin() * self.amplitude;
        Point3D {
            x: p.x + dx,
            y: p.y + dy,
            z: p.z,
        }
    }
}
