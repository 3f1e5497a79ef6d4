//! Fixed-camera perspective projection onto a character grid.

use super::geometry::Point3D;

/// Camera and viewport constants for one projector instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraConfig {
    /// How far the object is pushed along +z before projection.
    pub distance: f64,
    /// Numerator of the perspective scale (`focal_scale / depth`).
    pub focal_scale: f64,
    /// Grid width in characters
    pub width: u16,
    /// Grid height in characters
    pub height: u16,
    /// Extra multiplier on projected y.
    pub vertical_stretch: f64,
    /// Vertical position of the object origin, as a fraction of the height.
    pub vertical_anchor: f64,
}

impl CameraConfig {
    /// Camera for the spinning cube logo (80x30, centered).
    pub const LOGO: CameraConfig = CameraConfig {
        distance: 5.0,
        focal_scale: 10.0,
        width: 80,
        height: 30,
        vertical_stretch: 1.0,
        vertical_anchor: 0.5,
    };

    /// Camera for the flame icon (15x15, stretched and sitting low).
    pub const FLAME: CameraConfig = CameraConfig {
        distance: 3.0,
        focal_scale: 8.0,
        width: 15,
        height: 15,
        vertical_stretch: 1.2,
        vertical_anchor: 0.8,
    };
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self::LOGO
    }
}

/// A point projected into screen space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Unrounded column
    pub x: f64,
    /// Unrounded row
    pub y: f64,
    /// Camera-space z after translation; larger wins in the depth buffer.
    pub depth: f64,
}

impl Projection {
    /// Nearest grid cell as (column, row). May lie outside the grid.
    pub fn cell(&self) -> (i64, i64) {
        (self.x.round() as i64, self.y.round() as i64)
    }
}

/// Project a rotated point.
///
/// Returns `None` when the translated depth is zero or negative: the point
/// sits at or behind the camera and is dropped for this frame.
pub fn project(rotated: Point3D, camera: &CameraConfig) -> Option<Projection> {
    let depth = rotated.z + camera.distance;
    if depth <= 0.0 || !depth.is_finite() {
        return None;
    }

    let scale = camera.focal_scale / depth;
    let x = rotated.x * scale + f64::from(camera.width) / 2.0;
    let y = -rotated.y * scale * camera.vertical_stretch
        + f64::from(camera.height) * camera.vertical_anchor;

    Some(Projection { x, y, depth })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_projects_to_anchor() {
        let p = project(Point3D::default(), &CameraConfig::LOGO).unwrap();
        assert_eq!(p.x, 40.0);
        assert_eq!(p.y, 15.0);
        assert_eq!(p.depth, 5.0);
        assert_eq!(p.cell(), (40, 15));
    }

    #[test]
    fn test_flame_anchor_sits_low() {
        let p = project(Point3D::default(), &CameraConfig::FLAME).unwrap();
        assert_eq!(p.x, 7.5);
        assert!((p.y - 12.0).abs() < 1e-9);
        assert_eq!(p.cell(), (8, 12));
    }

    #[test]
    fn test_perspective_shrinks_with_depth() {
        let near = project(Point3D::new(1.0, 1.0, -1.0), &CameraConfig::LOGO).unwrap();
        let far = project(Point3D::new(1.0, 1.0, 1.0), &CameraConfig::LOGO).unwrap();
        // scale 10/4 vs 10/6
        assert!((near.x - 42.5).abs() < 1e-12);
        assert!((near.y - 12.5).abs() < 1e-12);
        assert!((far.x - (40.0 + 10.0 / 6.0)).abs() < 1e-12);
        assert!((far.y - (15.0 - 10.0 / 6.0)).abs() < 1e-12);
        assert!(far.depth > near.depth);
    }

    #[test]
    fn test_y_axis_points_up() {
        let up = project(Point3D::new(0.0, 1.0, 0.0), &CameraConfig::LOGO).unwrap();
        assert!(up.y < 15.0);
    }

    #[test]
    fn test_vertical_stretch_applies() {
        let camera = CameraConfig::FLAME;
        let p = project(Point3D::new(0.0, 1.0, 0.0), &camera).unwrap();
        // -1 * (8/3) * 1.2 + 12
        assert!((p.y - (12.0 - 8.0 / 3.0 * 1.2)).abs() < 1e-12);
    }

    #[test]
    fn test_behind_camera_is_none() {
        let camera = CameraConfig::LOGO;
        assert!(project(Point3D::new(0.0, 0.0, -5.0), &camera).is_none());
        assert!(project(Point3D::new(0.0, 0.0, -7.5), &camera).is_none());
        assert!(project(Point3D::new(0.0, 0.0, -4.999), &camera).is_some());
    }

    #[test]
    fn test_non_finite_is_none() {
        let camera = CameraConfig::LOGO;
        assert!(project(Point3D::new(0.0, 0.0, f64::NAN), &camera).is_none());
        assert!(project(Point3D::new(0.0, 0.0, f64::INFINITY), &camera).is_none());
    }

    #[test]
    fn test_cell_rounds_half_away_from_zero() {
        let p = Projection {
            x: 2.5,
            y: -0.5,
            depth: 1.0,
        };
        assert_eq!(p.cell(), (3, -1));
    }
}
