//! Static perspective camera
//!
//! The camera never moves: the view is a fixed pull-back translation so the
//! whole room fits in frame, composed with a standard perspective projection.

use glam::{Mat4, Vec3};

/// Perspective camera looking into the room from the open front side
#[derive(Debug, Clone)]
pub struct RoomCamera {
    /// Vertical field of view in radians
    pub fov_y: f32,
    /// Width / height of the render surface
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    /// How far the scene is pushed away from the viewer along -Z
    pub distance: f32,
}

impl Default for RoomCamera {
    fn default() -> Self {
        Self {
            fov_y: 45.0_f32.to_radians(),
            aspect: 1.0,
            near: 0.1,
            far: 50.0,
            distance: 15.0,
        }
    }
}

impl RoomCamera {
    pub fn new(fov_y: f32, aspect: f32, near: f32, far: f32, distance: f32) -> Self {
        Self {
            fov_y,
            aspect,
            near,
            far,
            distance,
        }
    }

    /// Refreshes the aspect ratio after a surface resize
    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_translation(Vec3::new(0.0, 0.0, -self.distance))
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_camera_matches_window_setup() {
        let cam = RoomCamera::default();
        assert!((cam.fov_y - 45.0_f32.to_radians()).abs() < 1e-6);
        assert_eq!(cam.aspect, 1.0);
        assert_eq!(cam.near, 0.1);
        assert_eq!(cam.far, 50.0);
        assert_eq!(cam.distance, 15.0);
    }

    #[test]
    fn view_projection_is_finite() {
        let cam = RoomCamera::default();
        assert!(cam.view_projection().is_finite());
    }

    #[test]
    fn room_center_projects_to_screen_center() {
        let cam = RoomCamera::default();
        let ndc = cam.view_projection().project_point3(Vec3::ZERO);
        assert!(ndc.x.abs() < 1e-6);
        assert!(ndc.y.abs() < 1e-6);
        // The origin sits 15 units out, between the near and far planes
        assert!(ndc.z > 0.0 && ndc.z < 1.0);
    }

    #[test]
    fn room_depth_range_sits_inside_the_frustum() {
        let cam = RoomCamera::default();
        let vp = cam.view_projection();
        // Nearest and farthest room planes along Z for a half-extent of 5
        for z in [5.0, -5.0] {
            let ndc = vp.project_point3(Vec3::new(0.0, 0.0, z));
            assert!(ndc.z > 0.0 && ndc.z < 1.0, "z plane {} clipped", z);
        }
    }

    #[test]
    fn set_aspect_only_touches_the_projection() {
        let mut cam = RoomCamera::default();
        let view = cam.view_matrix();
        cam.set_aspect(16.0 / 9.0);
        assert_eq!(cam.view_matrix(), view);
        assert!(cam.view_projection().is_finite());
    }
}
