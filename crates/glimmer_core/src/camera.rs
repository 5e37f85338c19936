//! Pinhole camera.

use glimmer_math::{Mat4, Vec3, Vec4};

/// A pinhole camera described by an origin, a vertical field of view
/// (degrees), and a pitch/yaw orientation.
///
/// The camera-to-world matrix is cached: mutate the pose, then call
/// [`calculate_camera_to_world`] before generating rays for a frame.
/// Input handling (fly-through controls) lives outside this crate;
/// consumers only read the matrix and field of view.
///
/// [`calculate_camera_to_world`]: Camera::calculate_camera_to_world
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub origin: Vec3,
    /// Vertical field of view in degrees
    pub fov_angle: f32,
    /// Accumulated pitch in radians
    pub total_pitch: f32,
    /// Accumulated yaw in radians
    pub total_yaw: f32,
    pub camera_to_world: Mat4,
}

impl Camera {
    pub fn new(origin: Vec3, fov_angle: f32) -> Self {
        let mut camera = Self {
            origin,
            fov_angle,
            total_pitch: 0.0,
            total_yaw: 0.0,
            camera_to_world: Mat4::IDENTITY,
        };
        camera.calculate_camera_to_world();
        camera
    }

    /// Half-fov scale factor applied to raster coordinates.
    pub fn fov_scale(&self) -> f32 {
        (self.fov_angle.to_radians() / 2.0).tan()
    }

    /// Rebuild the orthonormal basis from pitch and yaw (no roll) and
    /// cache it, with the origin in the translation column.
    pub fn calculate_camera_to_world(&mut self) -> Mat4 {
        let rotation =
            Mat4::from_rotation_y(self.total_yaw) * Mat4::from_rotation_x(self.total_pitch);

        let right = rotation.x_axis.truncate();
        let up = rotation.y_axis.truncate();
        let forward = rotation.z_axis.truncate();

        self.camera_to_world = Mat4::from_cols(
            right.extend(0.0),
            up.extend(0.0),
            forward.extend(0.0),
            Vec4::new(self.origin.x, self.origin.y, self.origin.z, 1.0),
        );
        self.camera_to_world
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::ZERO, 90.0)
    }
}
