use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

/// Perspective camera for 3D rendering.
///
/// Ownership split: the simulation owns `position` (fly translation,
/// shake); orientation belongs to the host's view controller and is only
/// changed through `set_orientation` / `look_at`.
pub struct Camera {
    /// Camera position in world space.
    pub position: Vec3,
    /// Vertical field of view in degrees.
    pub fov_y_deg: f32,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Near clip plane.
    pub near: f32,
    /// Far clip plane.
    pub far: f32,
    /// Heading around world Y, radians.
    yaw: f32,
    /// Elevation around local X, radians.
    pitch: f32,
}

/// GPU-side uniform data for the camera.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct CameraUniform {
    pub view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
}

impl Camera {
    pub fn new(fov_y_deg: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            position: Vec3::ZERO,
            fov_y_deg,
            aspect,
            near,
            far,
            yaw: 0.0,
            pitch: 0.0,
        }
    }

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Current view direction (unit vector).
    pub fn forward(&self) -> Vec3 {
        let (sy, cy) = self.yaw.sin_cos();
        let (sp, cp) = self.pitch.sin_cos();
        Vec3::new(-cp * sy, sp, -cp * cy)
    }

    /// Set orientation directly. Reserved for the external view controller.
    pub fn set_orientation(&mut self, yaw: f32, pitch: f32) {
        self.yaw = yaw;
        self.pitch = pitch.clamp(
            -std::f32::consts::FRAC_PI_2 + 1e-3,
            std::f32::consts::FRAC_PI_2 - 1e-3,
        );
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Orient the camera toward a world-space target.
    pub fn look_at(&mut self, target: Vec3) {
        let dir = target - self.position;
        if dir.length_squared() < 1e-12 {
            return;
        }
        let dir = dir.normalize();
        self.set_orientation(f32::atan2(-dir.x, -dir.z), dir.y.asin());
    }

    /// Build the view matrix (right-handed, Y-up).
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_to_rh(self.position, self.forward(), Vec3::Y)
    }

    /// Build the perspective projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y_deg.to_radians(), self.aspect, self.near, self.far)
    }

    pub fn uniform(&self) -> CameraUniform {
        CameraUniform {
            view: self.view_matrix().to_cols_array_2d(),
            projection: self.projection_matrix().to_cols_array_2d(),
        }
    }

    /// Recompute the aspect ratio on viewport resize.
    pub fn resize(&mut self, viewport_width: f32, viewport_height: f32) {
        if viewport_height > 0.0 {
            self.aspect = viewport_width / viewport_height;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_orientation_faces_negative_z() {
        let cam = Camera::new(45.0, 16.0 / 9.0, 1.0, 10_000.0);
        let f = cam.forward();
        assert!((f - Vec3::NEG_Z).length() < 1e-6, "forward was {:?}", f);
    }

    #[test]
    fn look_at_points_forward_at_target() {
        let mut cam =
            Camera::new(45.0, 1.0, 1.0, 10_000.0).with_position(Vec3::new(400.0, 200.0, 600.0));
        cam.look_at(Vec3::ZERO);
        let expected = (Vec3::ZERO - cam.position).normalize();
        assert!((cam.forward() - expected).length() < 1e-4);
    }

    #[test]
    fn resize_updates_aspect() {
        let mut cam = Camera::new(45.0, 1.0, 1.0, 10_000.0);
        cam.resize(1920.0, 1080.0);
        assert!((cam.aspect - 1920.0 / 1080.0).abs() < 1e-6);
    }

    #[test]
    fn resize_ignores_degenerate_viewport() {
        let mut cam = Camera::new(45.0, 1.5, 1.0, 10_000.0);
        cam.resize(800.0, 0.0);
        assert_eq!(cam.aspect, 1.5);
    }

    #[test]
    fn uniform_packs_both_matrices() {
        let cam = Camera::new(45.0, 1.0, 1.0, 10_000.0).with_position(Vec3::new(0.0, 0.0, 5.0));
        let uniform = cam.uniform();
        assert_eq!(uniform.view, cam.view_matrix().to_cols_array_2d());
        assert_eq!(uniform.projection, cam.projection_matrix().to_cols_array_2d());
    }

    #[test]
    fn pitch_is_clamped_short_of_the_poles() {
        let mut cam = Camera::new(45.0, 1.0, 1.0, 10_000.0);
        cam.set_orientation(0.0, 10.0);
        assert!(cam.pitch() < std::f32::consts::FRAC_PI_2);
    }
}
