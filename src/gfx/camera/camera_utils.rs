use cgmath::{ortho, perspective, Deg, EuclideanSpace, Matrix4, SquareMatrix};
use winit::event::{DeviceEvent, KeyEvent, MouseScrollDelta};

use super::{camera_controller::CameraController, fly_camera::FlyCamera};

/// Maps OpenGL clip-space depth [-1, 1] onto wgpu's [0, 1].
#[rustfmt::skip]
pub const OPENGL_TO_WGPU_MATRIX: Matrix4<f32> = Matrix4::new(
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 0.5, 0.0,
    0.0, 0.0, 0.5, 1.0,
);

pub const Z_NEAR: f32 = 0.1;
pub const Z_FAR: f32 = 100.0;
/// Half extent of the orthographic view volume on x and y
pub const ORTHO_HALF_EXTENT: f32 = 5.0;

/// Projection mode, toggled at runtime with P
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Projection {
    #[default]
    Perspective,
    Orthographic,
}

impl Projection {
    pub fn toggled(self) -> Self {
        match self {
            Projection::Perspective => Projection::Orthographic,
            Projection::Orthographic => Projection::Perspective,
        }
    }

    /// Projection matrix in wgpu clip space
    ///
    /// `fovy_degrees` only affects the perspective mode.
    pub fn matrix(self, fovy_degrees: f32, aspect: f32) -> Matrix4<f32> {
        let gl = match self {
            Projection::Perspective => perspective(Deg(fovy_degrees), aspect, Z_NEAR, Z_FAR),
            Projection::Orthographic => ortho(
                -ORTHO_HALF_EXTENT,
                ORTHO_HALF_EXTENT,
                -ORTHO_HALF_EXTENT,
                ORTHO_HALF_EXTENT,
                Z_NEAR,
                Z_FAR,
            ),
        };
        OPENGL_TO_WGPU_MATRIX * gl
    }
}

/// Per-frame camera data handed to the renderer
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CameraUniform {
    /// The eye position of the camera in homogenous coordinates.
    ///
    /// Homogenous coordinates are used to fullfill the 16 byte alignment requirement.
    pub view_position: [f32; 4],
    pub view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self {
            view_position: [0.0, 0.0, 0.0, 1.0],
            view: convert_matrix4_to_array(Matrix4::identity()),
            projection: convert_matrix4_to_array(Matrix4::identity()),
        }
    }
}

pub fn convert_matrix4_to_array(matrix4: Matrix4<f32>) -> [[f32; 4]; 4] {
    matrix4.into()
}

/// Owns the fly camera, its input controller and the projection state
pub struct CameraManager {
    pub camera: FlyCamera,
    pub controller: CameraController,
    pub projection: Projection,
    pub aspect: f32,
    pub uniform: CameraUniform,
}

impl CameraManager {
    pub fn new(camera: FlyCamera, controller: CameraController, width: u32, height: u32) -> Self {
        let mut manager = Self {
            camera,
            controller,
            projection: Projection::default(),
            aspect: 1.0,
            uniform: CameraUniform::default(),
        };
        manager.resize_projection(width, height);
        manager.update_uniform();
        manager
    }

    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        if self.controller.process_keyed_events(event) {
            self.projection = self.projection.toggled();
            log::info!("projection switched to {:?}", self.projection);
        }
    }

    pub fn process_event(&mut self, event: &DeviceEvent) {
        self.controller.process_events(event);
    }

    pub fn process_scroll(&mut self, delta: &MouseScrollDelta) {
        self.controller.process_scroll(delta);
    }

    /// Aspect ratio follows the drawable size; zero sizes are ignored
    pub fn resize_projection(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    /// Applies buffered input for this frame and refreshes the uniform
    pub fn update(&mut self, dt: f32) {
        self.controller.update_camera(&mut self.camera, dt);
        self.update_uniform();
    }

    pub fn view_matrix(&self) -> Matrix4<f32> {
        self.camera.view_matrix()
    }

    pub fn projection_matrix(&self) -> Matrix4<f32> {
        self.projection.matrix(self.camera.zoom, self.aspect)
    }

    fn update_uniform(&mut self) {
        let eye = self.camera.position.to_vec();
        self.uniform = CameraUniform {
            view_position: [eye.x, eye.y, eye.z, 1.0],
            view: convert_matrix4_to_array(self.view_matrix()),
            projection: convert_matrix4_to_array(self.projection_matrix()),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::{Point3, Vector4};

    fn manager() -> CameraManager {
        CameraManager::new(FlyCamera::default(), CameraController::default(), 800, 600)
    }

    fn to_ndc(clip: Vector4<f32>) -> (f32, f32, f32) {
        (clip.x / clip.w, clip.y / clip.w, clip.z / clip.w)
    }

    #[test]
    fn test_initial_aspect_follows_window() {
        let m = manager();
        assert!((m.aspect - 800.0 / 600.0).abs() < 1e-6);
        assert_eq!(m.projection, Projection::Perspective);
    }

    #[test]
    fn test_zero_size_resize_keeps_aspect() {
        let mut m = manager();
        m.resize_projection(0, 300);
        assert!((m.aspect - 800.0 / 600.0).abs() < 1e-6);
        m.resize_projection(300, 300);
        assert!((m.aspect - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_toggle_round_trips() {
        assert_eq!(Projection::Perspective.toggled(), Projection::Orthographic);
        assert_eq!(Projection::Perspective.toggled().toggled(), Projection::Perspective);
    }

    #[test]
    fn test_perspective_depth_range_is_zero_to_one() {
        let proj = Projection::Perspective.matrix(45.0, 1.0);
        let near = to_ndc(proj * Vector4::new(0.0, 0.0, -Z_NEAR, 1.0));
        let far = to_ndc(proj * Vector4::new(0.0, 0.0, -Z_FAR, 1.0));
        assert!(near.2.abs() < 1e-4);
        assert!((far.2 - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_orthographic_maps_extent_to_unit_square() {
        let proj = Projection::Orthographic.matrix(45.0, 4.0 / 3.0);
        let corner = to_ndc(proj * Vector4::new(5.0, -5.0, -Z_NEAR, 1.0));
        assert!((corner.0 - 1.0).abs() < 1e-5);
        assert!((corner.1 + 1.0).abs() < 1e-5);
        assert!(corner.2.abs() < 1e-5);
    }

    #[test]
    fn test_point_ahead_of_camera_lands_in_view() {
        let m = manager();
        let target = Point3::new(0.0, 1.0, 0.0).to_homogeneous();
        let clip = m.projection_matrix() * m.view_matrix() * target;
        let (x, y, z) = to_ndc(clip);
        assert!(x.abs() < 1e-5 && y.abs() < 1e-5);
        assert!((0.0..=1.0).contains(&z));
    }

    #[test]
    fn test_uniform_tracks_camera_position() {
        let mut m = manager();
        m.camera.position = Point3::new(1.0, 2.0, 3.0);
        m.update(0.016);
        assert_eq!(m.uniform.view_position, [1.0, 2.0, 3.0, 1.0]);
    }
}
