use cgmath::*;

/// Movement directions understood by [`FlyCamera::process_keyboard`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CameraMovement {
    Forward,
    Backward,
    Left,
    Right,
    Up,
    Down,
}

pub const DEFAULT_YAW: f32 = -90.0;
pub const DEFAULT_PITCH: f32 = 0.0;
pub const DEFAULT_SPEED: f32 = 2.5;
pub const DEFAULT_SENSITIVITY: f32 = 0.1;
pub const DEFAULT_ZOOM: f32 = 45.0;

pub const PITCH_LIMIT: f32 = 89.0;
pub const MIN_ZOOM: f32 = 1.0;
pub const MAX_ZOOM: f32 = 45.0;

/// Euler-angle fly camera
///
/// Yaw, pitch and zoom are stored in degrees. `front`, `right` and `up` are
/// derived from yaw and pitch and refreshed whenever either changes.
#[derive(Debug, Clone, Copy)]
pub struct FlyCamera {
    pub position: Point3<f32>,
    pub front: Vector3<f32>,
    pub up: Vector3<f32>,
    pub right: Vector3<f32>,
    pub world_up: Vector3<f32>,
    pub yaw: f32,
    pub pitch: f32,
    pub movement_speed: f32,
    pub mouse_sensitivity: f32,
    pub zoom: f32,
}

impl Default for FlyCamera {
    fn default() -> Self {
        Self::new(Point3::new(0.0, 1.0, 5.0))
    }
}

impl FlyCamera {
    pub fn new(position: Point3<f32>) -> Self {
        Self::with_orientation(position, Vector3::unit_y(), DEFAULT_YAW, DEFAULT_PITCH)
    }

    pub fn with_orientation(
        position: Point3<f32>,
        world_up: Vector3<f32>,
        yaw: f32,
        pitch: f32,
    ) -> Self {
        let mut camera = Self {
            position,
            front: -Vector3::unit_z(),
            up: world_up,
            right: Vector3::unit_x(),
            world_up,
            yaw,
            pitch,
            movement_speed: DEFAULT_SPEED,
            mouse_sensitivity: DEFAULT_SENSITIVITY,
            zoom: DEFAULT_ZOOM,
        };
        camera.update_camera_vectors();
        camera
    }

    pub fn view_matrix(&self) -> Matrix4<f32> {
        Matrix4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    /// Moves along the camera basis by `movement_speed * dt`
    pub fn process_keyboard(&mut self, direction: CameraMovement, dt: f32) {
        let velocity = self.movement_speed * dt;
        match direction {
            CameraMovement::Forward => self.position += self.front * velocity,
            CameraMovement::Backward => self.position -= self.front * velocity,
            CameraMovement::Left => self.position -= self.right * velocity,
            CameraMovement::Right => self.position += self.right * velocity,
            CameraMovement::Up => self.position += self.up * velocity,
            CameraMovement::Down => self.position -= self.up * velocity,
        }
    }

    /// Applies a mouse offset. Positive `y_offset` looks up.
    pub fn process_mouse_movement(&mut self, x_offset: f32, y_offset: f32, constrain_pitch: bool) {
        self.yaw += x_offset * self.mouse_sensitivity;
        self.pitch += y_offset * self.mouse_sensitivity;

        // Past 90 degrees the view flips over.
        if constrain_pitch {
            self.pitch = self.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        }

        self.update_camera_vectors();
    }

    pub fn process_mouse_scroll(&mut self, y_offset: f32) {
        self.zoom = (self.zoom - y_offset).clamp(MIN_ZOOM, MAX_ZOOM);
    }

    fn update_camera_vectors(&mut self) {
        let (yaw, pitch) = (Deg(self.yaw), Deg(self.pitch));
        self.front = Vector3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        )
        .normalize();
        self.right = self.front.cross(self.world_up).normalize();
        self.up = self.right.cross(self.front).normalize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn approx(a: Vector3<f32>, b: Vector3<f32>) -> bool {
        (a - b).magnitude() < EPS
    }

    #[test]
    fn test_default_camera_looks_down_negative_z() {
        let cam = FlyCamera::default();
        assert_eq!(cam.position, Point3::new(0.0, 1.0, 5.0));
        assert!(approx(cam.front, Vector3::new(0.0, 0.0, -1.0)));
        assert!(approx(cam.right, Vector3::new(1.0, 0.0, 0.0)));
        assert!(approx(cam.up, Vector3::new(0.0, 1.0, 0.0)));
        assert_eq!(cam.zoom, 45.0);
    }

    #[test]
    fn test_keyboard_moves_by_speed_times_dt() {
        let mut cam = FlyCamera::default();
        cam.process_keyboard(CameraMovement::Forward, 1.0);
        assert!(approx(cam.position.to_vec(), Vector3::new(0.0, 1.0, 2.5)));

        cam.process_keyboard(CameraMovement::Right, 0.4);
        assert!(approx(cam.position.to_vec(), Vector3::new(1.0, 1.0, 2.5)));

        cam.process_keyboard(CameraMovement::Up, 0.2);
        assert!(approx(cam.position.to_vec(), Vector3::new(1.0, 1.5, 2.5)));
    }

    #[test]
    fn test_opposite_directions_cancel() {
        let mut cam = FlyCamera::default();
        let start = cam.position;
        for (a, b) in [
            (CameraMovement::Forward, CameraMovement::Backward),
            (CameraMovement::Left, CameraMovement::Right),
            (CameraMovement::Up, CameraMovement::Down),
        ] {
            cam.process_keyboard(a, 0.3);
            cam.process_keyboard(b, 0.3);
        }
        assert!(approx(cam.position.to_vec(), start.to_vec()));
    }

    #[test]
    fn test_pitch_is_clamped() {
        let mut cam = FlyCamera::default();
        cam.process_mouse_movement(0.0, 10_000.0, true);
        assert_eq!(cam.pitch, PITCH_LIMIT);
        cam.process_mouse_movement(0.0, -10_000.0, true);
        assert_eq!(cam.pitch, -PITCH_LIMIT);
    }

    #[test]
    fn test_unconstrained_pitch_passes_through() {
        let mut cam = FlyCamera::default();
        cam.process_mouse_movement(0.0, 1000.0, false);
        assert!((cam.pitch - 100.0).abs() < EPS);
    }

    #[test]
    fn test_yaw_turns_front_towards_positive_x() {
        let mut cam = FlyCamera::default();
        // 900 * 0.1 = 90 degrees of yaw
        cam.process_mouse_movement(900.0, 0.0, true);
        assert!((cam.yaw - 0.0).abs() < 1e-3);
        assert!(approx(cam.front, Vector3::new(1.0, 0.0, 0.0)));
    }

    #[test]
    fn test_basis_stays_orthonormal() {
        let mut cam = FlyCamera::default();
        cam.process_mouse_movement(123.0, 321.0, true);
        assert!((cam.front.magnitude() - 1.0).abs() < EPS);
        assert!((cam.right.magnitude() - 1.0).abs() < EPS);
        assert!((cam.up.magnitude() - 1.0).abs() < EPS);
        assert!(cam.front.dot(cam.right).abs() < EPS);
        assert!(cam.front.dot(cam.up).abs() < EPS);
    }

    #[test]
    fn test_scroll_zoom_is_clamped() {
        let mut cam = FlyCamera::default();
        cam.process_mouse_scroll(10.0);
        assert_eq!(cam.zoom, 35.0);
        cam.process_mouse_scroll(100.0);
        assert_eq!(cam.zoom, MIN_ZOOM);
        cam.process_mouse_scroll(-100.0);
        assert_eq!(cam.zoom, MAX_ZOOM);
    }

    #[test]
    fn test_view_matrix_maps_eye_to_origin() {
        let cam = FlyCamera::default();
        let eye = cam.view_matrix() * cam.position.to_homogeneous();
        assert!(approx(eye.truncate(), Vector3::zero()));

        let ahead = cam.view_matrix() * (cam.position + cam.front).to_homogeneous();
        assert!(approx(ahead.truncate(), Vector3::new(0.0, 0.0, -1.0)));
    }
}
