use std::collections::HashSet;

use winit::{
    dpi::PhysicalPosition,
    event::{DeviceEvent, ElementState, KeyEvent, MouseScrollDelta},
    keyboard::{KeyCode, PhysicalKey},
};

use super::fly_camera::{CameraMovement, FlyCamera};

/// Pixel-delta scroll is converted to wheel "lines" at this ratio
const PIXELS_PER_LINE: f32 = 120.0;

/// Buffers raw keyboard and mouse input between frames and applies it to a
/// [`FlyCamera`] once per frame.
///
/// Keys map as W/S forward/backward, A/D left/right, Q/E up/down.
pub struct CameraController {
    held: HashSet<CameraMovement>,
    mouse_delta: (f32, f32),
    scroll_delta: f32,
    first_mouse: bool,
    focused: bool,
}

impl Default for CameraController {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraController {
    pub fn new() -> Self {
        Self {
            held: HashSet::new(),
            mouse_delta: (0.0, 0.0),
            scroll_delta: 0.0,
            first_mouse: true,
            focused: true,
        }
    }

    /// Feeds a key event. Returns true when the projection toggle was pressed.
    pub fn process_keyed_events(&mut self, event: &KeyEvent) -> bool {
        let PhysicalKey::Code(code) = event.physical_key else {
            return false;
        };
        self.process_key(code, event.state, event.repeat)
    }

    fn process_key(&mut self, code: KeyCode, state: ElementState, repeat: bool) -> bool {
        match key_action(code, state, repeat) {
            KeyAction::ToggleProjection => true,
            KeyAction::Hold(direction) => {
                self.held.insert(direction);
                false
            }
            KeyAction::Release(direction) => {
                self.held.remove(&direction);
                false
            }
            KeyAction::None => false,
        }
    }

    /// Accumulates raw mouse motion. The first sample after a (re)grab is
    /// dropped so the view does not jump.
    pub fn process_events(&mut self, event: &DeviceEvent) {
        if let DeviceEvent::MouseMotion { delta } = event {
            self.process_mouse_motion(delta.0 as f32, delta.1 as f32);
        }
    }

    fn process_mouse_motion(&mut self, dx: f32, dy: f32) {
        if !self.focused {
            return;
        }
        if self.first_mouse {
            self.first_mouse = false;
            return;
        }
        // Screen y grows downwards; camera pitch grows upwards.
        self.mouse_delta.0 += dx;
        self.mouse_delta.1 -= dy;
    }

    pub fn process_scroll(&mut self, delta: &MouseScrollDelta) {
        self.scroll_delta += match delta {
            MouseScrollDelta::LineDelta(_, y) => *y,
            MouseScrollDelta::PixelDelta(PhysicalPosition { y, .. }) => *y as f32 / PIXELS_PER_LINE,
        };
    }

    /// Call after the cursor is grabbed again so the next motion is ignored
    pub fn reset_mouse(&mut self) {
        self.first_mouse = true;
        self.mouse_delta = (0.0, 0.0);
    }

    /// Releases every held key, e.g. when the window loses focus
    pub fn release_all(&mut self) {
        self.held.clear();
    }

    /// Raw motion is ignored while unfocused. Regaining focus starts a fresh
    /// first-mouse cycle; losing it drops held keys and pending motion.
    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
        if focused {
            self.reset_mouse();
        } else {
            self.release_all();
            self.mouse_delta = (0.0, 0.0);
        }
    }

    pub fn is_held(&self, direction: CameraMovement) -> bool {
        self.held.contains(&direction)
    }

    /// Applies held keys for `dt` seconds plus all buffered mouse input
    pub fn update_camera(&mut self, camera: &mut FlyCamera, dt: f32) {
        for direction in &self.held {
            camera.process_keyboard(*direction, dt);
        }

        let (dx, dy) = std::mem::take(&mut self.mouse_delta);
        if dx != 0.0 || dy != 0.0 {
            camera.process_mouse_movement(dx, dy, true);
        }

        let scroll = std::mem::take(&mut self.scroll_delta);
        if scroll != 0.0 {
            camera.process_mouse_scroll(scroll);
        }
    }
}

/// What a single key transition does to the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyAction {
    ToggleProjection,
    Hold(CameraMovement),
    Release(CameraMovement),
    None,
}

/// The projection toggle fires on the press edge only; OS key repeat is ignored.
fn key_action(code: KeyCode, state: ElementState, repeat: bool) -> KeyAction {
    let pressed = state == ElementState::Pressed;
    if code == KeyCode::KeyP {
        return if pressed && !repeat {
            KeyAction::ToggleProjection
        } else {
            KeyAction::None
        };
    }
    match movement_for_key(code) {
        Some(direction) if pressed => KeyAction::Hold(direction),
        Some(direction) => KeyAction::Release(direction),
        None => KeyAction::None,
    }
}

fn movement_for_key(code: KeyCode) -> Option<CameraMovement> {
    match code {
        KeyCode::KeyW => Some(CameraMovement::Forward),
        KeyCode::KeyS => Some(CameraMovement::Backward),
        KeyCode::KeyA => Some(CameraMovement::Left),
        KeyCode::KeyD => Some(CameraMovement::Right),
        KeyCode::KeyQ => Some(CameraMovement::Up),
        KeyCode::KeyE => Some(CameraMovement::Down),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::{EuclideanSpace, InnerSpace, Vector3};

    #[test]
    fn test_key_mapping() {
        assert_eq!(movement_for_key(KeyCode::KeyW), Some(CameraMovement::Forward));
        assert_eq!(movement_for_key(KeyCode::KeyS), Some(CameraMovement::Backward));
        assert_eq!(movement_for_key(KeyCode::KeyA), Some(CameraMovement::Left));
        assert_eq!(movement_for_key(KeyCode::KeyD), Some(CameraMovement::Right));
        assert_eq!(movement_for_key(KeyCode::KeyQ), Some(CameraMovement::Up));
        assert_eq!(movement_for_key(KeyCode::KeyE), Some(CameraMovement::Down));
        assert_eq!(movement_for_key(KeyCode::KeyP), None);
    }

    #[test]
    fn test_projection_toggle_fires_on_press_edge_only() {
        assert_eq!(
            key_action(KeyCode::KeyP, ElementState::Pressed, false),
            KeyAction::ToggleProjection
        );
        assert_eq!(key_action(KeyCode::KeyP, ElementState::Pressed, true), KeyAction::None);
        assert_eq!(key_action(KeyCode::KeyP, ElementState::Released, false), KeyAction::None);

        let mut controller = CameraController::new();
        assert!(controller.process_key(KeyCode::KeyP, ElementState::Pressed, false));
        assert!(!controller.process_key(KeyCode::KeyP, ElementState::Pressed, true));
        assert!(!controller.process_key(KeyCode::KeyP, ElementState::Released, false));
    }

    #[test]
    fn test_movement_keys_hold_until_released() {
        let mut controller = CameraController::new();
        assert!(!controller.process_key(KeyCode::KeyW, ElementState::Pressed, false));
        assert!(controller.is_held(CameraMovement::Forward));

        controller.process_key(KeyCode::KeyW, ElementState::Pressed, true);
        assert!(controller.is_held(CameraMovement::Forward));

        controller.process_key(KeyCode::KeyW, ElementState::Released, false);
        assert!(!controller.is_held(CameraMovement::Forward));

        controller.process_key(KeyCode::KeyX, ElementState::Pressed, false);
        assert!(controller.held.is_empty());
    }

    #[test]
    fn test_held_direction_applies_every_update() {
        let mut controller = CameraController::new();
        controller.process_key(KeyCode::KeyW, ElementState::Pressed, false);
        let mut camera = FlyCamera::default();

        controller.update_camera(&mut camera, 0.5);
        controller.update_camera(&mut camera, 0.5);
        let moved = camera.position.to_vec() - Vector3::new(0.0, 1.0, 5.0);
        assert!((moved - Vector3::new(0.0, 0.0, -2.5)).magnitude() < 1e-5);

        controller.release_all();
        let before = camera.position;
        controller.update_camera(&mut camera, 0.5);
        assert_eq!(camera.position, before);
    }

    #[test]
    fn test_first_mouse_sample_is_dropped() {
        let mut controller = CameraController::new();
        controller.process_mouse_motion(500.0, 500.0);
        assert_eq!(controller.mouse_delta, (0.0, 0.0));

        controller.process_mouse_motion(10.0, 4.0);
        assert_eq!(controller.mouse_delta, (10.0, -4.0));

        controller.reset_mouse();
        controller.process_mouse_motion(3.0, 3.0);
        assert_eq!(controller.mouse_delta, (0.0, 0.0));
    }

    #[test]
    fn test_unfocused_window_ignores_mouse_look() {
        let mut controller = CameraController::new();
        controller.process_mouse_motion(0.0, 0.0);
        controller.process_key(KeyCode::KeyA, ElementState::Pressed, false);

        controller.set_focused(false);
        assert!(!controller.is_held(CameraMovement::Left));
        controller.process_mouse_motion(40.0, 40.0);
        let mut camera = FlyCamera::default();
        controller.update_camera(&mut camera, 0.016);
        assert_eq!(camera.yaw, -90.0);
        assert_eq!(camera.pitch, 0.0);

        // The first sample after refocusing is the grab jump.
        controller.set_focused(true);
        controller.process_mouse_motion(300.0, 300.0);
        assert_eq!(controller.mouse_delta, (0.0, 0.0));
        controller.process_mouse_motion(10.0, 0.0);
        assert_eq!(controller.mouse_delta, (10.0, 0.0));
    }

    #[test]
    fn test_mouse_down_pitches_camera_down() {
        let mut controller = CameraController::new();
        controller.process_mouse_motion(0.0, 0.0);
        controller.process_mouse_motion(0.0, 100.0);
        let mut camera = FlyCamera::default();
        controller.update_camera(&mut camera, 0.016);
        assert!((camera.pitch + 10.0).abs() < 1e-4);
        assert_eq!(controller.mouse_delta, (0.0, 0.0));
    }

    #[test]
    fn test_scroll_zooms_in() {
        let mut controller = CameraController::new();
        controller.process_scroll(&MouseScrollDelta::LineDelta(0.0, 2.0));
        controller.process_scroll(&MouseScrollDelta::PixelDelta(PhysicalPosition::new(0.0, 240.0)));
        let mut camera = FlyCamera::default();
        controller.update_camera(&mut camera, 0.016);
        assert!((camera.zoom - 41.0).abs() < 1e-5);
    }
}
