use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    dpi::{LogicalSize, PhysicalSize},
    event::{DeviceEvent, DeviceId, ElementState, KeyEvent, MouseButton, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{CursorGrabMode, Window, WindowAttributes, WindowId},
};

use crate::{
    config::AppConfig,
    error::{Result, TearoomError},
    gfx::{
        camera::{camera_controller::CameraController, camera_utils::CameraManager, fly_camera::FlyCamera},
        rendering::render_engine::{RenderEngine, SurfaceErrorAction},
        scene::Scene,
    },
    time::FrameClock,
};

pub struct TearoomApp {
    event_loop: EventLoop<()>,
    app_state: AppState,
}

struct AppState {
    config: AppConfig,
    window: Option<Arc<Window>>,
    render_engine: Option<RenderEngine>,
    scene: Scene,
    clock: FrameClock,
    /// Set when startup fails inside the event loop; returned from `run`
    failure: Option<TearoomError>,
}

impl TearoomApp {
    /// Creates the event loop and the room scene; the window comes later, on resume
    pub fn new(config: AppConfig) -> Result<Self> {
        let event_loop = EventLoop::new()?;

        let camera_manager = CameraManager::new(
            FlyCamera::default(),
            CameraController::new(),
            config.width,
            config.height,
        );
        let scene = Scene::room(camera_manager);

        Ok(Self {
            event_loop,
            app_state: AppState {
                config,
                window: None,
                render_engine: None,
                scene,
                clock: FrameClock::new(),
                failure: None,
            },
        })
    }

    /// Runs until the window closes, Esc is pressed or rendering fails fatally
    pub fn run(self) -> Result<()> {
        let TearoomApp {
            event_loop,
            mut app_state,
        } = self;

        event_loop.set_control_flow(ControlFlow::Poll);
        event_loop.run_app(&mut app_state)?;

        match app_state.failure.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl AppState {
    fn start(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attributes = WindowAttributes::default()
            .with_title(self.config.title.clone())
            .with_inner_size(LogicalSize::new(self.config.width, self.config.height));
        let window = Arc::new(event_loop.create_window(attributes)?);

        grab_cursor(&window);

        let PhysicalSize { width, height } = window.inner_size();
        let renderer = pollster::block_on(RenderEngine::new(
            window.clone(),
            width,
            height,
            &self.config,
        ))?;

        renderer.prepare_scene(&mut self.scene, &self.config.texture_dir);
        self.scene.camera_manager.resize_projection(width, height);
        self.scene.camera_manager.controller.reset_mouse();
        self.clock.reset();

        self.window = Some(window);
        self.render_engine = Some(renderer);
        Ok(())
    }

    fn handle_keyboard(&mut self, event_loop: &ActiveEventLoop, event: &KeyEvent) {
        if event.physical_key == PhysicalKey::Code(KeyCode::Escape)
            && event.state == ElementState::Pressed
        {
            event_loop.exit();
            return;
        }
        self.scene.camera_manager.process_keyboard_event(event);
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let frame = self.clock.tick();
        self.scene.update(frame.dt);

        let Some(render_engine) = self.render_engine.as_mut() else {
            return;
        };

        match render_engine.render_frame(&self.scene) {
            Ok(()) => {}
            Err(SurfaceErrorAction::Fatal) => {
                log::error!("surface out of memory, exiting");
                event_loop.exit();
            }
            Err(action) => log::debug!("frame {} dropped: {:?}", frame.frame_index, action),
        }
    }
}

/// Locks the cursor to the window for mouse look, falling back to confining it
fn grab_cursor(window: &Window) {
    let grabbed = window
        .set_cursor_grab(CursorGrabMode::Locked)
        .or_else(|_| window.set_cursor_grab(CursorGrabMode::Confined));
    if let Err(err) = grabbed {
        log::warn!("could not grab cursor: {}", err);
    }
    window.set_cursor_visible(false);
}

fn mouse_button_message(button: MouseButton, state: ElementState) -> String {
    let name = match button {
        MouseButton::Left => "Left",
        MouseButton::Middle => "Middle",
        MouseButton::Right => "Right",
        _ => return "Unhandled mouse button event".to_string(),
    };
    let action = match state {
        ElementState::Pressed => "pressed",
        ElementState::Released => "released",
    };
    format!("{} mouse button {}", name, action)
}

impl ApplicationHandler for AppState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if let Err(err) = self.start(event_loop) {
            log::error!("startup failed: {}", err);
            self.failure = Some(err);
            event_loop.exit();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput { event, .. } => self.handle_keyboard(event_loop, &event),
            WindowEvent::MouseInput { state, button, .. } => {
                log::info!("{}", mouse_button_message(button, state));
            }
            WindowEvent::MouseWheel { delta, .. } => {
                self.scene.camera_manager.process_scroll(&delta);
            }
            WindowEvent::Focused(focused) => {
                if focused {
                    if let Some(window) = self.window.as_ref() {
                        grab_cursor(window);
                    }
                }
                self.scene.camera_manager.controller.set_focused(focused);
            }
            WindowEvent::Resized(PhysicalSize { width, height }) => {
                if let Some(render_engine) = self.render_engine.as_mut() {
                    render_engine.resize(width, height);
                }
                self.scene.camera_manager.resize_projection(width, height);
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => (),
        }
    }

    fn device_event(&mut self, _event_loop: &ActiveEventLoop, _device_id: DeviceId, event: DeviceEvent) {
        if self.window.is_none() {
            return;
        }
        self.scene.camera_manager.process_event(&event);
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(ref window) = self.window {
            window.request_redraw();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mouse_button_messages() {
        assert_eq!(
            mouse_button_message(MouseButton::Left, ElementState::Pressed),
            "Left mouse button pressed"
        );
        assert_eq!(
            mouse_button_message(MouseButton::Middle, ElementState::Released),
            "Middle mouse button released"
        );
        assert_eq!(
            mouse_button_message(MouseButton::Right, ElementState::Pressed),
            "Right mouse button pressed"
        );
        assert_eq!(
            mouse_button_message(MouseButton::Back, ElementState::Pressed),
            "Unhandled mouse button event"
        );
    }
}
