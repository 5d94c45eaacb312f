//! Main application handler for the viewer
//!
//! Owns the window, the rendering context, and the frame loop. The loop has
//! two states: running, and terminated once the close request arrives; there
//! is no way back.

use std::sync::Arc;
use std::time::Duration;

use tracing::{error, info, warn};
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowId};

use super::config::AppConfig;
use super::pacing::FramePacer;
use super::renderer::Renderer;
use super::window::window_attributes_from_config;
use crate::scene::{Room, RoomCamera, Scene};

/// Main viewer application
pub struct App {
    config: AppConfig,
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    scene: Scene,
    pacer: FramePacer,
}

impl App {
    /// Creates a new viewer with the provided configuration
    pub fn new(config: AppConfig) -> Self {
        info!(profile = %config.profile, "Starting viewer");
        info!(?config.window, "Window configuration");

        let aspect = (config.window.width / config.window.height) as f32;
        let camera = RoomCamera::new(
            config.camera.fov_degrees.to_radians(),
            aspect,
            config.camera.near,
            config.camera.far,
            config.camera.distance,
        );
        let scene = Scene::new(Room::new(config.room.half_extent), camera);
        let pacer = FramePacer::new(Duration::from_millis(config.timing.frame_interval_ms));

        Self {
            config,
            window: None,
            renderer: None,
            scene,
            pacer,
        }
    }

    /// Creates a new viewer with configuration loaded from environment
    pub fn from_env() -> Self {
        let config = AppConfig::load_from_env().unwrap_or_else(|e| {
            warn!(error = %e, "Failed to load config, using default configuration");
            AppConfig::default()
        });
        Self::new(config)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::from_env()
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window_attributes = window_attributes_from_config(&self.config.window);

            match event_loop.create_window(window_attributes) {
                Ok(window) => {
                    let size = window.inner_size();
                    info!(
                        window.width = size.width,
                        window.height = size.height,
                        "Window created successfully"
                    );

                    let window = Arc::new(window);
                    let vsync = self.config.window.vsync;

                    // Initialize renderer using tokio runtime
                    // We create a runtime here because winit's event loop is synchronous
                    let renderer = tokio::runtime::Runtime::new()
                        .expect("Failed to create tokio runtime")
                        .block_on(async { Renderer::new(window.clone(), vsync).await });

                    match renderer {
                        Ok(renderer) => {
                            info!("Renderer initialized successfully");
                            if size.height > 0 {
                                self.scene
                                    .camera
                                    .set_aspect(size.width as f32 / size.height as f32);
                            }
                            self.renderer = Some(renderer);
                            self.window = Some(window);
                        }
                        Err(e) => {
                            // Startup failure is fatal; there is nothing to retry
                            error!(error = %e, "Failed to initialize renderer");
                            event_loop.exit();
                        }
                    }
                }
                Err(e) => {
                    error!(error = %e, "Failed to create window");
                    event_loop.exit();
                }
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            self.pacer.pace();
            window.request_redraw();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                info!("Close requested, exiting");
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(new_size);
                }
                if new_size.height > 0 {
                    self.scene
                        .camera
                        .set_aspect(new_size.width as f32 / new_size.height as f32);
                }
            }
            WindowEvent::RedrawRequested => {
                if let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) {
                    match renderer.draw(&self.scene) {
                        Ok(()) => {}
                        Err(wgpu::SurfaceError::Lost) => {
                            warn!("Surface lost, reconfiguring");
                            let size = window.inner_size();
                            renderer.resize(size);
                        }
                        Err(wgpu::SurfaceError::OutOfMemory) => {
                            error!("Out of memory, exiting");
                            event_loop.exit();
                        }
                        Err(e) => {
                            error!(error = %e, "Render error");
                        }
                    }
                }
            }
            _ => {}
        }
    }
}
