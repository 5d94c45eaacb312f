//! Pluggable shader system
//!
//! Shaders register with a registry that drives their per-frame lifecycle.
//! Registration order is render order.

use wgpu::{Device, Queue, RenderPass, SurfaceConfiguration};

/// Trait that all shaders must implement
pub trait Shader: Send + Sync {
    /// Returns the shader's unique name
    fn name(&self) -> &str;

    /// Initializes the shader with the given device and configuration
    fn init(&mut self, device: &Device, config: &SurfaceConfiguration);

    /// Begins a new frame, allowing the shader to upload its buffers
    fn begin_frame(&mut self, device: &Device, queue: &Queue);

    /// Records the shader's draw calls into the given render pass
    fn render<'rpass>(&'rpass self, rpass: &mut RenderPass<'rpass>);

    /// Ends the frame, allowing cleanup
    fn end_frame(&mut self);

    /// Allows downcasting to concrete types
    fn as_any_mut(&mut self) -> &mut dyn std::any::Any;
}

/// Registry for managing shaders
pub struct ShaderRegistry {
    shaders: Vec<Box<dyn Shader>>,
}

impl ShaderRegistry {
    /// Creates a new empty shader registry
    pub fn new() -> Self {
        Self {
            shaders: Vec::new(),
        }
    }

    /// Registers a shader; shaders render in registration order
    pub fn register(&mut self, shader: Box<dyn Shader>) {
        self.shaders.push(shader);
    }

    /// Initializes all registered shaders
    pub fn init_all(&mut self, device: &Device, config: &SurfaceConfiguration) {
        for shader in &mut self.shaders {
            shader.init(device, config);
        }
    }

    /// Gets a mutable reference to a shader by name
    pub fn get_mut(&mut self, name: &str) -> Option<&mut (dyn Shader + 'static)> {
        self.shaders
            .iter_mut()
            .find(|shader| shader.name() == name)
            .map(|shader| shader.as_mut())
    }

    /// Begins a new frame for all shaders
    pub fn begin_frame(&mut self, device: &Device, queue: &Queue) {
        for shader in &mut self.shaders {
            shader.begin_frame(device, queue);
        }
    }

    /// Renders all shaders in registration order
    pub fn render_all<'rpass>(&'rpass self, rpass: &mut RenderPass<'rpass>) {
        for shader in &self.shaders {
            shader.render(rpass);
        }
    }

    /// Ends the frame for all shaders
    pub fn end_frame(&mut self) {
        for shader in &mut self.shaders {
            shader.end_frame();
        }
    }
}

impl Default for ShaderRegistry {
    fn default() -> Self {
        Self::new()
    }
}
