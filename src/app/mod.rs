//! Viewer application module
//!
//! Handles windowing, rendering, and frame pacing.

pub mod config;
pub mod line_renderer;
pub mod pacing;
pub mod renderer;
mod runner;
pub mod shader_system;
mod window;

pub use config::{AppConfig, WindowConfig};
pub use runner::App;
pub use window::window_attributes_from_config;
