//! Wire Room
//!
//! A wireframe cube-room viewer built with Rust, winit, and wgpu.

/// Viewer application - windowing, rendering, and frame pacing
pub mod app;

/// Build-time information (git SHA, branch, timestamp, etc.)
pub mod build_info;

/// Health checks - headless diagnostics for CI and startup debugging
pub mod health;

/// Scene description - room geometry and camera
pub mod scene;
