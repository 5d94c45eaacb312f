//! Wire Room viewer
//!
//! Opens a window and draws the wireframe room until the window is closed.

use tracing::info;
use tracing_subscriber::EnvFilter;
use winit::event_loop::{ControlFlow, EventLoop};
use wire_room::app::App;
use wire_room::build_info;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!(build = %build_info::version_string(), "wire-room viewer starting");

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::from_env();
    event_loop.run_app(&mut app)?;

    Ok(())
}
