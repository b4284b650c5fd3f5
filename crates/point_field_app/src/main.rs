#![forbid(unsafe_code)]

mod frontend;

use anyhow::Context;
use point_field::prelude::*;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use frontend::WindowFrontend;

const SURFACE: SurfaceSize = SurfaceSize {
    width: 1024,
    height: 768,
};

// Exit 0 whether the session ends by quit key or by a startup failure;
// failures are reported on stderr, not through the exit code.
fn main() {
    init_tracing();
    if let Err(err) = run() {
        error!("{err:#}");
    }
}

fn run() -> anyhow::Result<()> {
    let mut frontend =
        WindowFrontend::new("point_field", SURFACE).context("opening the window")?;
    info!(
        width = SURFACE.width,
        height = SURFACE.height,
        "window opened"
    );
    let mut driver = FrameDriver::new(SURFACE).context("configuring the frame driver")?;

    driver.run(&mut frontend)?;
    info!("session ended");
    Ok(())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .try_init();
}
