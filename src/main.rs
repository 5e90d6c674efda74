// SPDX: CC0-1.0

use anyhow::Context;
use implicit_plot::{
    frame::RenderContext, input::Action, raster::Scene, viewport::Viewport,
    window::WindowSurface,
};
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    match try_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("unexpected error: {err}");
            let chain = err.chain();
            if chain.len() > 1 {
                eprintln!();
                eprintln!("context:");
                for it in chain.skip(1) {
                    eprintln!("  {it}");
                }
            }
            ExitCode::FAILURE
        }
    }
}

fn try_main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let mut viewport = Viewport::default();
    let surface = WindowSurface::create(viewport.width, viewport.height)
        .context("failed to open the plot window")?;
    let size = surface.size();
    info!(width = size.width, height = size.height, "window opened");
    viewport.resize(size.width, size.height);

    for action in Action::exhaustive() {
        info!(
            "{key:?}: {name} ({help})",
            key = action.key(),
            name = action.name(),
            help = action.help()
        );
    }

    let scene = Scene::primary();
    for pass in &scene.passes {
        info!(curve = pass.name(), "drawing");
    }

    let mut ctx = RenderContext::new(viewport, scene, surface);
    ctx.run();
    Ok(())
}
