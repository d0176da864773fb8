// File: crates/window-demo/src/main.rs
// Summary: Windowed crops chart rendered on the CPU and blitted with winit + softbuffer.
// Keys 1-9 toggle the matching category, Esc quits.

use std::num::NonZeroU32;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use crop_engine::render::{render_options, SkiaChartSurface};
use crop_engine::{loader, CropsView, DashboardConfig, Simulator};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;
use winit::event::{ElementState, Event, KeyboardInput, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

#[derive(Parser, Debug)]
#[command(name = "crops-window-demo", about = "Interactive crops comparison chart")]
struct Args {
    /// Dataset (.json or .csv); simulated when omitted
    #[arg(long, short)]
    input: Option<PathBuf>,

    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Dashboard config (TOML)
    #[arg(long, short)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => DashboardConfig::load(path).with_context(|| format!("failed to load config '{}'", path.display()))?,
        None => DashboardConfig::default(),
    };
    let dataset = match &args.input {
        Some(path) => loader::load_path(path).with_context(|| format!("failed to load dataset '{}'", path.display()))?,
        None => Simulator::new(args.seed).dataset()?,
    };
    let dataset = config.apply_months(dataset)?;

    // The raster target exists before the window does, so the first frame can always draw.
    let surface = SkiaChartSurface::new(dataset.months(), render_options(&config.render))?;
    let mut view = CropsView::new(dataset, config.registry(), surface);
    for (i, c) in view.categories().iter().take(9).enumerate() {
        info!(key = i + 1, name = %c.name, "toggle binding");
    }

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Crops comparison")
        .with_inner_size(winit::dpi::PhysicalSize::new(config.render.width as u32, config.render.height as u32))
        .build(&event_loop)
        .map_err(|e| anyhow!("window: {e}"))?;

    let context = unsafe { softbuffer::Context::new(&window) }.map_err(|e| anyhow!("softbuffer context: {e}"))?;
    let mut frame_surface =
        unsafe { softbuffer::Surface::new(&context, &window) }.map_err(|e| anyhow!("softbuffer surface: {e}"))?;

    event_loop.run(move |event, _, cf| {
        *cf = ControlFlow::Wait;
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested
                | WindowEvent::KeyboardInput {
                    input: KeyboardInput { virtual_keycode: Some(VirtualKeyCode::Escape), state: ElementState::Pressed, .. },
                    ..
                } => *cf = ControlFlow::Exit,
                WindowEvent::Resized(size) => {
                    if size.width > 0 && size.height > 0 {
                        if let Err(e) = view.surface_mut().resize(size.width as i32, size.height as i32) {
                            error!("resize failed: {e:#}");
                        }
                        window.request_redraw();
                    }
                }
                WindowEvent::ReceivedCharacter(ch) => {
                    let Some(slot) = ch.to_digit(10).filter(|d| *d > 0).map(|d| d as usize - 1) else { return };
                    match view.categories().get(slot).map(|c| c.name.clone()) {
                        Some(name) => {
                            let active = view.toggle(&name);
                            info!(name = %name, active, "toggled");
                            window.request_redraw();
                        }
                        None => warn!(key = slot + 1, "no category bound to key"),
                    }
                }
                _ => {}
            },
            Event::RedrawRequested(_) => {
                if let Err(e) = blit(&mut view, &mut frame_surface) {
                    error!("redraw failed: {e:#}");
                }
            }
            _ => {}
        }
    });
}

/// Copy the chart's RGBA pixels into the window buffer as 0RGB words.
fn blit(view: &mut CropsView<SkiaChartSurface>, frame_surface: &mut softbuffer::Surface) -> Result<()> {
    let (rgba, w, h, stride) = view.surface_mut().rgba8()?;
    let (Some(nw), Some(nh)) = (NonZeroU32::new(w), NonZeroU32::new(h)) else { return Ok(()) };
    frame_surface.resize(nw, nh).map_err(|e| anyhow!("softbuffer resize: {e}"))?;

    let mut frame = frame_surface.buffer_mut().map_err(|e| anyhow!("softbuffer buffer: {e}"))?;
    let w = w as usize;
    for (y, row) in rgba.chunks_exact(stride).take(h as usize).enumerate() {
        for (x, px) in row.chunks_exact(4).take(w).enumerate() {
            frame[y * w + x] = (px[0] as u32) << 16 | (px[1] as u32) << 8 | px[2] as u32;
        }
    }
    frame.present().map_err(|e| anyhow!("softbuffer present: {e}"))?;
    Ok(())
}
