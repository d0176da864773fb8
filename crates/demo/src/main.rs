// File: crates/demo/src/main.rs
// Summary: Demo loads (or simulates) a crop dataset, applies toggles and renders the dashboard to PNGs + JSON.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chart_core::{Chart, RenderOptions};
use clap::Parser;
use crop_engine::analytics::annual_snapshot;
use crop_engine::render::{aggregate_chart, cost_gain_chart, render_options, threshold_chart, SkiaChartSurface};
use crop_engine::{loader, CropsView, DashboardConfig, Rgba, Simulator};
use tracing::info;
use tracing_subscriber::EnvFilter;

const HARVEST_BARS: Rgba = Rgba::opaque(76, 175, 80).with_alpha(204);
const WATER_BARS: Rgba = Rgba::opaque(54, 162, 235).with_alpha(204);

#[derive(Parser, Debug)]
#[command(name = "crops-demo", about = "Render the crop dashboard charts to PNG")]
struct Args {
    /// Dataset (.json or .csv); simulated when omitted
    #[arg(long, short)]
    input: Option<PathBuf>,

    /// Seed for the simulated dataset
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Dashboard config (TOML)
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Category to toggle before rendering; repeatable, applied in order
    #[arg(long = "toggle", short = 't')]
    toggles: Vec<String>,

    #[arg(long, default_value = "target/out")]
    out_dir: PathBuf,

    /// Theme preset, overrides the config
    #[arg(long)]
    theme: Option<String>,

    #[arg(long)]
    no_labels: bool,

    /// Write production figures and weather for this month (1-based)
    #[arg(long)]
    month: Option<usize>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => DashboardConfig::load(path).with_context(|| format!("failed to load config '{}'", path.display()))?,
        None => DashboardConfig::default(),
    };
    if let Some(theme) = &args.theme {
        config.render.theme = theme.clone();
    }
    if args.no_labels {
        config.render.draw_labels = false;
    }

    // Weather is always simulated; loaded datasets carry production figures only.
    let mut sim = Simulator::new(args.seed);
    let dataset = match &args.input {
        Some(path) => loader::load_path(path).with_context(|| format!("failed to load dataset '{}'", path.display()))?,
        None => sim.dataset().context("failed to simulate dataset")?,
    };
    let dataset = config.apply_months(dataset).context("month labels from config do not fit the dataset")?;

    let opts = render_options(&config.render);
    let surface = SkiaChartSurface::new(dataset.months(), opts.clone())?;
    let mut view = CropsView::new(dataset, config.registry(), surface);

    for name in &args.toggles {
        let active = view.toggle(name);
        info!(name = %name, active, "toggled");
    }

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("failed to create '{}'", args.out_dir.display()))?;

    let crops_png = view.surface_mut().png_bytes()?;
    write_file(&args.out_dir.join("crops.png"), &crops_png)?;

    let usage = config.water_usage();
    let dash = view.dashboard(&usage);
    render(&aggregate_chart(&dash.aggregates), &opts, &args.out_dir.join("crops_annual.png"))?;
    render(
        &threshold_chart("Monthly harvest", "Harvest (kg)", &dash.harvest, HARVEST_BARS),
        &opts,
        &args.out_dir.join("harvest.png"),
    )?;
    render(
        &threshold_chart("Monthly water consumption", "Water (l)", &dash.water, WATER_BARS),
        &opts,
        &args.out_dir.join("water.png"),
    )?;
    render(&cost_gain_chart(&dash.costs), &opts, &args.out_dir.join("costs.png"))?;

    let json = serde_json::to_vec_pretty(&dash)?;
    write_file(&args.out_dir.join("dashboard.json"), &json)?;

    let year = annual_snapshot(view.categories(), &usage)?;
    info!(harvest = year.harvest, water = year.water, cost = year.cost, profit = year.profit, "annual totals");
    if let Some(month) = args.month {
        let weather = sim.environment(month)?;
        let report = view.month_report(&usage, month, weather)?;
        info!(
            month = %report.label,
            harvest = report.production.harvest,
            water = report.production.water,
            cost = report.production.cost,
            profit = report.production.profit,
            temperature = report.environment.temperature,
            rainfall = report.environment.rainfall,
            "monthly report"
        );
        let json = serde_json::to_vec_pretty(&report)?;
        write_file(&args.out_dir.join(format!("month_{month:02}.json")), &json)?;
    }
    Ok(())
}

fn render(chart: &Chart, opts: &RenderOptions, out: &Path) -> Result<()> {
    let bytes = chart.render_to_png_bytes(opts)?;
    write_file(out, &bytes)
}

fn write_file(out: &Path, bytes: &[u8]) -> Result<()> {
    std::fs::write(out, bytes).with_context(|| format!("failed to write '{}'", out.display()))?;
    info!(path = %out.display(), "wrote");
    Ok(())
}
