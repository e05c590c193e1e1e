// File: crates/demo/src/main.rs
// Summary: Demo loads x/y CSV data, fits y ~ x, and renders scatter + mean line + credible band to PNG.

use anyhow::{Context, Result};
use clap::Parser;
use lmplot::{plot_regression, Figure, PlotOptions, SamplePair};
use plot_core::{theme, RenderOptions};
use posterior::SamplerOptions;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "lmplot-demo", version, about = "Scatter plot with a Bayesian linear regression line and credible band")]
struct Cli {
    /// CSV file with `x` and `y` columns (built-in five-point sample when omitted)
    #[arg(long, short = 'i')]
    input: Option<PathBuf>,

    /// Output PNG path (default: target/out/lmplot_<stem>.png)
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,

    /// Credible mass of the summary interval and shaded band
    #[arg(long, default_value_t = 0.95, value_parser = parse_mass)]
    credible_mass: f64,

    /// Opacity of the shaded band (0-1)
    #[arg(long, default_value_t = 0.6)]
    band_opacity: f32,

    /// Left end of the line/band span (requires --x-max)
    #[arg(long, requires = "x_max", allow_negative_numbers = true)]
    x_min: Option<f64>,

    /// Right end of the line/band span (requires --x-min)
    #[arg(long, requires = "x_min", allow_negative_numbers = true)]
    x_max: Option<f64>,

    /// Number of sampler chains
    #[arg(long, default_value_t = 4)]
    chains: usize,

    /// Kept draws per chain
    #[arg(long, default_value_t = 1000)]
    draws: usize,

    /// Warm-up sweeps per chain
    #[arg(long, default_value_t = 1000)]
    tune: usize,

    /// Sampler seed for reproducible plots
    #[arg(long, env = "LMPLOT_SEED")]
    seed: Option<u64>,

    /// Theme preset: light, dark, solarized-dark, solarized-light, high-contrast-dark
    #[arg(long, default_value = "light")]
    theme: String,

    /// Image width in pixels
    #[arg(long, default_value_t = 800)]
    width: i32,

    /// Image height in pixels
    #[arg(long, default_value_t = 560)]
    height: i32,
}

fn parse_mass(s: &str) -> Result<f64, String> {
    let v: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if v > 0.0 && v < 1.0 {
        Ok(v)
    } else {
        Err(format!("credible mass must lie strictly between 0 and 1, got {v}"))
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let (x, y, labels) = match &cli.input {
        Some(raw) => {
            let (path, used_alt) = resolve_path(raw)?;
            info!(path = %path.display(), "using input file");
            if used_alt {
                info!("extension swapped between .csv/.cvs");
            }
            load_xy_csv(&path).with_context(|| format!("failed to load CSV '{}'", path.display()))?
        }
        None => (
            vec![1.0, 2.0, 3.0, 4.0, 5.0],
            vec![2.0, 4.0, 5.0, 4.0, 6.0],
            ("x".to_string(), "y".to_string()),
        ),
    };
    let data = SamplePair::new(x, y).context("invalid x/y data")?;
    info!(points = data.len(), "loaded observations");

    let mut sampler = SamplerOptions::default()
        .with_chains(cli.chains)
        .with_draws(cli.draws)
        .with_tune(cli.tune);
    if let Some(seed) = cli.seed {
        sampler = sampler.with_seed(seed);
    }
    let mut opts = PlotOptions::default()
        .with_credible_mass(cli.credible_mass)
        .with_band_opacity(cli.band_opacity)
        .with_sampler(sampler);
    if let (Some(lo), Some(hi)) = (cli.x_min, cli.x_max) {
        opts = opts.with_x_range(lo, hi);
    }

    let mut figure = Figure::with_theme(theme::find(&cli.theme));
    let plot = plot_regression(&mut figure, &data, None, &opts).context("regression plot failed")?;
    let render = RenderOptions {
        width: cli.width,
        height: cli.height,
        theme: *figure.theme(),
        ..RenderOptions::default()
    };

    let chart = figure
        .chart_mut(plot.axis)
        .context("plotted axes missing from figure")?;
    chart.autoscale_axes(0.05);
    chart.x_axis.label = labels.0;
    chart.y_axis.label = labels.1;

    let out = cli.output.clone().unwrap_or_else(|| out_name_for(cli.input.as_deref()));
    chart.render_to_png(&render, &out)?;

    print!("{}", plot.summary);
    println!("Wrote {}", out.display());
    Ok(())
}

/// Resolve path, trying .csv/.cvs swap if needed.
/// Returns (actual_path, used_alt)
fn resolve_path(p: &Path) -> Result<(PathBuf, bool)> {
    if p.exists() {
        return Ok((p.to_path_buf(), false));
    }
    if let Some(alt) = swap_ext(p) {
        if alt.exists() {
            return Ok((alt, true));
        }
    }
    anyhow::bail!("file not found: {}", p.display());
}

/// Produce output file name like target/out/lmplot_<stem>.png
fn out_name_for(input: Option<&Path>) -> PathBuf {
    let stem = input
        .and_then(|p| p.file_stem())
        .and_then(|s| s.to_str())
        .unwrap_or("sample");
    PathBuf::from("target/out").join(format!("lmplot_{}.png", stem))
}

/// Load two numeric columns. Prefers headers named `x`/`y`, otherwise the
/// first two columns. Returns the values and the header names used.
fn load_xy_csv(path: &Path) -> Result<(Vec<f64>, Vec<f64>, (String, String))> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.iter().map(|h| h.to_string()).collect::<Vec<_>>();
    if headers.len() < 2 {
        anyhow::bail!("need at least two columns, found {:?}", headers);
    }
    let idx = |name: &str| headers.iter().position(|h| h.eq_ignore_ascii_case(name));
    let (ix, iy) = match (idx("x"), idx("y")) {
        (Some(ix), Some(iy)) => (ix, iy),
        _ => {
            warn!(?headers, "no x/y headers; using the first two columns");
            (0, 1)
        }
    };

    let mut xs = Vec::new();
    let mut ys = Vec::new();
    let mut skipped = 0usize;
    for rec in rdr.records() {
        let rec = rec?;
        let parse = |i: usize| rec.get(i).and_then(|s| s.parse::<f64>().ok());
        match (parse(ix), parse(iy)) {
            (Some(x), Some(y)) => {
                xs.push(x);
                ys.push(y);
            }
            _ => skipped += 1,
        }
    }
    if skipped > 0 {
        warn!(skipped, "rows without numeric x/y were skipped");
    }
    Ok((xs, ys, (headers[ix].clone(), headers[iy].clone())))
}

fn swap_ext(p: &Path) -> Option<PathBuf> {
    let mut alt = p.to_path_buf();
    let ext = p.extension()?.to_string_lossy().to_lowercase();
    match ext.as_str() {
        "cvs" => {
            alt.set_extension("csv");
            Some(alt)
        }
        "csv" => {
            alt.set_extension("cvs");
            Some(alt)
        }
        _ => None,
    }
}
