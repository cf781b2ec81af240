// File: crates/demo/src/main.rs
// Summary: Demo loads a CSV of timestamped samples and renders a chart page (graph, legend, captions) to PNG.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{bail, Context, Result};
use chart_compose::chart::ChartConfig;
use chart_compose::{ChartEngine, DataStats, EngineConfig, LegendMode, Line, Plot};
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use clap::Parser;
use skia_safe as skia;
use tracing::info;

const PALETTE: [(u8, u8, u8); 6] = [
    (64, 160, 255),
    (220, 80, 80),
    (40, 200, 120),
    (255, 170, 40),
    (150, 90, 220),
    (0, 170, 170),
];

#[derive(Debug, Parser)]
#[command(about = "Render a CSV of time-series samples to a chart page PNG")]
struct Args {
    /// CSV with a timestamp column followed by one column per line.
    input: PathBuf,

    /// Output PNG (defaults to target/out/chart_<stem>.png).
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[arg(long)]
    title: Option<String>,

    /// off, labels or labels-with-stats.
    #[arg(long, default_value = "labels-with-stats")]
    legend: LegendMode,

    #[arg(long, default_value_t = chart_compose::chart::DEFAULT_WIDTH)]
    width: u32,

    #[arg(long, default_value_t = chart_compose::chart::DEFAULT_HEIGHT)]
    height: u32,

    #[arg(long, default_value_t = 1.0)]
    zoom: f64,

    /// IANA zone for the end-time caption, e.g. Europe/Paris.
    #[arg(long, default_value = "UTC")]
    tz: Tz,

    /// Put every column on its own axis.
    #[arg(long)]
    split_axes: bool,

    /// Engine configuration JSON (rendering hints and limits).
    #[arg(long)]
    engine_config: Option<PathBuf>,
}

struct Samples {
    columns: Vec<String>,
    times: Vec<DateTime<Utc>>,
    values: Vec<Vec<f64>>,
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let engine_cfg = match &args.engine_config {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("reading engine config '{}'", path.display()))?;
            EngineConfig::from_json_str(&content)
                .with_context(|| format!("parsing engine config '{}'", path.display()))?
        }
        None => EngineConfig::default(),
    };
    let engine = ChartEngine::new(&engine_cfg).context("engine configuration rejected")?;

    let started = Instant::now();
    let samples = load_samples(&args.input)
        .with_context(|| format!("failed to load CSV '{}'", args.input.display()))?;
    let load_time_ms = started.elapsed().as_millis() as i64;
    info!(columns = samples.columns.len(), rows = samples.times.len(), load_time_ms, "samples loaded");

    let cfg = build_config(&args, samples, load_time_ms.max(1))?;
    let page = engine.render_page(&cfg)?;
    for notice in &page.layout.notices {
        info!(%notice, "rendered with notice");
    }

    let out = args.output.clone().unwrap_or_else(|| out_name(&args.input));
    if let Some(parent) = out.parent() {
        std::fs::create_dir_all(parent)?;
    }
    page.image
        .save(&out)
        .with_context(|| format!("writing '{}'", out.display()))?;
    info!(path = %out.display(), width = page.image.width(), height = page.image.height(), "wrote chart");
    Ok(())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .try_init();
}

fn build_config(args: &Args, samples: Samples, load_time_ms: i64) -> Result<ChartConfig> {
    let (Some(&start), Some(&end)) = (samples.times.first(), samples.times.last()) else {
        bail!("no rows loaded; check headers/delimiter");
    };
    let step_ms = match samples.times.get(1) {
        Some(&second) => (second - start).num_milliseconds().max(1),
        None => 60_000,
    };

    let rows = samples.times.len() as u64;
    let stats = DataStats {
        input_lines: samples.columns.len() as u64,
        input_datapoints: rows * samples.columns.len() as u64,
        output_lines: samples.columns.len() as u64,
        output_datapoints: rows * samples.columns.len() as u64,
    };

    let lines: Vec<Line> = samples
        .columns
        .into_iter()
        .zip(samples.values)
        .enumerate()
        .map(|(i, (name, values))| {
            let (r, g, b) = PALETTE[i % PALETTE.len()];
            Line::new(name, skia::Color::from_argb(255, r, g, b)).with_values(values)
        })
        .collect();

    let mut cfg = ChartConfig::new(start, end, step_ms)
        .with_size(args.width, args.height)
        .with_zoom(args.zoom)
        .with_legend(args.legend)
        .with_timezone(args.tz)
        .with_load_time(load_time_ms, stats);
    if let Some(title) = &args.title {
        cfg = cfg.with_title(title.clone());
    }

    if args.split_axes {
        for line in lines {
            let color = line.color;
            let label = line.label.clone();
            cfg = cfg.with_plot(Plot::new(vec![line]).with_ylabel(label).with_axis_color(color));
        }
    } else {
        cfg = cfg.with_plot(Plot::new(lines));
    }
    Ok(cfg)
}

/// Read `timestamp,<line>,<line>...` rows. Blank or unparsable cells become gaps.
fn load_samples(path: &Path) -> Result<Samples> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.clone();
    if headers.len() < 2 {
        bail!("expected a timestamp column and at least one value column, got {:?}", headers);
    }
    let columns: Vec<String> = headers.iter().skip(1).map(|h| h.trim().to_string()).collect();

    let mut times = Vec::new();
    let mut values = vec![Vec::new(); columns.len()];
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let raw = rec.get(0).unwrap_or_default();
        let t = parse_timestamp(raw).with_context(|| format!("row {}: bad timestamp '{raw}'", row + 1))?;
        times.push(t);
        for (col, out) in values.iter_mut().enumerate() {
            let v = rec.get(col + 1).and_then(|s| s.trim().parse::<f64>().ok()).unwrap_or(f64::NAN);
            out.push(v);
        }
    }
    Ok(Samples { columns, times, values })
}

/// Epoch seconds, epoch milliseconds or RFC 3339.
fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(n) = s.parse::<i64>() {
        if n > 10_i64.pow(11) {
            return DateTime::from_timestamp_millis(n);
        } // epoch ms
        return DateTime::from_timestamp(n, 0);
    }
    DateTime::parse_from_rfc3339(s).ok().map(|t| t.with_timezone(&Utc))
}

/// Produce output file name like target/out/chart_<stem>.png
fn out_name(input: &Path) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("chart");
    PathBuf::from("target/out").join(format!("chart_{stem}.png"))
}
