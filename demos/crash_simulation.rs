// Example: crash_simulation.rs
// Runs the market crash simulator and draws a sample of price paths to
// crash_paths.svg and the final return histogram to crash_returns.svg.
//
// Usage:
//     cargo run --example crash_simulation -- [config.toml]

use std::env;
use std::error::Error;

use plotters::prelude::*;
use quant_lab::{default_configs, export, run_crash_simulation, LabConfig};
use tracing_subscriber::EnvFilter;

/// Paths drawn on the chart; the CSV export holds all of them.
const PLOTTED_PATHS: usize = 40;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match env::args().nth(1) {
        Some(path) => LabConfig::from_file(path)?,
        None => default_configs::standard().with_seed(7),
    };

    let run = run_crash_simulation(&config);
    let result = &run.result;
    let stats = result.stats;

    println!(
        "Simulated {} paths over {:.2} years ({} steps)",
        result.path_count(),
        config.crash.horizon,
        config.crash.step_count
    );
    println!("  Mean return:      {:+.2}%", stats.mean * 100.0);
    println!("  Std deviation:    {:.2}%", stats.std_dev * 100.0);
    println!("  Worst 5%:         {:+.2}%", stats.worst_5 * 100.0);
    println!("  Best 5%:          {:+.2}%", stats.best_5 * 100.0);
    println!(
        "  Crashed paths:    {:.1}%",
        result.crash_frequency() * 100.0
    );

    export::save_paths("crash_paths.csv", result)?;

    let price_max = result
        .paths
        .iter()
        .take(PLOTTED_PATHS)
        .flatten()
        .fold(config.crash.initial_price, |a, &b| a.max(b));
    let price_min = result
        .paths
        .iter()
        .take(PLOTTED_PATHS)
        .flatten()
        .fold(config.crash.initial_price, |a, &b| a.min(b));
    let t_max = result.time_axis.last().copied().unwrap_or(0.0).max(1e-6);

    let root = SVGBackend::new("crash_paths.svg", (1280, 768)).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(
            format!(
                "Jump-diffusion paths | σ={:.2} crash p={:.2} size={:.0}%",
                config.crash.volatility,
                config.crash.crash_prob,
                config.crash.crash_size * 100.0
            ),
            ("sans-serif", 30),
        )
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..t_max, (price_min * 0.95)..(price_max * 1.05))?;
    chart
        .configure_mesh()
        .x_desc("Time (years)")
        .y_desc("Price")
        .draw()?;

    for (i, (path, crashes)) in result
        .paths
        .iter()
        .zip(&result.crash_counts)
        .take(PLOTTED_PATHS)
        .enumerate()
    {
        let color = if *crashes > 0 {
            RED.mix(0.6)
        } else {
            Palette99::pick(i).mix(0.5)
        };
        let points: Vec<(f64, f64)> = result
            .time_axis
            .iter()
            .copied()
            .zip(path.iter().copied())
            .collect();
        chart.draw_series(vec![PathElement::new(points, color.stroke_width(1))])?;
    }
    println!("Chart saved to crash_paths.svg");

    if run.histogram.is_empty() {
        return Ok(());
    }
    let lo = run.histogram[0].lower * 100.0;
    let hi = run.histogram[run.histogram.len() - 1].upper * 100.0;
    let peak = run.histogram.iter().map(|b| b.count).max().unwrap_or(1).max(1);

    let root = SVGBackend::new("crash_returns.svg", (1280, 768)).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption("Distribution of final returns", ("sans-serif", 30))
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(lo..hi.max(lo + 1e-6), 0usize..peak + 1)?;
    chart
        .configure_mesh()
        .x_desc("Final return (%)")
        .y_desc("Paths")
        .draw()?;
    chart.draw_series(run.histogram.iter().map(|b| {
        Rectangle::new(
            [(b.lower * 100.0, 0), (b.upper * 100.0, b.count)],
            BLUE.mix(0.6).filled(),
        )
    }))?;
    chart.draw_series(vec![PathElement::new(
        vec![(stats.worst_5 * 100.0, 0), (stats.worst_5 * 100.0, peak)],
        RED.stroke_width(2),
    )])?;

    println!("Chart saved to crash_returns.svg");
    Ok(())
}
