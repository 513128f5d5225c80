// Example: plot_curve_fit.rs
// Generates noisy samples of the playground curve, fits a polynomial and draws
// the points, the true curve and the fit to curve_fit.svg.
//
// Usage:
//     cargo run --example plot_curve_fit -- [degree] [config.toml]
//
// The sample points are also written to curve_fit_points.csv.

use std::env;
use std::error::Error;

use plotters::prelude::*;
use quant_lab::models::poly::{base_curve, X_DOMAIN};
use quant_lab::{default_configs, export, run_curve_fit, LabConfig, SamplePoint};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = env::args().collect();
    let mut config = match args.get(2) {
        Some(path) => LabConfig::from_file(path)?,
        None => default_configs::standard().with_seed(42),
    };
    if let Some(degree) = args.get(1) {
        config.curve_fit.degree = degree.parse()?;
    }
    config.curve_fit.show_split = true;

    let run = run_curve_fit(&config);
    let report = &run.report;
    println!("Degree {} ({})", report.degree, report.stability.label());
    println!("Coefficients (increasing power):");
    for (k, c) in report.coefficients.iter().enumerate() {
        println!("  x^{}: {:+.5}", k, c);
    }
    println!("Train MSE: {:.5}", report.train_mse);
    if let Some(val) = report.validation_mse {
        println!("Validation MSE: {:.5}", val);
    }

    export::save_points("curve_fit_points.csv", &run.points)?;

    let (train, validation): (Vec<&SamplePoint>, Vec<&SamplePoint>) =
        run.points.iter().partition(|p| !p.is_validation());

    let y_values = run
        .points
        .iter()
        .map(|p| p.y)
        .chain(report.curve.iter().map(|&(_, y)| y));
    let y_min = y_values.clone().fold(f64::INFINITY, f64::min);
    let y_max = y_values.fold(f64::NEG_INFINITY, f64::max);
    let padding = (y_max - y_min).max(1e-6) * 0.05;

    let truth: Vec<(f64, f64)> = report
        .curve
        .iter()
        .map(|&(x, _)| (x, base_curve(x)))
        .collect();

    let root = SVGBackend::new("curve_fit.svg", (1280, 768)).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(
            format!(
                "Polynomial fit | degree {} | train MSE {:.4}",
                report.degree, report.train_mse
            ),
            ("sans-serif", 30),
        )
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(X_DOMAIN.0..X_DOMAIN.1, (y_min - padding)..(y_max + padding))?;

    chart.configure_mesh().x_desc("x").y_desc("y").draw()?;

    chart.draw_series(
        train
            .iter()
            .map(|p| Circle::new((p.x, p.y), 3, BLUE.filled())),
    )?;
    chart.draw_series(
        validation
            .iter()
            .map(|p| Circle::new((p.x, p.y), 3, RED.filled())),
    )?;
    chart.draw_series(vec![PathElement::new(truth, BLACK.stroke_width(1))])?;
    chart.draw_series(vec![PathElement::new(report.curve.clone(), GREEN.stroke_width(2))])?;

    println!("Chart saved to curve_fit.svg");
    Ok(())
}
