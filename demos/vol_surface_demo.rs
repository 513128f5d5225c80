// Example: vol_surface_demo.rs
// Builds the synthetic implied volatility surface, prints a coarse grid and
// draws smiles at a few maturities plus the ATM term structure to
// vol_surface.svg. The full grid is written to vol_surface.csv.
//
// Usage:
//     cargo run --example vol_surface_demo -- [skew] [smile]

use std::env;
use std::error::Error;

use plotters::prelude::*;
use quant_lab::{build_surface, default_configs, export};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = env::args().collect();
    let mut config = default_configs::standard();
    if let Some(skew) = args.get(1) {
        config.surface.skew = skew.parse()?;
    }
    if let Some(smile) = args.get(2) {
        config.surface.smile = smile.parse()?;
    }
    config.surface = config.surface.clamped();

    let surface = build_surface(&config);
    export::save_surface("vol_surface.csv", &surface)?;

    // Coarse printout: every fourth strike and maturity
    print!("{:>8}", "T \\ K");
    for k in surface.strikes.iter().step_by(4) {
        print!("{:>8.1}", k);
    }
    println!();
    for (t, row) in surface.maturities.iter().zip(&surface.vols).step_by(4) {
        print!("{:>8.2}", t);
        for v in row.iter().step_by(4) {
            print!("{:>7.1}%", v * 100.0);
        }
        println!();
    }

    let (vol_lo, vol_hi) = surface.vol_range().ok_or("empty surface")?;
    let strike_lo = config.grid.strike_min;
    let strike_hi = config.grid.strike_max.max(strike_lo + 1e-6);

    let root = SVGBackend::new("vol_surface.svg", (1280, 1024)).into_drawing_area();
    root.fill(&WHITE)?;
    let (upper, lower) = root.split_vertically(620);

    let mut smiles = ChartBuilder::on(&upper)
        .margin(20)
        .caption(
            format!(
                "Volatility smiles | skew {:.2} smile {:.2} term {:.2}",
                config.surface.skew, config.surface.smile, config.surface.term
            ),
            ("sans-serif", 28),
        )
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(strike_lo..strike_hi, (vol_lo * 90.0)..(vol_hi * 110.0))?;
    smiles
        .configure_mesh()
        .x_desc("Strike")
        .y_desc("Implied Vol (%)")
        .draw()?;

    let last = surface.maturities.len().saturating_sub(1);
    for (n, index) in [0, last / 3, 2 * last / 3, last].into_iter().enumerate() {
        let (Some(&t), Some(row)) = (surface.maturities.get(index), surface.slice(index)) else {
            continue;
        };
        let color = Palette99::pick(n).to_rgba();
        let points: Vec<(f64, f64)> = surface
            .strikes
            .iter()
            .zip(row)
            .map(|(&k, &v)| (k, v * 100.0))
            .collect();
        smiles
            .draw_series(vec![PathElement::new(points, color.stroke_width(2))])?
            .label(format!("T = {:.2}y", t))
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }
    smiles
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    let term = surface.atm_term_structure(config.surface.spot);
    let t_hi = config.grid.maturity_max.max(config.grid.maturity_min + 1e-6);
    let mut term_chart = ChartBuilder::on(&lower)
        .margin(20)
        .caption("ATM term structure", ("sans-serif", 24))
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(config.grid.maturity_min..t_hi, (vol_lo * 90.0)..(vol_hi * 110.0))?;
    term_chart
        .configure_mesh()
        .x_desc("Maturity (years)")
        .y_desc("ATM Vol (%)")
        .draw()?;
    term_chart.draw_series(vec![PathElement::new(
        term.iter().map(|&(t, v)| (t, v * 100.0)).collect::<Vec<_>>(),
        BLUE.stroke_width(2),
    )])?;

    println!("Chart saved to vol_surface.svg");
    Ok(())
}
