use quant_lab::{build_surface, default_configs, run_crash_simulation, run_curve_fit, LabConfig};

fn describe(name: &str, use_case: &str, config: &LabConfig) {
    println!("{}:", name);
    println!("   Seed: {:?}", config.seed);
    println!(
        "   Curve fit: {} points, noise {:.2}, degree {}, split shown: {}",
        config.curve_fit.count,
        config.curve_fit.noise,
        config.curve_fit.degree,
        config.curve_fit.show_split
    );
    println!(
        "   Crash simulator: {} paths × {} steps, μ={:.2} σ={:.2} p={:.2} size={:.0}%",
        config.crash.path_count,
        config.crash.step_count,
        config.crash.drift,
        config.crash.volatility,
        config.crash.crash_prob,
        config.crash.crash_size * 100.0
    );
    println!(
        "   Surface grid: {} strikes × {} maturities, vol band [{:.2}, {:.2}]",
        config.grid.strike_steps,
        config.grid.maturity_steps,
        config.grid.vol_min,
        config.grid.vol_max
    );
    println!("   Use case: {}\n", use_case);
}

fn main() {
    println!("Quant-Lab Default Configuration Examples\n");

    describe(
        "1. Standard Configuration",
        "Interactive demos",
        &default_configs::standard(),
    );
    describe(
        "2. Quick Configuration",
        "Tests and quick checks",
        &default_configs::quick(),
    );
    describe(
        "3. Detailed Configuration",
        "Smooth offline charts",
        &default_configs::detailed(),
    );
    describe(
        "4. Classroom Configuration",
        "Reproducible stress walkthrough",
        &default_configs::classroom(),
    );

    println!("Running the classroom scenario...");
    let config = default_configs::classroom();

    let fit = run_curve_fit(&config);
    println!(
        "   Degree {} fit: train MSE {:.4}, validation MSE {}, {}",
        fit.report.degree,
        fit.report.train_mse,
        fit.report
            .validation_mse
            .map_or_else(|| "n/a".to_string(), |v| format!("{:.4}", v)),
        fit.report.stability.label()
    );

    let crash = run_crash_simulation(&config);
    let stats = crash.result.stats;
    println!(
        "   Final returns: mean {:.2}%, std {:.2}%, 5th pct {:.2}%, 95th pct {:.2}%",
        stats.mean * 100.0,
        stats.std_dev * 100.0,
        stats.worst_5 * 100.0,
        stats.best_5 * 100.0
    );
    println!(
        "   {:.0}% of paths crashed at least once",
        crash.result.crash_frequency() * 100.0
    );

    let surface = build_surface(&config);
    if let Some((lo, hi)) = surface.vol_range() {
        println!("   Surface vols span {:.1}% to {:.1}%", lo * 100.0, hi * 100.0);
    }

    match config.to_toml_string() {
        Ok(text) => println!("\nClassroom preset as TOML:\n{}", text),
        Err(e) => eprintln!("Failed to serialise preset: {:#}", e),
    }
}
