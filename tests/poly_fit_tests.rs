
use quant_lab::models::poly::{
    base_curve, fit_polynomial_with_ridge, mean_squared_error, predict, sample_curve, X_DOMAIN,
    RIDGE_LAMBDA,
};
use quant_lab::{fit_polynomial, run_curve_fit, CurveFitParams, FitScope, SamplePoint, Stability};
use test_utils::{create_test_config, line_points, load_test_points};

const FIXTURE: &str = "tests/data/sample_points.csv";

/// Fitting nothing yields no coefficients, whatever the degree.
#[test]
fn test_empty_input_gives_empty_coefficients() {
    for degree in [0, 1, 3, 8] {
        assert!(
            fit_polynomial(&[], degree).is_empty(),
            "degree {} on empty input should be empty",
            degree
        );
    }
}

/// A degree-1 fit of points on y = 2x + 1 recovers [1, 2].
#[test]
fn test_linear_fit_recovers_line() {
    let points = line_points(2.0, 1.0, 11);
    let c = fit_polynomial(&points, 1);

    println!("Linear fit coefficients: {:?}", c);
    assert_eq!(c.len(), 2);
    assert!((c[0] - 1.0).abs() < 1e-3, "intercept {} should be ~1", c[0]);
    assert!((c[1] - 2.0).abs() < 1e-3, "slope {} should be ~2", c[1]);
}

/// Quadratic data is reproduced almost exactly by a degree-2 fit and the
/// extra coefficient of a degree-3 fit stays near zero.
#[test]
fn test_quadratic_fit_and_overparameterised_fit() {
    let points: Vec<SamplePoint> = (0..21)
        .map(|i| {
            let x = -1.0 + i as f64 * 0.1;
            SamplePoint::new(x, 0.5 - x + 3.0 * x * x)
        })
        .collect();

    let c2 = fit_polynomial(&points, 2);
    let expected = [0.5, -1.0, 3.0];
    for (k, (&got, &want)) in c2.iter().zip(&expected).enumerate() {
        assert!(
            (got - want).abs() < 1e-2,
            "coefficient {} is {} but expected {}",
            k,
            got,
            want
        );
    }

    let c3 = fit_polynomial(&points, 3);
    assert_eq!(c3.len(), 4);
    assert!(c3[3].abs() < 1e-2, "cubic term should vanish, got {}", c3[3]);
    assert!(mean_squared_error(&points, &c3) < 1e-5);
}

/// On the same points the training error does not increase as the degree grows.
#[test]
fn test_train_mse_non_increasing_with_degree() {
    let points = load_test_points(FIXTURE).expect("Failed to load fixture points");
    assert_eq!(points.len(), 20);

    let mut previous = f64::INFINITY;
    for degree in 0..=8 {
        let c = fit_polynomial(&points, degree);
        let mse = mean_squared_error(&points, &c);
        println!("degree {}: train MSE {:.6}", degree, mse);

        assert_eq!(c.len(), degree + 1);
        assert!(mse.is_finite(), "MSE must be finite at degree {}", degree);
        // The ridge term allows a vanishing increase
        assert!(
            mse <= previous + 1e-4,
            "MSE rose from {} to {} at degree {}",
            previous,
            mse,
            degree
        );
        previous = mse;
    }
}

/// With at least as many coefficients as points, raising the degree never
/// fits the training points worse than any lower degree did.
#[test]
fn test_train_mse_non_increasing_when_interpolating() {
    // (ridge, tolerance): near-zero ridge and the library default
    let cases = [(1e-12, 1e-8), (RIDGE_LAMBDA, 1e-6)];

    for (lambda, tolerance) in cases {
        for n in 2..=7 {
            let points: Vec<SamplePoint> = (0..n)
                .map(|i| {
                    let x = -1.0 + 2.0 * i as f64 / (n - 1) as f64;
                    let wiggle = if i % 2 == 0 { -0.1 } else { 0.15 };
                    SamplePoint::new(x, base_curve(x) + wiggle)
                })
                .collect();

            let mse: Vec<f64> = (0..=n + 3)
                .map(|d| {
                    let c = fit_polynomial_with_ridge(&points, d, lambda);
                    mean_squared_error(&points, &c)
                })
                .collect();

            for degree in (n - 1)..=(n + 3) {
                let best_lower = mse[..degree].iter().copied().fold(f64::INFINITY, f64::min);
                println!(
                    "lambda={:e} n={} degree={} mse={:.3e} best lower={:.3e}",
                    lambda, n, degree, mse[degree], best_lower
                );
                assert!(mse[degree].is_finite());
                assert!(
                    mse[degree] <= best_lower + tolerance,
                    "lambda={} n={} degree={}: mse {} exceeds lower-degree best {}",
                    lambda,
                    n,
                    degree,
                    mse[degree],
                    best_lower
                );
            }
        }
    }
}

/// Horner evaluation and curve sampling over the fitting domain.
#[test]
fn test_predict_and_sample_curve() {
    let c = [1.0, -2.0, 0.5];
    assert_eq!(predict(&c, 2.0), 1.0 - 4.0 + 2.0);
    assert_eq!(predict(&[], 3.0), 0.0);

    let curve = sample_curve(&c, 5);
    assert_eq!(curve.len(), 5);
    assert_eq!(curve[0].0, X_DOMAIN.0);
    assert!((curve[4].0 - X_DOMAIN.1).abs() < 1e-12);
    for &(x, y) in &curve {
        assert!((y - predict(&c, x)).abs() < 1e-12);
    }
}

/// Fit report built from the fixture holds out the tagged points.
#[test]
fn test_fit_report_scores_both_partitions() {
    let points = load_test_points(FIXTURE).expect("Failed to load fixture points");
    let validation = points.iter().filter(|p| p.is_validation()).count();
    assert_eq!(validation, 4);

    let report = quant_lab::models::poly::fit_report(&points, 3, 50);
    println!(
        "train MSE {:.5}, validation MSE {:?}",
        report.train_mse, report.validation_mse
    );

    assert_eq!(report.coefficients.len(), 4);
    assert_eq!(report.curve.len(), 50);
    assert_eq!(report.stability, Stability::Stable);
    let val = report.validation_mse.expect("fixture has validation points");
    assert!(val.is_finite() && val >= 0.0);
    assert!(report.train_mse < 0.05, "cubic should fit the fixture closely");

    let wild = quant_lab::models::poly::fit_report(&points, 8, 50);
    assert_eq!(wild.stability, Stability::HighVariance);
    assert_eq!(wild.stability.label(), "High variance");
}

/// The seeded entry point is reproducible and honours the slider ranges.
#[test]
fn test_run_curve_fit_seeded_and_clamped() {
    let config = create_test_config();
    let a = run_curve_fit(&config);
    let b = run_curve_fit(&config);

    assert_eq!(a.points.len(), config.curve_fit.count);
    assert_eq!(a.points, b.points, "same seed must generate the same points");
    assert_eq!(a.report.coefficients, b.report.coefficients);
    assert!(a.report.validation_mse.is_none(), "quick preset hides the split");

    let mut config = create_test_config();
    config.curve_fit = CurveFitParams {
        count: 500,
        degree: 20,
        show_split: true,
        ..CurveFitParams::default()
    };
    let run = run_curve_fit(&config);
    assert_eq!(run.params.count, CurveFitParams::COUNT_RANGE.1);
    assert_eq!(run.params.degree, CurveFitParams::DEGREE_RANGE.1);
    assert_eq!(run.points.len(), 80);
    assert_eq!(run.report.coefficients.len(), 9);
    assert_eq!(
        run.points.iter().filter(|p| p.is_validation()).count(),
        16,
        "every fifth point is held out"
    );
}

/// Fitting on every point, as the playground does, can be selected from TOML.
#[test]
fn test_run_curve_fit_all_points_scope() {
    let config = quant_lab::LabConfig::from_toml_str(
        "seed = 11\n[curve_fit]\nshow_split = true\nfit_scope = \"all_points\"\n",
    )
    .expect("config with fit_scope parses");
    assert_eq!(config.curve_fit.fit_scope, FitScope::AllPoints);

    let run = run_curve_fit(&config);
    assert_eq!(
        run.report.coefficients,
        fit_polynomial(&run.points, config.curve_fit.degree),
        "all-points scope fits the validation points too"
    );

    let mut held_out = config.clone();
    held_out.curve_fit.fit_scope = FitScope::TrainOnly;
    let held_out = run_curve_fit(&held_out);
    let train: Vec<SamplePoint> = held_out
        .points
        .iter()
        .copied()
        .filter(|p| !p.is_validation())
        .collect();
    assert_eq!(
        held_out.report.coefficients,
        fit_polynomial(&train, config.curve_fit.degree)
    );
    println!(
        "validation MSE all points {:?}, held out {:?}",
        run.report.validation_mse, held_out.report.validation_mse
    );
}
