
use quant_lab::models::traits::VolatilityModel;
use quant_lab::{
    build_surface, export, generate_surface, ParametricSurface, SurfaceGrid, SurfaceParams,
};
use test_utils::{create_test_config, temp_path};

fn assert_within_band(params: &SurfaceParams, grid: &SurfaceGrid) {
    let surface = generate_surface(params, grid);
    assert_eq!(surface.maturities.len(), grid.maturity_steps);
    assert_eq!(surface.strikes.len(), grid.strike_steps);
    for row in &surface.vols {
        assert_eq!(row.len(), grid.strike_steps);
        for &v in row {
            assert!(
                v >= grid.vol_min && v <= grid.vol_max,
                "vol {} escaped [{}, {}] for {:?}",
                v,
                grid.vol_min,
                grid.vol_max,
                params
            );
        }
    }
}

/// Every grid value stays in the band, including for extreme coefficients.
#[test]
fn test_surface_values_always_in_band() {
    let grid = SurfaceGrid::default();
    let extremes = [
        SurfaceParams::default(),
        SurfaceParams {
            base_vol: 5.0,
            ..SurfaceParams::default()
        },
        SurfaceParams {
            base_vol: -3.0,
            skew: 40.0,
            ..SurfaceParams::default()
        },
        SurfaceParams {
            smile: 1e9,
            term: -1e9,
            ..SurfaceParams::default()
        },
        SurfaceParams {
            spot: 0.0,
            ..SurfaceParams::default()
        },
        SurfaceParams {
            skew: f64::INFINITY,
            smile: f64::NEG_INFINITY,
            ..SurfaceParams::default()
        },
        SurfaceParams {
            base_vol: f64::NAN,
            ..SurfaceParams::default()
        },
    ];

    for params in &extremes {
        assert_within_band(params, &grid);
    }

    let narrow = SurfaceGrid {
        vol_min: 0.2,
        vol_max: 0.2,
        ..SurfaceGrid::default()
    };
    let flat = generate_surface(&SurfaceParams::default(), &narrow);
    assert_eq!(flat.vol_range(), Some((0.2, 0.2)));
}

/// Default coefficients give a downward skew and upward term structure.
#[test]
fn test_default_surface_shape() {
    let config = create_test_config();
    let surface = build_surface(&config);
    println!("strikes {:?}", surface.strikes);
    println!("maturities {:?}", surface.maturities);

    let short = surface.slice(0).expect("first maturity slice");
    assert!(
        short[0] > short[short.len() - 1],
        "low strikes should carry more vol than high strikes"
    );

    let term = surface.atm_term_structure(100.0);
    assert_eq!(term.len(), config.grid.maturity_steps);
    for pair in term.windows(2) {
        assert!(pair[1].1 >= pair[0].1, "ATM vol should rise with maturity");
    }

    assert!(surface.slice(99).is_none());
}

/// The grid evaluates exactly the closed-form model.
#[test]
fn test_grid_matches_model() {
    let params = SurfaceParams {
        skew: -0.4,
        ..SurfaceParams::default()
    };
    let grid = SurfaceGrid {
        strike_steps: 5,
        maturity_steps: 3,
        ..SurfaceGrid::default()
    };
    let surface = generate_surface(&params, &grid);
    let model = ParametricSurface::from_grid(params, &grid);

    assert_eq!(model.parameters().skew, -0.4);
    for (i, &t) in surface.maturities.iter().enumerate() {
        for (j, &k) in surface.strikes.iter().enumerate() {
            assert_eq!(surface.vols[i][j], model.vol(k, t));
        }
    }

    // ATM, T = 0.2: 0.22 + 0.2 * ln(1.2)
    let atm = model.vol(100.0, 0.2);
    assert!((atm - (0.22 + 0.2 * 1.2f64.ln())).abs() < 1e-12);
}

#[test]
fn test_degenerate_grids() {
    let single = SurfaceGrid {
        strike_steps: 1,
        maturity_steps: 1,
        ..SurfaceGrid::default()
    };
    let surface = generate_surface(&SurfaceParams::default(), &single);
    assert_eq!(surface.strikes, vec![60.0]);
    assert_eq!(surface.maturities, vec![0.2]);

    let empty = SurfaceGrid {
        strike_steps: 0,
        ..SurfaceGrid::default()
    };
    let surface = generate_surface(&SurfaceParams::default(), &empty);
    assert!(surface.vol_range().is_none());
    assert!(surface.atm_term_structure(100.0).is_empty());
}

/// Surface export writes one row per grid node.
#[test]
fn test_surface_export() {
    let config = create_test_config();
    let surface = build_surface(&config);
    let path = temp_path("surface.csv");
    export::save_surface(&path, &surface).expect("Failed to write surface");

    let mut reader = csv::Reader::from_path(&path).expect("Failed to open surface csv");
    let mut rows = 0;
    for record in reader.records() {
        let record = record.expect("valid record");
        let vol: f64 = record[2].parse().expect("vol column is numeric");
        assert!(vol >= config.grid.vol_min && vol <= config.grid.vol_max);
        rows += 1;
    }
    assert_eq!(rows, config.grid.strike_steps * config.grid.maturity_steps);

    let _ = std::fs::remove_file(&path);
}
