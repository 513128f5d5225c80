//! CSV export of model outputs.
//!
//! Writers take any [`io::Write`] so they can target files, buffers or stdout.
//! Layouts:
//!
//! * points: `x,y,split` (`split` is `train` or `val`)
//! * paths: long format `path,step,t,price`
//! * surface: `maturity,strike,vol`

use std::fs::File;
use std::io;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use serde::Serialize;

use crate::models::jump_diffusion::SimulationResult;
use crate::models::poly::SamplePoint;
use crate::models::vol_surface::VolSurface;

#[derive(Debug, Serialize)]
struct PathRow {
    path: usize,
    step: usize,
    t: f64,
    price: f64,
}

#[derive(Debug, Serialize)]
struct SurfaceRow {
    maturity: f64,
    strike: f64,
    vol: f64,
}

pub fn write_points<W: io::Write>(writer: W, points: &[SamplePoint]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for p in points {
        wtr.serialize(p)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Read points back; a missing `split` column tags every point as training data.
pub fn read_points<R: io::Read>(reader: R) -> Result<Vec<SamplePoint>> {
    let mut rdr = csv::Reader::from_reader(reader);
    let mut points = Vec::new();
    for (i, row) in rdr.deserialize().enumerate() {
        let point: SamplePoint = row.with_context(|| format!("bad point on record {}", i + 1))?;
        if !point.x.is_finite() || !point.y.is_finite() {
            return Err(anyhow!("non-finite point on record {}", i + 1));
        }
        points.push(point);
    }
    Ok(points)
}

pub fn write_paths<W: io::Write>(writer: W, result: &SimulationResult) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for (path, prices) in result.paths.iter().enumerate() {
        for (step, (&t, &price)) in result.time_axis.iter().zip(prices).enumerate() {
            wtr.serialize(PathRow {
                path,
                step,
                t,
                price,
            })?;
        }
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_surface<W: io::Write>(writer: W, surface: &VolSurface) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for (&maturity, row) in surface.maturities.iter().zip(&surface.vols) {
        for (&strike, &vol) in surface.strikes.iter().zip(row) {
            wtr.serialize(SurfaceRow {
                maturity,
                strike,
                vol,
            })?;
        }
    }
    wtr.flush()?;
    Ok(())
}

fn create(path: &Path) -> Result<File> {
    File::create(path).with_context(|| format!("failed to create {}", path.display()))
}

pub fn save_points(path: impl AsRef<Path>, points: &[SamplePoint]) -> Result<()> {
    let path = path.as_ref();
    write_points(create(path)?, points)?;
    tracing::debug!(path = %path.display(), rows = points.len(), "wrote points");
    Ok(())
}

pub fn load_points(path: impl AsRef<Path>) -> Result<Vec<SamplePoint>> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    read_points(file).with_context(|| format!("failed to read points from {}", path.display()))
}

pub fn save_paths(path: impl AsRef<Path>, result: &SimulationResult) -> Result<()> {
    let path = path.as_ref();
    write_paths(create(path)?, result)?;
    tracing::debug!(path = %path.display(), paths = result.path_count(), "wrote paths");
    Ok(())
}

pub fn save_surface(path: impl AsRef<Path>, surface: &VolSurface) -> Result<()> {
    let path = path.as_ref();
    write_surface(create(path)?, surface)?;
    tracing::debug!(path = %path.display(), "wrote surface");
    Ok(())
}
