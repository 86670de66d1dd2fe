//! Vertical-section extraction along a query path.
//!
//! Every strategy interpolates one horizontal plane per level and writes
//! one output row; levels are independent of each other, so the per-level
//! loop runs on the rayon pool.

use rayon::prelude::*;

use crate::curtain::{Curtain, MaskedCurtain};
use crate::error::{CurtainError, Result};
use crate::grid::{AxisSpacing, Grid3, GridAxes};
use crate::index::{LookupIndexMapper, UniformIndexMapper};
use crate::spline::BilinearSurface;

/// Extract a curtain with a per-level bilinear surface.
///
/// For each level the surface is evaluated on the full
/// `query_lats x query_lons` mesh and only the diagonal (the paired
/// positions) is kept. This does O(N²) work per level where the
/// index-space strategies do O(N); it exists as the precision baseline and
/// works for any strictly increasing axes, uniform or not. Positions
/// outside the axis range are linearly extrapolated, never flagged.
pub fn interpolate_regular_spline(
    grid: &Grid3,
    axes: &GridAxes,
    query_lats: &[f64],
    query_lons: &[f64],
) -> Result<Curtain> {
    validate_path(grid, axes, query_lats, query_lons)?;
    let n = query_lats.len();

    let rows: Vec<Vec<f32>> = (0..grid.levels())
        .into_par_iter()
        .map(|level| {
            let surface = BilinearSurface::new(&axes.lats, &axes.lons, grid.level_slice(level))?;
            let mesh = surface.eval_mesh(query_lats, query_lons);
            Ok((0..n).map(|i| mesh[i * n + i]).collect())
        })
        .collect::<Result<_>>()?;

    Ok(Curtain::from_raw(
        rows.into_iter().flatten().collect(),
        grid.levels(),
        n,
    ))
}

/// Extract a curtain by uniform-spacing index arithmetic.
///
/// Maps the query positions to fractional index coordinates once, then
/// takes a single bilinear sample per level and position. Requires
/// uniformly spaced axes; spacing is taken from the first two samples and
/// never verified, so behavior on non-uniform axes is undefined.
/// Out-of-grid positions clamp to the boundary cell; callers that need
/// missing-data semantics use [`interpolate_irregular`] instead.
pub fn interpolate_regular_index(
    grid: &Grid3,
    axes: &GridAxes,
    query_lats: &[f64],
    query_lons: &[f64],
) -> Result<Curtain> {
    validate_path(grid, axes, query_lats, query_lons)?;
    let ind_lats = UniformIndexMapper::from_axis(&axes.lats)?.map_all(query_lats);
    let ind_lons = UniformIndexMapper::from_axis(&axes.lons)?.map_all(query_lons);

    let n = query_lats.len();
    let mut values = vec![0.0_f32; grid.levels() * n];
    if n > 0 {
        values.par_chunks_mut(n).enumerate().for_each(|(level, row)| {
            let data = grid.level_slice(level);
            for (i, out) in row.iter_mut().enumerate() {
                *out = sample_bilinear(data, grid.nlat(), grid.nlon(), ind_lats[i], ind_lons[i]);
            }
        });
    }

    Ok(Curtain::from_raw(values, grid.levels(), n))
}

/// Extract a curtain from a monotonic but possibly non-uniform grid.
///
/// Query coordinates resolve through a per-axis monotonic lookup; a
/// coordinate outside its axis domain resolves to missing, and a position
/// with either coordinate missing is masked at EVERY level: a column is
/// valid or invalid as a whole, never partially.
pub fn interpolate_irregular(
    grid: &Grid3,
    axes: &GridAxes,
    query_lats: &[f64],
    query_lons: &[f64],
) -> Result<MaskedCurtain> {
    validate_path(grid, axes, query_lats, query_lons)?;
    let ind_lats = LookupIndexMapper::new(&axes.lats)?.map_all(query_lats);
    let ind_lons = LookupIndexMapper::new(&axes.lons)?.map_all(query_lons);

    let resolved: Vec<Option<(f64, f64)>> = ind_lats
        .iter()
        .copied()
        .zip(ind_lons.iter().copied())
        .map(|(lat, lon)| lat.zip(lon))
        .collect();

    let n = query_lats.len();
    let mut values = vec![f32::NAN; grid.levels() * n];
    if n > 0 {
        values.par_chunks_mut(n).enumerate().for_each(|(level, row)| {
            let data = grid.level_slice(level);
            for (i, out) in row.iter_mut().enumerate() {
                if let Some((lat_idx, lon_idx)) = resolved[i] {
                    *out = sample_bilinear(data, grid.nlat(), grid.nlon(), lat_idx, lon_idx);
                }
            }
        });
    }

    let valid: Vec<bool> = (0..grid.levels() * n)
        .map(|k| resolved[k % n.max(1)].is_some())
        .collect();

    Ok(MaskedCurtain::from_parts(
        Curtain::from_raw(values, grid.levels(), n),
        valid,
    ))
}

/// Extract a curtain, choosing the strategy from the axis spacing.
///
/// Uniform axes take the fast index-arithmetic path (every element valid);
/// irregular axes take the lookup path with out-of-domain masking.
pub fn interpolate_curtain(
    grid: &Grid3,
    axes: &GridAxes,
    query_lats: &[f64],
    query_lons: &[f64],
) -> Result<MaskedCurtain> {
    match axes.spacing() {
        AxisSpacing::Uniform => Ok(MaskedCurtain::all_valid(interpolate_regular_index(
            grid, axes, query_lats, query_lons,
        )?)),
        AxisSpacing::Irregular => interpolate_irregular(grid, axes, query_lats, query_lons),
    }
}

fn validate_path(
    grid: &Grid3,
    axes: &GridAxes,
    query_lats: &[f64],
    query_lons: &[f64],
) -> Result<()> {
    axes.check_against(grid)?;
    if query_lats.len() != query_lons.len() {
        return Err(CurtainError::dimension_mismatch(
            "query path",
            query_lats.len(),
            query_lons.len(),
        ));
    }
    Ok(())
}

/// One bilinear sample at fractional index coordinates.
///
/// Coordinates are clamped into the grid; if any contributing corner is
/// NaN the sample is NaN.
fn sample_bilinear(data: &[f32], nlat: usize, nlon: usize, lat_idx: f64, lon_idx: f64) -> f32 {
    let y = lat_idx.clamp(0.0, (nlat - 1) as f64);
    let x = lon_idx.clamp(0.0, (nlon - 1) as f64);

    let y0 = y.floor() as usize;
    let x0 = x.floor() as usize;
    let y1 = (y0 + 1).min(nlat - 1);
    let x1 = (x0 + 1).min(nlon - 1);

    let yf = (y - y0 as f64) as f32;
    let xf = (x - x0 as f64) as f32;

    let v00 = data[y0 * nlon + x0];
    let v10 = data[y0 * nlon + x1];
    let v01 = data[y1 * nlon + x0];
    let v11 = data[y1 * nlon + x1];

    if v00.is_nan() || v10.is_nan() || v01.is_nan() || v11.is_nan() {
        return f32::NAN;
    }

    let south = v00 * (1.0 - xf) + v10 * xf;
    let north = v01 * (1.0 - xf) + v11 * xf;
    south * (1.0 - yf) + north * yf
}
