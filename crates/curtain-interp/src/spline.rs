//! Degree-1 rectangular bivariate surface.
//!
//! Fits over the full axis grid of one level and evaluates anywhere,
//! extrapolating linearly from the outermost cells outside the axis range.

use crate::error::{CurtainError, Result};

/// A bilinear surface over a rectangular grid of values.
///
/// `values` is a flat `[lat][lon]` row-major slice; both axes must be
/// strictly increasing (they do not have to be uniform).
#[derive(Debug, Clone, Copy)]
pub struct BilinearSurface<'a> {
    lats: &'a [f64],
    lons: &'a [f64],
    values: &'a [f32],
}

impl<'a> BilinearSurface<'a> {
    pub fn new(lats: &'a [f64], lons: &'a [f64], values: &'a [f32]) -> Result<Self> {
        if lats.len() < 2 {
            return Err(CurtainError::DegenerateAxis {
                axis: "latitude",
                len: lats.len(),
            });
        }
        if lons.len() < 2 {
            return Err(CurtainError::DegenerateAxis {
                axis: "longitude",
                len: lons.len(),
            });
        }
        let expected = lats.len() * lons.len();
        if values.len() != expected {
            return Err(CurtainError::dimension_mismatch(
                "surface values",
                expected,
                values.len(),
            ));
        }
        Ok(Self { lats, lons, values })
    }

    /// Evaluate the surface at one position.
    pub fn eval(&self, lat: f64, lon: f64) -> f32 {
        let (row, v) = bracket(self.lats, lat);
        let (col, u) = bracket(self.lons, lon);
        self.cell_eval(row, col, u as f32, v as f32)
    }

    /// Evaluate the full outer-product mesh of two coordinate sequences.
    ///
    /// Returns a `[lats.len() × lons.len()]` row-major array. Callers that
    /// only need paired positions take the diagonal; the mesh form matches
    /// what a rectangular spline evaluator naturally produces.
    pub fn eval_mesh(&self, lats: &[f64], lons: &[f64]) -> Vec<f32> {
        let brackets_lat: Vec<(usize, f64)> = lats.iter().map(|&v| bracket(self.lats, v)).collect();
        let brackets_lon: Vec<(usize, f64)> = lons.iter().map(|&v| bracket(self.lons, v)).collect();

        let mut mesh = Vec::with_capacity(lats.len() * lons.len());
        for &(row, v) in &brackets_lat {
            for &(col, u) in &brackets_lon {
                mesh.push(self.cell_eval(row, col, u as f32, v as f32));
            }
        }
        mesh
    }

    /// Blend the four corners of cell (`row`, `col`) with fractions
    /// (`u`, `v`). Fractions outside `[0, 1]` extrapolate.
    fn cell_eval(&self, row: usize, col: usize, u: f32, v: f32) -> f32 {
        let nlon = self.lons.len();
        let v00 = self.values[row * nlon + col];
        let v01 = self.values[row * nlon + col + 1];
        let v10 = self.values[(row + 1) * nlon + col];
        let v11 = self.values[(row + 1) * nlon + col + 1];

        let south = v00 * (1.0 - u) + v01 * u;
        let north = v10 * (1.0 - u) + v11 * u;
        south * (1.0 - v) + north * v
    }
}

/// Interval index and fraction along an increasing axis.
///
/// The interval is clamped to the axis, so out-of-range values yield
/// fractions outside `[0, 1]` against the outermost cell.
fn bracket(axis: &[f64], value: f64) -> (usize, f64) {
    let upper = axis.partition_point(|&a| a <= value);
    let i = upper.saturating_sub(1).min(axis.len() - 2);
    let t = (value - axis[i]) / (axis[i + 1] - axis[i]);
    (i, t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::assert_approx_eq;

    const LATS: [f64; 3] = [0.0, 1.0, 2.0];
    const LONS: [f64; 3] = [0.0, 1.0, 2.0];
    // value = lat + lon
    const VALUES: [f32; 9] = [0.0, 1.0, 2.0, 1.0, 2.0, 3.0, 2.0, 3.0, 4.0];

    #[test]
    fn test_eval_at_nodes() {
        let surface = BilinearSurface::new(&LATS, &LONS, &VALUES).unwrap();
        for (i, &lat) in LATS.iter().enumerate() {
            for (j, &lon) in LONS.iter().enumerate() {
                assert_approx_eq!(surface.eval(lat, lon), (i + j) as f32, 1e-6);
            }
        }
    }

    #[test]
    fn test_eval_between_nodes() {
        let surface = BilinearSurface::new(&LATS, &LONS, &VALUES).unwrap();
        assert_approx_eq!(surface.eval(0.5, 0.5), 1.0, 1e-6);
        assert_approx_eq!(surface.eval(1.5, 0.25), 1.75, 1e-6);
    }

    #[test]
    fn test_linear_extrapolation() {
        let surface = BilinearSurface::new(&LATS, &LONS, &VALUES).unwrap();
        // the plane lat + lon continues outside the grid
        assert_approx_eq!(surface.eval(3.0, 1.0), 4.0, 1e-6);
        assert_approx_eq!(surface.eval(-1.0, -1.0), -2.0, 1e-6);
    }

    #[test]
    fn test_mesh_shape_and_diagonal() {
        let surface = BilinearSurface::new(&LATS, &LONS, &VALUES).unwrap();
        let qlats = [0.5, 1.5];
        let qlons = [0.0, 2.0];
        let mesh = surface.eval_mesh(&qlats, &qlons);
        assert_eq!(mesh.len(), 4);
        // diagonal entries are the paired evaluations
        assert_approx_eq!(mesh[0], surface.eval(0.5, 0.0), 1e-6);
        assert_approx_eq!(mesh[3], surface.eval(1.5, 2.0), 1e-6);
    }

    #[test]
    fn test_shape_validation() {
        assert!(BilinearSurface::new(&LATS, &LONS, &VALUES[..8]).is_err());
        assert!(BilinearSurface::new(&LATS[..1], &LONS, &VALUES[..3]).is_err());
    }
}
