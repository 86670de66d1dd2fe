//! 3-D gridded field and its coordinate axes.

use crate::error::{CurtainError, Result};

/// A 3-D field of sample values in `[level][lat][lon]` row-major order.
#[derive(Debug, Clone)]
pub struct Grid3 {
    data: Vec<f32>,
    levels: usize,
    nlat: usize,
    nlon: usize,
}

impl Grid3 {
    /// Create a field from flat data and its shape.
    pub fn new(data: Vec<f32>, levels: usize, nlat: usize, nlon: usize) -> Result<Self> {
        let expected = levels * nlat * nlon;
        if data.len() != expected {
            return Err(CurtainError::dimension_mismatch(
                "grid data",
                expected,
                data.len(),
            ));
        }
        Ok(Self {
            data,
            levels,
            nlat,
            nlon,
        })
    }

    /// Number of vertical levels.
    pub fn levels(&self) -> usize {
        self.levels
    }

    /// Number of latitude rows per level.
    pub fn nlat(&self) -> usize {
        self.nlat
    }

    /// Number of longitude columns per level.
    pub fn nlon(&self) -> usize {
        self.nlon
    }

    /// One level as a flat `[lat][lon]` slice.
    pub fn level_slice(&self, level: usize) -> &[f32] {
        let size = self.nlat * self.nlon;
        &self.data[level * size..(level + 1) * size]
    }

    /// Value at an exact grid node.
    pub fn at(&self, level: usize, lat_idx: usize, lon_idx: usize) -> f32 {
        self.data[(level * self.nlat + lat_idx) * self.nlon + lon_idx]
    }
}

/// Classification of an axis pair's spacing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisSpacing {
    /// Both axes are uniformly spaced (within float tolerance).
    Uniform,
    /// At least one axis is monotonic but not uniformly spaced.
    Irregular,
}

/// Coordinate axes for the horizontal plane of a [`Grid3`].
///
/// Both axes must be monotonically increasing. Uniform spacing is an
/// additional requirement of the regular-index strategy only and is never
/// verified there; use [`GridAxes::spacing`] to route a grid to the right
/// strategy.
#[derive(Debug, Clone)]
pub struct GridAxes {
    pub lats: Vec<f64>,
    pub lons: Vec<f64>,
}

impl GridAxes {
    pub fn new(lats: Vec<f64>, lons: Vec<f64>) -> Self {
        Self { lats, lons }
    }

    /// Verify the axes agree with a grid's horizontal shape.
    pub(crate) fn check_against(&self, grid: &Grid3) -> Result<()> {
        if self.lats.len() != grid.nlat() {
            return Err(CurtainError::dimension_mismatch(
                "latitude axis",
                grid.nlat(),
                self.lats.len(),
            ));
        }
        if self.lons.len() != grid.nlon() {
            return Err(CurtainError::dimension_mismatch(
                "longitude axis",
                grid.nlon(),
                self.lons.len(),
            ));
        }
        Ok(())
    }

    /// Classify the spacing of both axes.
    pub fn spacing(&self) -> AxisSpacing {
        if axis_is_uniform(&self.lats) && axis_is_uniform(&self.lons) {
            AxisSpacing::Uniform
        } else {
            AxisSpacing::Irregular
        }
    }
}

/// Relative tolerance for treating axis steps as equal.
const UNIFORM_REL_EPSILON: f64 = 1e-6;

fn axis_is_uniform(axis: &[f64]) -> bool {
    if axis.len() < 3 {
        return true;
    }
    let step = axis[1] - axis[0];
    let tolerance = step.abs() * UNIFORM_REL_EPSILON;
    axis.windows(2).all(|w| ((w[1] - w[0]) - step).abs() <= tolerance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{create_test_field, stretched_axis, uniform_axis};

    #[test]
    fn test_grid_shape_checked() {
        assert!(Grid3::new(vec![0.0; 24], 2, 3, 4).is_ok());
        let err = Grid3::new(vec![0.0; 23], 2, 3, 4).unwrap_err();
        assert!(matches!(err, CurtainError::DimensionMismatch { .. }));
    }

    #[test]
    fn test_level_slice_and_at() {
        let grid = Grid3::new(create_test_field(2, 3, 4), 2, 3, 4).unwrap();
        assert_eq!(grid.at(1, 2, 3), 102_003.0);
        let level1 = grid.level_slice(1);
        assert_eq!(level1.len(), 12);
        assert_eq!(level1[2 * 4 + 3], 102_003.0);
    }

    #[test]
    fn test_spacing_classification() {
        let uniform = GridAxes::new(uniform_axis(0.0, 0.5, 10), uniform_axis(-5.0, 1.0, 7));
        assert_eq!(uniform.spacing(), AxisSpacing::Uniform);

        let stretched = GridAxes::new(uniform_axis(0.0, 0.5, 10), stretched_axis(0.0, 7));
        assert_eq!(stretched.spacing(), AxisSpacing::Irregular);
    }

    #[test]
    fn test_axes_checked_against_grid() {
        let grid = Grid3::new(vec![0.0; 12], 1, 3, 4).unwrap();
        let good = GridAxes::new(uniform_axis(0.0, 1.0, 3), uniform_axis(0.0, 1.0, 4));
        assert!(good.check_against(&grid).is_ok());

        let bad = GridAxes::new(uniform_axis(0.0, 1.0, 4), uniform_axis(0.0, 1.0, 4));
        assert!(bad.check_against(&grid).is_err());
    }
}
