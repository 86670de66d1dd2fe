//! Geographic-coordinate to fractional-index mapping.
//!
//! Bilinear sampling works in index space: a query coordinate is first
//! mapped to a fractional position along its axis, then the sampler blends
//! the bracketing grid cells. Two mappers cover the two grid families:
//! uniform-spacing arithmetic for regular grids, and monotonic lookup for
//! irregular ones.

use crate::error::{CurtainError, Result};

/// Index mapper for uniformly spaced axes.
///
/// Spacing is estimated from the first two samples only; callers must
/// guarantee the axis is actually uniform, there is no runtime check.
#[derive(Debug, Clone, Copy)]
pub struct UniformIndexMapper {
    origin: f64,
    spacing: f64,
}

impl UniformIndexMapper {
    pub fn from_axis(axis: &[f64]) -> Result<Self> {
        if axis.len() < 2 {
            return Err(CurtainError::DegenerateAxis {
                axis: "uniform",
                len: axis.len(),
            });
        }
        Ok(Self {
            origin: axis[0],
            spacing: axis[1] - axis[0],
        })
    }

    /// Fractional index for a coordinate value. May fall outside
    /// `[0, len-1]` for out-of-grid queries.
    pub fn map(&self, value: f64) -> f64 {
        (value - self.origin) / self.spacing
    }

    pub fn map_all(&self, values: &[f64]) -> Vec<f64> {
        values.iter().map(|&v| self.map(v)).collect()
    }
}

/// Index mapper for monotonically increasing, possibly non-uniform axes.
///
/// Out-of-domain queries map to `None` rather than extrapolating; the
/// caller's masking pass turns those into invalid output positions.
#[derive(Debug, Clone, Copy)]
pub struct LookupIndexMapper<'a> {
    axis: &'a [f64],
}

impl<'a> LookupIndexMapper<'a> {
    pub fn new(axis: &'a [f64]) -> Result<Self> {
        if axis.len() < 2 {
            return Err(CurtainError::DegenerateAxis {
                axis: "lookup",
                len: axis.len(),
            });
        }
        Ok(Self { axis })
    }

    /// Fractional index for a coordinate value, `None` outside the axis
    /// domain `[axis[0], axis[last]]`.
    pub fn map(&self, value: f64) -> Option<f64> {
        let last = self.axis.len() - 1;
        if value < self.axis[0] || value > self.axis[last] {
            return None;
        }
        // Index of the interval [i, i+1] bracketing the value.
        let upper = self.axis.partition_point(|&a| a <= value);
        let i = upper.saturating_sub(1).min(last - 1);
        let width = self.axis[i + 1] - self.axis[i];
        Some(i as f64 + (value - self.axis[i]) / width)
    }

    pub fn map_all(&self, values: &[f64]) -> Vec<Option<f64>> {
        values.iter().map(|&v| self.map(v)).collect()
    }
}
