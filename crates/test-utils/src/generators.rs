//! Test data generators for creating synthetic atmospheric fields.
//!
//! These generators create predictable, verifiable data patterns that can
//! be used across the test suite.

/// Creates a uniformly spaced coordinate axis.
///
/// # Arguments
///
/// * `start` - First axis value
/// * `step` - Spacing between consecutive values (must be positive for an
///   increasing axis)
/// * `len` - Number of samples
///
/// # Example
///
/// ```
/// use test_utils::uniform_axis;
///
/// let axis = uniform_axis(0.0, 0.5, 5);
/// assert_eq!(axis, vec![0.0, 0.5, 1.0, 1.5, 2.0]);
/// ```
pub fn uniform_axis(start: f64, step: f64, len: usize) -> Vec<f64> {
    (0..len).map(|i| start + i as f64 * step).collect()
}

/// Creates a strictly increasing axis with non-uniform spacing.
///
/// The spacing grows with the index (`start + i + i²/10`), so the axis is
/// monotonic but never uniformly spaced for `len > 2`.
pub fn stretched_axis(start: f64, len: usize) -> Vec<f64> {
    (0..len)
        .map(|i| start + i as f64 + (i * i) as f64 / 10.0)
        .collect()
}

/// Creates a 3-D test field with predictable values.
///
/// Each cell value is calculated as: `level * 100_000 + lat * 1_000 + lon`
/// (all indices), which makes it easy to verify that data is read at the
/// right place.
///
/// # Returns
///
/// A flat `Vec<f32>` in `[level][lat][lon]` row-major order.
pub fn create_test_field(levels: usize, nlat: usize, nlon: usize) -> Vec<f32> {
    let mut data = Vec::with_capacity(levels * nlat * nlon);
    for level in 0..levels {
        for lat in 0..nlat {
            for lon in 0..nlon {
                data.push((level * 100_000 + lat * 1_000 + lon) as f32);
            }
        }
    }
    data
}

/// Creates a 3-D field that is linear in both horizontal indices.
///
/// Each cell value is `level * 10 + lat + lon`. Because the field is planar
/// per level, any exact degree-1 interpolation scheme must reproduce
/// `level * 10 + lat_index + lon_index` at fractional index positions too,
/// which makes this the reference field for cross-strategy agreement tests.
pub fn create_planar_field(levels: usize, nlat: usize, nlon: usize) -> Vec<f32> {
    let mut data = Vec::with_capacity(levels * nlat * nlon);
    for level in 0..levels {
        for lat in 0..nlat {
            for lon in 0..nlon {
                data.push((level * 10 + lat + lon) as f32);
            }
        }
    }
    data
}

/// Creates a temperature-like 3-D field in Kelvin.
///
/// Values decrease with level (like a troposphere) and form a horizontal
/// gradient, ranging roughly from 210K aloft to 310K at the surface.
pub fn create_temperature_field(levels: usize, nlat: usize, nlon: usize) -> Vec<f32> {
    let mut data = Vec::with_capacity(levels * nlat * nlon);
    for level in 0..levels {
        for lat in 0..nlat {
            for lon in 0..nlon {
                let x_factor = lon as f32 / nlon.max(1) as f32;
                let y_factor = lat as f32 / nlat.max(1) as f32;
                let lapse = level as f32 / levels.max(1) as f32;
                let temp = 280.0 + (x_factor * 15.0) + (y_factor * 15.0) - (lapse * 70.0);
                data.push(temp);
            }
        }
    }
    data
}
