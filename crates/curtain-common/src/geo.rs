//! Geodesy helpers: great-circle distance, angle normalization, rotation.

/// Mean Earth radius in kilometers (IUGG).
pub const EARTH_RADIUS_KM: f64 = 6371.0088;

/// A geographic position in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

impl LatLon {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Capability for computing surface distance between two positions.
///
/// Callers depend on this trait rather than a concrete geodesy
/// implementation, so the Earth model can be swapped without touching the
/// call sites.
pub trait Geodesic {
    /// Distance between two positions along the surface, in kilometers.
    fn distance_km(&self, from: LatLon, to: LatLon) -> f64;
}

/// Great-circle distance on a mean-radius spherical Earth.
#[derive(Debug, Clone, Copy, Default)]
pub struct SphericalEarth;

impl Geodesic for SphericalEarth {
    fn distance_km(&self, from: LatLon, to: LatLon) -> f64 {
        let lat1 = from.lat.to_radians();
        let lat2 = to.lat.to_radians();
        let dlat = (to.lat - from.lat).to_radians();
        let dlon = (to.lon - from.lon).to_radians();

        // Haversine in atan2 form, stable for antipodal and tiny distances.
        let a = (dlat / 2.0).sin().powi(2)
            + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS_KM * c
    }
}

/// Normalize an angle in degrees to the range `[0, 360)`.
pub fn normalize_angle(degrees: f64) -> f64 {
    let normalized = degrees.rem_euclid(360.0);
    // rem_euclid can return 360.0 for tiny negative inputs (float rounding)
    if normalized >= 360.0 {
        normalized - 360.0
    } else {
        normalized
    }
}

/// Rotate a point counter-clockwise about `origin`. Angle is in degrees.
pub fn rotate_point(point: (f64, f64), degrees: f64, origin: (f64, f64)) -> (f64, f64) {
    let angle = degrees.to_radians();
    let (sin, cos) = angle.sin_cos();
    let dx = point.0 - origin.0;
    let dy = point.1 - origin.1;
    (
        dx * cos - dy * sin + origin.0,
        dx * sin + dy * cos + origin.1,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{assert_approx_eq, assert_coords_approx_eq};

    #[test]
    fn test_distance_zero_for_identical_points() {
        let p = LatLon::new(52.4, 9.7);
        assert_approx_eq!(SphericalEarth.distance_km(p, p), 0.0, 1e-9);
    }

    #[test]
    fn test_distance_one_degree_on_equator() {
        let d = SphericalEarth.distance_km(LatLon::new(0.0, 0.0), LatLon::new(0.0, 1.0));
        // 2πR/360 ≈ 111.2 km
        assert_approx_eq!(d, 111.195, 0.05);
    }

    #[test]
    fn test_distance_pole_to_equator() {
        let d = SphericalEarth.distance_km(LatLon::new(90.0, 0.0), LatLon::new(0.0, 0.0));
        // Quarter of a great circle
        assert_approx_eq!(d, std::f64::consts::PI * EARTH_RADIUS_KM / 2.0, 0.001);
    }

    #[test]
    fn test_normalize_angle_range() {
        assert_approx_eq!(normalize_angle(0.0), 0.0, 1e-12);
        assert_approx_eq!(normalize_angle(360.0), 0.0, 1e-12);
        assert_approx_eq!(normalize_angle(725.0), 5.0, 1e-9);
        assert_approx_eq!(normalize_angle(-45.0), 315.0, 1e-9);
        assert_approx_eq!(normalize_angle(-1085.0), 355.0, 1e-9);
        for deg in [-1000.0, -360.0, -0.0001, 359.9999, 1e6] {
            let n = normalize_angle(deg);
            assert!((0.0..360.0).contains(&n), "{deg} -> {n}");
        }
    }

    #[test]
    fn test_rotate_quarter_turn() {
        let rotated = rotate_point((1.0, 0.0), 90.0, (0.0, 0.0));
        assert_coords_approx_eq!((rotated.0, rotated.1), (0.0, 1.0), 1e-12);
    }

    #[test]
    fn test_rotate_about_offset_origin() {
        let rotated = rotate_point((2.0, 1.0), 180.0, (1.0, 1.0));
        assert_coords_approx_eq!((rotated.0, rotated.1), (0.0, 1.0), 1e-12);
    }
}
