//! EPSG code lookup for the projections the planning views support.

use serde::{Deserialize, Serialize};

/// Map projection selected for a view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum MapProjection {
    /// Equidistant cylindrical (plate carrée), degrees in both axes.
    Cylindrical,
    /// Polar/oblique stereographic centred on (`lat_0`, `lon_0`).
    Stereographic { lat_0: f64, lon_0: f64 },
}

/// Units in which a view's bounding box is expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BboxUnits {
    /// Lat/lon degrees.
    Degrees,
    /// Projected metres.
    Metres,
}

/// Projection parameters resolved from an EPSG code.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionParams {
    pub projection: MapProjection,
    pub bbox_units: BboxUnits,
}

/// Resolve an EPSG code to projection parameters.
///
/// Accepts a bare numeric code (`"4326"`) or the prefixed form
/// (`"EPSG:4326"`, case-insensitive). Supported codes:
/// - `4326`: global cylindrical lat/lon
/// - `9810`: north polar stereographic, metre bounding box
/// - `777llLLL` / `778llLLL`: stereographic centred on `ll`°N / `ll`°S
///   and `LLL`°E (a private code family used by the mission planning tools)
///
/// Unknown codes resolve to `None`.
pub fn projection_params(code: &str) -> Option<ProjectionParams> {
    let normalized = code.to_uppercase();
    let digits = normalized.strip_prefix("EPSG:").unwrap_or(&normalized);

    match digits {
        "4326" => Some(ProjectionParams {
            projection: MapProjection::Cylindrical,
            bbox_units: BboxUnits::Degrees,
        }),
        "9810" => Some(ProjectionParams {
            projection: MapProjection::Stereographic {
                lat_0: 90.0,
                lon_0: 0.0,
            },
            bbox_units: BboxUnits::Metres,
        }),
        _ if digits.len() == 8 && (digits.starts_with("777") || digits.starts_with("778")) => {
            let lat_0: f64 = digits[3..5].parse().ok()?;
            let lon_0: f64 = digits[5..].parse().ok()?;
            let lat_0 = if digits.starts_with("778") { -lat_0 } else { lat_0 };
            Some(ProjectionParams {
                projection: MapProjection::Stereographic { lat_0, lon_0 },
                bbox_units: BboxUnits::Degrees,
            })
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cylindrical() {
        let params = projection_params("EPSG:4326").unwrap();
        assert_eq!(params.projection, MapProjection::Cylindrical);
        assert_eq!(params.bbox_units, BboxUnits::Degrees);
    }

    #[test]
    fn test_prefix_is_optional_and_case_insensitive() {
        assert_eq!(projection_params("4326"), projection_params("epsg:4326"));
    }

    #[test]
    fn test_polar_stereographic() {
        let params = projection_params("9810").unwrap();
        assert_eq!(
            params.projection,
            MapProjection::Stereographic {
                lat_0: 90.0,
                lon_0: 0.0
            }
        );
        assert_eq!(params.bbox_units, BboxUnits::Metres);
    }

    #[test]
    fn test_mobile_stereographic_north() {
        let params = projection_params("EPSG:77752010").unwrap();
        assert_eq!(
            params.projection,
            MapProjection::Stereographic {
                lat_0: 52.0,
                lon_0: 10.0
            }
        );
        assert_eq!(params.bbox_units, BboxUnits::Degrees);
    }

    #[test]
    fn test_mobile_stereographic_south() {
        let params = projection_params("77870120").unwrap();
        assert_eq!(
            params.projection,
            MapProjection::Stereographic {
                lat_0: -70.0,
                lon_0: 120.0
            }
        );
    }

    #[test]
    fn test_unknown_codes() {
        assert!(projection_params("EPSG:3857").is_none());
        assert!(projection_params("777520").is_none()); // too short
        assert!(projection_params("777zz010").is_none()); // non-numeric
        assert!(projection_params("").is_none());
    }
}
