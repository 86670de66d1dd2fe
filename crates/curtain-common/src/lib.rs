//! Common utilities shared across the curtain-services workspace.

pub mod config;
pub mod crs;
pub mod geo;
pub mod settings;
pub mod time;

pub use config::{load_config, ConfigError};
pub use crs::{projection_params, BboxUnits, MapProjection, ProjectionParams};
pub use geo::{normalize_angle, rotate_point, Geodesic, LatLon, SphericalEarth};
pub use settings::{load_settings, save_settings, SettingsMap};
pub use time::{datetime_to_jsec, hour_of_day, jsec_to_datetime, pressure_to_altitude_km};
