//! Satellite overpass prediction parsing.
//!
//! Prediction files list a satellite's ground track as one timestamped
//! record per line. This crate parses those records, splits them into
//! time-contiguous overpass segments wherever the track jumps by more than
//! the segment gap, and replaces the upstream missing-value sentinel with
//! an explicit missing marker.

pub mod error;
pub mod overpass;

pub use error::{ParseError, Result};
pub use overpass::{
    parse_overpass_predictions, read_overpass_predictions, LonLat, OverpassSegment,
    MISSING_SENTINEL,
};
