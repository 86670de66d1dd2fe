//! Vertical-section ("curtain") extraction from 3-D gridded fields.
//!
//! A curtain is a 2-D array of values indexed by `[level, position]`,
//! obtained by horizontally interpolating every level of a
//! `[level, lat, lon]` field at a sequence of paired query positions,
//! typically the waypoints of a flight path.
//!
//! Three strategies are provided, selected by how regular the coordinate
//! axes are:
//! - [`interpolate_regular_spline`]: full-mesh bilinear surface per level,
//!   diagonal extraction; the precision/cost baseline.
//! - [`interpolate_regular_index`]: uniform-spacing arithmetic into index
//!   space, one bilinear sample per position.
//! - [`interpolate_irregular`]: monotonic axis lookup into index space
//!   with explicit missing-data propagation for out-of-domain positions.
//!
//! [`interpolate_curtain`] picks between the index strategies based on an
//! axis-spacing classification.

pub mod curtain;
pub mod error;
pub mod grid;
pub mod index;
pub mod section;
pub mod spline;

pub use curtain::{Curtain, MaskedCurtain};
pub use error::{CurtainError, Result};
pub use grid::{AxisSpacing, Grid3, GridAxes};
pub use index::{LookupIndexMapper, UniformIndexMapper};
pub use section::{
    interpolate_curtain, interpolate_irregular, interpolate_regular_index,
    interpolate_regular_spline,
};
pub use spline::BilinearSurface;
