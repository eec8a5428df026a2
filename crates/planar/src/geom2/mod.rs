//! 2D orientation and closed-segment intersection.
//!
//! Purpose
//! - Classify the turn of an ordered point triple (`orientation`, `Orientation`).
//! - Decide whether two closed segments share a point (`do_intersect`).
//! - Keep the arithmetic explicit: full-precision f64 with an opt-in
//!   collinearity tolerance (`GeomCfg`), or exact `LatticePoint` coordinates.
//!
//! Code cross-refs: `Point2`, `Segment2`, `GeomCfg`, `Planar`, `LatticePoint`

pub mod lattice;
mod orient;
pub mod rand;
mod segment;
mod types;

pub use lattice::{orientation_exact, LatticePoint};
pub use orient::{orientation, orientation_eps, Orientation, Planar};
pub use segment::{do_intersect, do_intersect_cfg, is_on_segment};
pub use types::{GeomCfg, ParsePointError, Point2, Segment2};
