//! Planar orientation and segment-intersection predicates.
//!
//! API Policy
//! - Predicates are pure functions over `Copy` values; no state is kept
//!   between calls and every function is safe to call from any thread.
//! - Sign convention: positive orientation is clockwise (see `geom2::orientation`).

pub mod api;
pub mod geom2;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom2::{GeomCfg, Orientation, Point2, Segment2};
pub use nalgebra::Vector2 as Vec2;

/// Common geometry exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::rand::{draw_segment, draw_segment_pairs, ReplayToken, SegmentCfg};
    pub use crate::geom2::{
        do_intersect, do_intersect_cfg, is_on_segment, orientation, orientation_eps, GeomCfg,
        LatticePoint, Orientation, Planar, Point2, Segment2,
    };
}
