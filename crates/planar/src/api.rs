//! Curated surface for callers that only need the predicates.
//!
//! Breaking changes are allowed; prefer these names over reaching into
//! `geom2` submodules directly.

pub use crate::geom2::rand::{
    draw_segment, draw_segment_pairs, ReplayToken as SegmentReplay, SegmentCfg,
};
pub use crate::geom2::{
    do_intersect, do_intersect_cfg, is_on_segment, orientation, orientation_eps,
    orientation_exact, GeomCfg, LatticePoint, Orientation, Planar, Point2, Segment2,
};

/// Convenience wrapper: `(orientation value, class)` of `(a, b, c)` under `cfg`.
pub fn classify(a: Point2, b: Point2, c: Point2, cfg: &GeomCfg) -> (f64, Orientation) {
    let v = orientation(a, b, c);
    (v, Orientation::from_value(v, cfg.eps_collinear))
}
