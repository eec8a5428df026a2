//! Closed-segment predicates.
//!
//! - `is_on_segment`: bounding-box test, meaningful only for collinear inputs.
//! - `do_intersect`: straddle test on the four endpoint orientations, with the
//!   collinear cases resolved by `is_on_segment`.
//!
//! Both are generic over `Planar`, so they run on `Point2` (tolerance-aware)
//! and on `LatticePoint` (exact).

use super::orient::{Orientation, Planar};
use super::types::{GeomCfg, Segment2};

/// Whether `b` lies in the closed bounding box of `a` and `c`.
///
/// Pre: `a`, `b`, `c` are collinear (not checked). Under that precondition this
/// is "b lies on the segment [a, c]".
#[inline]
pub fn is_on_segment<P: Planar>(a: P, b: P, c: P) -> bool {
    P::in_box(a, b, c)
}

/// Whether closed segments `[a, b]` and `[c, d]` share a point, with exact signs.
#[inline]
pub fn do_intersect<P: Planar>(a: P, b: P, c: P, d: P) -> bool {
    do_intersect_cfg(a, b, c, d, &GeomCfg::default())
}

/// `do_intersect` with orientations classified under `cfg`.
pub fn do_intersect_cfg<P: Planar>(a: P, b: P, c: P, d: P, cfg: &GeomCfg) -> bool {
    let o1 = P::orient(a, b, c, cfg);
    let o2 = P::orient(a, b, d, cfg);
    let o3 = P::orient(c, d, a, cfg);
    let o4 = P::orient(c, d, b, cfg);

    // Each segment's endpoints lie on different sides of the other's line.
    if o1 != o2 && o3 != o4 {
        return true;
    }

    // An endpoint collinear with the other segment and inside its box.
    (o1 == Orientation::Collinear && is_on_segment(a, c, b))
        || (o2 == Orientation::Collinear && is_on_segment(a, d, b))
        || (o3 == Orientation::Collinear && is_on_segment(c, a, d))
        || (o4 == Orientation::Collinear && is_on_segment(c, b, d))
}

impl<P: Planar> Segment2<P> {
    #[inline]
    pub fn intersects(&self, other: &Segment2<P>) -> bool {
        do_intersect(self.a, self.b, other.a, other.b)
    }

    #[inline]
    pub fn intersects_cfg(&self, other: &Segment2<P>, cfg: &GeomCfg) -> bool {
        do_intersect_cfg(self.a, self.b, other.a, other.b, cfg)
    }

    /// Whether `p` lies on this closed segment (collinearity checked under `cfg`).
    pub fn contains_cfg(&self, p: P, cfg: &GeomCfg) -> bool {
        P::orient(self.a, self.b, p, cfg).is_collinear() && is_on_segment(self.a, p, self.b)
    }
}
