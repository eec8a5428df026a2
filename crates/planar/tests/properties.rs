//! Property checks for the orientation and intersection predicates.
//! Coordinates are small integers stored as f64, so every product is exact and
//! the float predicates can be compared against exact references.

use planar::geom2::rand::{draw_segment_pairs, SegmentCfg};
use planar::geom2::{
    do_intersect, orientation, orientation_exact, LatticePoint, Orientation, Point2,
};
use proptest::prelude::*;

fn point() -> impl Strategy<Value = Point2> {
    (-1000i32..=1000, -1000i32..=1000).prop_map(|(x, y)| Point2::new(x as f64, y as f64))
}

/// Twice the signed triangle area, measured from `a` (independent of `orientation`).
fn twice_area(a: Point2, b: Point2, c: Point2) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

fn lattice(p: Point2) -> LatticePoint {
    LatticePoint::new(p.x as i32, p.y as i32)
}

proptest! {
    #[test]
    fn zero_iff_collinear(a in point(), b in point(), c in point()) {
        prop_assert_eq!(orientation(a, b, c) == 0.0, twice_area(a, b, c) == 0.0);
    }

    #[test]
    fn reversed_triple_has_opposite_sign(a in point(), b in point(), c in point()) {
        let o = Orientation::of(a, b, c);
        prop_assert_eq!(Orientation::of(c, b, a), o.reversed());
        prop_assert_eq!(orientation(c, b, a), -orientation(a, b, c));
    }

    #[test]
    fn intersection_is_symmetric(a in point(), b in point(), c in point(), d in point()) {
        prop_assert_eq!(do_intersect(a, b, c, d), do_intersect(c, d, a, b));
        prop_assert_eq!(do_intersect(a, b, c, d), do_intersect(b, a, d, c));
    }

    #[test]
    fn lattice_agrees_with_float(a in point(), b in point(), c in point(), d in point()) {
        prop_assert_eq!(orientation_exact(lattice(a), lattice(b), lattice(c)) as f64, orientation(a, b, c));
        prop_assert_eq!(
            do_intersect(lattice(a), lattice(b), lattice(c), lattice(d)),
            do_intersect(a, b, c, d)
        );
    }
}

#[test]
fn shared_endpoint_always_intersects() {
    let cfg = SegmentCfg::default();
    for (s, t) in draw_segment_pairs(cfg, 5, 200) {
        assert!(do_intersect(s.a, s.b, s.b, t.b));
        assert!(do_intersect(s.a, s.b, t.a, s.a));
    }
}
