//! Integer-coordinate points with exact predicates.
//!
//! Coordinates are `i32`; differences and products are taken in `i128`, so the
//! orientation value is exact for every input (no truncation, no overflow).

use std::fmt;

use super::orient::{Orientation, Planar};
use super::types::{GeomCfg, Point2};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LatticePoint {
    pub x: i32,
    pub y: i32,
}

impl LatticePoint {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<LatticePoint> for Point2 {
    #[inline]
    fn from(p: LatticePoint) -> Self {
        Point2::new(p.x as f64, p.y as f64)
    }
}

impl fmt::Display for LatticePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// Exact orientation value of `(a, b, c)`, same sign convention as `orient::orientation`.
#[inline]
pub fn orientation_exact(a: LatticePoint, b: LatticePoint, c: LatticePoint) -> i128 {
    let (ux, uy) = (b.x as i128 - a.x as i128, b.y as i128 - a.y as i128);
    let (vx, vy) = (c.x as i128 - b.x as i128, c.y as i128 - b.y as i128);
    uy * vx - ux * vy
}

impl Planar for LatticePoint {
    #[inline]
    fn orient(a: Self, b: Self, c: Self, _cfg: &GeomCfg) -> Orientation {
        match orientation_exact(a, b, c).signum() {
            0 => Orientation::Collinear,
            1 => Orientation::Clockwise,
            _ => Orientation::Counterclockwise,
        }
    }

    #[inline]
    fn in_box(a: Self, b: Self, c: Self) -> bool {
        (a.x.min(c.x)..=a.x.max(c.x)).contains(&b.x) && (a.y.min(c.y)..=a.y.max(c.y)).contains(&b.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom2::{do_intersect, orientation};

    fn q(x: i32, y: i32) -> LatticePoint {
        LatticePoint::new(x, y)
    }

    #[test]
    fn matches_float_on_small_inputs() {
        let pts = [q(0, 0), q(3, 1), q(-2, 5), q(4, 4), q(1, 2), q(2, 4)];
        for &a in &pts {
            for &b in &pts {
                for &c in &pts {
                    let exact = orientation_exact(a, b, c);
                    let float = orientation(a.into(), b.into(), c.into());
                    assert_eq!(exact as f64, float);
                }
            }
        }
    }

    #[test]
    fn extreme_coordinates_do_not_overflow() {
        let a = q(i32::MIN, i32::MIN);
        let b = q(i32::MAX, i32::MAX);
        assert_eq!(orientation_exact(a, b, q(0, 0)), 0);
        let far = q(i32::MIN, i32::MAX);
        assert_eq!(orientation_exact(a, b, far), -orientation_exact(far, b, a));
        assert!(orientation_exact(a, b, far) != 0);
        assert!(do_intersect(a, b, q(-5, 5), q(5, -5)));
        assert!(!do_intersect(a, q(i32::MIN, 0), q(1, 0), q(i32::MAX, 0)));
    }

    #[test]
    fn collinear_overlap_exact() {
        assert!(do_intersect(q(0, 0), q(4, 0), q(2, 0), q(6, 0)));
        assert!(!do_intersect(q(0, 0), q(1, 0), q(2, 0), q(3, 0)));
    }
}
