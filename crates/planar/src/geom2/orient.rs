//! Orientation of an ordered point triple.
//!
//! Sign convention (y axis up): the value
//! `(b.y − a.y)(c.x − b.x) − (b.x − a.x)(c.y − b.y)` is positive for a clockwise
//! turn a→b→c, negative for counterclockwise, zero for collinear points.
//! It is the perp product of the two legs `b − a` and `c − b`, computed in full
//! f64 precision. Reversing the triple negates it exactly.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::types::{GeomCfg, Point2};

/// Rotational sense of `(a, b, c)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Clockwise,
    Counterclockwise,
    Collinear,
}

impl Orientation {
    /// Classify with the exact sign (`GeomCfg::default()`).
    #[inline]
    pub fn of(a: Point2, b: Point2, c: Point2) -> Self {
        Self::of_eps(a, b, c, &GeomCfg::default())
    }

    #[inline]
    pub fn of_eps(a: Point2, b: Point2, c: Point2, cfg: &GeomCfg) -> Self {
        Self::from_value(orientation(a, b, c), cfg.eps_collinear)
    }

    /// Map a raw orientation value to its class; `|v| <= eps` is collinear.
    /// An exact zero is collinear whatever `eps` holds (negative or NaN included).
    #[inline]
    pub fn from_value(v: f64, eps: f64) -> Self {
        debug_assert!(!v.is_nan(), "orientation of non-finite points");
        if v == 0.0 || v.abs() <= eps {
            Orientation::Collinear
        } else if v > 0.0 {
            Orientation::Clockwise
        } else {
            Orientation::Counterclockwise
        }
    }

    /// Orientation of the reversed triple.
    #[inline]
    pub fn reversed(self) -> Self {
        match self {
            Orientation::Clockwise => Orientation::Counterclockwise,
            Orientation::Counterclockwise => Orientation::Clockwise,
            Orientation::Collinear => Orientation::Collinear,
        }
    }

    #[inline]
    pub fn is_collinear(self) -> bool {
        self == Orientation::Collinear
    }

    pub fn label(self) -> &'static str {
        match self {
            Orientation::Clockwise => "clockwise",
            Orientation::Counterclockwise => "counterclockwise",
            Orientation::Collinear => "collinear",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Signed orientation value of `(a, b, c)`; see the module docs for the sign convention.
#[inline]
pub fn orientation(a: Point2, b: Point2, c: Point2) -> f64 {
    let u = b.to_vector() - a.to_vector();
    let v = c.to_vector() - b.to_vector();
    // v.x*u.y - v.y*u.x == u.y*v.x - u.x*v.y
    v.perp(&u)
}

/// `orientation` classified under `cfg`.
#[inline]
pub fn orientation_eps(a: Point2, b: Point2, c: Point2, cfg: &GeomCfg) -> Orientation {
    Orientation::of_eps(a, b, c, cfg)
}

/// Point types the segment predicates are generic over.
pub trait Planar: Copy {
    /// Orientation class of `(a, b, c)`. Exact representations may ignore `cfg`.
    fn orient(a: Self, b: Self, c: Self, cfg: &GeomCfg) -> Orientation;

    /// Whether `b` lies in the closed axis-aligned box spanned by `a` and `c`.
    fn in_box(a: Self, b: Self, c: Self) -> bool;
}

impl Planar for Point2 {
    #[inline]
    fn orient(a: Self, b: Self, c: Self, cfg: &GeomCfg) -> Orientation {
        Orientation::of_eps(a, b, c, cfg)
    }

    #[inline]
    fn in_box(a: Self, b: Self, c: Self) -> bool {
        b.x <= a.x.max(c.x) && b.x >= a.x.min(c.x) && b.y <= a.y.max(c.y) && b.y >= a.y.min(c.y)
    }
}
