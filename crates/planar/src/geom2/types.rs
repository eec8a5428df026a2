//! Basic 2D value types and tolerances.
//!
//! - `GeomCfg`: centralizes the collinearity tolerance used by the predicates.
//! - `Point2`: `f64` point, ordered lexicographically (x, then y).
//! - `Segment2`: closed segment between two points.
//!
//! Code cross-refs: `orient::{orientation, Orientation}`, `segment::do_intersect`

use std::fmt;
use std::str::FromStr;

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeomCfg {
    /// Absolute bound on `|orientation|` under which a triple counts as collinear.
    /// `0.0` means the exact sign of the f64 value decides.
    pub eps_collinear: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self { eps_collinear: 0.0 }
    }
}

impl GeomCfg {
    #[inline]
    pub fn with_eps(eps_collinear: f64) -> Self {
        Self {
            eps_collinear: eps_collinear.abs(),
        }
    }
}

/// Point in the plane. Value type; never mutated after construction.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
    #[inline]
    pub fn to_vector(self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }
}

impl From<Vector2<f64>> for Point2 {
    #[inline]
    fn from(v: Vector2<f64>) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Point2> for Vector2<f64> {
    #[inline]
    fn from(p: Point2) -> Self {
        p.to_vector()
    }
}

impl From<(f64, f64)> for Point2 {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ParsePointError {
    #[error("expected `x,y`, got {0:?}")]
    MissingComma(String),
    #[error("invalid coordinate {0:?}")]
    BadCoordinate(String),
}

impl FromStr for Point2 {
    type Err = ParsePointError;

    /// Parses `"x,y"`; whitespace around either coordinate is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (xs, ys) = s
            .split_once(',')
            .ok_or_else(|| ParsePointError::MissingComma(s.to_string()))?;
        let coord = |t: &str| {
            t.trim()
                .parse::<f64>()
                .map_err(|_| ParsePointError::BadCoordinate(t.trim().to_string()))
        };
        Ok(Point2::new(coord(xs)?, coord(ys)?))
    }
}

/// Closed segment `[a, b]`. Zero-length segments are allowed.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment2<P = Point2> {
    pub a: P,
    pub b: P,
}

impl<P> Segment2<P> {
    #[inline]
    pub const fn new(a: P, b: P) -> Self {
        Self { a, b }
    }
}

impl<P: Copy> Segment2<P> {
    /// Same segment with endpoints swapped.
    #[inline]
    pub fn reversed(&self) -> Self {
        Self::new(self.b, self.a)
    }
}
