//! Hull configuration, errors, and point coercion.
//!
//! - `HullCfg`: boundary mode plus the turn-test tolerance.
//! - `HullError`: the only rejections (non-finite input, invalid tolerance).
//! - `IntoPoint`: coerces numeric pairs (integers or floats) to `Point`.

use std::fmt;

use nalgebra::{Point2, Vector2};

/// A planar point. Equality is coordinate-wise; ordering is given by `lex_cmp`.
pub type Point = Vector2<f64>;

/// Hull configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HullCfg {
    /// Keep points lying on hull edges (not only corners).
    pub include_collinear: bool,
    /// Turns with `|cross| <= eps` count as collinear. Must be `>= 0`.
    pub eps: f64,
}

impl Default for HullCfg {
    fn default() -> Self {
        Self {
            include_collinear: false,
            eps: 1e-12,
        }
    }
}

impl HullCfg {
    /// Corners only, default tolerance.
    #[inline]
    pub fn corners() -> Self {
        Self::default()
    }

    /// Corners plus edge points, default tolerance.
    #[inline]
    pub fn with_edges() -> Self {
        Self {
            include_collinear: true,
            ..Self::default()
        }
    }

    /// Same mode, tolerance replaced by `eps`.
    #[inline]
    pub fn eps(self, eps: f64) -> Self {
        Self { eps, ..self }
    }
}

/// Rejected inputs. Every finite point set with a valid `eps` has a hull.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HullError {
    /// Input point `index` (in caller order) has a NaN or infinite coordinate.
    NonFinite { index: usize, x: f64, y: f64 },
    /// Tolerance is negative or NaN.
    InvalidEps(f64),
}

impl fmt::Display for HullError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HullError::NonFinite { index, x, y } => write!(
                f,
                "point {} has a non-finite coordinate ({}, {})",
                index, x, y
            ),
            HullError::InvalidEps(eps) => {
                write!(f, "tolerance must be non-negative, got {}", eps)
            }
        }
    }
}

impl std::error::Error for HullError {}

/// Conversion of caller coordinates into a floating-point `Point`.
pub trait IntoPoint {
    fn into_point(self) -> Point;
}

impl IntoPoint for Vector2<f64> {
    #[inline]
    fn into_point(self) -> Point {
        self
    }
}

impl IntoPoint for &Vector2<f64> {
    #[inline]
    fn into_point(self) -> Point {
        *self
    }
}

impl IntoPoint for Point2<f64> {
    #[inline]
    fn into_point(self) -> Point {
        self.coords
    }
}

impl IntoPoint for &Point2<f64> {
    #[inline]
    fn into_point(self) -> Point {
        self.coords
    }
}

macro_rules! impl_into_point_pairs {
    ($($t:ty),* $(,)?) => {
        $(
            impl IntoPoint for ($t, $t) {
                #[inline]
                fn into_point(self) -> Point {
                    Vector2::new(self.0 as f64, self.1 as f64)
                }
            }
            impl IntoPoint for &($t, $t) {
                #[inline]
                fn into_point(self) -> Point {
                    Vector2::new(self.0 as f64, self.1 as f64)
                }
            }
            impl IntoPoint for [$t; 2] {
                #[inline]
                fn into_point(self) -> Point {
                    Vector2::new(self[0] as f64, self[1] as f64)
                }
            }
            impl IntoPoint for &[$t; 2] {
                #[inline]
                fn into_point(self) -> Point {
                    Vector2::new(self[0] as f64, self[1] as f64)
                }
            }
        )*
    };
}

impl_into_point_pairs!(f64, f32, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
