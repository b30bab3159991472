//! Convex hull of a finite planar point set.
//!
//! Purpose
//! - One canonical monotone-chain implementation with two boundary modes:
//!   corners only, or corners plus points lying on hull edges.
//! - Numerically explicit: every turn test and the collinearity area check use
//!   the caller's `eps`.
//!
//! Degenerate policy
//! - 0 or 1 unique points are their own hull.
//! - All-collinear input yields the two extreme points (corners only) or every
//!   unique point in sorted order (edge points kept).
//!
//! Code cross-refs: `chain::convex_hull`, `types::{HullCfg, HullError}`,
//! `util::{cross, polygon_area2, contains_eps}`

mod chain;
mod types;
mod util;

pub use chain::{convex_hull, convex_hull_default};
pub use types::{HullCfg, HullError, IntoPoint, Point};
pub use util::{contains_eps, cross, is_convex_ccw, lex_cmp, polygon_area2};
