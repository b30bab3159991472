//! Planar convex hulls (Andrew's monotone chain).
//!
//! The crate is a single computational primitive: [`convex_hull`] maps a finite
//! point set to its counterclockwise hull boundary. Everything else here
//! (turn predicates, containment checks, seeded point clouds) exists to make
//! that primitive testable and benchmarkable.
//!
//! API Policy
//! - Points are `nalgebra::Vector2<f64>` throughout; inputs may be any numeric
//!   pair type implementing [`IntoPoint`].
//! - Tolerances are explicit (`HullCfg::eps`), never hidden constants.

pub mod hull;
pub mod rand;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use hull::{
    contains_eps, convex_hull, convex_hull_default, cross, is_convex_ccw, lex_cmp,
    polygon_area2, HullCfg, HullError, IntoPoint, Point,
};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::hull::{
        contains_eps, convex_hull, convex_hull_default, cross, is_convex_ccw, polygon_area2,
        HullCfg, HullError, IntoPoint, Point,
    };
    pub use crate::rand::{draw_points, PointCloud, ReplayToken};
    pub use nalgebra::Vector2 as Vec2;
}
