//! Seeded planar point clouds (replay tokens).
//!
//! Purpose
//! - Small, deterministic samplers feeding hull tests, benches, and the CLI.
//!   Each cloud shape stresses a different hull path: generic position (disk,
//!   square), heavy duplication and collinearity (integer grid), and the
//!   all-collinear degenerate case (segment).
//!
//! Determinism
//! - A replay token `(seed, index)` is mixed into a single `StdRng`, so draw
//!   `index` of a run can be reproduced without replaying draws `0..index`.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::hull::Point;

/// Cloud shape.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointCloud {
    /// Uniform in the closed disk of `radius` around the origin.
    Disk { radius: f64 },
    /// Uniform in the axis-aligned square `[-half_width, half_width]²`.
    Square { half_width: f64 },
    /// Uniform on the integer lattice `{0..=side}²`; duplicates are expected.
    Grid { side: u32 },
    /// Uniform on the segment `from → to`. Collinear up to rounding of `from + t (to - from)`.
    Segment { from: Point, to: Point },
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw `count` points from `cloud`. Same token, same points.
pub fn draw_points(cloud: PointCloud, count: usize, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    (0..count).map(|_| sample(cloud, &mut rng)).collect()
}

fn sample<R: Rng>(cloud: PointCloud, rng: &mut R) -> Point {
    match cloud {
        PointCloud::Disk { radius } => {
            let r = radius.abs() * rng.gen::<f64>().sqrt();
            let th = rng.gen::<f64>() * std::f64::consts::TAU;
            Vector2::new(r * th.cos(), r * th.sin())
        }
        PointCloud::Square { half_width } => {
            let h = half_width.abs();
            Vector2::new(rng.gen_range(-h..=h), rng.gen_range(-h..=h))
        }
        PointCloud::Grid { side } => Vector2::new(
            rng.gen_range(0..=side) as f64,
            rng.gen_range(0..=side) as f64,
        ),
        PointCloud::Segment { from, to } => {
            let t = rng.gen::<f64>();
            from + (to - from) * t
        }
    }
}
