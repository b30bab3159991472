//! Andrew's monotone chain.
//!
//! Sort once, then build the lower chain left→right and the upper chain
//! right→left with the same stack rule; each point is pushed and popped at
//! most once per chain, so the sort dominates (O(n log n)).

use super::types::{HullCfg, HullError, IntoPoint, Point};
use super::util::{cross, lex_cmp, polygon_area2};

/// Convex hull in counterclockwise order, without a repeated closing point.
///
/// The boundary starts at the lexicographically smallest point (x, then y).
/// With `cfg.include_collinear = false` only corners are returned; otherwise
/// points lying on hull edges (within `cfg.eps`) are kept in boundary order.
/// Interior points never appear. Duplicates are collapsed up front.
///
/// Degenerate inputs:
/// - 0 or 1 unique points: returned as-is.
/// - All points collinear: the two extreme points (corners only), or every
///   unique point sorted by (x, y) (edge points kept).
///
/// Errors only on non-finite coordinates or a negative/NaN `eps`. An infinite
/// `eps` is accepted: every turn counts as collinear.
pub fn convex_hull<I>(points: I, cfg: HullCfg) -> Result<Vec<Point>, HullError>
where
    I: IntoIterator,
    I::Item: IntoPoint,
{
    if !(cfg.eps >= 0.0) {
        return Err(HullError::InvalidEps(cfg.eps));
    }
    let uniq = normalize(points)?;
    if uniq.len() <= 1 {
        return Ok(uniq);
    }
    let mut lower = half_chain(uniq.iter(), uniq.len(), cfg);
    let mut upper = half_chain(uniq.iter().rev(), uniq.len(), cfg);
    // Each chain ends where the other starts.
    lower.pop();
    upper.pop();
    let mut hull = lower;
    hull.extend(upper);
    Ok(finish(hull, uniq, cfg))
}

/// `convex_hull` with `HullCfg::default()` (corners only, `eps = 1e-12`).
pub fn convex_hull_default<I>(points: I) -> Result<Vec<Point>, HullError>
where
    I: IntoIterator,
    I::Item: IntoPoint,
{
    convex_hull(points, HullCfg::default())
}

/// Coerce, validate, sort by (x, y), and drop exact duplicates.
fn normalize<I>(points: I) -> Result<Vec<Point>, HullError>
where
    I: IntoIterator,
    I::Item: IntoPoint,
{
    let iter = points.into_iter();
    let mut pts: Vec<Point> = Vec::with_capacity(iter.size_hint().0);
    for (index, p) in iter.enumerate() {
        let p = p.into_point();
        if !(p.x.is_finite() && p.y.is_finite()) {
            return Err(HullError::NonFinite {
                index,
                x: p.x,
                y: p.y,
            });
        }
        pts.push(p);
    }
    pts.sort_by(lex_cmp);
    pts.dedup();
    Ok(pts)
}

/// One monotone chain over `pts` (already in scan order).
fn half_chain<'a>(pts: impl Iterator<Item = &'a Point>, cap: usize, cfg: HullCfg) -> Vec<Point> {
    let mut chain: Vec<Point> = Vec::with_capacity(cap);
    for &p in pts {
        while chain.len() >= 2 && pops(cross(chain[chain.len() - 2], chain[chain.len() - 1], p), cfg)
        {
            chain.pop();
        }
        chain.push(p);
    }
    chain
}

/// Stack rule: drop the middle point on a right turn, and also on a
/// collinear turn unless edge points are kept.
#[inline]
fn pops(turn: f64, cfg: HullCfg) -> bool {
    if cfg.include_collinear {
        turn < -cfg.eps
    } else {
        turn <= cfg.eps
    }
}

/// Degenerate-case policy applied to the stitched candidate `hull`.
///
/// `uniq` is the sorted, deduplicated input with at least two points.
pub(super) fn finish(hull: Vec<Point>, uniq: Vec<Point>, cfg: HullCfg) -> Vec<Point> {
    if cfg.include_collinear && polygon_area2(&hull).abs() <= cfg.eps {
        // Zero area: the boundary is a segment; report every point on it.
        return uniq;
    }
    if hull.is_empty() {
        if cfg.include_collinear {
            return uniq;
        }
        return match (uniq.first(), uniq.last()) {
            (Some(a), Some(b)) if a != b => vec![*a, *b],
            (Some(a), _) => vec![*a],
            _ => Vec::new(),
        };
    }
    hull
}
