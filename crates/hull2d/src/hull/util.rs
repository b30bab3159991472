use std::cmp::Ordering;

use super::types::Point;

/// Turn test for `o → a → b`: twice the signed triangle area.
///
/// Positive for a left (counterclockwise) turn, negative for a right turn,
/// zero when the three points are collinear.
#[inline]
pub fn cross(o: Point, a: Point, b: Point) -> f64 {
    (a.x - o.x) * (b.y - o.y) - (a.y - o.y) * (b.x - o.x)
}

/// Lexicographic order: x ascending, ties broken by y ascending.
///
/// Total on finite coordinates; `-0.0` and `0.0` compare equal.
#[inline]
pub fn lex_cmp(a: &Point, b: &Point) -> Ordering {
    a.x.partial_cmp(&b.x)
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal))
}

/// Twice the signed area of a closed polygon (shoelace). `0.0` below 3 vertices.
pub fn polygon_area2(poly: &[Point]) -> f64 {
    if poly.len() < 3 {
        return 0.0;
    }
    let mut s = 0.0;
    for i in 0..poly.len() {
        let p = poly[i];
        let q = poly[(i + 1) % poly.len()];
        s += p.x * q.y - p.y * q.x;
    }
    s
}

/// Is `poly` a convex polygon in counterclockwise order?
///
/// - `strict = true`: every cyclic triple turns left by more than `eps`
///   (corners-only hulls).
/// - `strict = false`: every cyclic triple turns left or is collinear within
///   `eps` (hulls that keep edge points).
///
/// Polygons with fewer than 3 vertices are trivially accepted.
pub fn is_convex_ccw(poly: &[Point], eps: f64, strict: bool) -> bool {
    let n = poly.len();
    if n < 3 {
        return true;
    }
    (0..n).all(|i| {
        let t = cross(poly[i], poly[(i + 1) % n], poly[(i + 2) % n]);
        if strict {
            t > eps
        } else {
            t >= -eps
        }
    })
}

/// Membership of `p` in the closed convex CCW polygon `poly`, with slack `eps`.
///
/// Degenerate hulls are handled as what they are: a single point (distance
/// `<= eps`) or a segment (collinear within `eps` and between the endpoints).
pub fn contains_eps(poly: &[Point], p: Point, eps: f64) -> bool {
    match poly.len() {
        0 => false,
        1 => (p - poly[0]).norm() <= eps,
        2 => on_segment_eps(poly[0], poly[1], p, eps),
        n => (0..n).all(|i| cross(poly[i], poly[(i + 1) % n], p) >= -eps),
    }
}

fn on_segment_eps(a: Point, b: Point, p: Point, eps: f64) -> bool {
    if cross(a, b, p).abs() > eps {
        return false;
    }
    let ab = b - a;
    let t = ab.dot(&(p - a));
    t >= -eps && t <= ab.norm_squared() + eps
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn cross_sign_convention() {
        let o = vector![0.0, 0.0];
        let a = vector![1.0, 0.0];
        assert!(cross(o, a, vector![1.0, 1.0]) > 0.0);
        assert!(cross(o, a, vector![1.0, -1.0]) < 0.0);
        assert_eq!(cross(o, a, vector![2.0, 0.0]), 0.0);
    }

    #[test]
    fn lex_cmp_breaks_ties_on_y() {
        let a = vector![1.0, 0.0];
        let b = vector![1.0, 2.0];
        let c = vector![0.5, 9.0];
        assert_eq!(lex_cmp(&a, &b), Ordering::Less);
        assert_eq!(lex_cmp(&c, &a), Ordering::Less);
        assert_eq!(lex_cmp(&vector![-0.0, 1.0], &vector![0.0, 1.0]), Ordering::Equal);
    }

    #[test]
    fn area_of_unit_square_both_orientations() {
        let ccw = [
            vector![0.0, 0.0],
            vector![1.0, 0.0],
            vector![1.0, 1.0],
            vector![0.0, 1.0],
        ];
        assert!((polygon_area2(&ccw) - 2.0).abs() < 1e-12);
        let cw: Vec<Point> = ccw.iter().rev().copied().collect();
        assert!((polygon_area2(&cw) + 2.0).abs() < 1e-12);
        assert_eq!(polygon_area2(&ccw[..2]), 0.0);
    }

    #[test]
    fn convexity_strict_vs_relaxed() {
        let with_edge_point = [
            vector![0.0, 0.0],
            vector![1.0, 0.0],
            vector![2.0, 0.0],
            vector![0.0, 2.0],
        ];
        assert!(!is_convex_ccw(&with_edge_point, 1e-12, true));
        assert!(is_convex_ccw(&with_edge_point, 1e-12, false));
        let clockwise = [vector![0.0, 0.0], vector![0.0, 1.0], vector![1.0, 0.0]];
        assert!(!is_convex_ccw(&clockwise, 1e-12, false));
    }

    #[test]
    fn containment_polygon_segment_point() {
        let tri = [vector![0.0, 0.0], vector![2.0, 0.0], vector![0.0, 2.0]];
        assert!(contains_eps(&tri, vector![0.5, 0.5], 0.0));
        assert!(contains_eps(&tri, vector![1.0, 1.0], 1e-12));
        assert!(!contains_eps(&tri, vector![1.5, 1.5], 1e-12));

        let seg = [vector![0.0, 0.0], vector![2.0, 2.0]];
        assert!(contains_eps(&seg, vector![1.0, 1.0], 1e-12));
        assert!(!contains_eps(&seg, vector![3.0, 3.0], 1e-12));
        assert!(!contains_eps(&seg, vector![1.0, 0.0], 1e-12));

        let pt = [vector![1.0, 1.0]];
        assert!(contains_eps(&pt, vector![1.0, 1.0], 0.0));
        assert!(!contains_eps(&pt, vector![1.0, 1.5], 1e-12));
        assert!(!contains_eps(&[], vector![0.0, 0.0], 1.0));
    }
}
