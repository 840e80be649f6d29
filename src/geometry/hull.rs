//! Convex hull via Graham's scan.

use super::point::{orientation, Point, Vertex};
use super::polygon::VertexLoop;

/// Relative tolerance for treating three points as collinear.
const COLLINEAR_EPSILON: f64 = 1e-12;

/// Monotone stand-in for the polar angle of `d`, for `d` in the upper
/// half-plane (or on the positive x axis). Ranges over [0, 2).
fn pseudo_angle(d: Point) -> f64 {
    let norm = d.x.abs() + d.y.abs();
    if norm == 0.0 {
        return 0.0;
    }
    1.0 - d.x / norm
}

/// Compute the convex hull of a loop's vertices.
///
/// The result is open and counter-clockwise, starting at the lowest vertex
/// (leftmost on ties). Hull vertices keep their provenance ids. Inputs with
/// fewer than three vertices are returned unchanged. Points within a relative
/// tolerance of a hull edge are dropped.
pub fn convex_hull(polygon: &VertexLoop) -> VertexLoop {
    let vertices = polygon.vertices();
    if vertices.len() < 3 {
        return polygon.clone();
    }

    let start = vertices
        .iter()
        .copied()
        .min_by(|a, b| {
            a.point
                .y
                .total_cmp(&b.point.y)
                .then(a.point.x.total_cmp(&b.point.x))
        })
        .unwrap_or(vertices[0]);
    let origin = start.point;

    // Sort keys are computed once so the comparison is a total order.
    let mut keyed: Vec<(f64, f64, Vertex)> = vertices
        .iter()
        .filter(|v| v.point != origin)
        .map(|&v| (pseudo_angle(v.point - origin), origin.distance(v.point), v))
        .collect();
    keyed.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.total_cmp(&b.1)));

    let scale = keyed.iter().fold(0.0f64, |m, k| m.max(k.1));
    let tolerance = COLLINEAR_EPSILON * scale * scale;

    let mut hull: Vec<Vertex> = Vec::with_capacity(keyed.len() + 1);
    hull.push(start);
    for (_, _, v) in keyed {
        while hull.len() >= 2
            && orientation(hull[hull.len() - 2].point, hull[hull.len() - 1].point, v.point)
                <= tolerance
        {
            hull.pop();
        }
        hull.push(v);
    }

    // Collinear points can survive on the closing edge back to the start.
    while hull.len() > 3 {
        let n = hull.len();
        if orientation(hull[n - 2].point, hull[n - 1].point, origin).abs() > tolerance {
            break;
        }
        if origin.distance(hull[n - 1].point) >= origin.distance(hull[n - 2].point) {
            hull.remove(n - 2);
        } else {
            hull.pop();
        }
    }

    VertexLoop::new(hull)
}
