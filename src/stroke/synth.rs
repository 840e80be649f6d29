//! Synthetic stroke generation for testing.
//!
//! Generates hand-drawing stand-ins: closed polygons drawn as a lasso (the
//! stroke's tail crosses its head exactly once), bowties, straight lines and
//! seeded jitter for unit tests, integration tests and benches.

use std::f64::consts::PI;

use crate::geometry::Point;

/// Corners of a regular polygon centered on the origin, counter-clockwise.
///
/// # Arguments
/// * `sides` - Number of corners (at least 3 for a useful shape)
/// * `radius` - Circumradius
/// * `rotation` - Angle of the first corner in radians
pub fn regular_polygon(sides: usize, radius: f64, rotation: f64) -> Vec<Point> {
    (0..sides)
        .map(|i| {
            let a = rotation + 2.0 * PI * i as f64 / sides as f64;
            Point::new(radius * a.cos(), radius * a.sin())
        })
        .collect()
}

/// Trace `corners` as a lasso stroke.
///
/// Each edge is sampled `points_per_edge` times. The stroke starts on the
/// backward extension of the first edge and ends on the forward extension of
/// the last edge, both `overshoot` edge-lengths past corner 0, so the first
/// and last segments cross once, at corner 0.
pub fn lasso_stroke(corners: &[Point], points_per_edge: usize, overshoot: f64) -> Vec<Point> {
    let n = corners.len();
    if n < 2 {
        return corners.to_vec();
    }
    let per_edge = points_per_edge.max(1);
    let first = corners[0];
    let second = corners[1];
    let last = corners[n - 1];

    let mut stroke = Vec::with_capacity(n * per_edge + 2);
    stroke.push(first + (first - second) * overshoot);
    for i in 0..n {
        let a = corners[i];
        let b = corners[(i + 1) % n];
        let start = if i == 0 { 1 } else { 0 };
        for k in start..per_edge {
            stroke.push(a.lerp(b, k as f64 / per_edge as f64));
        }
    }
    stroke.push(first + (first - last) * overshoot);
    stroke
}

/// A regular polygon drawn as a lasso stroke.
pub fn generate_polygon_stroke(
    sides: usize,
    radius: f64,
    points_per_edge: usize,
    overshoot: f64,
) -> Vec<Point> {
    let corners = regular_polygon(sides, radius, PI / 2.0);
    lasso_stroke(&corners, points_per_edge, overshoot)
}

/// A circle drawn as a lasso stroke through `samples` points.
pub fn generate_circle_stroke(radius: f64, samples: usize, overshoot: f64) -> Vec<Point> {
    let corners = regular_polygon(samples.max(3), radius, 0.0);
    lasso_stroke(&corners, 1, overshoot)
}

/// An axis-aligned square of side `size` drawn as a lasso stroke.
pub fn generate_square_stroke(size: f64, points_per_edge: usize, overshoot: f64) -> Vec<Point> {
    generate_distorted_square_stroke(size, 0.0, points_per_edge, overshoot)
}

/// A square whose top-left corner is pulled toward the top-right one.
///
/// `distortion` 0.0 gives a square; values toward 1.0 approach a right
/// triangle.
pub fn generate_distorted_square_stroke(
    size: f64,
    distortion: f64,
    points_per_edge: usize,
    overshoot: f64,
) -> Vec<Point> {
    let corners = [
        Point::new(0.0, 0.0),
        Point::new(size, 0.0),
        Point::new(size, size),
        Point::new(size * distortion.clamp(0.0, 0.99), size),
    ];
    lasso_stroke(&corners, points_per_edge, overshoot)
}

/// A five-point stroke crossing itself once.
///
/// Segments 0 and 3 cross at `(size / 2, 0)`, closing a rectangle of
/// `size / 2` by `size`.
pub fn generate_bowtie_stroke(size: f64) -> Vec<Point> {
    vec![
        Point::new(0.0, 0.0),
        Point::new(size, 0.0),
        Point::new(size, size),
        Point::new(size / 2.0, size),
        Point::new(size / 2.0, -size / 2.0),
    ]
}

/// A straight stroke of evenly spaced collinear points.
pub fn generate_line_stroke(from: Point, to: Point, samples: usize) -> Vec<Point> {
    let steps = samples.max(2) - 1;
    (0..=steps)
        .map(|i| from.lerp(to, i as f64 / steps as f64))
        .collect()
}

/// Displace every point by up to `amplitude` in x and y.
///
/// Uses a simple linear congruential generator for reproducibility.
pub fn jitter(points: &[Point], amplitude: f64, seed: u64) -> Vec<Point> {
    let mut state = seed;
    let a: u64 = 6364136223846793005;
    let c: u64 = 1442695040888963407;
    let mut next = move || {
        state = state.wrapping_mul(a).wrapping_add(c);
        (state as f64 / u64::MAX as f64) * 2.0 - 1.0
    };

    points
        .iter()
        .map(|&p| {
            let dx = next() * amplitude;
            let dy = next() * amplitude;
            p + Point::new(dx, dy)
        })
        .collect()
}
