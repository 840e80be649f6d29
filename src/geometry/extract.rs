//! Closed polygon extraction from a free-form stroke.
//!
//! The first self-intersection of the stroke closes a loop. Pairs are scanned
//! with the left segment ascending and, for each, the right segment ascending,
//! so the chosen loop is the one whose crossing appears earliest in the stroke.

use serde::{Deserialize, Serialize};

use super::point::{Point, Vertex};
use super::polygon::VertexLoop;

/// Configuration for polygon extraction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractConfig {
    /// Minimum unsigned area for an accepted loop.
    pub min_area: f64,
    /// Treat a stroke without self-intersection as an already-closed loop.
    pub auto_close: bool,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            min_area: 100.0,
            auto_close: false,
        }
    }
}

/// Proper intersection of segments `p1..p2` and `q1..q2`.
///
/// Touching endpoints and parallel or collinear overlaps do not count.
pub fn segment_intersection(p1: Point, p2: Point, q1: Point, q2: Point) -> Option<Point> {
    let r = p2 - p1;
    let s = q2 - q1;
    let denom = r.cross(s);
    if denom == 0.0 {
        return None;
    }
    let qp = q1 - p1;
    let t = qp.cross(s) / denom;
    let u = qp.cross(r) / denom;
    if t > 0.0 && t < 1.0 && u > 0.0 && u < 1.0 {
        Some(p1 + r * t)
    } else {
        None
    }
}

/// Extract the first self-intersecting loop of `stroke`.
///
/// The loop starts with the intersection point, followed by stroke points
/// `i + 1 ..= j` where segments `i` and `j` cross. Vertex ids are positions
/// in the returned loop. Returns `None` when the stroke forms no acceptable
/// loop.
///
/// With `auto_close` set, a stroke without a crossing is returned as the loop
/// itself, ids equal to stroke indices. It must still cover `min_area`, so a
/// closed straight line is rejected rather than handed on as a shape.
pub fn extract_polygon(stroke: &[Point], config: &ExtractConfig) -> Option<VertexLoop> {
    if stroke.len() < 3 {
        return None;
    }

    let segments = stroke.len() - 1;
    for i in 0..segments {
        for j in (i + 2)..segments {
            let Some(crossing) =
                segment_intersection(stroke[i], stroke[i + 1], stroke[j], stroke[j + 1])
            else {
                continue;
            };

            let mut vertices = Vec::with_capacity(j - i + 1);
            vertices.push(Vertex::new(crossing, 0));
            vertices.extend(
                stroke[i + 1..=j]
                    .iter()
                    .enumerate()
                    .map(|(k, &p)| Vertex::new(p, (k + 1) as u32)),
            );
            let candidate = VertexLoop::new(vertices);

            if candidate.len() >= 3 && candidate.area() >= config.min_area {
                log::debug!(
                    "Stroke closes at segments {} and {}: {} vertices, area {:.1}",
                    i,
                    j,
                    candidate.len(),
                    candidate.area()
                );
                return Some(candidate);
            }
        }
    }

    if config.auto_close {
        let candidate = VertexLoop::from_points(stroke);
        if candidate.area() >= config.min_area {
            log::debug!("No self-intersection, auto-closing {} points", stroke.len());
            return Some(candidate);
        }
    }

    None
}
