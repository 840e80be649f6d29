//! Tip vertex selection.
//!
//! Two interchangeable heuristics share one result type, so callers can
//! switch strategy without touching anything downstream.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::geometry::{distance_to_segment, Point, VertexLoop};

/// The distinguished vertex of a simplified polygon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tip {
    /// Position of the tip in the simplified polygon.
    pub index: usize,
    /// Provenance id of the tip vertex.
    pub id: u32,
    pub point: Point,
    /// Unsigned interior angle at the tip, in [0, PI].
    pub angle: f64,
    /// Direction from the tip toward its predecessor, in radians.
    pub direction: f64,
}

/// Heuristic used to pick the tip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TipStrategy {
    /// Vertex with the smallest interior angle.
    #[default]
    SmallestAngle,
    /// Vertex farthest from the edge closest to a reference point.
    ClosestEdge,
}

impl TipStrategy {
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "smallest-angle" | "smallestangle" | "angle" => Some(Self::SmallestAngle),
            "closest-edge" | "closestedge" | "edge" | "opposite" => Some(Self::ClosestEdge),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::SmallestAngle => "smallest-angle",
            Self::ClosestEdge => "closest-edge",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::SmallestAngle => "Sharpest corner of the simplified shape",
            Self::ClosestEdge => "Vertex opposite the edge nearest the stroke start",
        }
    }

    pub fn all() -> &'static [Self] {
        &[Self::SmallestAngle, Self::ClosestEdge]
    }

    /// Select a tip on `polygon` (open, at least three vertices).
    ///
    /// `reference` is only consulted by [`TipStrategy::ClosestEdge`].
    pub fn select(&self, polygon: &VertexLoop, reference: Point) -> Option<Tip> {
        match self {
            Self::SmallestAngle => smallest_angle_tip(polygon),
            Self::ClosestEdge => closest_edge_tip(polygon, reference),
        }
    }
}

/// Unsigned angle at `p` between the rays toward `prev` and `next`.
pub fn interior_angle(prev: Point, p: Point, next: Point) -> f64 {
    let diff = ((prev - p).angle() - (next - p).angle()).abs();
    if diff > PI {
        2.0 * PI - diff
    } else {
        diff
    }
}

fn tip_at(polygon: &VertexLoop, index: usize) -> Tip {
    let vertices = polygon.vertices();
    let n = vertices.len();
    let prev = vertices[(index + n - 1) % n].point;
    let next = vertices[(index + 1) % n].point;
    let v = vertices[index];
    Tip {
        index,
        id: v.id,
        point: v.point,
        angle: interior_angle(prev, v.point, next),
        direction: (prev - v.point).angle(),
    }
}

/// Tip at the vertex with the smallest interior angle.
pub fn smallest_angle_tip(polygon: &VertexLoop) -> Option<Tip> {
    if polygon.len() < 3 {
        return None;
    }
    (0..polygon.len())
        .map(|i| tip_at(polygon, i))
        .min_by(|a, b| a.angle.total_cmp(&b.angle))
}

/// Tip at the vertex farthest from the edge nearest `reference`.
///
/// For a triangle this is the vertex opposite the closest edge.
pub fn closest_edge_tip(polygon: &VertexLoop, reference: Point) -> Option<Tip> {
    let vertices = polygon.vertices();
    let n = vertices.len();
    if n < 3 {
        return None;
    }

    let edge = (0..n).min_by(|&a, &b| {
        let da = distance_to_segment(reference, vertices[a].point, vertices[(a + 1) % n].point);
        let db = distance_to_segment(reference, vertices[b].point, vertices[(b + 1) % n].point);
        da.total_cmp(&db)
    })?;
    let start = vertices[edge].point;
    let end = vertices[(edge + 1) % n].point;

    let index = (0..n)
        .filter(|&i| i != edge && i != (edge + 1) % n)
        .max_by(|&a, &b| {
            let da = distance_to_segment(vertices[a].point, start, end);
            let db = distance_to_segment(vertices[b].point, start, end);
            da.total_cmp(&db)
        })?;

    Some(tip_at(polygon, index))
}
