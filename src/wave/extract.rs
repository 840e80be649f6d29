//! Deviation wave extraction.
//!
//! Walks the simplified polygon edge by edge and projects the matching run
//! of the detailed contour onto each edge. The signed perpendicular distance,
//! parameterized by arc length along the simplified perimeter, is the wave.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::geometry::{Point, VertexLoop};

/// Errors raised when contour and simplified polygon disagree.
#[derive(Debug, thiserror::Error)]
pub enum WaveError {
    #[error("Simplified vertex {id} has no counterpart in the detailed contour")]
    VertexNotFound { id: u32 },
}

/// One contour point projected onto the simplified polygon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaveSample {
    /// Cumulative arc length along the simplified perimeter.
    pub arc_length: f64,
    /// Signed (then cubed) perpendicular deviation from the edge.
    pub amplitude: f64,
    /// Contour point.
    pub point: Point,
    /// Its projection onto the edge.
    pub projected: Point,
}

/// Deviation samples spanning the simplified perimeter once.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Wave {
    pub samples: Vec<WaveSample>,
    pub perimeter: f64,
}

impl Wave {
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Largest absolute amplitude.
    pub fn peak(&self) -> f64 {
        self.samples
            .iter()
            .map(|s| s.amplitude.abs())
            .fold(0.0, f64::max)
    }

    /// Arc length of the last sample.
    pub fn total_length(&self) -> f64 {
        self.samples.last().map_or(0.0, |s| s.arc_length)
    }
}

/// Orthogonal projection of a point onto a segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Clamped segment parameter in [0, 1].
    pub t: f64,
    /// cross(edge, p - start) / |edge|; positive on the left of the edge.
    pub amplitude: f64,
    pub point: Point,
}

/// Project `p` onto the segment `start..end`.
///
/// A zero-length segment projects everything onto `start` with no deviation.
pub fn project_onto_segment(p: Point, start: Point, end: Point) -> Projection {
    let edge = end - start;
    let len_sq = edge.length_squared();
    if len_sq == 0.0 {
        return Projection {
            t: 0.0,
            amplitude: 0.0,
            point: start,
        };
    }
    let rel = p - start;
    let t = (rel.dot(edge) / len_sq).clamp(0.0, 1.0);
    Projection {
        t,
        amplitude: edge.cross(rel) / len_sq.sqrt(),
        point: start + edge * t,
    }
}

/// Extract the deviation wave of `contour` around `simplified`.
///
/// Both loops must be open; every simplified vertex id must occur in the
/// contour. Each edge contributes the contour run from its start vertex to
/// its end vertex inclusive, wrapping around the contour when needed.
/// Returns `Ok(None)` when either loop is too small to describe a perimeter.
pub fn extract_wave(
    contour: &VertexLoop,
    simplified: &VertexLoop,
) -> Result<Option<Wave>, WaveError> {
    if contour.len() < 3 || simplified.len() < 3 {
        return Ok(None);
    }

    let positions: HashMap<u32, usize> = contour
        .vertices()
        .iter()
        .enumerate()
        .map(|(i, v)| (v.id, i))
        .collect();
    let locate = |id: u32| {
        positions
            .get(&id)
            .copied()
            .ok_or(WaveError::VertexNotFound { id })
    };

    let points = contour.vertices();
    let mut samples = Vec::with_capacity(contour.len() + simplified.len());
    let mut covered = 0.0;

    for (start, end) in simplified.edges() {
        let from = locate(start.id)?;
        let to = locate(end.id)?;

        let run: Vec<Point> = if to >= from {
            points[from..=to].iter().map(|v| v.point).collect()
        } else {
            points[from..]
                .iter()
                .chain(&points[..=to])
                .map(|v| v.point)
                .collect()
        };

        let edge_length = start.point.distance(end.point);
        samples.extend(run.into_iter().map(|p| {
            let proj = project_onto_segment(p, start.point, end.point);
            WaveSample {
                arc_length: covered + proj.t * edge_length,
                amplitude: proj.amplitude,
                point: p,
                projected: proj.point,
            }
        }));
        covered += edge_length;
    }

    // Emphasize sharp deviations; odd power keeps the sign.
    for s in &mut samples {
        s.amplitude = s.amplitude.powi(3);
    }
    // A contour that doubles back along an edge projects out of order.
    samples.sort_by(|a, b| a.arc_length.total_cmp(&b.arc_length));

    log::debug!(
        "Extracted {} wave samples over perimeter {:.1}",
        samples.len(),
        covered
    );

    Ok(Some(Wave {
        samples,
        perimeter: covered,
    }))
}
