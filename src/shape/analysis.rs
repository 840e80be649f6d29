//! Shape analysis of an extracted polygon.
//!
//! Runs hull, simplification and tip selection on a closed loop and collects
//! every intermediate polygon for rendering collaborators.

use serde::{Deserialize, Serialize};

use super::simplify::{simplify, ReferenceAreas, SimplifyConfig, SimplifyError};
use super::tip::{Tip, TipStrategy};
use crate::geometry::{convex_hull, normalized, LoopForm, Point, VertexLoop};

/// Parameters for [`analyze_polygon`].
#[derive(Debug, Clone, Default)]
pub struct AnalysisConfig {
    pub simplify: SimplifyConfig,
    pub tip: TipStrategy,
    /// Minimum triangularity for a shape to count as valid.
    pub acceptance_ratio: f64,
}

/// Complete analysis of one finished stroke.
///
/// All polygons are open and counter-clockwise. After construction the whole
/// result is re-centered so the tip sits at the origin; `origin` keeps the
/// tip's position in stroke coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub valid: bool,
    /// Loop extracted from the stroke, re-indexed to start at the tip.
    pub first_polygon: VertexLoop,
    pub hull: VertexLoop,
    /// Polygon handed to the simplifier (hull or first polygon).
    pub pre_simplified: VertexLoop,
    /// Final simplified polygon, re-indexed to start at the tip.
    pub simplified: VertexLoop,
    /// False when simplification hit its iteration cap and recovered.
    pub converged: bool,
    pub first_area: f64,
    pub hull_area: f64,
    pub simplified_area: f64,
    /// Perimeter of the simplified polygon.
    pub perimeter: f64,
    pub tip: Tip,
    /// Point used by the closest-edge heuristic (the stroke's first point).
    pub reference_point: Point,
    /// Tip position before re-centering.
    pub origin: Point,
}

impl AnalysisResult {
    /// Ratio of the smaller to the larger of hull and simplified area.
    pub fn triangularity(&self) -> f64 {
        triangularity(self.hull_area, self.simplified_area)
    }

    /// Tip interior angle in radians.
    pub fn tip_angle(&self) -> f64 {
        self.tip.angle
    }

    /// Translate every stored point by `offset`.
    pub fn translate(&mut self, offset: Point) {
        self.first_polygon.translate(offset);
        self.hull.translate(offset);
        self.pre_simplified.translate(offset);
        self.simplified.translate(offset);
        self.tip.point = self.tip.point + offset;
        self.reference_point = self.reference_point + offset;
        self.origin = self.origin + offset;
    }

    /// Move the tip to the origin, remembering where it was.
    pub fn recenter_on_tip(&mut self) {
        let tip = self.tip.point;
        self.translate(-tip);
        self.origin = tip;
    }

    /// Start both the simplified polygon and the detailed contour at the tip.
    pub fn reindex_to_tip(&mut self) {
        self.simplified.rotate_to(self.tip.index);
        self.tip.index = 0;
        if let Some(pos) = self.first_polygon.position_of(self.tip.id) {
            self.first_polygon.rotate_to(pos);
        }
    }
}

/// min / max of two areas, or 0 when both vanish.
pub fn triangularity(hull_area: f64, simplified_area: f64) -> f64 {
    let max = hull_area.max(simplified_area);
    if max <= 0.0 {
        return 0.0;
    }
    hull_area.min(simplified_area) / max
}

/// Analyze a closed loop extracted from a stroke.
///
/// `reference` is the stroke's first drawn point. Returns `Ok(None)` when the
/// loop cannot be simplified into a shape with a tip.
pub fn analyze_polygon(
    first: VertexLoop,
    reference: Point,
    config: &AnalysisConfig,
) -> Result<Option<AnalysisResult>, SimplifyError> {
    let first = normalized(first, LoopForm::Open);
    if first.len() < 3 {
        return Ok(None);
    }

    let hull = convex_hull(&first);
    let areas = ReferenceAreas {
        hull: hull.area(),
        raw: first.area(),
    };
    let pre_simplified = if config.simplify.use_hull {
        hull.clone()
    } else {
        first.clone()
    };

    let Some(reduction) = simplify(&pre_simplified, &areas, &config.simplify)? else {
        log::debug!("Simplification found no shape");
        return Ok(None);
    };
    let simplified = normalized(reduction.polygon, LoopForm::Open);

    let Some(tip) = config.tip.select(&simplified, reference) else {
        return Ok(None);
    };

    let mut result = AnalysisResult {
        valid: false,
        first_area: areas.raw,
        hull_area: areas.hull,
        simplified_area: simplified.area(),
        perimeter: simplified.perimeter(),
        first_polygon: first,
        hull,
        pre_simplified,
        simplified,
        converged: reduction.converged,
        tip,
        reference_point: reference,
        origin: Point::ZERO,
    };
    result.reindex_to_tip();
    result.recenter_on_tip();
    result.valid = result.triangularity() >= config.acceptance_ratio;

    log::debug!(
        "Shape: {} -> {} vertices, triangularity {:.3}, tip angle {:.3}",
        result.first_polygon.len(),
        result.simplified.len(),
        result.triangularity(),
        result.tip.angle
    );

    Ok(Some(result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn config() -> AnalysisConfig {
        AnalysisConfig {
            acceptance_ratio: 0.7,
            ..Default::default()
        }
    }

    fn equilateral(side: f64, per_edge: usize) -> VertexLoop {
        let h = side * 3f64.sqrt() / 2.0;
        let corners = [
            Point::new(0.0, 0.0),
            Point::new(side, 0.0),
            Point::new(side / 2.0, h),
        ];
        let mut points = Vec::new();
        for i in 0..3 {
            let a = corners[i];
            let b = corners[(i + 1) % 3];
            for k in 0..per_edge {
                points.push(a.lerp(b, k as f64 / per_edge as f64));
            }
        }
        VertexLoop::from_points(&points)
    }

    #[test]
    fn test_triangularity_bounds() {
        assert_eq!(triangularity(0.0, 0.0), 0.0);
        assert!((triangularity(10.0, 5.0) - 0.5).abs() < 1e-12);
        assert!((triangularity(5.0, 10.0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_equilateral_triangle_analysis() {
        let result = analyze_polygon(equilateral(100.0, 10), Point::ZERO, &config())
            .unwrap()
            .unwrap();
        assert!(result.valid);
        assert!(result.converged);
        assert_eq!(result.simplified.len(), 3);
        assert!(result.triangularity() > 0.99);
        assert!((result.tip_angle() - PI / 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_result_is_centered_and_indexed_on_tip() {
        let result = analyze_polygon(equilateral(100.0, 10), Point::ZERO, &config())
            .unwrap()
            .unwrap();
        assert_eq!(result.tip.index, 0);
        assert!(result.tip.point.length() < 1e-9);
        assert_eq!(result.simplified.vertices()[0].id, result.tip.id);
        assert_eq!(result.first_polygon.vertices()[0].id, result.tip.id);
        assert!(result.simplified.vertices()[0].point.length() < 1e-9);
        // The stroke reference moved with everything else.
        assert!((result.reference_point + result.origin).length() < 1e-9);
    }

    #[test]
    fn test_translate_preserves_areas() {
        let mut result = analyze_polygon(equilateral(50.0, 5), Point::ZERO, &config())
            .unwrap()
            .unwrap();
        let before = result.simplified.area();
        result.translate(Point::new(12.0, -7.0));
        assert!((result.simplified.area() - before).abs() < 1e-9);
        assert!((result.tip.point - Point::new(12.0, -7.0)).length() < 1e-9);
    }

    #[test]
    fn test_capped_rectangle_is_flagged() {
        let rect = VertexLoop::from_points(&[
            Point::new(0.0, 0.0),
            Point::new(20.0, 0.0),
            Point::new(20.0, 40.0),
            Point::new(0.0, 40.0),
        ]);
        let result = analyze_polygon(rect.clone(), Point::ZERO, &config())
            .unwrap()
            .unwrap();
        assert!(!result.converged);
        assert_eq!(result.simplified.len(), 3);

        let strict = AnalysisConfig {
            simplify: SimplifyConfig {
                max_iterations: 20,
                recover_at_cap: false,
                ..Default::default()
            },
            ..config()
        };
        assert!(analyze_polygon(rect, Point::ZERO, &strict).is_err());
    }

    #[test]
    fn test_degenerate_loop_yields_none() {
        let pair = VertexLoop::from_points(&[Point::new(0.0, 0.0), Point::new(1.0, 0.0)]);
        assert!(analyze_polygon(pair, Point::ZERO, &config()).unwrap().is_none());
    }
}
