//! Polygon simplification with convergence control.
//!
//! Built on an iterative Douglas-Peucker primitive. Two strategies:
//! - reduce a closed loop to an exact vertex count by adapting epsilon
//! - grow the vertex count from three until an area ratio is preserved

use serde::{Deserialize, Serialize};

use crate::geometry::{distance_to_line, normalized, orientation, LoopForm, Vertex, VertexLoop};

/// Hard cap on epsilon adaptation rounds.
pub const MAX_ITERATIONS: usize = 1000;

/// Step shrink factor applied after overshooting below the target.
const STEP_DECAY: f64 = 0.8;

/// Errors raised when simplification breaks its convergence contract.
#[derive(Debug, thiserror::Error)]
pub enum SimplifyError {
    #[error("Simplification to {target} vertices did not converge after {iterations} iterations")]
    NotConverged { target: usize, iterations: usize },
}

/// Area used as the denominator of the preserved-area ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AreaReference {
    /// Convex hull of the extracted polygon.
    #[default]
    Hull,
    /// Unsigned area of the extracted polygon itself.
    Raw,
}

impl AreaReference {
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "hull" | "convex-hull" | "convex" => Some(Self::Hull),
            "raw" | "polygon" | "first" => Some(Self::Raw),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Hull => "hull",
            Self::Raw => "raw",
        }
    }

    pub fn all() -> &'static [Self] {
        &[Self::Hull, Self::Raw]
    }
}

/// Both candidate reference areas for one analysis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceAreas {
    pub hull: f64,
    pub raw: f64,
}

impl ReferenceAreas {
    pub fn get(&self, reference: AreaReference) -> f64 {
        match reference {
            AreaReference::Hull => self.hull,
            AreaReference::Raw => self.raw,
        }
    }
}

/// What the simplifier should converge to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SimplifyTarget {
    /// Exactly this many vertices (3 forces a triangle).
    VertexCount(usize),
    /// Fewest vertices whose area / reference area reaches `threshold`.
    AreaRatio {
        threshold: f64,
        reference: AreaReference,
    },
}

impl Default for SimplifyTarget {
    fn default() -> Self {
        Self::VertexCount(3)
    }
}

/// Simplification parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimplifyConfig {
    pub target: SimplifyTarget,
    /// Simplify the convex hull instead of the raw extracted polygon.
    pub use_hull: bool,
    /// Initial epsilon increment as a fraction of the polygon perimeter.
    pub epsilon_step_ratio: f64,
    pub max_iterations: usize,
    /// At the iteration cap, fall back to the closest result instead of
    /// failing with [`SimplifyError::NotConverged`].
    pub recover_at_cap: bool,
}

impl Default for SimplifyConfig {
    fn default() -> Self {
        Self {
            target: SimplifyTarget::default(),
            use_hull: false,
            epsilon_step_ratio: 0.01,
            max_iterations: MAX_ITERATIONS,
            recover_at_cap: true,
        }
    }
}

/// A simplified loop and how it was reached.
#[derive(Debug, Clone, PartialEq)]
pub struct Reduction {
    pub polygon: VertexLoop,
    /// False when the iteration cap was hit and the result was recovered.
    pub converged: bool,
}

impl Reduction {
    fn converged(polygon: VertexLoop) -> Self {
        Self {
            polygon,
            converged: true,
        }
    }

    fn recovered(polygon: VertexLoop) -> Self {
        Self {
            polygon,
            converged: false,
        }
    }
}

/// Douglas-Peucker simplification of an open chain.
///
/// Uses an explicit stack of index ranges, so chain length does not bound
/// recursion depth. Endpoints are always kept; ids pass through untouched.
pub fn douglas_peucker(chain: &[Vertex], epsilon: f64) -> Vec<Vertex> {
    if chain.len() < 3 {
        return chain.to_vec();
    }

    let last = chain.len() - 1;
    let mut keep = vec![false; chain.len()];
    keep[0] = true;
    keep[last] = true;

    let mut stack = vec![(0usize, last)];
    while let Some((start, end)) = stack.pop() {
        if end <= start + 1 {
            continue;
        }

        let a = chain[start].point;
        let b = chain[end].point;
        let mut max_dist = 0.0;
        let mut split = start;
        for (i, v) in chain.iter().enumerate().take(end).skip(start + 1) {
            let d = distance_to_line(v.point, a, b);
            if d > max_dist {
                max_dist = d;
                split = i;
            }
        }

        if max_dist > epsilon {
            keep[split] = true;
            stack.push((split, end));
            stack.push((start, split));
        }
    }

    chain
        .iter()
        .zip(&keep)
        .filter(|&(_, &k)| k)
        .map(|(&v, _)| v)
        .collect()
}

/// Reduce a closed loop to `target` vertices.
///
/// Each round runs Douglas-Peucker over the closed chain, then rotates the
/// working loop by one vertex so the anchor changes. Too many vertices raise
/// epsilon by the current step; too few back it off and shrink the step.
/// Undershooting rounds advance the same rotation rather than restarting from
/// the original order, so successive rounds never retry an anchor that was
/// just used.
///
/// Returns `Ok(None)` for loops with fewer than three vertices or a target
/// below three. A loop already at or under the target is returned as is.
///
/// Hitting the cap is logged with `warn!`. With `recover_at_cap` off it fails
/// with [`SimplifyError::NotConverged`]. Otherwise the largest result with
/// `3 <= count < target` is used when one was seen, or else the smallest
/// result above the target is trimmed down with [`drop_flattest`]; symmetric
/// loops such as parallelograms only ever split into even counts and end up
/// here. Either way the [`Reduction`] is marked as not converged. A loop that
/// never produced a usable count always fails.
pub fn reduce_to_count(
    polygon: &VertexLoop,
    target: usize,
    config: &SimplifyConfig,
) -> Result<Option<Reduction>, SimplifyError> {
    let open = normalized(polygon.clone(), LoopForm::Open);
    if open.len() < 3 || target < 3 {
        return Ok(None);
    }
    if open.len() <= target {
        return Ok(Some(Reduction::converged(open)));
    }

    let mut step = open.perimeter() * config.epsilon_step_ratio;
    if step <= 0.0 || !step.is_finite() {
        return Ok(None);
    }
    let mut epsilon = step;
    let mut working = open.into_vertices();
    let mut fallback: Option<Vec<Vertex>> = None;
    let mut above: Option<Vec<Vertex>> = None;

    for iteration in 0..config.max_iterations {
        let mut chain = working.clone();
        chain.push(working[0]);
        let mut result = douglas_peucker(&chain, epsilon);
        result.pop();

        let count = result.len();
        if count == target {
            log::debug!(
                "Reduced to {} vertices after {} iterations (epsilon {:.3})",
                target,
                iteration + 1,
                epsilon
            );
            return Ok(Some(Reduction::converged(VertexLoop::new(result))));
        }

        working.rotate_left(1);
        if count > target {
            if above.as_ref().map_or(true, |a| count < a.len()) {
                above = Some(result);
            }
            epsilon += step;
        } else {
            if count >= 3 && fallback.as_ref().map_or(true, |f| count > f.len()) {
                fallback = Some(result);
            }
            epsilon = (epsilon - step).max(0.0);
            step *= STEP_DECAY;
            epsilon += step;
        }
    }

    let not_converged = SimplifyError::NotConverged {
        target,
        iterations: config.max_iterations,
    };
    if !config.recover_at_cap {
        log::warn!("{}", not_converged);
        return Err(not_converged);
    }

    match (fallback, above) {
        (Some(result), _) => {
            log::warn!(
                "{}; recovering with {} vertices",
                not_converged,
                result.len()
            );
            Ok(Some(Reduction::recovered(VertexLoop::new(result))))
        }
        (None, Some(mut result)) => {
            log::warn!(
                "{}; recovering by trimming {} vertices",
                not_converged,
                result.len()
            );
            drop_flattest(&mut result, target);
            Ok(Some(Reduction::recovered(VertexLoop::new(result))))
        }
        (None, None) => {
            log::warn!("{}", not_converged);
            Err(not_converged)
        }
    }
}

/// Remove vertices from a closed loop until `target` remain.
///
/// Each pass drops the vertex spanning the smallest triangle with its
/// neighbours; ties go to the earliest vertex.
pub fn drop_flattest(vertices: &mut Vec<Vertex>, target: usize) {
    while vertices.len() > target.max(3) {
        let n = vertices.len();
        let mut flattest = 0;
        let mut smallest = f64::INFINITY;
        for i in 0..n {
            let prev = vertices[(i + n - 1) % n].point;
            let next = vertices[(i + 1) % n].point;
            let area = orientation(prev, vertices[i].point, next).abs();
            if area < smallest {
                smallest = area;
                flattest = i;
            }
        }
        vertices.remove(flattest);
    }
}

/// Fewest vertices (from three up) whose area keeps `threshold` of `reference_area`.
pub fn reduce_to_area_ratio(
    polygon: &VertexLoop,
    reference_area: f64,
    threshold: f64,
    config: &SimplifyConfig,
) -> Result<Option<Reduction>, SimplifyError> {
    if reference_area <= 0.0 {
        return Ok(None);
    }

    for k in 3..=polygon.distinct_len() {
        let Some(candidate) = reduce_to_count(polygon, k, config)? else {
            return Ok(None);
        };
        let ratio = candidate.polygon.area() / reference_area;
        if ratio >= threshold {
            log::debug!("Area ratio {:.3} reached with {} vertices", ratio, k);
            return Ok(Some(candidate));
        }
    }

    Ok(None)
}

/// Simplify `polygon` according to `config.target`.
pub fn simplify(
    polygon: &VertexLoop,
    areas: &ReferenceAreas,
    config: &SimplifyConfig,
) -> Result<Option<Reduction>, SimplifyError> {
    match config.target {
        SimplifyTarget::VertexCount(n) => reduce_to_count(polygon, n, config),
        SimplifyTarget::AreaRatio {
            threshold,
            reference,
        } => reduce_to_area_ratio(polygon, areas.get(reference), threshold, config),
    }
}
