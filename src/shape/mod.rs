//! Shape simplification and orientation.
//!
//! This module provides:
//! - Iterative Douglas-Peucker simplification with exact-count and
//!   area-ratio convergence
//! - Tip selection (smallest angle or closest edge)
//! - The per-stroke analysis result

pub mod analysis;
pub mod simplify;
pub mod tip;

// Re-export commonly used types
pub use analysis::{analyze_polygon, triangularity, AnalysisConfig, AnalysisResult};
pub use simplify::{
    douglas_peucker, drop_flattest, reduce_to_area_ratio, reduce_to_count, simplify, AreaReference,
    Reduction, ReferenceAreas, SimplifyConfig, SimplifyError, SimplifyTarget, MAX_ITERATIONS,
};
pub use tip::{closest_edge_tip, interior_angle, smallest_angle_tip, Tip, TipStrategy};
