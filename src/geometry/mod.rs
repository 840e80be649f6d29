//! Planar geometry for stroke analysis.
//!
//! This module provides:
//! - Points, vectors and provenance-tagged vertices
//! - Vertex loops with shoelace area, perimeter and winding
//! - Winding/closure normalization
//! - Convex hull (Graham's scan)
//! - First self-intersection polygon extraction

pub mod extract;
pub mod hull;
pub mod normalize;
pub mod point;
pub mod polygon;

// Re-export commonly used types
pub use extract::{extract_polygon, segment_intersection, ExtractConfig};
pub use hull::convex_hull;
pub use normalize::{close_loop, normalize, normalized, open_loop, orient_ccw, LoopForm};
pub use point::{distance_to_line, distance_to_segment, orientation, Point, Vertex};
pub use polygon::{signed_area, VertexLoop, Winding};
