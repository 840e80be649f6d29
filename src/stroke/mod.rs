//! Stroke sources.
//!
//! A stroke is an ordered sequence of [`Point`](crate::geometry::Point)s as
//! captured from a pointer. This module provides deterministic synthetic
//! strokes for tests, benches and demos.

pub mod synth;

pub use synth::{
    generate_bowtie_stroke, generate_circle_stroke, generate_distorted_square_stroke,
    generate_line_stroke, generate_polygon_stroke, generate_square_stroke, jitter, lasso_stroke,
    regular_polygon,
};
