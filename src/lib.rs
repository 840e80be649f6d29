//! Stroke Wave Core
//!
//! Turns hand-drawn strokes into shapes and shapes into sound.
//!
//! # Features
//!
//! - Closed polygon extraction at a stroke's first self-intersection
//! - Convex hull and convergent Douglas-Peucker simplification
//! - Tip selection by smallest angle or closest edge
//! - Deviation wave extraction along the simplified perimeter
//! - Cosine resampling into a fixed-length audio period
//! - Harmonic analysis of the period via RustFFT

pub mod geometry;
pub mod pipeline;
pub mod shape;
pub mod stroke;
pub mod wave;

// Re-export commonly used types
pub use geometry::{
    convex_hull, extract_polygon, normalize, ExtractConfig, LoopForm, Point, Vertex, VertexLoop,
};
pub use pipeline::{analyze_stroke, synthesize, PipelineError, ShapeConfig, StrokeSound};
pub use shape::{
    analyze_polygon, AnalysisResult, AreaReference, SimplifyConfig, SimplifyTarget, Tip,
    TipStrategy,
};
pub use wave::{extract_wave, render_waveform, HarmonicAnalyzer, RenderConfig, SampleBuffer, Wave};
