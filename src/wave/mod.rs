//! Shape-to-signal conversion.
//!
//! This module provides:
//! - Deviation wave extraction (contour projected onto the simplified shape)
//! - Cosine resampling into a fixed-length, peak-normalized period
//! - Harmonic analysis of the rendered period via RustFFT

pub mod extract;
pub mod render;
pub mod spectrum;

// Re-export commonly used types
pub use extract::{extract_wave, project_onto_segment, Projection, Wave, WaveError, WaveSample};
pub use render::{cosine_interpolate, render_waveform, RenderConfig, SampleBuffer};
pub use spectrum::{fundamental_frequency, HarmonicAnalyzer};
