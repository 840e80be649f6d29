//! Resampling of a deviation wave into one period of audio.
//!
//! The wave's samples sit at irregular arc-length positions; the renderer
//! maps them onto a fixed number of evenly spaced output samples using cosine
//! interpolation and normalizes the peak just under full scale.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use super::extract::{Wave, WaveSample};

/// Output peak after normalization.
pub const HEADROOM: f64 = 0.95;

/// Peak amplitude at or below which the wave is treated as flat.
pub const SILENCE_THRESHOLD: f64 = 1e-9;

/// Output buffer parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Sample rate in Hz the buffer is meant to be played at.
    pub sample_rate: u32,
    /// Number of samples in one period.
    pub buffer_len: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            sample_rate: 44100,
            buffer_len: 44100,
        }
    }
}

/// One period of a rendered wave, samples in [-1, 1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleBuffer {
    pub samples: Vec<f32>,
    pub sample_rate: u32,
}

impl SampleBuffer {
    /// An all-zero buffer.
    pub fn silence(len: usize, sample_rate: u32) -> Self {
        Self {
            samples: vec![0.0; len],
            sample_rate,
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Duration of one period in seconds.
    pub fn duration(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.samples.len() as f64 / self.sample_rate as f64
    }

    /// Largest absolute sample value.
    pub fn peak(&self) -> f32 {
        self.samples.iter().map(|s| s.abs()).fold(0.0f32, f32::max)
    }

    pub fn is_silent(&self) -> bool {
        self.samples.iter().all(|&s| s == 0.0)
    }

    /// Raw native-endian `f32` bytes for handing to an audio backend.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.samples)
    }
}

/// Cosine interpolation between `a` and `b` at `mu` in [0, 1].
#[inline]
pub fn cosine_interpolate(a: f64, b: f64, mu: f64) -> f64 {
    let mu2 = (1.0 - (mu * PI).cos()) / 2.0;
    a * (1.0 - mu2) + b * mu2
}

/// Render `wave` into a buffer of `config.buffer_len` samples.
///
/// Waves with two samples or fewer, zero length, or a negligible peak
/// render as silence.
pub fn render_waveform(wave: &Wave, config: &RenderConfig) -> SampleBuffer {
    let len = config.buffer_len;
    if wave.samples.len() <= 2 {
        return SampleBuffer::silence(len, config.sample_rate);
    }

    let mut sorted: Vec<WaveSample> = wave.samples.clone();
    sorted.sort_by(|a, b| a.arc_length.total_cmp(&b.arc_length));

    let total = sorted.last().map_or(0.0, |s| s.arc_length);
    let peak = sorted
        .iter()
        .map(|s| s.amplitude.abs())
        .fold(0.0, f64::max);
    if total <= 0.0 || peak <= SILENCE_THRESHOLD {
        return SampleBuffer::silence(len, config.sample_rate);
    }
    let scale = HEADROOM / peak;

    let mut samples = Vec::with_capacity(len);
    let mut cursor = 0;
    for i in 0..len {
        let t = i as f64 / len as f64 * total;
        while cursor + 2 < sorted.len() && sorted[cursor + 1].arc_length < t {
            cursor += 1;
        }
        let a = &sorted[cursor];
        let b = &sorted[cursor + 1];
        let span = b.arc_length - a.arc_length;
        let mu = if span > 0.0 {
            ((t - a.arc_length) / span).clamp(0.0, 1.0)
        } else {
            0.0
        };
        let value = cosine_interpolate(a.amplitude, b.amplitude, mu) * scale;
        samples.push(value.clamp(-1.0, 1.0) as f32);
    }

    SampleBuffer {
        samples,
        sample_rate: config.sample_rate,
    }
}
