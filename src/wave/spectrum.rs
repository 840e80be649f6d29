//! Harmonic content of a rendered period using RustFFT.
//!
//! A sample buffer holds exactly one period, so FFT bin `k` of the whole
//! buffer is the k-th harmonic and no window is needed.

use rustfft::{num_complex::Complex, FftPlanner};

use super::render::SampleBuffer;

/// Harmonic analyzer for single-period buffers.
///
/// Keeps one planner so repeated analyses of equal-length buffers reuse plans.
pub struct HarmonicAnalyzer {
    planner: FftPlanner<f32>,
}

impl Default for HarmonicAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl HarmonicAnalyzer {
    pub fn new() -> Self {
        Self {
            planner: FftPlanner::new(),
        }
    }

    /// Amplitudes of harmonics `1..=count` (DC excluded).
    ///
    /// Harmonics above Nyquist are reported as zero.
    pub fn amplitudes(&mut self, period: &[f32], count: usize) -> Vec<f32> {
        let n = period.len();
        if n == 0 {
            return vec![0.0; count];
        }

        let mut buffer: Vec<Complex<f32>> =
            period.iter().map(|&s| Complex::new(s, 0.0)).collect();
        let fft = self.planner.plan_fft_forward(n);
        fft.process(&mut buffer);

        (1..=count)
            .map(|k| {
                if k <= n / 2 {
                    buffer[k].norm() * 2.0 / n as f32
                } else {
                    0.0
                }
            })
            .collect()
    }

    /// Harmonic amplitudes normalized so the strongest is 1.0.
    pub fn harmonic_profile(&mut self, buffer: &SampleBuffer, count: usize) -> Vec<f32> {
        let mut profile = self.amplitudes(&buffer.samples, count);
        let max_val = profile.iter().cloned().fold(0.0f32, f32::max);
        if max_val > 0.0 {
            for h in &mut profile {
                *h /= max_val;
            }
        }
        profile
    }

    /// Normalized harmonic profile in dB, floored at -80 dB.
    pub fn harmonic_profile_db(&mut self, buffer: &SampleBuffer, count: usize) -> Vec<f32> {
        self.harmonic_profile(buffer, count)
            .iter()
            .map(|&mag| (20.0 * mag.max(1e-10).log10()).max(-80.0))
            .collect()
    }
}

/// Frequency of the fundamental when the buffer loops at its sample rate.
pub fn fundamental_frequency(buffer: &SampleBuffer) -> f32 {
    if buffer.samples.is_empty() {
        return 0.0;
    }
    buffer.sample_rate as f32 / buffer.samples.len() as f32
}
