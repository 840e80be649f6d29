//! Full stroke pipeline combining extraction, shape analysis and wave rendering.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::geometry::{extract_polygon, ExtractConfig, Point};
use crate::shape::{
    analyze_polygon, AnalysisConfig, AnalysisResult, SimplifyConfig, SimplifyError, TipStrategy,
};
use crate::wave::{extract_wave, render_waveform, RenderConfig, SampleBuffer, Wave, WaveError};

/// Pipeline configuration for turning strokes into shapes and sound.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapeConfig {
    pub extract: ExtractConfig,
    pub simplify: SimplifyConfig,
    pub tip: TipStrategy,
    pub render: RenderConfig,
    /// Minimum triangularity for a shape to be marked valid.
    pub acceptance_ratio: f64,
}

impl Default for ShapeConfig {
    fn default() -> Self {
        Self {
            extract: ExtractConfig::default(),
            simplify: SimplifyConfig::default(),
            tip: TipStrategy::default(),
            render: RenderConfig::default(),
            acceptance_ratio: 0.7,
        }
    }
}

impl ShapeConfig {
    /// Parse a JSON document; missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, PipelineError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a JSON config file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, PipelineError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json(&text)?;
        log::debug!("Loaded shape config from {}", path.as_ref().display());
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, PipelineError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Convert to AnalysisConfig for shape analysis.
    pub fn to_analysis_config(&self) -> AnalysisConfig {
        AnalysisConfig {
            simplify: self.simplify.clone(),
            tip: self.tip,
            acceptance_ratio: self.acceptance_ratio,
        }
    }
}

/// Errors that can occur during pipeline execution.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Simplification error: {0}")]
    Simplify(#[from] SimplifyError),
    #[error("Wave error: {0}")]
    Wave(#[from] WaveError),
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Everything produced for one finished stroke.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrokeSound {
    pub analysis: AnalysisResult,
    pub wave: Wave,
    pub buffer: SampleBuffer,
}

/// Extract and analyze the shape drawn by `stroke`.
///
/// Returns `Ok(None)` when the stroke closes no acceptable loop or the loop
/// cannot be reduced to a shape with a tip. Invalid shapes are still
/// returned, with `valid` unset.
pub fn analyze_stroke(
    stroke: &[Point],
    config: &ShapeConfig,
) -> Result<Option<AnalysisResult>, PipelineError> {
    let Some(&reference) = stroke.first() else {
        return Ok(None);
    };
    let Some(polygon) = extract_polygon(stroke, &config.extract) else {
        log::info!("Stroke of {} points closes no shape", stroke.len());
        return Ok(None);
    };

    let result = analyze_polygon(polygon, reference, &config.to_analysis_config())
        .inspect_err(|e| log::warn!("Shape analysis failed: {}", e))?;

    match &result {
        Some(r) if r.valid => log::info!(
            "Accepted {}-vertex shape, triangularity {:.3}",
            r.simplified.len(),
            r.triangularity()
        ),
        Some(r) => log::info!(
            "Rejected shape, triangularity {:.3} below {:.3}",
            r.triangularity(),
            config.acceptance_ratio
        ),
        None => log::info!("Extracted loop has no usable simplification"),
    }

    Ok(result)
}

/// Wave and one rendered period for an analyzed shape.
pub fn shape_to_sound(
    analysis: &AnalysisResult,
    config: &RenderConfig,
) -> Result<Option<(Wave, SampleBuffer)>, PipelineError> {
    let Some(wave) = extract_wave(&analysis.first_polygon, &analysis.simplified)
        .inspect_err(|e| log::warn!("Wave extraction failed: {}", e))?
    else {
        return Ok(None);
    };
    let buffer = render_waveform(&wave, config);
    Ok(Some((wave, buffer)))
}

/// Run the whole pipeline on one stroke.
///
/// Sound is produced for valid shapes only; a stroke whose shape is rejected
/// yields `Ok(None)` just like one that closes no shape.
pub fn synthesize(
    stroke: &[Point],
    config: &ShapeConfig,
) -> Result<Option<StrokeSound>, PipelineError> {
    let Some(analysis) = analyze_stroke(stroke, config)? else {
        return Ok(None);
    };
    if !analysis.valid {
        return Ok(None);
    }
    let Some((wave, buffer)) = shape_to_sound(&analysis, &config.render)? else {
        return Ok(None);
    };

    log::info!(
        "Rendered {} wave samples into {} frames at {} Hz",
        wave.len(),
        buffer.len(),
        buffer.sample_rate
    );

    Ok(Some(StrokeSound {
        analysis,
        wave,
        buffer,
    }))
}
