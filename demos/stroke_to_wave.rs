//! Example: Turn synthetic strokes into shapes and one period of sound.
//!
//! Draws a few synthetic strokes, analyzes each one and prints the shape and
//! harmonic content. Pass a JSON config path to override the defaults.
//!
//! Run with:
//!     cargo run --example stroke_to_wave [config.json]

use anyhow::Context;
use stroke_wave::stroke::{
    generate_circle_stroke, generate_distorted_square_stroke, generate_line_stroke,
    generate_polygon_stroke, generate_square_stroke, jitter,
};
use stroke_wave::wave::fundamental_frequency;
use stroke_wave::{analyze_stroke, synthesize, HarmonicAnalyzer, Point, ShapeConfig};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => ShapeConfig::load(&path)
            .with_context(|| format!("Failed to load config from {}", path))?,
        None => ShapeConfig::default(),
    };

    println!("Stroke Wave - Synthetic Stroke Example");
    println!("======================================\n");
    println!("  Tip strategy: {}", config.tip.name());
    println!("  Acceptance ratio: {:.2}", config.acceptance_ratio);
    println!(
        "  Buffer: {} samples at {} Hz\n",
        config.render.buffer_len, config.render.sample_rate
    );

    let strokes = [
        ("triangle", jitter(&generate_polygon_stroke(3, 120.0, 40, 0.15), 1.5, 42)),
        ("square", generate_square_stroke(200.0, 40, 0.1)),
        ("leaning square", generate_distorted_square_stroke(200.0, 0.85, 40, 0.1)),
        ("hexagon", jitter(&generate_polygon_stroke(6, 100.0, 20, 0.2), 2.0, 7)),
        ("circle", generate_circle_stroke(100.0, 72, 1.5)),
        (
            "line",
            generate_line_stroke(Point::new(0.0, 0.0), Point::new(300.0, 40.0), 60),
        ),
    ];

    let mut analyzer = HarmonicAnalyzer::new();

    for (name, stroke) in &strokes {
        println!("{} ({} points)", name, stroke.len());

        let Some(analysis) = analyze_stroke(stroke, &config)
            .with_context(|| format!("Analysis of {} failed", name))?
        else {
            println!("  no closed shape\n");
            continue;
        };

        println!(
            "  {} -> {} vertices, triangularity {:.3}, tip angle {:.1} deg",
            analysis.first_polygon.len(),
            analysis.simplified.len(),
            analysis.triangularity(),
            analysis.tip_angle().to_degrees()
        );

        match synthesize(stroke, &config)? {
            Some(sound) => {
                let harmonics = analyzer.harmonic_profile(&sound.buffer, 8);
                println!(
                    "  accepted: {} wave samples, peak {:.3}, fundamental {:.2} Hz",
                    sound.wave.len(),
                    sound.buffer.peak(),
                    fundamental_frequency(&sound.buffer)
                );
                let formatted: Vec<String> =
                    harmonics.iter().map(|h| format!("{:.2}", h)).collect();
                println!("  harmonics: [{}]", formatted.join(", "));
            }
            None => println!("  rejected"),
        }
        println!();
    }

    Ok(())
}
