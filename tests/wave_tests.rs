//! Integration tests for wave extraction and rendering.


use stroke_fixtures::{assorted_strokes, jittered_triangle_stroke, test_config, triangle_stroke};
use stroke_wave::analyze_stroke;
use stroke_wave::geometry::{Point, Vertex, VertexLoop};
use stroke_wave::wave::{
    extract_wave, fundamental_frequency, render_waveform, HarmonicAnalyzer, RenderConfig, Wave,
    WaveError, WaveSample,
};

fn small_render() -> RenderConfig {
    RenderConfig {
        sample_rate: 44100,
        buffer_len: 2048,
    }
}

// ==================== Extraction Properties ====================

#[test]
fn test_wave_spans_simplified_perimeter() {
    for stroke in assorted_strokes() {
        let analysis = analyze_stroke(&stroke, &test_config()).unwrap().unwrap();
        let wave = extract_wave(&analysis.first_polygon, &analysis.simplified)
            .unwrap()
            .unwrap();

        assert!((wave.perimeter - analysis.perimeter).abs() < 1e-6);
        assert!((wave.total_length() - analysis.perimeter).abs() < 1e-6);
        assert_eq!(wave.samples[0].arc_length, 0.0);
        for pair in wave.samples.windows(2) {
            assert!(pair[1].arc_length >= pair[0].arc_length);
        }
    }
}

#[test]
fn test_every_contour_point_is_sampled() {
    let analysis = analyze_stroke(&jittered_triangle_stroke(9), &test_config())
        .unwrap()
        .unwrap();
    let wave = extract_wave(&analysis.first_polygon, &analysis.simplified)
        .unwrap()
        .unwrap();
    // Each simplified vertex closes one run and opens the next.
    assert_eq!(
        wave.len(),
        analysis.first_polygon.len() + analysis.simplified.len()
    );
}

#[test]
fn test_clean_triangle_has_flat_wave() {
    let analysis = analyze_stroke(&triangle_stroke(), &test_config())
        .unwrap()
        .unwrap();
    let wave = extract_wave(&analysis.first_polygon, &analysis.simplified)
        .unwrap()
        .unwrap();
    assert!(wave.peak() < 1e-9);
    assert!(render_waveform(&wave, &small_render()).is_silent());
}

#[test]
fn test_unknown_vertex_escalates() {
    let contour = VertexLoop::from_points(&[
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
        Point::new(0.0, 10.0),
    ]);
    let simplified = VertexLoop::new(vec![
        Vertex::new(Point::new(0.0, 0.0), 0),
        Vertex::new(Point::new(10.0, 0.0), 1),
        Vertex::new(Point::new(0.0, 10.0), 7),
    ]);
    let err = extract_wave(&contour, &simplified).unwrap_err();
    assert!(matches!(err, WaveError::VertexNotFound { id: 7 }));
}

#[test]
fn test_ids_survive_translation() {
    let mut analysis = analyze_stroke(&jittered_triangle_stroke(11), &test_config())
        .unwrap()
        .unwrap();
    let before = extract_wave(&analysis.first_polygon, &analysis.simplified)
        .unwrap()
        .unwrap();

    analysis.translate(Point::new(250.0, -75.5));
    let after = extract_wave(&analysis.first_polygon, &analysis.simplified)
        .unwrap()
        .unwrap();

    assert_eq!(before.len(), after.len());
    for (a, b) in before.samples.iter().zip(&after.samples) {
        assert!((a.arc_length - b.arc_length).abs() < 1e-6);
        assert!((a.amplitude - b.amplitude).abs() < 1e-6);
    }
}

#[test]
fn test_degenerate_loops_yield_no_wave() {
    let pair = VertexLoop::from_points(&[Point::new(0.0, 0.0), Point::new(1.0, 0.0)]);
    let tri = VertexLoop::from_points(&[
        Point::new(0.0, 0.0),
        Point::new(1.0, 0.0),
        Point::new(0.0, 1.0),
    ]);
    assert!(extract_wave(&pair, &tri).unwrap().is_none());
    assert!(extract_wave(&tri, &pair).unwrap().is_none());
}

// ==================== Rendering Properties ====================

#[test]
fn test_rendered_samples_are_in_range() {
    for seed in [1, 2, 3] {
        let analysis = analyze_stroke(&jittered_triangle_stroke(seed), &test_config())
            .unwrap()
            .unwrap();
        let wave = extract_wave(&analysis.first_polygon, &analysis.simplified)
            .unwrap()
            .unwrap();
        let buffer = render_waveform(&wave, &small_render());

        assert_eq!(buffer.len(), 2048);
        assert_eq!(buffer.sample_rate, 44100);
        assert!(buffer.samples.iter().all(|s| (-1.0..=1.0).contains(s)));
        assert!(buffer.peak() <= 0.95 + 1e-6);
        assert!(buffer.peak() > 0.5, "peak {}", buffer.peak());
    }
}

#[test]
fn test_short_waves_are_silent() {
    let sample = |arc_length, amplitude| WaveSample {
        arc_length,
        amplitude,
        point: Point::ZERO,
        projected: Point::ZERO,
    };
    let two = Wave {
        samples: vec![sample(0.0, 3.0), sample(5.0, -3.0)],
        perimeter: 5.0,
    };
    let buffer = render_waveform(&two, &small_render());
    assert_eq!(buffer.len(), 2048);
    assert!(buffer.is_silent());

    let zero_length = Wave {
        samples: vec![sample(0.0, 1.0), sample(0.0, -1.0), sample(0.0, 2.0)],
        perimeter: 0.0,
    };
    assert!(render_waveform(&zero_length, &small_render()).is_silent());
}

// ==================== Harmonic Analysis ====================

#[test]
fn test_rendered_period_has_harmonics() {
    let analysis = analyze_stroke(&jittered_triangle_stroke(5), &test_config())
        .unwrap()
        .unwrap();
    let wave = extract_wave(&analysis.first_polygon, &analysis.simplified)
        .unwrap()
        .unwrap();
    let buffer = render_waveform(&wave, &small_render());

    let mut analyzer = HarmonicAnalyzer::new();
    let profile = analyzer.harmonic_profile(&buffer, 16);
    assert_eq!(profile.len(), 16);
    assert!(profile.iter().any(|&h| (h - 1.0).abs() < 1e-6));
    assert!(profile.iter().all(|&h| (0.0..=1.0 + 1e-6).contains(&h)));

    let expected = 44100.0 / 2048.0;
    assert!((fundamental_frequency(&buffer) - expected).abs() < 1e-3);
}
