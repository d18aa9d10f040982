// Host-side tests for TOML configuration loading.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod spectrum {
        include!("../src/core/spectrum.rs");
    }
    pub mod mapper {
        include!("../src/core/mapper.rs");
    }
    pub mod layout {
        include!("../src/core/layout.rs");
    }
    pub mod config {
        include!("../src/core/config.rs");
    }
}

use crate::core::config::*;
use crate::core::constants::*;
use crate::core::layout::VisualMode;

#[test]
fn empty_document_yields_defaults() {
    let cfg = VisualizerConfig::from_toml_str("").unwrap();
    assert_eq!(cfg, VisualizerConfig::default());
    assert_eq!(cfg.mode, VisualMode::Bars2d);
    assert_eq!(cfg.fft_size, DEFAULT_FFT_SIZE);
    assert!(cfg.tracks.is_empty());
}

#[test]
fn full_document_overrides_fields() {
    let text = r#"
        mode = "bars3d"
        fft_size = 128
        height_scale = 0.08
        height_floor = 0.2
        mirrored = true
        tracks = ["./samples/sample0.mp3", "./samples/sample1.mp3"]
        bar_color = [0.1, 0.2, 0.3]
        bar_spacing = 0.2

        [camera]
        distance = 20.0
        orbit_speed = 0.0
    "#;
    let cfg = VisualizerConfig::from_toml_str(text).unwrap();
    assert_eq!(cfg.mode, VisualMode::Bars3d);
    assert_eq!(cfg.fft_size, 128);
    assert!(cfg.mirrored);
    assert_eq!(cfg.tracks.len(), 2);
    assert_eq!(cfg.bar_color, [0.1, 0.2, 0.3]);
    assert_eq!(cfg.camera.distance, 20.0);
    assert_eq!(cfg.camera.height, DEFAULT_CAMERA_HEIGHT);
    let m = cfg.height_mapping();
    assert_eq!((m.scale, m.floor), (0.08, 0.2));
    assert_eq!(cfg.scene_params().spacing, 0.2);
}

#[test]
fn mapping_defaults_depend_on_mode() {
    let bars2d = VisualizerConfig::default().height_mapping();
    assert_eq!((bars2d.scale, bars2d.floor), (BAR2D_HEIGHT_SCALE, BAR2D_HEIGHT_FLOOR));
    let particles = VisualizerConfig::from_toml_str("mode = \"particles\"")
        .unwrap()
        .height_mapping();
    assert_eq!(
        (particles.scale, particles.floor),
        (DEFAULT_HEIGHT_SCALE, DEFAULT_HEIGHT_FLOOR)
    );
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let err = VisualizerConfig::from_toml_str("mode = ").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
    let err = VisualizerConfig::from_toml_str("mode = \"spiral\"").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn invalid_values_are_rejected() {
    for text in [
        "fft_size = 100",
        "fft_size = 16",
        "height_scale = -1.0",
        "height_floor = -0.5",
        "bar_spacing = 0.0",
        "particles_per_bin = 0",
        "[camera]\ndistance = 0.0",
    ] {
        let err = VisualizerConfig::from_toml_str(text).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)), "{text} should be invalid");
    }
}
