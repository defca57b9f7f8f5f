use orientation_figure::{OverlayConfig, OverlayError, ViewportGeometry, ViewportRect};
use std::path::PathBuf;

#[test]
fn test_defaults_match_slider_defaults() {
    let config = OverlayConfig::default();
    assert!(!config.show_figure);
    assert_eq!(config.zoom, 35.0);
    assert_eq!(config.camera_distance(), 350.0);
    assert_eq!(config.viewport.start_width, 0.8);
    assert_eq!(config.viewport.finish_height, 0.3);
    assert_eq!(config.model_dir, PathBuf::from("Resources/Models"));
    assert!(config.prune_vanished_views);
}

#[test]
fn test_partial_toml_keeps_defaults() {
    let config = OverlayConfig::from_toml_str(
        r#"
        show_figure = true
        zoom = 12.0

        [viewport]
        start_width = 0.6
        finish_height = 0.4
        "#,
    )
    .expect("config should parse");

    assert!(config.show_figure);
    assert_eq!(config.camera_distance(), 120.0);
    assert_eq!(
        config.viewport.rect(),
        ViewportRect {
            left: 0.6,
            bottom: 0.0,
            right: 1.0,
            top: 0.4
        }
    );
    assert_eq!(config.zoom_multiplier, 10.0);
}

#[test]
fn test_viewport_table_with_single_key() {
    let config = OverlayConfig::from_toml_str("[viewport]\nstart_width = 0.6\n")
        .expect("config should parse");
    assert_eq!(config.viewport.start_width, 0.6);
    assert_eq!(config.viewport.finish_height, 0.3);

    let config = OverlayConfig::from_toml_str("[viewport]\nfinish_height = 0.45\n")
        .expect("config should parse");
    assert_eq!(config.viewport.start_width, 0.8);
    assert_eq!(config.viewport.finish_height, 0.45);
}

#[test]
fn test_out_of_range_values_rejected() {
    for source in [
        "zoom = 0.0",
        "zoom_multiplier = -1.0",
        "[viewport]\nstart_width = 1.0\nfinish_height = 0.3",
        "[viewport]\nstart_width = 0.8\nfinish_height = 0.0",
    ] {
        let err = OverlayConfig::from_toml_str(source).unwrap_err();
        assert!(
            matches!(err, OverlayError::InvalidSetting { .. }),
            "{source}: {err}"
        );
    }
}

#[test]
fn test_malformed_toml() {
    let err = OverlayConfig::from_toml_str("zoom = \"far\"").unwrap_err();
    assert!(matches!(err, OverlayError::Config(_)));
}

#[test]
fn test_load_from_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("overlay.toml");
    std::fs::write(&path, "model_dir = \"figure\"\nprune_vanished_views = false\n")
        .expect("write config");

    let config = OverlayConfig::load(&path).expect("config should load");
    assert_eq!(config.model_dir, PathBuf::from("figure"));
    assert!(!config.prune_vanished_views);
}

#[test]
fn test_load_missing_file() {
    let err = OverlayConfig::load("does/not/exist.toml").unwrap_err();
    assert!(matches!(err, OverlayError::Io(_)));
}

#[test]
fn test_viewport_fraction_setters() {
    let mut geometry = ViewportGeometry::default();
    geometry.set_width_fraction(0.5).expect("valid width");
    geometry.set_height_fraction(0.25).expect("valid height");
    assert_eq!(geometry.start_width, 0.5);
    assert_eq!(geometry.width_fraction(), 0.5);
    assert_eq!(geometry.finish_height, 0.25);

    assert!(geometry.set_width_fraction(0.0).is_err());
    assert!(geometry.set_height_fraction(1.5).is_err());
    assert_eq!(geometry.start_width, 0.5);
}
