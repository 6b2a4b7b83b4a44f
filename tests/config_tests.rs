// Host-side tests for scene configuration and its defaults.

use hero_field::constants::*;
use hero_field::core::{ConfigError, Scene, SceneConfig, Theme, Viewport};

#[test]
#[allow(clippy::assertions_on_constants)]
fn defaults_are_consistent() {
    assert!(CONE_RADIUS > CONE_HEIGHT.abs());
    assert!(BLEND_SMOOTHNESS > 0.0);
    assert!(TRACKER_ALPHA > 0.0 && TRACKER_ALPHA < 1.0);
    assert!(ORBIT_DAMPING > 0.0 && ORBIT_DAMPING <= 1.0);
    assert!(CAMERA_FAR > CAMERA_NEAR);
    assert!(ORBIT_MIN_DISTANCE <= CAMERA_DISTANCE && CAMERA_DISTANCE <= ORBIT_MAX_DISTANCE);
    assert_ne!(CLEAR_COLOR_DARK, CLEAR_COLOR_LIGHT);
}

#[test]
fn default_config_validates() {
    assert_eq!(SceneConfig::default().validate(), Ok(()));
}

#[test]
fn rgb_hex_unpacks_channels() {
    let c = rgb_hex(0x0055ff);
    assert_eq!(c[0], 0.0);
    assert!((c[1] - 0x55 as f32 / 255.0).abs() < 1e-6);
    assert_eq!(c[2], 1.0);
    assert_eq!(c[3], 1.0);
    assert_eq!(rgb_hex(0xffffff), [1.0, 1.0, 1.0, 1.0]);
}

#[test]
fn cone_radius_must_exceed_height() {
    let mut cfg = SceneConfig::default();
    cfg.ground.cone_radius = 3.0;
    cfg.ground.cone_height = -3.0;
    assert!(matches!(cfg.validate(), Err(ConfigError::ConeRadius { .. })));
    cfg.ground.cone_height = 0.0;
    assert_eq!(cfg.validate(), Err(ConfigError::ConeHeightZero));
}

#[test]
fn rejects_out_of_range_values() {
    let mut cfg = SceneConfig::default();
    cfg.tracker_alpha = 1.0;
    assert_eq!(cfg.validate(), Err(ConfigError::TrackerAlpha(1.0)));

    let mut cfg = SceneConfig::default();
    cfg.ground.smoothness = 0.0;
    assert_eq!(cfg.validate(), Err(ConfigError::Smoothness(0.0)));

    let mut cfg = SceneConfig::default();
    cfg.ground.segments = 0;
    assert_eq!(cfg.validate(), Err(ConfigError::Ground));

    let mut cfg = SceneConfig::default();
    cfg.orbit.damping = 0.0;
    assert_eq!(cfg.validate(), Err(ConfigError::Damping(0.0)));

    let mut cfg = SceneConfig::default();
    cfg.camera.far = cfg.camera.near;
    assert!(matches!(cfg.validate(), Err(ConfigError::Projection { .. })));

    let mut cfg = SceneConfig::default();
    cfg.orbit.max_distance = 1.0;
    assert!(matches!(cfg.validate(), Err(ConfigError::DistanceRange { .. })));
}

#[test]
fn json_overrides_keep_other_defaults() {
    let cfg = SceneConfig::from_json(r#"{"tracker_alpha": 0.2, "ground": {"segments": 10}}"#)
        .expect("valid override");
    assert_eq!(cfg.tracker_alpha, 0.2);
    assert_eq!(cfg.ground.segments, 10);
    assert_eq!(cfg.ground.cone_radius, CONE_RADIUS);
    assert_eq!(cfg.resting_position, RESTING_POSITION);
}

#[test]
fn json_errors_are_reported() {
    assert!(matches!(
        SceneConfig::from_json("{not json"),
        Err(ConfigError::Parse(_))
    ));
    assert!(matches!(
        SceneConfig::from_json(r#"{"ground": {"cone_radius": 1.0}}"#),
        Err(ConfigError::ConeRadius { .. })
    ));
}

#[test]
fn scene_refuses_invalid_config() {
    let mut cfg = SceneConfig::default();
    cfg.ground.cone_radius = 2.0;
    assert!(Scene::new(cfg, Viewport::new(800, 600), Theme::Dark).is_err());
}

#[test]
fn oversized_meshes_are_rejected_up_front() {
    assert_eq!(
        SceneConfig::from_json(r#"{"ground": {"segments": 70000}}"#).err(),
        Some(ConfigError::GroundSegments {
            segments: 70000,
            max: GROUND_MAX_SEGMENTS,
        })
    );
    assert_eq!(
        SceneConfig::from_json(r#"{"cloud_detail": 70000}"#).err(),
        Some(ConfigError::CloudDetail {
            detail: 70000,
            max: CLOUD_MAX_DETAIL,
        })
    );

    let mut cfg = SceneConfig::default();
    cfg.ground.segments = u32::MAX;
    assert!(Scene::new(cfg, Viewport::new(800, 600), Theme::Dark).is_err());

    let mut cfg = SceneConfig::default();
    cfg.cloud_detail = u32::MAX;
    assert!(Scene::new(cfg, Viewport::new(800, 600), Theme::Dark).is_err());
}

#[test]
fn mesh_limits_are_accepted() {
    let mut cfg = SceneConfig::default();
    cfg.ground.segments = GROUND_MAX_SEGMENTS;
    cfg.cloud_detail = CLOUD_MAX_DETAIL;
    assert_eq!(cfg.validate(), Ok(()));
}

#[test]
fn log_level_follows_build_profile() {
    let expected = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    assert_eq!(LOG_LEVEL, expected);
}
