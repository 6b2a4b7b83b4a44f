use crate::constants::*;
use crate::core::field::ConeParams;
use glam::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("cone radius {radius} must exceed |cone height| {height}")]
    ConeRadius { radius: f32, height: f32 },
    #[error("cone height must be non-zero")]
    ConeHeightZero,
    #[error("blend smoothness must be positive, got {0}")]
    Smoothness(f32),
    #[error("tracker alpha must lie in (0, 1), got {0}")]
    TrackerAlpha(f32),
    #[error("orbit damping must lie in (0, 1], got {0}")]
    Damping(f32),
    #[error("ground needs at least one segment and a positive size")]
    Ground,
    #[error("ground segments {segments} exceed the limit of {max}")]
    GroundSegments { segments: u32, max: u32 },
    #[error("cloud detail {detail} exceeds the limit of {max}")]
    CloudDetail { detail: u32, max: u32 },
    #[error("cloud radius must be positive, got {0}")]
    CloudRadius(f32),
    #[error("invalid camera projection (fov {fov}, near {near}, far {far})")]
    Projection { fov: f32, near: f32, far: f32 },
    #[error("orbit distance range {min}..{max} is empty")]
    DistanceRange { min: f32, max: f32 },
    #[error("config parse error: {0}")]
    Parse(String),
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub fov_deg: f32,
    pub near: f32,
    pub far: f32,
    /// Start direction from the focus point; rescaled to `distance`.
    pub start_dir: [f32; 3],
    pub distance: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_deg: CAMERA_FOV_DEG,
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            start_dir: CAMERA_START_DIR,
            distance: CAMERA_DISTANCE,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbitConfig {
    pub enabled: bool,
    pub damping: f32,
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    pub min_distance: f32,
    pub max_distance: f32,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            damping: ORBIT_DAMPING,
            rotate_speed: ORBIT_ROTATE_SPEED,
            zoom_speed: ORBIT_ZOOM_SPEED,
            min_distance: ORBIT_MIN_DISTANCE,
            max_distance: ORBIT_MAX_DISTANCE,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct GroundConfig {
    pub size: f32,
    pub segments: u32,
    pub base_height: f32,
    pub cone_height: f32,
    pub cone_radius: f32,
    pub smoothness: f32,
}

impl Default for GroundConfig {
    fn default() -> Self {
        Self {
            size: GROUND_SIZE,
            segments: GROUND_SEGMENTS,
            base_height: GROUND_BASE_HEIGHT,
            cone_height: CONE_HEIGHT,
            cone_radius: CONE_RADIUS,
            smoothness: BLEND_SMOOTHNESS,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct LookConfig {
    pub cloud_point_size: f32,
    pub ground_point_size: f32,
    pub cloud_color: u32,
    pub ground_color: u32,
    pub clear_dark: u32,
    pub clear_light: u32,
}

impl Default for LookConfig {
    fn default() -> Self {
        Self {
            cloud_point_size: CLOUD_POINT_SIZE,
            ground_point_size: GROUND_POINT_SIZE,
            cloud_color: CLOUD_COLOR,
            ground_color: GROUND_COLOR,
            clear_dark: CLEAR_COLOR_DARK,
            clear_light: CLEAR_COLOR_LIGHT,
        }
    }
}

/// Everything the scene needs to be built, validated once before use.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub camera: CameraConfig,
    pub orbit: OrbitConfig,
    pub ground: GroundConfig,
    pub look: LookConfig,
    pub tracker_alpha: f32,
    pub pick_plane_height: f32,
    pub resting_position: [f32; 3],
    pub cloud_radius: f32,
    pub cloud_detail: u32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            camera: CameraConfig::default(),
            orbit: OrbitConfig::default(),
            ground: GroundConfig::default(),
            look: LookConfig::default(),
            tracker_alpha: TRACKER_ALPHA,
            pick_plane_height: PICK_PLANE_HEIGHT,
            resting_position: RESTING_POSITION,
            cloud_radius: CLOUD_RADIUS,
            cloud_detail: CLOUD_DETAIL,
        }
    }
}

impl SceneConfig {
    /// Parse a partial JSON override on top of the defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let cfg: SceneConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let g = &self.ground;
        if g.cone_height == 0.0 {
            return Err(ConfigError::ConeHeightZero);
        }
        if !(g.cone_radius > g.cone_height.abs()) {
            return Err(ConfigError::ConeRadius {
                radius: g.cone_radius,
                height: g.cone_height,
            });
        }
        if !(g.smoothness > 0.0) {
            return Err(ConfigError::Smoothness(g.smoothness));
        }
        if g.segments == 0 || !(g.size > 0.0) {
            return Err(ConfigError::Ground);
        }
        if g.segments > GROUND_MAX_SEGMENTS {
            return Err(ConfigError::GroundSegments {
                segments: g.segments,
                max: GROUND_MAX_SEGMENTS,
            });
        }
        if !(self.tracker_alpha > 0.0 && self.tracker_alpha < 1.0) {
            return Err(ConfigError::TrackerAlpha(self.tracker_alpha));
        }
        if !(self.orbit.damping > 0.0 && self.orbit.damping <= 1.0) {
            return Err(ConfigError::Damping(self.orbit.damping));
        }
        if !(self.orbit.min_distance > 0.0 && self.orbit.max_distance >= self.orbit.min_distance) {
            return Err(ConfigError::DistanceRange {
                min: self.orbit.min_distance,
                max: self.orbit.max_distance,
            });
        }
        if !(self.cloud_radius > 0.0) {
            return Err(ConfigError::CloudRadius(self.cloud_radius));
        }
        if self.cloud_detail > CLOUD_MAX_DETAIL {
            return Err(ConfigError::CloudDetail {
                detail: self.cloud_detail,
                max: CLOUD_MAX_DETAIL,
            });
        }
        let c = &self.camera;
        if !(c.fov_deg > 0.0 && c.fov_deg < 180.0 && c.near > 0.0 && c.far > c.near) {
            return Err(ConfigError::Projection {
                fov: c.fov_deg,
                near: c.near,
                far: c.far,
            });
        }
        Ok(())
    }

    pub fn cone_params(&self) -> ConeParams {
        let g = &self.ground;
        ConeParams::new(g.base_height, g.cone_height, g.cone_radius, g.smoothness)
    }

    pub fn resting_position(&self) -> Vec3 {
        Vec3::from(self.resting_position)
    }
}
