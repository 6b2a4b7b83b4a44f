/// Scene tuning defaults.
///
/// These reproduce the reference hero scene and seed `SceneConfig::default()`.
/// Hosts override them through the JSON config passed to `mount`.

// Camera
pub const CAMERA_FOV_DEG: f32 = 60.0;
pub const CAMERA_NEAR: f32 = 1.0;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_START_DIR: [f32; 3] = [25.0, 10.0, 15.0]; // rescaled to CAMERA_DISTANCE
pub const CAMERA_DISTANCE: f32 = 25.0;

// Orbit controller
pub const ORBIT_DAMPING: f32 = 0.05; // fraction of pending motion applied per tick
pub const ORBIT_ROTATE_SPEED: f32 = 1.0;
pub const ORBIT_ZOOM_SPEED: f32 = 1.0;
pub const ORBIT_MIN_DISTANCE: f32 = 5.0;
pub const ORBIT_MAX_DISTANCE: f32 = 200.0;
pub const ORBIT_POLAR_EPS: f32 = 1e-3; // keeps phi away from the poles

// Influence point
pub const TRACKER_ALPHA: f32 = 0.1; // current += alpha * (target - current)
pub const PICK_PLANE_HEIGHT: f32 = 0.0;
pub const RESTING_POSITION: [f32; 3] = [0.0, 1.5, -15.0];

// Ground
pub const GROUND_SIZE: f32 = 100.0;
pub const GROUND_SEGMENTS: u32 = 100;
pub const GROUND_MAX_SEGMENTS: u32 = 1024; // keeps (segments + 1)² vertices well inside u32
pub const GROUND_BASE_HEIGHT: f32 = 3.0;
pub const CONE_HEIGHT: f32 = -3.0; // negative: the bump dips below the base plane
pub const CONE_RADIUS: f32 = 5.0;
pub const BLEND_SMOOTHNESS: f32 = 15.0;

// Point cloud
pub const CLOUD_RADIUS: f32 = 5.0;
pub const CLOUD_DETAIL: u32 = 12;
pub const CLOUD_MAX_DETAIL: u32 = 128;

// Look
pub const CLOUD_POINT_SIZE: f32 = 0.15;
pub const GROUND_POINT_SIZE: f32 = 0.1;
pub const CLOUD_COLOR: u32 = 0x0055ff;
pub const GROUND_COLOR: u32 = 0x3388aa;
pub const CLEAR_COLOR_DARK: u32 = 0x0a0a0a;
pub const CLEAR_COLOR_LIGHT: u32 = 0xffffff;

// Debug builds show lifecycle, resize and frame-rate logs; release keeps info and up.
#[cfg(debug_assertions)]
pub const LOG_LEVEL: log::Level = log::Level::Debug;
#[cfg(not(debug_assertions))]
pub const LOG_LEVEL: log::Level = log::Level::Info;

// Class on <html> that marks the dark theme
pub const DARK_CLASS: &str = "dark";

/// Unpack a `0xRRGGBB` colour into `[r, g, b, 1.0]` floats in 0..1.
#[inline]
pub fn rgb_hex(hex: u32) -> [f32; 4] {
    [
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
        1.0,
    ]
}
