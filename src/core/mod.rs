pub mod camera;
pub mod cloud;
pub mod config;
pub mod field;
pub mod orbit;
pub mod projector;
pub mod runtime;
pub mod scene;
pub mod surface;
pub mod tracker;
pub mod viewport;

pub use camera::{Camera, Ray};
pub use cloud::{icosphere_points, PointCloud};
pub use config::{ConfigError, SceneConfig};
pub use field::{cone_field, smooth_blend, ConeParams};
pub use orbit::OrbitController;
pub use projector::{intersect_horizontal_plane, pointer_to_ndc, ContainerRect, PointerProjector};
pub use runtime::{
    EffectError, EffectHandle, FrameScheduler, LoopToken, RenderBackend, RenderLoop, SceneInputs,
    Subscription,
};
pub use scene::{FrameView, Scene};
pub use surface::DeformableSurface;
pub use tracker::InfluencePoint;
pub use viewport::{Theme, Viewport};

// Shaders bundled as string constants
pub static POINTS_WGSL: &str = include_str!("../../shaders/points.wgsl");
