//! Scene state shared by the input handlers and the render loop.

use crate::core::camera::Camera;
use crate::core::cloud::PointCloud;
use crate::core::config::{ConfigError, SceneConfig};
use crate::core::field::ConeParams;
use crate::core::orbit::OrbitController;
use crate::core::projector::{ContainerRect, PointerProjector};
use crate::core::surface::DeformableSurface;
use crate::core::tracker::InfluencePoint;
use crate::core::viewport::{Theme, Viewport};
use glam::{Mat4, Vec2, Vec3};

/// Everything a backend needs to draw one frame.
pub struct FrameView<'a> {
    pub viewport: Viewport,
    pub view_proj: Mat4,
    pub camera_right: Vec3,
    pub camera_up: Vec3,
    pub cloud_offset: Vec3,
    /// Ground positions, present only when they changed since the last frame.
    pub surface_positions: Option<&'a [[f32; 3]]>,
    pub clear_color: [f32; 4],
}

pub struct Scene {
    config: SceneConfig,
    cone: ConeParams,
    camera: Camera,
    orbit: OrbitController,
    projector: PointerProjector,
    viewport: Viewport,
    influence: InfluencePoint,
    surface: DeformableSurface,
    cloud: PointCloud,
    theme: Theme,
    last_pointer: Option<Vec2>,
    ticks: u64,
}

impl Scene {
    pub fn new(config: SceneConfig, viewport: Viewport, theme: Theme) -> Result<Self, ConfigError> {
        config.validate()?;
        let cone = config.cone_params();
        let camera = Camera::from_config(&config.camera, viewport.aspect());
        let orbit = OrbitController::new(&camera, config.orbit.clone());
        let resting = config.resting_position();
        let influence = InfluencePoint::new(resting);
        let mut surface = DeformableSurface::new(config.ground.size, config.ground.segments);
        surface.deform(resting, &cone);
        let cloud = PointCloud::icosphere(config.cloud_radius, config.cloud_detail, resting);

        log::debug!(
            "[scene] ground vertices={} cloud points={} viewport={}x{}",
            surface.vertex_count(),
            cloud.points().len(),
            viewport.width,
            viewport.height
        );

        Ok(Self {
            projector: PointerProjector::new(config.pick_plane_height),
            config,
            cone,
            camera,
            orbit,
            viewport,
            influence,
            surface,
            cloud,
            theme,
            last_pointer: None,
            ticks: 0,
        })
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn influence(&self) -> &InfluencePoint {
        &self.influence
    }

    pub fn surface(&self) -> &DeformableSurface {
        &self.surface
    }

    pub fn cloud(&self) -> &PointCloud {
        &self.cloud
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn orbit(&self) -> &OrbitController {
        &self.orbit
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn clear_color(&self) -> [f32; 4] {
        self.theme.clear_color(&self.config.look)
    }

    /// Pointer moved inside the container. Drags also feed the orbit.
    pub fn pointer_moved(&mut self, client: Vec2, rect: &ContainerRect) {
        if self.orbit.is_dragging() {
            if let Some(prev) = self.last_pointer {
                let d = client - prev;
                self.orbit.rotate_by_pixels(d.x, d.y, rect.height);
            }
        }
        self.last_pointer = Some(client);

        match self.projector.project(&self.camera, client, rect) {
            Some(hit) => self.influence.set_target(hit),
            None => log::debug!("[pointer] no plane hit at ({:.1},{:.1})", client.x, client.y),
        }
    }

    pub fn pointer_left(&mut self) {
        self.last_pointer = None;
        self.orbit.end_drag();
        self.influence.reset_to_rest();
    }

    pub fn drag_started(&mut self, client: Vec2) {
        self.last_pointer = Some(client);
        self.orbit.begin_drag();
    }

    pub fn drag_ended(&mut self) {
        self.orbit.end_drag();
    }

    pub fn wheel(&mut self, delta_y: f32) {
        self.orbit.zoom_by(delta_y);
    }

    /// Container resized; the camera aspect follows immediately so the next
    /// pointer projection already uses it.
    pub fn resized(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.viewport = Viewport::new(width, height);
        self.camera.set_aspect(width, height);
    }

    pub fn theme_changed(&mut self, dark: bool) {
        self.theme = Theme::from_dark_flag(dark);
    }

    /// One render-loop step: orbit, smoothing, cloud transform, ground.
    pub fn tick(&mut self) -> FrameView<'_> {
        self.ticks += 1;
        self.orbit.update(&mut self.camera);
        let center = self.influence.step(self.config.tracker_alpha);
        self.cloud.set_position(center);
        self.surface.deform(center, &self.cone);

        let (camera_right, camera_up) = self.camera.billboard_axes();
        let dirty = self.surface.take_dirty();
        FrameView {
            viewport: self.viewport,
            view_proj: self.camera.view_projection(),
            camera_right,
            camera_up,
            cloud_offset: center,
            surface_positions: dirty.then(|| self.surface.positions()),
            clear_color: self.clear_color(),
        }
    }
}
