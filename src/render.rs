use crate::constants::rgb_hex;
use crate::core::{FrameView, RenderBackend, Scene};
use instant::Instant;
use web_sys as web;

mod helpers;
mod points;

use points::{create_point_set, create_points_bgl, PointSet, PointUniforms};

const FPS_LOG_INTERVAL_SEC: f32 = 5.0;

// ===================== WebGPU state =====================

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    pipeline: wgpu::RenderPipeline,
    depth_tex: wgpu::Texture,
    depth_view: wgpu::TextureView,
    cloud: PointSet,
    ground: PointSet,
    srgb: bool,
    width: u32,
    height: u32,
    last_instant: Instant,
    fps_window: f32,
    fps_frames: u32,
}

impl GpuState {
    /// Acquire a GPU device for `canvas` and upload the scene's point sets.
    ///
    /// Fails when neither WebGPU nor WebGL2 is usable; the caller treats that
    /// as "skip the effect".
    pub async fn new(canvas: &web::HtmlCanvasElement, scene: &Scene) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No GPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // WebGL2 limits so the same build runs where WebGPU is missing
                    required_limits: wgpu::Limits::downlevel_webgl2_defaults()
                        .using_resolution(adapter.limits()),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        let srgb = format.is_srgb();

        let (depth_tex, depth_view) = helpers::create_depth_texture(&device, width, height);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("points_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::core::POINTS_WGSL.into()),
        });
        let bgl = create_points_bgl(&device);
        let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("points_pl"),
            bind_group_layouts: &[&bgl],
            push_constant_ranges: &[],
        });
        let pipeline = helpers::make_points_pipeline(&device, &pl, &shader, format);

        let look = &scene.config().look;
        let color = |hex: u32| {
            let c = rgb_hex(hex);
            if srgb {
                helpers::srgb_to_linear(c)
            } else {
                c
            }
        };
        let cloud = create_point_set(
            &device,
            &bgl,
            "cloud_points",
            scene.cloud().points(),
            false,
            look.cloud_point_size,
            color(look.cloud_color),
        );
        let ground = create_point_set(
            &device,
            &bgl,
            "ground_points",
            scene.surface().positions(),
            true,
            look.ground_point_size,
            color(look.ground_color),
        );
        log::info!(
            "[gpu] format={:?} {}x{} cloud={} ground={}",
            format,
            width,
            height,
            cloud.count,
            ground.count
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            pipeline,
            depth_tex,
            depth_view,
            cloud,
            ground,
            srgb,
            width,
            height,
            last_instant: Instant::now(),
            fps_window: 0.0,
            fps_frames: 0,
        })
    }

    fn write_uniforms(&self, set: &PointSet, frame: &FrameView<'_>, offset: glam::Vec3) {
        let u = PointUniforms {
            view_proj: frame.view_proj.to_cols_array_2d(),
            right_size: frame.camera_right.extend(set.size).to_array(),
            up: frame.camera_up.extend(0.0).to_array(),
            offset: offset.extend(0.0).to_array(),
            color: set.color,
        };
        self.queue
            .write_buffer(&set.uniform_buffer, 0, bytemuck::bytes_of(&u));
    }

    fn track_frame_rate(&mut self) {
        let now = Instant::now();
        self.fps_window += (now - self.last_instant).as_secs_f32();
        self.last_instant = now;
        self.fps_frames += 1;
        if self.fps_window >= FPS_LOG_INTERVAL_SEC {
            log::debug!("[gpu] {:.1} fps", self.fps_frames as f32 / self.fps_window);
            self.fps_window = 0.0;
            self.fps_frames = 0;
        }
    }
}

impl RenderBackend for GpuState {
    fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            self.depth_tex.destroy();
            (self.depth_tex, self.depth_view) =
                helpers::create_depth_texture(&self.device, width, height);
            log::debug!("[gpu] resized to {}x{}", width, height);
        }
    }

    fn draw(&mut self, frame: &FrameView<'_>) -> anyhow::Result<()> {
        self.track_frame_rate();
        if let Some(positions) = frame.surface_positions {
            self.queue.write_buffer(
                &self.ground.vertex_buffer,
                0,
                bytemuck::cast_slice(positions),
            );
        }
        self.write_uniforms(&self.cloud, frame, frame.cloud_offset);
        self.write_uniforms(&self.ground, frame, glam::Vec3::ZERO);

        let clear = if self.srgb {
            helpers::srgb_to_linear(frame.clear_color)
        } else {
            frame.clear_color
        };
        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: clear[0] as f64,
                            g: clear[1] as f64,
                            b: clear[2] as f64,
                            a: clear[3] as f64,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Discard,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.pipeline);
            for set in [&self.cloud, &self.ground] {
                rpass.set_bind_group(0, &set.bind_group, &[]);
                rpass.set_vertex_buffer(0, set.vertex_buffer.slice(..));
                rpass.draw(0..6, 0..set.count);
            }
        }
        self.queue.submit(Some(encoder.finish()));
        output.present();
        Ok(())
    }

    fn dispose(&mut self) {
        self.cloud.destroy();
        self.ground.destroy();
        self.depth_tex.destroy();
        log::debug!("[gpu] resources released");
    }
}
