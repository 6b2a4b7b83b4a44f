use wgpu;
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct PointUniforms {
    pub(crate) view_proj: [[f32; 4]; 4],
    pub(crate) right_size: [f32; 4],
    pub(crate) up: [f32; 4],
    pub(crate) offset: [f32; 4],
    pub(crate) color: [f32; 4],
}

/// One instanced point set: positions, per-set uniforms and bind group.
pub(crate) struct PointSet {
    pub(crate) vertex_buffer: wgpu::Buffer,
    pub(crate) count: u32,
    pub(crate) uniform_buffer: wgpu::Buffer,
    pub(crate) bind_group: wgpu::BindGroup,
    pub(crate) size: f32,
    pub(crate) color: [f32; 4],
}

pub(crate) fn create_points_bgl(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("points_bgl"),
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        }],
    })
}

/// `dynamic` sets get `COPY_DST` so their positions can be rewritten per frame.
pub(crate) fn create_point_set(
    device: &wgpu::Device,
    bgl: &wgpu::BindGroupLayout,
    label: &str,
    positions: &[[f32; 3]],
    dynamic: bool,
    size: f32,
    color: [f32; 4],
) -> PointSet {
    let mut usage = wgpu::BufferUsages::VERTEX;
    if dynamic {
        usage |= wgpu::BufferUsages::COPY_DST;
    }
    let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some(label),
        contents: bytemuck::cast_slice(positions),
        usage,
    });
    let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("points_uniforms"),
        size: std::mem::size_of::<PointUniforms>() as u64,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("points_bg"),
        layout: bgl,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: uniform_buffer.as_entire_binding(),
        }],
    });
    PointSet {
        vertex_buffer,
        count: positions.len() as u32,
        uniform_buffer,
        bind_group,
        size,
        color,
    }
}

impl PointSet {
    pub(crate) fn destroy(&self) {
        self.vertex_buffer.destroy();
        self.uniform_buffer.destroy();
    }
}
