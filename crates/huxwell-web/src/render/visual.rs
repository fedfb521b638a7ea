use super::helpers::{create_uniform_buffer, create_vertex_buffer};
use huxwell_core::{GpuLineVertex, GpuPoint, SceneUniforms, ShadingParams};
use wgpu;

/// GPU-side state of one visualization: its uniforms and static geometry.
pub(crate) struct VisualResources {
    label: &'static str,
    pub(crate) base_scale: f32,
    scene_buffer: wgpu::Buffer,
    _params_buffer: wgpu::Buffer,
    pub(crate) bind_group: wgpu::BindGroup,
    pub(crate) instance_buffer: wgpu::Buffer,
    pub(crate) instance_count: u32,
    pub(crate) line_buffer: Option<wgpu::Buffer>,
    pub(crate) line_vertex_count: u32,
}

impl VisualResources {
    pub(crate) fn new(
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        label: &'static str,
        base_scale: f32,
        params: &ShadingParams,
        points: &[GpuPoint],
        lines: &[GpuLineVertex],
    ) -> Self {
        let scene_buffer = create_uniform_buffer(device, label, &SceneUniforms::default());
        let params_buffer = create_uniform_buffer(device, label, params);
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(label),
            layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: scene_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: params_buffer.as_entire_binding(),
                },
            ],
        });
        let instance_buffer = create_vertex_buffer(device, label, points);
        let line_buffer = (!lines.is_empty()).then(|| create_vertex_buffer(device, label, lines));
        log::info!(
            "[render] {} uploaded points={} line_vertices={}",
            label,
            points.len(),
            lines.len()
        );
        Self {
            label,
            base_scale,
            scene_buffer,
            _params_buffer: params_buffer,
            bind_group,
            instance_buffer,
            instance_count: points.len() as u32,
            line_buffer,
            line_vertex_count: lines.len() as u32,
        }
    }

    pub(crate) fn label(&self) -> &'static str {
        self.label
    }

    pub(crate) fn write_uniforms(&self, queue: &wgpu::Queue, uniforms: &SceneUniforms) {
        queue.write_buffer(&self.scene_buffer, 0, bytemuck::bytes_of(uniforms));
    }
}
