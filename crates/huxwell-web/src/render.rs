mod helpers;
mod visual;

use helpers::{
    create_scene_bind_group_layout, create_vertex_buffer, make_scene_pipeline, QUAD_CORNERS,
};
use huxwell_core::constants::ORGANIC_BASE_SCALE;
use huxwell_core::{
    BrainGeometry, Camera, FrameOutput, GlobeGeometry, GpuLineVertex, GpuPoint, Rotation,
    SceneError, SceneResult, SceneUniforms, ShadingParams, LINES_WGSL, POINTS_WGSL,
};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use visual::VisualResources;
use web_sys as web;

const POINT_ATTRS: [wgpu::VertexAttribute; 4] = wgpu::vertex_attr_array![
    1 => Float32x4,
    2 => Float32x4,
    3 => Float32x4,
    4 => Float32,
];
const CORNER_ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x2];
const LINE_ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
    0 => Float32x4,
    1 => Float32x4,
];

pub struct GpuState {
    _instance: wgpu::Instance,
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    points_pipeline: wgpu::RenderPipeline,
    lines_pipeline: wgpu::RenderPipeline,
    quad_buffer: wgpu::Buffer,
    globe: VisualResources,
    brain: VisualResources,
    camera: Camera,
    width: u32,
    height: u32,
    clear_color: wgpu::Color,
    device_lost: Arc<AtomicBool>,
}

impl GpuState {
    pub async fn new(
        canvas: &web::HtmlCanvasElement,
        globe: &GlobeGeometry,
        brain: &BrainGeometry,
    ) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        // WebGPU when the browser can hand out an adapter, WebGL2 otherwise.
        // A canvas takes one context type, so the surface is created once.
        let instance = wgpu::util::new_instance_with_webgpu_detection(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        })
        .await;
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("no WebGPU or WebGL2 adapter"))?;
        let info = adapter.get_info();
        log::info!("[render] adapter {:?} ({})", info.backend, info.name);
        let required_limits = if info.backend == wgpu::Backend::Gl {
            wgpu::Limits::downlevel_webgl2_defaults().using_resolution(adapter.limits())
        } else {
            wgpu::Limits::default()
        };
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits,
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;

        let device_lost = Arc::new(AtomicBool::new(false));
        {
            let flag = device_lost.clone();
            device.set_device_lost_callback(move |reason, message| {
                log::warn!("[render] device lost ({:?}): {}", reason, message);
                flag.store(true, Ordering::SeqCst);
            });
        }

        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8Unorm | wgpu::TextureFormat::Rgba8Unorm
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

        let bgl = create_scene_bind_group_layout(&device);
        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("scene_pl"),
            bind_group_layouts: &[&bgl],
            push_constant_ranges: &[],
        });

        let points_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("points_shader"),
            source: wgpu::ShaderSource::Wgsl(POINTS_WGSL.into()),
        });
        let points_pipeline = make_scene_pipeline(
            &device,
            "points_pipeline",
            &layout,
            &points_shader,
            &[
                wgpu::VertexBufferLayout {
                    array_stride: (std::mem::size_of::<f32>() * 2) as u64,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &CORNER_ATTRS,
                },
                wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<GpuPoint>() as u64,
                    step_mode: wgpu::VertexStepMode::Instance,
                    attributes: &POINT_ATTRS,
                },
            ],
            wgpu::PrimitiveTopology::TriangleList,
            format,
        );

        let lines_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("lines_shader"),
            source: wgpu::ShaderSource::Wgsl(LINES_WGSL.into()),
        });
        let lines_pipeline = make_scene_pipeline(
            &device,
            "lines_pipeline",
            &layout,
            &lines_shader,
            &[wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<GpuLineVertex>() as u64,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &LINE_ATTRS,
            }],
            wgpu::PrimitiveTopology::LineList,
            format,
        );

        let quad_buffer = create_vertex_buffer(&device, "quad_corners", &QUAD_CORNERS);
        let globe = VisualResources::new(
            &device,
            &bgl,
            "globe",
            1.0,
            &ShadingParams::globe(),
            &globe.point_instances(),
            &globe.line_vertices(),
        );
        let brain = VisualResources::new(
            &device,
            &bgl,
            "brain",
            ORGANIC_BASE_SCALE,
            &ShadingParams::brain(),
            &brain.point_instances(),
            &[],
        );

        Ok(Self {
            _instance: instance,
            surface,
            device,
            queue,
            config,
            points_pipeline,
            lines_pipeline,
            quad_buffer,
            globe,
            brain,
            camera: Camera::with_viewport(width, height),
            width,
            height,
            clear_color: wgpu::Color::BLACK,
            device_lost,
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            self.camera = Camera::with_viewport(width, height);
        }
    }

    /// Set from the device-lost callback; every GPU object is unusable after.
    pub fn is_device_lost(&self) -> bool {
        self.device_lost.load(Ordering::SeqCst)
    }

    /// Reconfigure the surface after it was lost or went stale.
    pub fn recover(&mut self) {
        log::warn!("[render] reconfiguring surface {}x{}", self.width, self.height);
        self.surface.configure(&self.device, &self.config);
    }

    fn uniforms(
        &self,
        out: &FrameOutput,
        rotation: &Rotation,
        base_scale: f32,
        blend_scale: f32,
        pixel_ratio: f32,
    ) -> SceneUniforms {
        let s = &out.state;
        SceneUniforms {
            view_proj: self.camera.view_proj().to_cols_array_2d(),
            model: s.model(rotation, base_scale, blend_scale).to_cols_array_2d(),
            pointer: s.pointer.to_array(),
            resolution: [self.width as f32, self.height as f32],
            time: s.time,
            progress: s.progress,
            pixel_ratio,
            milestone_glow: s.milestone_glow,
        }
    }

    /// Draw one frame. Only a lost or outdated surface is reported; other
    /// acquisition failures skip the frame.
    pub fn render(&mut self, out: &FrameOutput, pixel_ratio: f32) -> SceneResult<()> {
        if self.is_device_lost() {
            return Err(SceneError::ContextLost("device lost".into()));
        }
        let frame = match self.surface.get_current_texture() {
            Ok(frame) => frame,
            Err(e @ (wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated)) => {
                return Err(SceneError::ContextLost(format!("{:?}", e)));
            }
            Err(e) => {
                log::warn!("[render] skipping frame: {:?}", e);
                return Ok(());
            }
        };
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let globe_visible = out.world_visible;
        let brain_visible = out.mind_visible;
        if globe_visible {
            let u = self.uniforms(
                out,
                &out.state.globe_rotation,
                self.globe.base_scale,
                out.world_scale,
                pixel_ratio,
            );
            self.globe.write_uniforms(&self.queue, &u);
        }
        if brain_visible {
            let u = self.uniforms(
                out,
                &out.state.brain_rotation,
                self.brain.base_scale,
                out.mind_scale,
                pixel_ratio,
            );
            self.brain.write_uniforms(&self.queue, &u);
        }

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
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            let visible = [(&self.globe, globe_visible), (&self.brain, brain_visible)];
            for (visual, shown) in visible {
                if !shown {
                    continue;
                }
                rpass.set_bind_group(0, &visual.bind_group, &[]);
                if let Some(lines) = &visual.line_buffer {
                    rpass.set_pipeline(&self.lines_pipeline);
                    rpass.set_vertex_buffer(0, lines.slice(..));
                    rpass.draw(0..visual.line_vertex_count, 0..1);
                }
                if visual.instance_count > 0 {
                    rpass.set_pipeline(&self.points_pipeline);
                    rpass.set_vertex_buffer(0, self.quad_buffer.slice(..));
                    rpass.set_vertex_buffer(1, visual.instance_buffer.slice(..));
                    rpass.draw(0..6, 0..visual.instance_count);
                }
                log::trace!("[render] drew {}", visual.label());
            }
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
