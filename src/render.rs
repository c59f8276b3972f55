use folio_core::{Camera, MeshData};
use glam::{Mat4, Vec3};
use web_sys as web;

mod helpers;
mod mesh;
mod snow;

pub use mesh::GpuMesh;
use mesh::{create_mesh_resources, MeshResources, ObjectUniforms};
use snow::{create_snow_resources, SnowResources};

// Shaders bundled as string constants
pub static MESH_WGSL: &str = include_str!("../shaders/mesh.wgsl");
pub static SNOW_WGSL: &str = include_str!("../shaders/snow.wgsl");

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct SceneUniforms {
    view_proj: [[f32; 4]; 4],
    light_dir: [f32; 4],
    ambient: [f32; 4],
    cam_right: [f32; 4],
    cam_up: [f32; 4],
    snow_color: [f32; 4],
}

/// Lighting and camera inputs for one frame.
pub struct SceneView<'c> {
    pub camera: &'c Camera,
    pub light_dir: Vec3,
    pub light_intensity: f32,
    pub ambient: f32,
    pub snow_size: f32,
    pub snow_color: [f32; 3],
}

/// Something to draw this frame.
pub struct DrawItem<'m> {
    pub mesh: &'m GpuMesh,
    pub model: Mat4,
}

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    depth_view: wgpu::TextureView,

    scene_buffer: wgpu::Buffer,
    scene_bind_group: wgpu::BindGroup,
    scene_bgl: wgpu::BindGroupLayout,
    mesh: MeshResources,
    snow: Option<SnowResources>,

    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl GpuState {
    /// Acquire a WebGPU device for the canvas, falling back to WebGL2.
    pub async fn new(canvas: &web::HtmlCanvasElement, background_srgb: [f64; 3]) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance =
            wgpu::util::new_instance_with_webgpu_detection(&wgpu::InstanceDescriptor::default())
                .await;
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU/WebGL adapter"))?;
        let backend = adapter.get_info().backend;
        log::info!("[gpu] adapter backend {:?}", backend);
        let required_limits = if backend == wgpu::Backend::Gl {
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
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        let depth_view = helpers::create_depth_view(&device, width, height);

        let scene_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("scene_bgl"),
            entries: &[helpers::uniform_layout_entry(
                wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
            )],
        });
        let scene_buffer = helpers::create_uniform_buffer(
            &device,
            "scene_uniforms",
            std::mem::size_of::<SceneUniforms>(),
        );
        let scene_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("scene_bg"),
            layout: &scene_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: scene_buffer.as_entire_binding(),
            }],
        });
        let mesh = create_mesh_resources(&device, &scene_bgl, format);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            depth_view,
            scene_buffer,
            scene_bind_group,
            scene_bgl,
            mesh,
            snow: None,
            width,
            height,
            clear_color: helpers::clear_color_from_srgb(background_srgb, format.is_srgb()),
        })
    }

    pub fn upload_mesh(&self, label: &str, mesh: &MeshData) -> GpuMesh {
        mesh::upload_mesh(&self.device, &self.mesh.object_bgl, label, mesh)
    }

    /// Allocate the instanced flake pipeline for `count` particles.
    pub fn enable_snow(&mut self, count: usize) {
        self.snow = Some(create_snow_resources(
            &self.device,
            &self.scene_bgl,
            self.config.format,
            count,
        ));
    }

    pub fn write_snow(&self, positions: &[Vec3]) {
        if let Some(s) = &self.snow {
            let n = positions.len().min(s.count as usize);
            self.queue
                .write_buffer(&s.instance_buffer, 0, bytemuck::cast_slice(&positions[..n]));
        }
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
            self.depth_view = helpers::create_depth_view(&self.device, width, height);
        }
    }

    pub fn render(&mut self, view: &SceneView, items: &[DrawItem]) -> Result<(), wgpu::SurfaceError> {
        let cam_view = view.camera.view_matrix();
        let uniforms = SceneUniforms {
            view_proj: view.camera.view_projection().to_cols_array_2d(),
            light_dir: view.light_dir.normalize_or_zero().extend(view.light_intensity).to_array(),
            ambient: [view.ambient, view.ambient, view.ambient, 1.0],
            cam_right: cam_view.row(0).truncate().extend(view.snow_size).to_array(),
            cam_up: cam_view.row(1).truncate().extend(0.0).to_array(),
            snow_color: [view.snow_color[0], view.snow_color[1], view.snow_color[2], 1.0],
        };
        self.queue
            .write_buffer(&self.scene_buffer, 0, bytemuck::bytes_of(&uniforms));
        for item in items {
            self.queue.write_buffer(
                &item.mesh.uniform_buffer,
                0,
                bytemuck::bytes_of(&ObjectUniforms::from_model(item.model)),
            );
        }

        let frame = self.surface.get_current_texture()?;
        let target = frame
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
                    view: &target,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_bind_group(0, &self.scene_bind_group, &[]);

            rpass.set_pipeline(&self.mesh.pipeline);
            for item in items {
                rpass.set_bind_group(1, &item.mesh.bind_group, &[]);
                rpass.set_vertex_buffer(0, item.mesh.vertex_buffer.slice(..));
                rpass.set_index_buffer(item.mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
                rpass.draw_indexed(0..item.mesh.index_count, 0, 0..1);
            }

            if let Some(s) = &self.snow {
                rpass.set_pipeline(&s.pipeline);
                rpass.set_vertex_buffer(0, s.instance_buffer.slice(..));
                rpass.draw(0..6, 0..s.count);
            }
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
