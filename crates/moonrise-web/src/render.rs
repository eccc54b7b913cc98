use crate::assets::DecodedImage;
use glam::Mat4;
use moonrise_core::{
    Camera, PlaneGrid, SceneVertex, AMBIENT_LEVEL, BACKGROUND_WGSL, LIGHT_COLOR, LIGHT_INTENSITY,
    LIGHT_POSITION, OVERLAY_WGSL, SCENE_WGSL,
};
use web_sys as web;
use wgpu::util::DeviceExt;

const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

/// Directional light tuning values, kept as plain data rather than a
/// debug-panel widget tree.
#[derive(Clone, Copy, Debug)]
pub struct LightRig {
    pub color: [f32; 3],
    pub intensity: f32,
    pub position: [f32; 3],
    pub ambient: f32,
}

impl Default for LightRig {
    fn default() -> Self {
        Self {
            color: LIGHT_COLOR,
            intensity: LIGHT_INTENSITY,
            position: LIGHT_POSITION,
            ambient: AMBIENT_LEVEL,
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct Globals {
    view_proj: [[f32; 4]; 4],
    light_dir: [f32; 4],
    light_color: [f32; 4],
    ambient: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct ObjectUniform {
    model: [[f32; 4]; 4],
    tint: [f32; 4],
    params: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct OverlayUniform {
    alpha: [f32; 4],
}

/// Mesh data extracted from the model file, ready for upload.
pub struct ModelMeshData {
    pub vertices: Vec<SceneVertex>,
    pub indices: Vec<u32>,
    pub base_color: [f32; 4],
    pub texture: Option<DecodedImage>,
}

struct ObjectGpu {
    uniform_buf: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

struct ModelPrimitiveGpu {
    vertex_buf: wgpu::Buffer,
    index_buf: wgpu::Buffer,
    index_count: u32,
    tint: [f32; 4],
    object: ObjectGpu,
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    width: u32,
    height: u32,
    depth_view: wgpu::TextureView,

    linear_sampler: wgpu::Sampler,

    background_pipeline: wgpu::RenderPipeline,
    background_bgl: wgpu::BindGroupLayout,
    background_bg: Option<wgpu::BindGroup>,

    scene_pipeline: wgpu::RenderPipeline,
    globals_buf: wgpu::Buffer,
    globals_bg: wgpu::BindGroup,
    object_bgl: wgpu::BindGroupLayout,

    overlay_pipeline: wgpu::RenderPipeline,
    overlay_buf: wgpu::Buffer,
    overlay_bg: wgpu::BindGroup,

    // One deformable grid shared by the whole thumbnail ring
    grid_vertex_buf: wgpu::Buffer,
    grid_index_buf: wgpu::Buffer,
    grid_index_count: u32,
    grid_scratch: Vec<SceneVertex>,

    thumbnails: Vec<ObjectGpu>,
    model: Vec<ModelPrimitiveGpu>,

    pub light: LightRig,
}

impl<'a> GpuState<'a> {
    pub async fn new(canvas: &'a web::HtmlCanvasElement, grid: &PlaneGrid) -> anyhow::Result<Self> {
        let width = canvas.width();
        let height = canvas.height();

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
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
            .unwrap_or(caps.formats[0]);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        let depth_view = create_depth_view(&device, width, height);

        let linear_sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("linear_sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });

        // ---------- background ----------
        let background_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("background_shader"),
            source: wgpu::ShaderSource::Wgsl(BACKGROUND_WGSL.into()),
        });
        let background_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("background_bgl"),
            entries: &[
                texture_entry(0),
                sampler_entry(1),
            ],
        });
        let background_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("background_layout"),
            bind_group_layouts: &[&background_bgl],
            push_constant_ranges: &[],
        });
        let background_pipeline =
            device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some("background_pipeline"),
                layout: Some(&background_layout),
                vertex: wgpu::VertexState {
                    module: &background_shader,
                    entry_point: Some("vs_fullscreen"),
                    buffers: &[],
                    compilation_options: wgpu::PipelineCompilationOptions::default(),
                },
                primitive: wgpu::PrimitiveState::default(),
                depth_stencil: Some(depth_state(false)),
                multisample: wgpu::MultisampleState::default(),
                fragment: Some(wgpu::FragmentState {
                    module: &background_shader,
                    entry_point: Some("fs_main"),
                    targets: &[Some(wgpu::ColorTargetState {
                        format,
                        blend: None,
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                    compilation_options: wgpu::PipelineCompilationOptions::default(),
                }),
                cache: None,
                multiview: None,
            });

        // ---------- scene ----------
        let scene_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(SCENE_WGSL.into()),
        });
        let globals_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("globals_bgl"),
            entries: &[uniform_entry(0, wgpu::ShaderStages::VERTEX_FRAGMENT)],
        });
        let object_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("object_bgl"),
            entries: &[
                uniform_entry(0, wgpu::ShaderStages::VERTEX_FRAGMENT),
                texture_entry(1),
                sampler_entry(2),
            ],
        });
        let globals_buf = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("globals"),
            size: std::mem::size_of::<Globals>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let globals_bg = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("globals_bg"),
            layout: &globals_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: globals_buf.as_entire_binding(),
            }],
        });
        let scene_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("scene_layout"),
            bind_group_layouts: &[&globals_bgl, &object_bgl],
            push_constant_ranges: &[],
        });
        let vertex_layout = wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<SceneVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: 0,
                    shader_location: 0,
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: 12,
                    shader_location: 1,
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x2,
                    offset: 24,
                    shader_location: 2,
                },
            ],
        };
        let scene_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("scene_pipeline"),
            layout: Some(&scene_layout),
            vertex: wgpu::VertexState {
                module: &scene_shader,
                entry_point: Some("vs_main"),
                buffers: &[vertex_layout],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            // Thumbnails are double-sided, so no culling anywhere
            primitive: wgpu::PrimitiveState {
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: Some(depth_state(true)),
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &scene_shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        });

        // ---------- overlay ----------
        let overlay_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("overlay_shader"),
            source: wgpu::ShaderSource::Wgsl(OVERLAY_WGSL.into()),
        });
        let overlay_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("overlay_bgl"),
            entries: &[uniform_entry(0, wgpu::ShaderStages::FRAGMENT)],
        });
        let overlay_buf = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("overlay"),
            contents: bytemuck::bytes_of(&OverlayUniform {
                alpha: [1.0, 0.0, 0.0, 0.0],
            }),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        let overlay_bg = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("overlay_bg"),
            layout: &overlay_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: overlay_buf.as_entire_binding(),
            }],
        });
        let overlay_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("overlay_layout"),
            bind_group_layouts: &[&overlay_bgl],
            push_constant_ranges: &[],
        });
        let overlay_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("overlay_pipeline"),
            layout: Some(&overlay_layout),
            vertex: wgpu::VertexState {
                module: &overlay_shader,
                entry_point: Some("vs_main"),
                buffers: &[],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState::default(),
            depth_stencil: Some(depth_state(false)),
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &overlay_shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        });

        // ---------- shared thumbnail grid ----------
        let grid_vertex_buf = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("grid_vb"),
            contents: bytemuck::cast_slice(&grid.vertices),
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        });
        let grid_index_buf = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("grid_ib"),
            contents: bytemuck::cast_slice(&grid.indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        Ok(Self {
            surface,
            device,
            queue,
            config,
            width,
            height,
            depth_view,
            linear_sampler,
            background_pipeline,
            background_bgl,
            background_bg: None,
            scene_pipeline,
            globals_buf,
            globals_bg,
            object_bgl,
            overlay_pipeline,
            overlay_buf,
            overlay_bg,
            grid_index_count: grid.indices.len() as u32,
            grid_vertex_buf,
            grid_index_buf,
            grid_scratch: Vec::with_capacity(grid.vertices.len()),
            thumbnails: Vec::new(),
            model: Vec::new(),
            light: LightRig::default(),
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
            self.depth_view = create_depth_view(&self.device, width, height);
        }
    }

    /// Upload a decoded RGBA image as an sRGB texture.
    pub fn upload_texture(&self, label: &str, image: &DecodedImage) -> wgpu::TextureView {
        let tex = self.device.create_texture(&wgpu::TextureDescriptor {
            label: Some(label),
            size: wgpu::Extent3d {
                width: image.width,
                height: image.height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });
        self.queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &tex,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            &image.pixels,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * image.width),
                rows_per_image: Some(image.height),
            },
            wgpu::Extent3d {
                width: image.width,
                height: image.height,
                depth_or_array_layers: 1,
            },
        );
        tex.create_view(&wgpu::TextureViewDescriptor::default())
    }

    pub fn set_background(&mut self, view: &wgpu::TextureView) {
        self.background_bg = Some(self.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("background_bg"),
            layout: &self.background_bgl,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&self.linear_sampler),
                },
            ],
        }));
    }

    fn create_object(&self, label: &str, view: &wgpu::TextureView) -> ObjectGpu {
        let uniform_buf = self.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(label),
            size: std::mem::size_of::<ObjectUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bind_group = self.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(label),
            layout: &self.object_bgl,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: uniform_buf.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(view),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::Sampler(&self.linear_sampler),
                },
            ],
        });
        ObjectGpu {
            uniform_buf,
            bind_group,
        }
    }

    pub fn add_thumbnail(&mut self, view: &wgpu::TextureView) {
        let object = self.create_object("thumbnail", view);
        self.thumbnails.push(object);
    }

    pub fn set_model_meshes(&mut self, meshes: Vec<ModelMeshData>) {
        let white = self.upload_texture(
            "model_white",
            &DecodedImage {
                width: 1,
                height: 1,
                pixels: vec![0xff; 4],
            },
        );
        let model: Vec<ModelPrimitiveGpu> = meshes
            .into_iter()
            .map(|mesh| {
                let vertex_buf = self.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("model_vb"),
                    contents: bytemuck::cast_slice(&mesh.vertices),
                    usage: wgpu::BufferUsages::VERTEX,
                });
                let index_buf = self.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("model_ib"),
                    contents: bytemuck::cast_slice(&mesh.indices),
                    usage: wgpu::BufferUsages::INDEX,
                });
                let view = mesh
                    .texture
                    .as_ref()
                    .map(|img| self.upload_texture("model_color", img));
                let object = self.create_object("model", view.as_ref().unwrap_or(&white));
                ModelPrimitiveGpu {
                    vertex_buf,
                    index_buf,
                    index_count: mesh.indices.len() as u32,
                    tint: mesh.base_color,
                    object,
                }
            })
            .collect();
        self.model = model;
    }

    pub fn write_globals(&self, camera: &Camera) {
        let light_dir = glam::Vec3::from(self.light.position).normalize();
        let globals = Globals {
            view_proj: camera.view_proj().to_cols_array_2d(),
            light_dir: [light_dir.x, light_dir.y, light_dir.z, 0.0],
            light_color: [
                self.light.color[0],
                self.light.color[1],
                self.light.color[2],
                self.light.intensity,
            ],
            ambient: [self.light.ambient, self.light.ambient, self.light.ambient, 0.0],
        };
        self.queue
            .write_buffer(&self.globals_buf, 0, bytemuck::bytes_of(&globals));
    }

    pub fn write_thumbnail(&self, index: usize, model: Mat4, opacity: f32) {
        if let Some(obj) = self.thumbnails.get(index) {
            let uniform = ObjectUniform {
                model: model.to_cols_array_2d(),
                tint: [1.0, 1.0, 1.0, opacity],
                params: [0.0; 4],
            };
            self.queue
                .write_buffer(&obj.uniform_buf, 0, bytemuck::bytes_of(&uniform));
        }
    }

    pub fn write_model(&self, model: Mat4) {
        for prim in &self.model {
            let uniform = ObjectUniform {
                model: model.to_cols_array_2d(),
                tint: prim.tint,
                params: [1.0, 0.0, 0.0, 0.0],
            };
            self.queue
                .write_buffer(&prim.object.uniform_buf, 0, bytemuck::bytes_of(&uniform));
        }
    }

    /// Re-upload the shared grid with the wave displacement for elapsed
    /// time `t`; the ring re-reads it on the next draw.
    pub fn write_waves(&mut self, grid: &PlaneGrid, t: f32) {
        grid.displaced(t, &mut self.grid_scratch);
        self.queue.write_buffer(
            &self.grid_vertex_buf,
            0,
            bytemuck::cast_slice(&self.grid_scratch),
        );
    }

    pub fn set_overlay_alpha(&self, alpha: f32) {
        let uniform = OverlayUniform {
            alpha: [alpha, 0.0, 0.0, 0.0],
        };
        self.queue
            .write_buffer(&self.overlay_buf, 0, bytemuck::bytes_of(&uniform));
    }

    pub fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
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
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
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

            if let Some(bg) = &self.background_bg {
                rpass.set_pipeline(&self.background_pipeline);
                rpass.set_bind_group(0, bg, &[]);
                rpass.draw(0..3, 0..1);
            }

            rpass.set_pipeline(&self.scene_pipeline);
            rpass.set_bind_group(0, &self.globals_bg, &[]);
            for prim in &self.model {
                rpass.set_bind_group(1, &prim.object.bind_group, &[]);
                rpass.set_vertex_buffer(0, prim.vertex_buf.slice(..));
                rpass.set_index_buffer(prim.index_buf.slice(..), wgpu::IndexFormat::Uint32);
                rpass.draw_indexed(0..prim.index_count, 0, 0..1);
            }
            rpass.set_vertex_buffer(0, self.grid_vertex_buf.slice(..));
            rpass.set_index_buffer(self.grid_index_buf.slice(..), wgpu::IndexFormat::Uint32);
            for thumb in &self.thumbnails {
                rpass.set_bind_group(1, &thumb.bind_group, &[]);
                rpass.draw_indexed(0..self.grid_index_count, 0, 0..1);
            }

            rpass.set_pipeline(&self.overlay_pipeline);
            rpass.set_bind_group(0, &self.overlay_bg, &[]);
            rpass.draw(0..6, 0..1);
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

fn create_depth_view(device: &wgpu::Device, width: u32, height: u32) -> wgpu::TextureView {
    let tex = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("depth"),
        size: wgpu::Extent3d {
            width: width.max(1),
            height: height.max(1),
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: DEPTH_FORMAT,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    tex.create_view(&wgpu::TextureViewDescriptor::default())
}

fn depth_state(write: bool) -> wgpu::DepthStencilState {
    wgpu::DepthStencilState {
        format: DEPTH_FORMAT,
        depth_write_enabled: write,
        depth_compare: if write {
            wgpu::CompareFunction::LessEqual
        } else {
            wgpu::CompareFunction::Always
        },
        stencil: wgpu::StencilState::default(),
        bias: wgpu::DepthBiasState::default(),
    }
}

fn uniform_entry(binding: u32, visibility: wgpu::ShaderStages) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding,
        visibility,
        ty: wgpu::BindingType::Buffer {
            ty: wgpu::BufferBindingType::Uniform,
            has_dynamic_offset: false,
            min_binding_size: None,
        },
        count: None,
    }
}

fn texture_entry(binding: u32) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding,
        visibility: wgpu::ShaderStages::FRAGMENT,
        ty: wgpu::BindingType::Texture {
            sample_type: wgpu::TextureSampleType::Float { filterable: true },
            view_dimension: wgpu::TextureViewDimension::D2,
            multisampled: false,
        },
        count: None,
    }
}

fn sampler_entry(binding: u32) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding,
        visibility: wgpu::ShaderStages::FRAGMENT,
        ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
        count: None,
    }
}
