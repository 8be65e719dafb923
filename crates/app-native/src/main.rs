use std::time::Instant;
use wgpu::util::DeviceExt;
use winit::{
    event::*,
    event_loop::EventLoop,
    keyboard::{KeyCode, PhysicalKey},
    window::{CursorIcon, WindowBuilder},
};

use glam::Vec3;
use picket_core::constants::{
    camera_eye_vec3, light_dir_vec3, AMBIENT_LIGHT, BACKGROUND_COLOR, CLICK_SLOP_PX, CUBE_COLOR,
    CUBE_HALF_EXTENT, MARKER_COLORS, MARKER_RADIUS, SEGMENT_COLOR, WHEEL_LINE_PX,
    WHEEL_ZOOM_SPEED,
};
use picket_core::geometry::{self, LineVertex, MeshInstance, MeshVertex};
use picket_core::input::{pan_delta, EventResponse};
use picket_core::{Aabb, Cursor, InputEvent, Interaction, MouseState, OrbitCamera, PanKey};

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct Globals {
    view_proj: [[f32; 4]; 4],
    light: [f32; 4],
}

// axes gizmo (6) + segment (2)
const MAX_LINE_VERTICES: usize = 8;

struct GpuState<'w> {
    window: &'w winit::window::Window,
    surface: wgpu::Surface<'w>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    mesh_pipeline: wgpu::RenderPipeline,
    line_pipeline: wgpu::RenderPipeline,
    globals_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    cube_vb: wgpu::Buffer,
    cube_ib: wgpu::Buffer,
    cube_index_count: u32,
    cube_instance_vb: wgpu::Buffer,
    sphere_vb: wgpu::Buffer,
    sphere_ib: wgpu::Buffer,
    sphere_index_count: u32,
    marker_instance_vb: wgpu::Buffer,
    line_vb: wgpu::Buffer,
    depth_view: wgpu::TextureView,
    width: u32,
    height: u32,
}

impl<'w> GpuState<'w> {
    async fn new(window: &'w winit::window::Window) -> anyhow::Result<Self> {
        let size = window.inner_size();
        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(window)?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No GPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        let format = surface_caps.formats[0];
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: surface_caps.alpha_modes[0],
            desired_maximum_frame_latency: 2,
            view_formats: vec![],
        };
        surface.configure(&device, &config);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(picket_core::SCENE_WGSL.into()),
        });

        let globals_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("globals"),
            size: std::mem::size_of::<Globals>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let (cube_vertices, cube_indices) = geometry::cube_mesh(CUBE_HALF_EXTENT);
        let cube_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("cube_vb"),
            contents: bytemuck::cast_slice(&cube_vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let cube_ib = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("cube_ib"),
            contents: bytemuck::cast_slice(&cube_indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        let cube_instance = MeshInstance {
            offset: [0.0; 3],
            scale: 1.0,
            color: CUBE_COLOR,
        };
        let cube_instance_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("cube_instance_vb"),
            contents: bytemuck::bytes_of(&cube_instance),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let (sphere_vertices, sphere_indices) = geometry::sphere_mesh(MARKER_RADIUS, 32, 16);
        let sphere_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("sphere_vb"),
            contents: bytemuck::cast_slice(&sphere_vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let sphere_ib = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("sphere_ib"),
            contents: bytemuck::cast_slice(&sphere_indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        let marker_instance_vb = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("marker_instance_vb"),
            size: (std::mem::size_of::<MeshInstance>() * 2) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let line_vb = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("line_vb"),
            size: (std::mem::size_of::<LineVertex>() * MAX_LINE_VERTICES) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("globals_bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("globals_bg"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: globals_buffer.as_entire_binding(),
            }],
        });
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("scene_pl"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let mesh_buffers = [
            // slot 0: mesh vertices
            wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<MeshVertex>() as u64,
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
                ],
            },
            // slot 1: instance data
            wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<MeshInstance>() as u64,
                step_mode: wgpu::VertexStepMode::Instance,
                attributes: &[
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32x3,
                        offset: 0,
                        shader_location: 2,
                    },
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32,
                        offset: 12,
                        shader_location: 3,
                    },
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32x4,
                        offset: 16,
                        shader_location: 4,
                    },
                ],
            },
        ];
        let depth_stencil = Some(wgpu::DepthStencilState {
            format: wgpu::TextureFormat::Depth32Float,
            depth_write_enabled: true,
            depth_compare: wgpu::CompareFunction::Less,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        });
        let mesh_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("mesh_pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_mesh"),
                buffers: &mesh_buffers,
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState::default(),
            depth_stencil: depth_stencil.clone(),
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_mesh"),
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

        let line_buffers = [wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<LineVertex>() as u64,
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
            ],
        }];
        let line_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("line_pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_line"),
                buffers: &line_buffers,
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::LineList,
                ..wgpu::PrimitiveState::default()
            },
            depth_stencil,
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_line"),
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

        let depth_view = create_depth_view(&device, config.width, config.height);

        Ok(Self {
            window,
            surface,
            device,
            queue,
            width: config.width,
            height: config.height,
            config,
            mesh_pipeline,
            line_pipeline,
            globals_buffer,
            bind_group,
            cube_vb,
            cube_ib,
            cube_index_count: cube_indices.len() as u32,
            cube_instance_vb,
            sphere_vb,
            sphere_ib,
            sphere_index_count: sphere_indices.len() as u32,
            marker_instance_vb,
            line_vb,
            depth_view,
        })
    }

    fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }
        self.width = new_size.width;
        self.height = new_size.height;
        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);
        self.depth_view = create_depth_view(&self.device, self.width, self.height);
    }

    fn render(
        &mut self,
        camera: &OrbitCamera,
        scene: &Interaction,
    ) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let light_dir = light_dir_vec3();
        self.queue.write_buffer(
            &self.globals_buffer,
            0,
            bytemuck::bytes_of(&Globals {
                view_proj: camera.view_proj().to_cols_array_2d(),
                light: [light_dir.x, light_dir.y, light_dir.z, AMBIENT_LIGHT],
            }),
        );

        // Visible markers as sphere instances
        let mut markers: Vec<MeshInstance> = Vec::with_capacity(2);
        for (i, m) in scene.markers().iter().enumerate() {
            if m.visible {
                markers.push(MeshInstance {
                    offset: m.position.to_array(),
                    scale: 1.0,
                    color: MARKER_COLORS[i],
                });
            }
        }
        if !markers.is_empty() {
            self.queue
                .write_buffer(&self.marker_instance_vb, 0, bytemuck::cast_slice(&markers));
        }

        // Axes gizmo follows the orbit target; the segment is rebuilt from
        // the current marker positions every frame.
        let mut lines: Vec<LineVertex> = Vec::with_capacity(MAX_LINE_VERTICES);
        lines.extend_from_slice(&geometry::axes_lines(camera.target));
        if let Some((a, b)) = scene.segment() {
            lines.extend_from_slice(&geometry::segment_lines(a, b, SEGMENT_COLOR));
        }
        self.queue
            .write_buffer(&self.line_vb, 0, bytemuck::cast_slice(&lines));

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
                            r: BACKGROUND_COLOR[0] as f64,
                            g: BACKGROUND_COLOR[1] as f64,
                            b: BACKGROUND_COLOR[2] as f64,
                            a: 1.0,
                        }),
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
            rpass.set_pipeline(&self.mesh_pipeline);
            rpass.set_bind_group(0, &self.bind_group, &[]);

            rpass.set_vertex_buffer(0, self.cube_vb.slice(..));
            rpass.set_vertex_buffer(1, self.cube_instance_vb.slice(..));
            rpass.set_index_buffer(self.cube_ib.slice(..), wgpu::IndexFormat::Uint16);
            rpass.draw_indexed(0..self.cube_index_count, 0, 0..1);

            if !markers.is_empty() {
                rpass.set_vertex_buffer(0, self.sphere_vb.slice(..));
                rpass.set_vertex_buffer(1, self.marker_instance_vb.slice(..));
                rpass.set_index_buffer(self.sphere_ib.slice(..), wgpu::IndexFormat::Uint16);
                rpass.draw_indexed(0..self.sphere_index_count, 0, 0..markers.len() as u32);
            }

            rpass.set_pipeline(&self.line_pipeline);
            rpass.set_bind_group(0, &self.bind_group, &[]);
            rpass.set_vertex_buffer(0, self.line_vb.slice(..));
            rpass.draw(0..lines.len() as u32, 0..1);
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

fn create_depth_view(device: &wgpu::Device, width: u32, height: u32) -> wgpu::TextureView {
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("depth"),
        size: wgpu::Extent3d {
            width: width.max(1),
            height: height.max(1),
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: wgpu::TextureFormat::Depth32Float,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    texture.create_view(&wgpu::TextureViewDescriptor::default())
}

fn pan_key_for_code(code: KeyCode) -> Option<PanKey> {
    match code {
        KeyCode::ArrowUp => Some(PanKey::Forward),
        KeyCode::ArrowDown => Some(PanKey::Back),
        KeyCode::ArrowLeft => Some(PanKey::Left),
        KeyCode::ArrowRight => Some(PanKey::Right),
        KeyCode::KeyW => Some(PanKey::Raise),
        KeyCode::KeyS => Some(PanKey::Lower),
        _ => None,
    }
}

fn apply_response(
    resp: &EventResponse,
    window: &winit::window::Window,
    camera: &mut OrbitCamera,
) {
    if let Some(cursor) = resp.cursor {
        window.set_cursor_icon(match cursor {
            Cursor::Grabbing => CursorIcon::Grabbing,
            Cursor::Default => CursorIcon::Default,
        });
    }
    if let Some(enabled) = resp.rotate_enabled {
        camera.rotate_enabled = enabled;
    }
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let event_loop = EventLoop::new().expect("event loop");
    let window = WindowBuilder::new()
        .with_title("picket")
        .build(&event_loop)
        .expect("window");

    let size = window.inner_size();
    let mut camera = OrbitCamera::from_eye_target(
        camera_eye_vec3(),
        Vec3::ZERO,
        size.width.max(1) as f32 / size.height.max(1) as f32,
    );
    let mut interaction = Interaction::new(Aabb::from_half_extent(CUBE_HALF_EXTENT));
    let mut mouse = MouseState::default();
    // Pointer-down position; a release within CLICK_SLOP_PX counts as a click.
    let mut press_pos: Option<(f32, f32)> = None;
    let mut rotating = false;
    let mut last_frame = Instant::now();

    let mut state = pollster::block_on(GpuState::new(&window)).expect("gpu");

    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::Resized(size) => {
                    state.resize(size);
                    camera.set_aspect(size.width as f32, size.height as f32);
                }
                WindowEvent::CloseRequested => elwt.exit(),
                WindowEvent::CursorMoved { position, .. } => {
                    let (x, y) = (position.x as f32, position.y as f32);
                    let (dx, dy) = (x - mouse.x, y - mouse.y);
                    mouse.x = x;
                    mouse.y = y;
                    if interaction.drag_index().is_some() {
                        let ray =
                            camera.screen_ray(x, y, state.width as f32, state.height as f32);
                        let resp = interaction.handle_event(InputEvent::PointerMove(ray));
                        apply_response(&resp, state.window, &mut camera);
                    } else if rotating && mouse.down {
                        camera.rotate(dx, dy);
                    }
                }
                WindowEvent::MouseInput {
                    state: ElementState::Pressed,
                    button: MouseButton::Left,
                    ..
                } => {
                    mouse.down = true;
                    press_pos = Some((mouse.x, mouse.y));
                    let ray = camera.screen_ray(
                        mouse.x,
                        mouse.y,
                        state.width as f32,
                        state.height as f32,
                    );
                    let resp = interaction.handle_event(InputEvent::PointerDown(ray));
                    apply_response(&resp, state.window, &mut camera);
                    rotating = interaction.drag_index().is_none();
                }
                WindowEvent::MouseInput {
                    state: ElementState::Released,
                    button: MouseButton::Left,
                    ..
                } => {
                    mouse.down = false;
                    rotating = false;
                    let was_dragging = interaction.drag_index().is_some();
                    let resp = interaction.handle_event(InputEvent::PointerUp);
                    apply_response(&resp, state.window, &mut camera);
                    if let Some((px, py)) = press_pos.take() {
                        if !was_dragging && (mouse.x - px).hypot(mouse.y - py) <= CLICK_SLOP_PX {
                            let ray = camera.screen_ray(
                                mouse.x,
                                mouse.y,
                                state.width as f32,
                                state.height as f32,
                            );
                            let resp = interaction.handle_event(InputEvent::Click(ray));
                            apply_response(&resp, state.window, &mut camera);
                        }
                    }
                }
                WindowEvent::MouseWheel { delta, .. } => {
                    let scroll = match delta {
                        MouseScrollDelta::LineDelta(_, y) => y * WHEEL_LINE_PX,
                        MouseScrollDelta::PixelDelta(pos) => pos.y as f32,
                    };
                    camera.zoom(-scroll * WHEEL_ZOOM_SPEED);
                }
                WindowEvent::KeyboardInput {
                    event:
                        KeyEvent {
                            physical_key: PhysicalKey::Code(code),
                            state: ElementState::Pressed,
                            ..
                        },
                    ..
                } => {
                    if let Some(key) = pan_key_for_code(code) {
                        camera.pan_target(pan_delta(key));
                    }
                }
                _ => {}
            },
            Event::AboutToWait => {
                let now = Instant::now();
                let dt = (now - last_frame).as_secs_f32();
                last_frame = now;
                camera.update(dt);
                match state.render(&camera, &interaction) {
                    Ok(_) => state.window.request_redraw(),
                    Err(wgpu::SurfaceError::Lost) => state.resize(state.window.inner_size()),
                    Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                    Err(_) => {}
                }
            }
            _ => {}
        })
        .unwrap();
}
