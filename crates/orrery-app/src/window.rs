//! Window creation and event handling via winit.
//!
//! [`OrreryApp`] implements winit's [`ApplicationHandler`]: it owns the GPU
//! context, the scene meshes, and the interaction state, and maps window
//! events onto the simulation. Keyboard drives the control panel (Space
//! pause, T theme, Up/Down select slider, Left/Right nudge), the mouse
//! drives orbit navigation and hover picking.

use std::sync::Arc;
use std::time::Instant;

use glam::{Mat4, Quat, Vec2, Vec3};
use tracing::{error, info};
use winit::application::ApplicationHandler;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowAttributes, WindowId};

use orrery_config::Config;
use orrery_core::{BodyRegistry, ORBIT_CENTER_X, PLANET_CATALOG, SUN_RADIUS};
use orrery_interact::{ControlPanel, InteractionController, PointerState};
use orrery_render::{
    BufferAllocator, Camera, DepthBuffer, MeshBuffer, ModelUniform, OrbitNavigator, RenderContext,
    ScenePipelines, SurfaceWrapper, VertexPositionColor, init_render_context_blocking,
};
use orrery_scene::{MeshData, SceneGraph, Starfield, ellipse_track, intersect_bodies, ring_annulus, uv_sphere};

use crate::frame::FrameScheduler;

const SUN_COLOR: [f32; 4] = [1.0, 0.85, 0.1, 1.0];
const RING_COLOR: [f32; 4] = [0.71, 0.65, 0.52, 1.0];
const TRACK_COLOR: [f32; 4] = [0.35, 0.35, 0.38, 1.0];
const STAR_COLOR: [f32; 4] = [0.9, 0.9, 0.95, 1.0];

/// Saturn's ring spans 1.2x to 2.0x the planet radius.
const RING_INNER_SCALE: f32 = 1.2;
const RING_OUTER_SCALE: f32 = 2.0;

const SPHERE_STACKS: u32 = 24;
const SPHERE_SLICES: u32 = 48;
const RING_SEGMENTS: u32 = 64;

/// Returns [`WindowAttributes`] based on the given configuration.
pub fn window_attributes_from_config(config: &Config) -> WindowAttributes {
    WindowAttributes::default()
        .with_title(config.window.title.clone())
        .with_inner_size(winit::dpi::LogicalSize::new(
            config.window.width as f64,
            config.window.height as f64,
        ))
}

/// One GPU-resident object with its own model matrix.
struct DrawItem {
    mesh: MeshBuffer,
    model_buffer: wgpu::Buffer,
    model_bind_group: wgpu::BindGroup,
}

/// Application state for the event loop.
pub struct OrreryApp {
    config: Config,
    window: Option<Arc<Window>>,
    gpu: Option<RenderContext>,
    surface_wrapper: SurfaceWrapper,
    depth_buffer: Option<DepthBuffer>,
    pipelines: Option<ScenePipelines>,
    camera_buffer: Option<wgpu::Buffer>,
    camera_bind_group: Option<wgpu::BindGroup>,

    sun: Option<DrawItem>,
    planet_items: Vec<DrawItem>,
    ring: Option<(usize, DrawItem)>,
    track_items: Vec<DrawItem>,
    stars: Option<DrawItem>,

    camera: Camera,
    navigator: OrbitNavigator,
    scheduler: FrameScheduler,
    registry: BodyRegistry,
    scene: SceneGraph,
    controller: InteractionController,
    panel: ControlPanel,
    pointer: PointerState,

    last_frame: Instant,
    dragging: bool,
    last_cursor: Option<Vec2>,
}

impl OrreryApp {
    /// Creates the application state from a loaded configuration.
    pub fn with_config(config: Config) -> Self {
        let registry = BodyRegistry::from_catalog(PLANET_CATALOG, config.scene.seed);
        let scene = SceneGraph::with_nodes(registry.all().len());
        let panel = ControlPanel::from_registry(&registry);

        let mut controller = InteractionController::new();
        if config.sim.start_paused {
            controller.toggle_pause();
        }

        Self {
            surface_wrapper: SurfaceWrapper::new(config.window.width, config.window.height, 1.0),
            window: None,
            gpu: None,
            depth_buffer: None,
            pipelines: None,
            camera_buffer: None,
            camera_bind_group: None,
            sun: None,
            planet_items: Vec::new(),
            ring: None,
            track_items: Vec::new(),
            stars: None,
            camera: Camera::default(),
            navigator: OrbitNavigator::new(Vec3::new(ORBIT_CENTER_X, 0.0, 0.0), 18.0),
            scheduler: FrameScheduler::new(),
            registry,
            scene,
            controller,
            panel,
            pointer: PointerState::new(),
            last_frame: Instant::now(),
            dragging: false,
            last_cursor: None,
            config,
        }
    }

    fn surface_width(&self) -> u32 {
        self.surface_wrapper.physical_width()
    }

    fn surface_height(&self) -> u32 {
        self.surface_wrapper.physical_height()
    }

    /// Build all GPU resources: pipelines, depth buffer, and scene meshes.
    fn initialize_rendering(&mut self, gpu: &RenderContext) {
        use wgpu::util::DeviceExt;

        let depth_buffer =
            DepthBuffer::new(&gpu.device, self.surface_width(), self.surface_height());
        let pipelines = ScenePipelines::new(&gpu.device, gpu.surface_format, DepthBuffer::FORMAT);
        let allocator = BufferAllocator::new(&gpu.device);

        self.camera
            .set_aspect_ratio(self.surface_width() as f32, self.surface_height() as f32);
        let camera_buffer = gpu
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("camera-uniform"),
                contents: bytemuck::cast_slice(&[self.camera.to_uniform()]),
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            });
        let camera_bind_group = gpu.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("camera-bind-group"),
            layout: &pipelines.camera_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: camera_buffer.as_entire_binding(),
            }],
        });

        let make_item = |label: &str, mesh: MeshBuffer, model: Mat4| {
            let model_buffer = gpu
                .device
                .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some(&format!("{label}-model")),
                    contents: bytemuck::cast_slice(&[ModelUniform::from_matrix(model)]),
                    usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                });
            let model_bind_group = gpu.device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some(&format!("{label}-model-bind-group")),
                layout: &pipelines.model_bind_group_layout,
                entries: &[wgpu::BindGroupEntry {
                    binding: 0,
                    resource: model_buffer.as_entire_binding(),
                }],
            });
            DrawItem {
                mesh,
                model_buffer,
                model_bind_group,
            }
        };

        // Sun, fixed at the shared orbit center.
        let sun_mesh = colored_mesh(
            &allocator,
            "sun",
            &uv_sphere(SUN_RADIUS, SPHERE_STACKS, SPHERE_SLICES),
            SUN_COLOR,
        );
        self.sun = Some(make_item(
            "sun",
            sun_mesh,
            Mat4::from_translation(Vec3::new(ORBIT_CENTER_X, 0.0, 0.0)),
        ));

        // Planets, one sphere each; Saturn also gets its ring.
        for body in self.registry.all() {
            let color = [body.color[0], body.color[1], body.color[2], 1.0];
            let mesh = colored_mesh(
                &allocator,
                body.name,
                &uv_sphere(body.radius, SPHERE_STACKS, SPHERE_SLICES),
                color,
            );
            self.planet_items
                .push(make_item(body.name, mesh, Mat4::IDENTITY));

            if body.has_ring {
                let ring_mesh = colored_mesh(
                    &allocator,
                    "ring",
                    &ring_annulus(
                        body.radius * RING_INNER_SCALE,
                        body.radius * RING_OUTER_SCALE,
                        RING_SEGMENTS,
                    ),
                    RING_COLOR,
                );
                self.ring = Some((
                    body.handle.index(),
                    make_item("ring", ring_mesh, Mat4::IDENTITY),
                ));
            }
        }

        // Orbit tracks: static closed line strips on the ecliptic plane.
        let segments = self.config.scene.orbit_track_segments;
        for body in self.registry.all() {
            let points = ellipse_track(ORBIT_CENTER_X, body.orbit_semi_major, segments);
            let vertices: Vec<VertexPositionColor> = points
                .iter()
                .map(|p| VertexPositionColor {
                    position: p.to_array(),
                    color: TRACK_COLOR,
                })
                .collect();
            let mesh = allocator.create_vertices(&format!("{}-track", body.name), &vertices);
            self.track_items
                .push(make_item(&format!("{}-track", body.name), mesh, Mat4::IDENTITY));
        }

        // Starfield backdrop.
        let starfield = Starfield::generate(self.config.scene.seed, self.config.scene.star_count);
        let star_vertices: Vec<VertexPositionColor> = starfield
            .points()
            .iter()
            .map(|p| VertexPositionColor {
                position: p.to_array(),
                color: STAR_COLOR,
            })
            .collect();
        let star_mesh = allocator.create_vertices("starfield", &star_vertices);
        self.stars = Some(make_item("starfield", star_mesh, Mat4::IDENTITY));

        self.depth_buffer = Some(depth_buffer);
        self.pipelines = Some(pipelines);
        self.camera_buffer = Some(camera_buffer);
        self.camera_bind_group = Some(camera_bind_group);

        info!(
            bodies = self.registry.all().len(),
            stars = self.config.scene.star_count,
            "scene initialized"
        );
    }

    fn handle_resize(&mut self, width: u32, height: u32) {
        if let Some((w, h)) = self.surface_wrapper.handle_resize(width, height) {
            self.camera.set_aspect_ratio(w as f32, h as f32);
            if let Some(gpu) = &mut self.gpu {
                gpu.resize(w, h);
            }
            if let (Some(depth), Some(gpu)) = (&mut self.depth_buffer, &self.gpu) {
                depth.resize(&gpu.device, w, h);
            }
            info!("window resized to {w}x{h}");
        }
    }

    fn handle_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Space => {
                self.controller.toggle_pause();
                info!(action = self.controller.pause_label(), "pause toggled");
            }
            KeyCode::KeyT => {
                self.controller.toggle_theme();
            }
            KeyCode::ArrowUp => self.panel.select_prev(),
            KeyCode::ArrowDown => self.panel.select_next(),
            KeyCode::ArrowLeft => {
                self.panel
                    .nudge(-1, &mut self.controller, &mut self.registry)
            }
            KeyCode::ArrowRight => {
                self.panel.nudge(1, &mut self.controller, &mut self.registry)
            }
            _ => {}
        }
    }

    /// Resolve the hover target from the last pointer position and refresh
    /// the window title with the tooltip text.
    fn update_hover(&mut self) {
        if self.pointer.inside() {
            let ndc = self.pointer.ndc();
            let ray = self.camera.screen_ray(ndc.x, ndc.y);
            let hits = intersect_bodies(&ray, self.registry.all(), &self.scene);
            self.controller.resolve_hover(&self.registry, &hits);
        } else {
            self.controller.resolve_hover(&self.registry, &[]);
        }

        if let Some(window) = &self.window {
            let tooltip = ControlPanel::tooltip(&self.controller, &self.pointer);
            let row = &self.panel.rows()[self.panel.selected()];
            let mut title = format!(
                "{} [{}] {}: {:.3}",
                self.config.window.title,
                self.controller.pause_label(),
                row.label,
                row.value,
            );
            if tooltip.visible {
                title.push_str(&format!(" | {}", tooltip.text));
            }
            window.set_title(&title);
        }
    }

    /// Push the current transforms into the per-object model uniforms.
    fn upload_model_uniforms(&self, gpu: &RenderContext) {
        for (body, item) in self.registry.all().iter().zip(&self.planet_items) {
            let transform = self.scene.transform(body.handle);
            let model = Mat4::from_translation(transform.position)
                * Mat4::from_quat(Quat::from_rotation_y(transform.yaw));
            gpu.queue.write_buffer(
                &item.model_buffer,
                0,
                bytemuck::cast_slice(&[ModelUniform::from_matrix(model)]),
            );
        }

        // The ring follows its planet's position but not its spin.
        if let Some((body_index, item)) = &self.ring {
            let body = &self.registry.all()[*body_index];
            let transform = self.scene.transform(body.handle);
            let model = Mat4::from_translation(transform.position);
            gpu.queue.write_buffer(
                &item.model_buffer,
                0,
                bytemuck::cast_slice(&[ModelUniform::from_matrix(model)]),
            );
        }
    }

    fn render(&mut self) {
        let Some(gpu) = &self.gpu else { return };
        let (Some(pipelines), Some(depth), Some(camera_bind_group)) = (
            &self.pipelines,
            &self.depth_buffer,
            &self.camera_bind_group,
        ) else {
            return;
        };

        if let Some(buffer) = &self.camera_buffer {
            gpu.queue
                .write_buffer(buffer, 0, bytemuck::cast_slice(&[self.camera.to_uniform()]));
        }
        self.upload_model_uniforms(gpu);

        let surface_texture = match gpu.get_current_texture() {
            Ok(texture) => texture,
            Err(e) => {
                error!("failed to acquire surface texture: {e}");
                return;
            }
        };
        let view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let [r, g, b, a] = self.controller.theme().background();
        let mut encoder = gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("frame-encoder"),
            });
        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene-pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    depth_slice: None,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color { r, g, b, a }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &depth.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(DepthBuffer::CLEAR_VALUE),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });

            pass.set_pipeline(&pipelines.triangles);
            pass.set_bind_group(0, camera_bind_group, &[]);
            if let Some(sun) = &self.sun {
                pass.set_bind_group(1, &sun.model_bind_group, &[]);
                sun.mesh.draw(&mut pass);
            }
            for item in &self.planet_items {
                pass.set_bind_group(1, &item.model_bind_group, &[]);
                item.mesh.draw(&mut pass);
            }
            if let Some((_, item)) = &self.ring {
                pass.set_bind_group(1, &item.model_bind_group, &[]);
                item.mesh.draw(&mut pass);
            }

            pass.set_pipeline(&pipelines.lines);
            for item in &self.track_items {
                pass.set_bind_group(1, &item.model_bind_group, &[]);
                item.mesh.draw(&mut pass);
            }

            pass.set_pipeline(&pipelines.points);
            if let Some(stars) = &self.stars {
                pass.set_bind_group(1, &stars.model_bind_group, &[]);
                stars.mesh.draw(&mut pass);
            }
        }

        gpu.queue.submit(std::iter::once(encoder.finish()));
        surface_texture.present();
    }
}

impl ApplicationHandler for OrreryApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = window_attributes_from_config(&self.config);
        let window = match event_loop.create_window(attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                error!("failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let inner_size = window.inner_size();
        self.surface_wrapper =
            SurfaceWrapper::new(inner_size.width, inner_size.height, window.scale_factor());

        match init_render_context_blocking(window.clone()) {
            Ok(ctx) => {
                self.initialize_rendering(&ctx);
                self.gpu = Some(ctx);
            }
            Err(e) => {
                error!("GPU initialization failed: {e}");
                event_loop.exit();
                return;
            }
        }

        self.last_frame = Instant::now();
        self.window = Some(window);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                info!("close requested, shutting down");
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                self.handle_resize(new_size.width, new_size.height);
            }
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                if let Some(window) = &self.window {
                    let inner = window.inner_size();
                    if let Some((w, h)) = self.surface_wrapper.handle_scale_factor_changed(
                        scale_factor,
                        inner.width,
                        inner.height,
                    ) {
                        self.camera.set_aspect_ratio(w as f32, h as f32);
                        if let Some(gpu) = &mut self.gpu {
                            gpu.resize(w, h);
                        }
                        if let (Some(depth), Some(gpu)) = (&mut self.depth_buffer, &self.gpu) {
                            depth.resize(&gpu.device, w, h);
                        }
                    }
                }
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed
                    && let PhysicalKey::Code(code) = event.physical_key
                {
                    self.handle_key(code);
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                let current = Vec2::new(position.x as f32, position.y as f32);
                if self.dragging
                    && let Some(last) = self.last_cursor
                {
                    let delta = current - last;
                    self.navigator.on_drag(delta.x, delta.y);
                }
                self.last_cursor = Some(current);
                self.pointer.on_cursor_moved(
                    position.x,
                    position.y,
                    self.surface_width(),
                    self.surface_height(),
                );
            }
            WindowEvent::CursorLeft { .. } => {
                self.pointer.on_cursor_left();
                self.dragging = false;
                self.last_cursor = None;
            }
            WindowEvent::MouseInput { state, button, .. } => {
                if button == MouseButton::Left {
                    self.dragging = state == ElementState::Pressed;
                }
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let lines = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / 40.0,
                };
                self.navigator.on_scroll(lines);
            }
            WindowEvent::RedrawRequested => {
                let now = Instant::now();
                let dt = now.duration_since(self.last_frame).as_secs_f64();
                self.last_frame = now;

                self.navigator.update(dt as f32, &mut self.camera);
                let paused = self.controller.paused();
                self.scheduler
                    .tick(dt, paused, &self.registry, &mut self.scene);
                self.update_hover();
                self.render();
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

/// Tint every vertex of a mesh with a single color and upload it.
fn colored_mesh(
    allocator: &BufferAllocator,
    label: &str,
    mesh: &MeshData,
    color: [f32; 4],
) -> MeshBuffer {
    let vertices: Vec<VertexPositionColor> = mesh
        .positions
        .iter()
        .map(|p| VertexPositionColor {
            position: p.to_array(),
            color,
        })
        .collect();
    allocator.create_mesh(label, &vertices, &mesh.indices)
}

/// Creates an event loop and runs the application with the given config.
///
/// Blocks until the window is closed.
pub fn run_with_config(config: Config) {
    let event_loop = EventLoop::new().expect("Failed to create event loop");
    let mut app = OrreryApp::with_config(config);
    event_loop.run_app(&mut app).expect("Event loop failed");
}
