//! Unlit color pipelines for the scene.
//!
//! One shader serves three topology variants: triangle lists for the sun,
//! planets, and Saturn's ring; line strips for orbit tracks; points for
//! the starfield. Each drawn object binds its own model matrix at group 1.

use bytemuck::{Pod, Zeroable};
use std::num::NonZeroU64;

use crate::buffer::VertexPositionColor;

/// Uniform buffer for the camera view-projection matrix.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4], // 64 bytes, mat4x4
}

/// Uniform buffer for a per-object model matrix.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct ModelUniform {
    pub model: [[f32; 4]; 4], // 64 bytes, mat4x4
}

impl ModelUniform {
    pub fn from_matrix(matrix: glam::Mat4) -> Self {
        Self {
            model: matrix.to_cols_array_2d(),
        }
    }
}

/// The three pipeline variants plus the bind group layouts they share.
pub struct ScenePipelines {
    pub triangles: wgpu::RenderPipeline,
    pub lines: wgpu::RenderPipeline,
    pub points: wgpu::RenderPipeline,
    pub camera_bind_group_layout: wgpu::BindGroupLayout,
    pub model_bind_group_layout: wgpu::BindGroupLayout,
}

impl ScenePipelines {
    /// Create all pipeline variants against the given surface format.
    pub fn new(
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
        depth_format: wgpu::TextureFormat,
    ) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene-shader"),
            source: wgpu::ShaderSource::Wgsl(SCENE_SHADER_SOURCE.into()),
        });

        let camera_bind_group_layout = uniform_bind_group_layout(device, "camera-bind-group-layout");
        let model_bind_group_layout = uniform_bind_group_layout(device, "model-bind-group-layout");

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("scene-pipeline-layout"),
            bind_group_layouts: &[&camera_bind_group_layout, &model_bind_group_layout],
            immediate_size: 0,
        });

        let build = |label: &str, topology: wgpu::PrimitiveTopology, cull: Option<wgpu::Face>| {
            device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some(label),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_main"),
                    buffers: &[VertexPositionColor::layout()],
                    compilation_options: wgpu::PipelineCompilationOptions::default(),
                },
                primitive: wgpu::PrimitiveState {
                    topology,
                    strip_index_format: None,
                    front_face: wgpu::FrontFace::Ccw,
                    cull_mode: cull,
                    unclipped_depth: false,
                    polygon_mode: wgpu::PolygonMode::Fill,
                    conservative: false,
                },
                depth_stencil: Some(wgpu::DepthStencilState {
                    format: depth_format,
                    depth_write_enabled: true,
                    depth_compare: wgpu::CompareFunction::GreaterEqual, // reverse-Z
                    stencil: wgpu::StencilState::default(),
                    bias: wgpu::DepthBiasState::default(),
                }),
                multisample: wgpu::MultisampleState {
                    count: 1,
                    mask: !0,
                    alpha_to_coverage_enabled: false,
                },
                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some("fs_main"),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: surface_format,
                        blend: None, // opaque
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                    compilation_options: wgpu::PipelineCompilationOptions::default(),
                }),
                multiview_mask: None,
                cache: None,
            })
        };

        // The ring annulus is wound twice (both faces), so back-face culling
        // stays on for every triangle mesh.
        let triangles = build(
            "scene-triangles",
            wgpu::PrimitiveTopology::TriangleList,
            Some(wgpu::Face::Back),
        );
        let lines = build("scene-lines", wgpu::PrimitiveTopology::LineStrip, None);
        let points = build("scene-points", wgpu::PrimitiveTopology::PointList, None);

        Self {
            triangles,
            lines,
            points,
            camera_bind_group_layout,
            model_bind_group_layout,
        }
    }
}

fn uniform_bind_group_layout(device: &wgpu::Device, label: &str) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some(label),
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: NonZeroU64::new(64), // mat4x4<f32>
            },
            count: None,
        }],
    })
}

/// WGSL source shared by all pipeline variants.
pub const SCENE_SHADER_SOURCE: &str = r#"
struct CameraUniform {
    view_proj: mat4x4<f32>,
};

struct ModelUniform {
    model: mat4x4<f32>,
};

@group(0) @binding(0)
var<uniform> camera: CameraUniform;

@group(1) @binding(0)
var<uniform> object: ModelUniform;

struct VertexInput {
    @location(0) position: vec3<f32>,
    @location(1) color: vec4<f32>,
};

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) color: vec4<f32>,
};

@vertex
fn vs_main(in: VertexInput) -> VertexOutput {
    var out: VertexOutput;
    out.clip_position = camera.view_proj * object.model * vec4<f32>(in.position, 1.0);
    out.color = in.color;
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    return in.color;
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camera_uniform_size() {
        // Must match min_binding_size: one mat4x4<f32>.
        assert_eq!(std::mem::size_of::<CameraUniform>(), 64);
    }

    #[test]
    fn test_model_uniform_size() {
        assert_eq!(std::mem::size_of::<ModelUniform>(), 64);
    }

    #[test]
    fn test_shader_entry_points_present() {
        assert!(SCENE_SHADER_SOURCE.contains("fn vs_main"));
        assert!(SCENE_SHADER_SOURCE.contains("fn fs_main"));
    }

    #[test]
    fn test_model_uniform_round_trips_matrix() {
        let matrix = glam::Mat4::from_translation(glam::Vec3::new(1.0, 2.0, 3.0));
        let uniform = ModelUniform::from_matrix(matrix);
        assert_eq!(glam::Mat4::from_cols_array_2d(&uniform.model), matrix);
    }
}
