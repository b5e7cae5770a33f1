//! Vertex and index buffer management for the scene geometry.

use bytemuck::{Pod, Zeroable};

/// GPU-resident geometry. Spheres and rings are indexed; orbit tracks and
/// the starfield draw their vertices directly.
pub struct MeshBuffer {
    pub vertex_buffer: wgpu::Buffer,
    pub vertex_count: u32,
    pub index: Option<(wgpu::Buffer, u32)>,
}

impl MeshBuffer {
    /// Bind buffers and issue the draw call on a render pass.
    pub fn draw<'a>(&'a self, render_pass: &mut wgpu::RenderPass<'a>) {
        render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        match &self.index {
            Some((index_buffer, index_count)) => {
                render_pass.set_index_buffer(index_buffer.slice(..), wgpu::IndexFormat::Uint32);
                render_pass.draw_indexed(0..*index_count, 0, 0..1);
            }
            None => {
                render_pass.draw(0..self.vertex_count, 0..1);
            }
        }
    }
}

/// GPU buffer allocator for vertex and index buffers.
pub struct BufferAllocator<'a> {
    device: &'a wgpu::Device,
}

impl<'a> BufferAllocator<'a> {
    pub fn new(device: &'a wgpu::Device) -> Self {
        Self { device }
    }

    /// Create an indexed mesh buffer.
    pub fn create_mesh(
        &self,
        label: &str,
        vertices: &[VertexPositionColor],
        indices: &[u32],
    ) -> MeshBuffer {
        let vertex_buffer =
            self.create_vertex_buffer(&format!("{label}-vertices"), bytemuck::cast_slice(vertices));
        let index_buffer = self.create_index_buffer(&format!("{label}-indices"), indices);
        MeshBuffer {
            vertex_buffer,
            vertex_count: vertices.len() as u32,
            index: Some((index_buffer, indices.len() as u32)),
        }
    }

    /// Create a non-indexed buffer for line strips and point clouds.
    pub fn create_vertices(&self, label: &str, vertices: &[VertexPositionColor]) -> MeshBuffer {
        let vertex_buffer =
            self.create_vertex_buffer(&format!("{label}-vertices"), bytemuck::cast_slice(vertices));
        MeshBuffer {
            vertex_buffer,
            vertex_count: vertices.len() as u32,
            index: None,
        }
    }

    fn create_vertex_buffer(&self, label: &str, data: &[u8]) -> wgpu::Buffer {
        use wgpu::util::DeviceExt;

        self.device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(label),
                contents: data,
                usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            })
    }

    fn create_index_buffer(&self, label: &str, data: &[u32]) -> wgpu::Buffer {
        use wgpu::util::DeviceExt;

        self.device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(label),
                contents: bytemuck::cast_slice(data),
                usage: wgpu::BufferUsages::INDEX | wgpu::BufferUsages::COPY_DST,
            })
    }
}

/// Vertex format shared by every pipeline in the scene.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct VertexPositionColor {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

impl VertexPositionColor {
    /// Vertex buffer layout for this vertex type.
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        use wgpu::{VertexAttribute, VertexFormat};

        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<VertexPositionColor>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: VertexFormat::Float32x3,
                },
                VertexAttribute {
                    offset: std::mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: VertexFormat::Float32x4,
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_device() -> Option<wgpu::Device> {
        pollster::block_on(async {
            let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
                backends: wgpu::Backends::all(),
                ..Default::default()
            });

            let adapter = instance
                .request_adapter(&wgpu::RequestAdapterOptions {
                    power_preference: wgpu::PowerPreference::default(),
                    compatible_surface: None,
                    force_fallback_adapter: false,
                })
                .await
                .ok()?;

            let (device, _queue) = adapter
                .request_device(&wgpu::DeviceDescriptor::default())
                .await
                .ok()?;

            Some(device)
        })
    }

    fn triangle() -> Vec<VertexPositionColor> {
        [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]]
            .into_iter()
            .map(|position| VertexPositionColor {
                position,
                color: [1.0; 4],
            })
            .collect()
    }

    #[test]
    fn test_vertex_layout_stride_and_attributes() {
        let layout = VertexPositionColor::layout();
        // position (f32x3) + color (f32x4) = 28 bytes
        assert_eq!(layout.array_stride, 28);
        assert_eq!(layout.attributes.len(), 2);
    }

    #[test]
    fn test_indexed_mesh_records_counts() {
        let Some(device) = create_test_device() else {
            return;
        };
        let allocator = BufferAllocator::new(&device);
        let mesh = allocator.create_mesh("test-triangle", &triangle(), &[0, 1, 2]);
        assert_eq!(mesh.vertex_count, 3);
        assert_eq!(mesh.index.as_ref().map(|(_, count)| *count), Some(3));
    }

    #[test]
    fn test_vertex_only_mesh_has_no_index() {
        let Some(device) = create_test_device() else {
            return;
        };
        let allocator = BufferAllocator::new(&device);
        let mesh = allocator.create_vertices("test-strip", &triangle());
        assert_eq!(mesh.vertex_count, 3);
        assert!(mesh.index.is_none());
    }
}
