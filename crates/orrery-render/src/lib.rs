//! Thin wgpu presentation adapter for the Orrery scene.
//!
//! Owns the GPU context, surface sizing, the perspective camera with orbit
//! navigation and pointer-ray unprojection, depth buffering, and the unlit
//! color pipelines used for planets, orbit tracks, and the starfield.

mod buffer;
mod camera;
mod depth;
mod gpu;
mod pipeline;
mod surface;

pub use buffer::{BufferAllocator, MeshBuffer, VertexPositionColor};
pub use camera::{Camera, OrbitNavigator};
pub use depth::DepthBuffer;
pub use gpu::{RenderContext, RenderContextError, SurfaceError, init_render_context_blocking};
pub use pipeline::{CameraUniform, ModelUniform, SCENE_SHADER_SOURCE, ScenePipelines};
pub use surface::SurfaceWrapper;
