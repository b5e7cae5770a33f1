//! Node transform storage keyed by the registry's render handles.
//!
//! One node per body, created once at startup. The only mutations after
//! startup are position writes and yaw increments from the frame update; the
//! ring attachment has no node of its own, it follows its parent body's
//! transform at draw time.

use glam::Vec3;

use orrery_core::RenderHandle;

/// Position and accumulated self-rotation of a single scene node.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NodeTransform {
    /// World-space position.
    pub position: Vec3,
    /// Accumulated yaw about the vertical axis, in radians.
    pub yaw: f32,
}

/// Flat store of node transforms, indexed by [`RenderHandle`].
#[derive(Debug)]
pub struct SceneGraph {
    nodes: Vec<NodeTransform>,
}

impl SceneGraph {
    /// Creates a graph with one zeroed node per handle.
    pub fn with_nodes(count: usize) -> Self {
        Self {
            nodes: vec![NodeTransform::default(); count],
        }
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the graph holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Reads a node's transform.
    pub fn transform(&self, handle: RenderHandle) -> NodeTransform {
        self.nodes[handle.index()]
    }

    /// Writes a node's world position.
    pub fn set_position(&mut self, handle: RenderHandle, position: Vec3) {
        self.nodes[handle.index()].position = position;
    }

    /// Adds an increment to a node's yaw.
    pub fn add_yaw(&mut self, handle: RenderHandle, delta: f32) {
        self.nodes[handle.index()].yaw += delta;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_core::{BodyRegistry, PLANET_CATALOG};

    #[test]
    fn test_graph_mirrors_registry_handles() {
        let registry = BodyRegistry::from_catalog(PLANET_CATALOG, 1);
        let scene = SceneGraph::with_nodes(registry.all().len());
        for body in registry.all() {
            // Every handle must resolve without panicking.
            let t = scene.transform(body.handle);
            assert_eq!(t, NodeTransform::default());
        }
    }

    #[test]
    fn test_position_write_is_visible() {
        let registry = BodyRegistry::from_catalog(PLANET_CATALOG, 1);
        let mut scene = SceneGraph::with_nodes(registry.all().len());
        let handle = registry.all()[2].handle;
        scene.set_position(handle, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(scene.transform(handle).position, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_yaw_accumulates() {
        let mut scene = SceneGraph::with_nodes(1);
        let handle = orrery_core::BodyRegistry::from_catalog(&PLANET_CATALOG[..1], 0).all()[0]
            .handle;
        scene.add_yaw(handle, 0.01);
        scene.add_yaw(handle, 0.01);
        assert!((scene.transform(handle).yaw - 0.02).abs() < 1e-7);
    }
}
