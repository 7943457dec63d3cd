//! Minimal scene graph: an arena of nodes forming a forest.
//!
//! Nodes carry a local [`Transform`] and optionally a [`Mesh`]. Callers
//! outside this module reach node state through the narrow
//! [`Transformable`] and [`Emissive`] capabilities rather than poking at
//! material internals.

mod geometry;
mod material;
mod node;

use glam::Mat4;

pub use geometry::{Geometry, TriangleMesh};
pub use material::{Color, Material};
pub use node::{Emissive, Mesh, Node, NodeId, Transform, Transformable};

/// Arena-backed scene tree.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    nodes: Vec<Node>,
    roots: Vec<NodeId>,
}

impl Scene {
    /// Empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn insert(&mut self, node: Node, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        self.attach(id, parent);
        id
    }

    fn attach(&mut self, id: NodeId, parent: Option<NodeId>) {
        match parent.filter(|p| p.0 < self.nodes.len()) {
            Some(p) => {
                self.nodes[id.0].parent = Some(p);
                self.nodes[p.0].children.push(id);
            }
            None => self.roots.push(id),
        }
    }

    /// Add an empty grouping node. `None` parent makes it a root.
    pub fn add_group(
        &mut self,
        name: &str,
        parent: Option<NodeId>,
    ) -> NodeId {
        self.insert(Node::new(name, None), parent)
    }

    /// Add a mesh node. `None` parent makes it a root.
    pub fn add_mesh(
        &mut self,
        name: &str,
        mesh: Mesh,
        parent: Option<NodeId>,
    ) -> NodeId {
        self.insert(Node::new(name, Some(mesh)), parent)
    }

    /// Node by handle.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Mutable node by handle.
    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0)
    }

    /// Top-level nodes in insertion order.
    #[must_use]
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Total node count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the scene holds no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Look up the first node with the given name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<NodeId> {
        self.nodes
            .iter()
            .position(|n| n.name == name)
            .map(NodeId)
    }

    /// Local-to-world matrix, composed up the parent chain.
    #[must_use]
    pub fn world_matrix(&self, id: NodeId) -> Mat4 {
        let mut matrix = Mat4::IDENTITY;
        let mut cursor = self.node(id);
        while let Some(node) = cursor {
            matrix = node.transform.matrix() * matrix;
            cursor = node.parent.and_then(|p| self.node(p));
        }
        matrix
    }

    /// `id` followed by all its descendants, pre-order.
    #[must_use]
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            let Some(node) = self.node(current) else {
                continue;
            };
            out.push(current);
            stack.extend(node.children.iter().rev().copied());
        }
        out
    }
}
