use glam::{Mat4, Quat, Vec3};

use super::geometry::{Geometry, TriangleMesh};
use super::material::{Color, Material};

/// Handle to a node in a [`Scene`](super::Scene) arena.
///
/// Handles are non-owning; the scene owns every node for its whole life.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

/// Local translation / rotation / scale relative to the parent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// Translation.
    pub position: Vec3,
    /// Orientation.
    pub rotation: Quat,
    /// Non-uniform scale.
    pub scale: Vec3,
}

impl Transform {
    /// Local-to-parent matrix.
    #[must_use]
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            self.scale,
            self.rotation,
            self.position,
        )
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

/// Renderable, pickable surface: geometry plus material.
///
/// The triangle mesh and its bounding sphere are generated once at
/// construction.
#[derive(Debug, Clone)]
pub struct Mesh {
    /// Surface parameters.
    pub material: Material,
    triangles: TriangleMesh,
    bounding_radius: f32,
}

impl Mesh {
    /// Build a mesh, generating its triangles.
    #[must_use]
    pub fn new(geometry: &Geometry, material: Material) -> Self {
        let triangles = geometry.build();
        let bounding_radius = triangles.bounding_radius();
        Self {
            material,
            triangles,
            bounding_radius,
        }
    }

    /// Generated local-space triangles.
    #[must_use]
    pub fn triangles(&self) -> &TriangleMesh {
        &self.triangles
    }

    /// Local-space bounding sphere radius (centred on the origin).
    #[must_use]
    pub fn bounding_radius(&self) -> f32 {
        self.bounding_radius
    }
}

/// One entry in the scene tree. Groups have no mesh.
#[derive(Debug, Clone)]
pub struct Node {
    /// Debug name.
    pub name: String,
    /// Local transform.
    pub transform: Transform,
    /// Optional surface; `None` for pure grouping nodes.
    pub mesh: Option<Mesh>,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}

impl Node {
    pub(crate) fn new(name: &str, mesh: Option<Mesh>) -> Self {
        Self {
            name: name.to_owned(),
            transform: Transform::default(),
            mesh,
            parent: None,
            children: Vec::new(),
        }
    }

    /// Parent node, if attached.
    #[must_use]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Direct children in insertion order.
    #[must_use]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

/// Read/write access to a node's placement.
///
/// This is the only surface the animation controller needs.
pub trait Transformable {
    /// Local position.
    fn position(&self) -> Vec3;
    /// Replace the local position.
    fn set_position(&mut self, position: Vec3);
    /// Local orientation.
    fn orientation(&self) -> Quat;
    /// Replace the local orientation.
    fn set_orientation(&mut self, orientation: Quat);
}

/// Read/write access to a node's emissive (highlight) colour.
///
/// Nodes without a material report `None` and ignore writes.
pub trait Emissive {
    /// Current emissive colour, if the node has a material.
    fn emissive(&self) -> Option<Color>;
    /// Override the emissive colour. Returns `false` when the node has no
    /// material to write to.
    fn set_emissive(&mut self, color: Color) -> bool;
}

impl Transformable for Node {
    fn position(&self) -> Vec3 {
        self.transform.position
    }

    fn set_position(&mut self, position: Vec3) {
        self.transform.position = position;
    }

    fn orientation(&self) -> Quat {
        self.transform.rotation
    }

    fn set_orientation(&mut self, orientation: Quat) {
        self.transform.rotation = orientation;
    }
}

impl Emissive for Node {
    fn emissive(&self) -> Option<Color> {
        self.mesh.as_ref().map(|m| m.material.emissive)
    }

    fn set_emissive(&mut self, color: Color) -> bool {
        match self.mesh.as_mut() {
            Some(mesh) => {
                mesh.material.emissive = color;
                true
            }
            None => false,
        }
    }
}
