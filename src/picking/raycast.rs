use glam::{Vec2, Vec3};

use crate::camera::{Camera, Ray};
use crate::scene::{NodeId, Scene};

/// One ray/mesh hit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    /// Node whose mesh was hit.
    pub node: NodeId,
    /// World-space distance from the ray origin.
    pub distance: f32,
    /// World-space hit point.
    pub point: Vec3,
}

/// Casts rays against the meshes of a [`Scene`].
#[derive(Debug, Clone)]
pub struct Raycaster {
    /// Current ray in world space.
    pub ray: Ray,
    /// Hits closer than this are ignored.
    pub near: f32,
    /// Hits farther than this are ignored.
    pub far: f32,
}

impl Default for Raycaster {
    fn default() -> Self {
        Self::new()
    }
}

impl Raycaster {
    /// Raycaster with an unset ray and unbounded range.
    #[must_use]
    pub fn new() -> Self {
        Self {
            ray: Ray::new(Vec3::ZERO, Vec3::NEG_Z),
            near: 0.0,
            far: f32::INFINITY,
        }
    }

    /// Aim through `ndc` from `camera`.
    pub fn set_from_camera(&mut self, ndc: Vec2, camera: &Camera) {
        self.ray = Ray::from_camera(ndc, camera);
    }

    /// Intersect the current ray with `nodes` (and their descendants when
    /// `recursive`). Results are sorted nearest first. Nodes without a
    /// mesh never produce hits.
    #[must_use]
    pub fn intersect_objects(
        &self,
        scene: &Scene,
        nodes: &[NodeId],
        recursive: bool,
    ) -> Vec<Intersection> {
        let mut hits = Vec::new();
        for &root in nodes {
            if recursive {
                for id in scene.descendants(root) {
                    hits.extend(self.intersect_node(scene, id));
                }
            } else {
                hits.extend(self.intersect_node(scene, root));
            }
        }
        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        hits
    }

    /// Nearest in-range hit on a single node's own mesh.
    ///
    /// Every triangle hit is checked against `near..=far` in world units
    /// before the nearest is chosen, so a back face can still be reported
    /// when the front face lies closer than `near`.
    fn intersect_node(&self, scene: &Scene, id: NodeId) -> Option<Intersection> {
        let mesh = scene.node(id)?.mesh.as_ref()?;
        let world = scene.world_matrix(id);
        let local_ray = self.ray.transformed(world.inverse());

        // Cheap reject before walking triangles
        let _ = local_ray.intersect_sphere(Vec3::ZERO, mesh.bounding_radius())?;

        mesh.triangles()
            .triangle_positions()
            .filter_map(|tri| local_ray.intersect_triangle(tri))
            .map(|t_local| {
                let point = world.transform_point3(local_ray.at(t_local));
                Intersection {
                    node: id,
                    distance: point.distance(self.ray.origin),
                    point,
                }
            })
            .filter(|hit| (self.near..=self.far).contains(&hit.distance))
            .min_by(|a, b| a.distance.total_cmp(&b.distance))
    }
}
