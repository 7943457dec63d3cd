//! Application context: one scene, one animation, one picker.
//!
//! A [`DemoApp`] is built once at startup and handed to whatever owns the
//! frame loop (the browser glue behind the `web` feature, or the headless
//! binary).

use glam::Vec3;

use crate::animation::{AnimationController, AnimationFrame};
use crate::camera::Camera;
use crate::input::{InputEvent, PointerTracker, Viewport};
use crate::options::Options;
use crate::picking::PickHelper;
use crate::scene::{Color, Geometry, Material, Mesh, NodeId, Scene};

/// Per-frame outcome, mostly for hosts that want to log or assert on it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameReport {
    /// Placement applied to the animated mesh.
    pub animation: AnimationFrame,
    /// Node highlighted this frame, if any.
    pub picked: Option<NodeId>,
}

/// Owns the scene and the per-frame controllers.
#[derive(Debug, Clone)]
pub struct DemoApp {
    options: Options,
    scene: Scene,
    camera: Camera,
    viewport: Viewport,
    animation: AnimationController,
    picker: PickHelper,
    pointer: PointerTracker,
    animated_mesh: NodeId,
}

impl DemoApp {
    /// Build the scene and controllers for a viewport.
    #[must_use]
    pub fn new(options: Options, viewport: Viewport) -> Self {
        let animation = AnimationController::new(options.animation.clone());
        let (scene, animated_mesh) = build_scene(animation.initial_x());
        let camera = Camera::from_options(&options.camera, viewport.aspect());
        let picker = PickHelper::new(options.picking.clone());

        log::info!(
            "scene ready: {} nodes, segment {:.0}ms",
            scene.len(),
            animation.segment_duration()
        );

        Self {
            options,
            scene,
            camera,
            viewport,
            animation,
            picker,
            pointer: PointerTracker::new(),
            animated_mesh,
        }
    }

    /// Options the app was built with.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// The scene graph.
    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// The viewing camera.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Current drawing-surface geometry.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Handle of the oscillating mesh.
    #[must_use]
    pub fn animated_mesh(&self) -> NodeId {
        self.animated_mesh
    }

    /// Pointer state.
    #[must_use]
    pub fn pointer(&self) -> &PointerTracker {
        &self.pointer
    }

    /// Highlight state.
    #[must_use]
    pub fn picker(&self) -> &PickHelper {
        &self.picker
    }

    /// Feed one pointer event.
    pub fn handle_event(&mut self, event: InputEvent) {
        if let Some(end) = self.pointer.handle_event(event) {
            log::debug!("click ended at ({:.1}, {:.1})", end.x, end.y);
        }
    }

    /// The drawing surface changed size or pixel density.
    pub fn resize(&mut self, width: f32, height: f32, pixel_ratio: f32) {
        self.viewport = Viewport::new(width, height, pixel_ratio);
        self.camera.set_viewport(width, height);
    }

    /// Advance one frame. `time` is the host's monotonically increasing
    /// timestamp in milliseconds.
    pub fn frame(&mut self, time: f64) -> FrameReport {
        let animation = match self.scene.node_mut(self.animated_mesh) {
            Some(node) => self.animation.apply(time, node),
            None => self.animation.update(time),
        };

        let picked = match self.pointer.position() {
            Some(pointer) => self.picker.pick(
                pointer,
                &mut self.scene,
                &self.camera,
                (time * 0.001) as f32,
                self.viewport,
            ),
            None => {
                self.picker.clear_picked_object(&mut self.scene);
                None
            }
        };

        FrameReport { animation, picked }
    }
}

/// A group holding a flat-shaded cyan cone and a yellow torus knot. Returns
/// the scene and the knot's handle.
fn build_scene(knot_x: f32) -> (Scene, NodeId) {
    let mut scene = Scene::new();
    let root = scene.add_group("objectRoot", None);

    let cone = Mesh::new(
        &Geometry::cylinder(0.0, 0.3, 1.0, 10, 1),
        Material::standard(Color::from_hex(0x0000_FFFF)).with_flat_shading(true),
    );
    let cone = scene.add_mesh("cone", cone, Some(root));
    if let Some(node) = scene.node_mut(cone) {
        node.transform.position = Vec3::new(0.0, 0.0, 1.0);
    }

    let knot = Mesh::new(
        &Geometry::torus_knot(0.2, 0.05, 40, 10),
        Material::standard(Color::from_hex(0x00FF_FF00)),
    );
    let knot = scene.add_mesh("torusKnot", knot, Some(root));
    if let Some(node) = scene.node_mut(knot) {
        node.transform.position = Vec3::new(knot_x, 0.0, 0.0);
    }

    (scene, knot)
}
