use crate::camera::Camera;
use crate::input::{PointerPosition, Viewport};
use crate::options::PickingOptions;
use crate::scene::{Color, Emissive, NodeId, Scene};

use super::raycast::Raycaster;

/// The node currently highlighted and the colour it had before.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickedObject {
    /// Highlighted node.
    pub node: NodeId,
    /// Emissive colour to put back when the highlight is dropped.
    pub saved_emissive: Color,
}

/// Hover picking with a flashing emissive highlight.
///
/// Holds at most one pick. The saved colour travels with the node handle,
/// so there is never a saved colour without a node to restore it to.
#[derive(Debug, Clone, Default)]
pub struct PickHelper {
    raycaster: Raycaster,
    picked: Option<PickedObject>,
    options: PickingOptions,
}

impl PickHelper {
    /// Picker with the given highlight options.
    #[must_use]
    pub fn new(options: PickingOptions) -> Self {
        Self {
            raycaster: Raycaster::new(),
            picked: None,
            options,
        }
    }

    /// Active pick, if any.
    #[must_use]
    pub fn picked_object(&self) -> Option<PickedObject> {
        self.picked
    }

    /// Highlight colour for a moment in time (seconds).
    #[must_use]
    pub fn highlight_at(&self, time: f32) -> Color {
        if (time * self.options.flash_rate) % 2.0 > 1.0 {
            self.options.highlight_on
        } else {
            self.options.highlight_off
        }
    }

    /// Restore the picked node's emissive colour and forget it. No-op
    /// without an active pick.
    pub fn clear_picked_object(&mut self, scene: &mut Scene) {
        if let Some(picked) = self.picked.take() {
            if let Some(node) = scene.node_mut(picked.node) {
                let _ = node.set_emissive(picked.saved_emissive);
            }
        }
    }

    /// Highlight the nearest mesh under `pointer`, dropping any previous
    /// highlight first. `time` is in seconds and drives the flash.
    ///
    /// Returns the newly picked node.
    pub fn pick(
        &mut self,
        pointer: PointerPosition,
        scene: &mut Scene,
        camera: &Camera,
        time: f32,
        viewport: Viewport,
    ) -> Option<NodeId> {
        self.clear_picked_object(scene);

        let ndc = viewport.to_ndc(pointer);
        self.raycaster.set_from_camera(ndc, camera);
        let hits =
            self.raycaster.intersect_objects(scene, scene.roots(), true);

        log::debug!(
            "pick at ({:.1}, {:.1}) ndc {ndc:?}: {} hit(s)",
            pointer.x,
            pointer.y,
            hits.len()
        );

        // Nearest first
        let hit = hits.first()?;
        let highlight = self.highlight_at(time);
        let node = scene.node_mut(hit.node)?;
        let saved_emissive = node.emissive()?;
        let _ = node.set_emissive(highlight);

        log::debug!(
            "picked '{}' at distance {:.3}, emissive #{:06X} -> #{:06X}",
            node.name,
            hit.distance,
            saved_emissive.hex(),
            highlight.hex()
        );
        self.picked = Some(PickedObject {
            node: hit.node,
            saved_emissive,
        });
        Some(hit.node)
    }
}
