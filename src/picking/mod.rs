//! Ray-cast object picking and reversible hover highlighting.
//!
//! [`Raycaster`] resolves a camera ray to an ordered list of scene hits;
//! [`PickHelper`] keeps at most one node highlighted and guarantees its
//! original emissive colour is restored before the pick is dropped or
//! replaced.

mod helper;
mod raycast;

pub use helper::{PickHelper, PickedObject};
pub use raycast::{Intersection, Raycaster};
