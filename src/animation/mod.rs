//! Per-frame animation of the scene's moving mesh.

mod controller;

pub use controller::{AnimationController, AnimationFrame, AnimationState};
