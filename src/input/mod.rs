//! Pointer input: platform-agnostic events, canvas geometry, and the
//! tracker that turns raw events into "where is the pointer right now".

/// Platform-agnostic pointer events.
pub mod event;
/// Pointer tracking state machine.
pub mod pointer;

pub use event::InputEvent;
pub use pointer::{PointerPosition, PointerTracker, Viewport};
