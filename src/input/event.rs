use super::pointer::PointerPosition;

/// Platform-agnostic pointer events, in canvas pixel offsets.
///
/// These are fed into a [`PointerTracker`](super::PointerTracker).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A button was pressed over the canvas.
    PointerDown(PointerPosition),
    /// A button was released over the canvas.
    PointerUp(PointerPosition),
    /// The pointer moved over the canvas.
    PointerMove(PointerPosition),
    /// The pointer moved onto a child element or off the canvas.
    PointerOut,
    /// The pointer left the canvas entirely.
    PointerLeave,
}
