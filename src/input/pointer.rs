use glam::Vec2;

use super::event::InputEvent;

/// Pointer location in canvas pixels, origin top-left, +Y down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerPosition {
    /// Horizontal offset from the canvas's left edge.
    pub x: f32,
    /// Vertical offset from the canvas's top edge.
    pub y: f32,
}

impl PointerPosition {
    /// Position at `(x, y)`.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Drawing-surface size and device pixel ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Backing-store width in device pixels.
    pub width: f32,
    /// Backing-store height in device pixels.
    pub height: f32,
    /// Device pixels per CSS pixel.
    pub pixel_ratio: f32,
}

impl Viewport {
    /// Viewport of the given size and pixel ratio.
    #[must_use]
    pub const fn new(width: f32, height: f32, pixel_ratio: f32) -> Self {
        Self {
            width,
            height,
            pixel_ratio,
        }
    }

    /// Width over height.
    #[must_use]
    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }

    /// Map a pointer position to normalized device coordinates.
    ///
    /// Pointer offsets are in CSS pixels while the viewport is measured in
    /// device pixels, hence the pixel-ratio factor. Y is flipped so +Y is
    /// up. A zero-sized viewport yields non-finite coordinates.
    #[must_use]
    pub fn to_ndc(&self, pointer: PointerPosition) -> Vec2 {
        Vec2::new(
            (pointer.x / self.width * self.pixel_ratio) * 2.0 - 1.0,
            (pointer.y / self.height * self.pixel_ratio) * -2.0 + 1.0,
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(800.0, 600.0, 1.0)
    }
}

/// Tracks where the pointer is and where the last press started.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointerTracker {
    position: Option<PointerPosition>,
    click_start: Option<PointerPosition>,
}

impl PointerTracker {
    /// Tracker with no known pointer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one event. Returns the release position for
    /// [`InputEvent::PointerUp`], `None` otherwise.
    pub fn handle_event(
        &mut self,
        event: InputEvent,
    ) -> Option<PointerPosition> {
        match event {
            InputEvent::PointerDown(pos) => {
                self.click_start = Some(pos);
                self.position = Some(pos);
                None
            }
            InputEvent::PointerUp(pos) => Some(pos),
            InputEvent::PointerMove(pos) => {
                self.position = Some(pos);
                None
            }
            InputEvent::PointerOut | InputEvent::PointerLeave => {
                self.position = None;
                None
            }
        }
    }

    /// Current pointer position, `None` once it has left the canvas.
    #[must_use]
    pub fn position(&self) -> Option<PointerPosition> {
        self.position
    }

    /// Where the most recent press began.
    #[must_use]
    pub fn click_start(&self) -> Option<PointerPosition> {
        self.click_start
    }
}
