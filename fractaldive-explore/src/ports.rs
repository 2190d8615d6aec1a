//! The seams between the controller and the outside world.

use fractaldive_core::{ViewTransform, Viewport};
use fractaldive_render::{FrameGenerator, RenderBuffer, RenderMode};

/// What the controller needs from a frame generator.
pub trait FrameSource {
    /// Render `view` synchronously. `RenderMode::GreyOnly` must leave the
    /// colour frame untouched.
    fn generate(&mut self, view: &ViewTransform, mode: RenderMode);

    /// Grey values of the most recent render, row-major.
    fn grey(&self) -> &[u8];

    /// Colour frame of the most recent full render.
    fn frame(&self) -> &RenderBuffer;

    /// Size of every frame this source renders.
    fn viewport(&self) -> Viewport;
}

impl FrameSource for FrameGenerator {
    fn generate(&mut self, view: &ViewTransform, mode: RenderMode) {
        FrameGenerator::generate(self, view, mode);
    }

    fn grey(&self) -> &[u8] {
        FrameGenerator::grey(self).as_slice()
    }

    fn frame(&self) -> &RenderBuffer {
        FrameGenerator::frame(self)
    }

    fn viewport(&self) -> Viewport {
        *FrameGenerator::viewport(self)
    }
}

/// Receives every fully rendered frame, once per full render.
pub trait FrameSink {
    fn present_frame(&mut self, frame: &RenderBuffer, view: &ViewTransform);
}

impl<F: FnMut(&RenderBuffer, &ViewTransform)> FrameSink for F {
    fn present_frame(&mut self, frame: &RenderBuffer, view: &ViewTransform) {
        self(frame, view)
    }
}

/// A sink that drops every frame.
#[derive(Debug, Default, Clone, Copy)]
pub struct Discard;

impl FrameSink for Discard {
    fn present_frame(&mut self, _frame: &RenderBuffer, _view: &ViewTransform) {}
}
