use fractaldive_core::Viewport;

/// Opaque black, used for points that never escape.
pub const BLACK: [u8; 4] = [0, 0, 0, 255];

/// An RGBA pixel buffer representing a rendered image.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderBuffer {
    pub width: u32,
    pub height: u32,
    /// RGBA pixel data, 4 bytes per pixel, row-major order.
    pub pixels: Vec<u8>,
}

impl RenderBuffer {
    /// Create a new buffer filled with black (opaque).
    pub fn new(viewport: &Viewport) -> Self {
        Self {
            width: viewport.width(),
            height: viewport.height(),
            pixels: BLACK.repeat(viewport.pixel_count()),
        }
    }
}
