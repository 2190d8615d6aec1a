use crate::error::CoreError;

/// Pixel dimensions of the rendered frame.
///
/// Fixed for the lifetime of a run; every buffer in the pipeline is sized
/// from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    width: u32,
    height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> crate::Result<Self> {
        if width == 0 || height == 0 {
            return Err(CoreError::InvalidViewport {
                reason: format!("dimensions must be > 0, got {width}×{height}"),
            });
        }
        Ok(Self { width, height })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of pixels, i.e. the length of every per-pixel buffer.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Row-major buffer index of pixel `(x, y)`.
    #[inline]
    pub fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_dimensions() {
        assert!(Viewport::new(0, 100).is_err());
        assert!(Viewport::new(100, 0).is_err());
    }

    #[test]
    fn pixel_count_and_index() {
        let vp = Viewport::new(512, 384).unwrap();
        assert_eq!(vp.pixel_count(), 512 * 384);
        assert_eq!(vp.index(0, 0), 0);
        assert_eq!(vp.index(3, 2), 2 * 512 + 3);
        assert_eq!(vp.index(511, 383), vp.pixel_count() - 1);
    }
}
