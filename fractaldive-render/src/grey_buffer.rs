use fractaldive_core::Viewport;

/// Per-pixel grayscale detail values for a full frame.
///
/// Escaped pixels hold their normalized iteration index, interior pixels
/// hold 0. This is what the detail meters score; it is cheap to produce
/// because no palette lookup is involved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreyBuffer {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl GreyBuffer {
    pub fn new(viewport: &Viewport) -> Self {
        Self {
            width: viewport.width(),
            height: viewport.height(),
            data: vec![0; viewport.pixel_count()],
        }
    }

    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Number of interior (zero-valued) pixels.
    pub fn interior_count(&self) -> usize {
        self.data.iter().filter(|&&v| v == 0).count()
    }
}
