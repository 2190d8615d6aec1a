use crate::buffer::BLACK;
use crate::color_table::DEFAULT_COLOR_TABLE;
use crate::error::RenderError;

/// Number of palette entries; one per grey index.
pub const PALETTE_SIZE: usize = 256;

// ---------------------------------------------------------------------------
// Palette
// ---------------------------------------------------------------------------

/// A fixed 256-entry colour lookup indexed by grey value.
///
/// Built once at start-up and never modified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<[u8; 3]>,
}

impl Palette {
    /// Sample 256 entries from a larger colour table.
    ///
    /// Entry `i` takes `table[ceil(i * L / 256)]`, clamped to the last entry
    /// for tables shorter than the palette.
    pub fn from_table(table: &[[u8; 3]]) -> crate::Result<Self> {
        if table.is_empty() {
            return Err(RenderError::EmptyColorTable);
        }
        let len = table.len();
        let colors = (0..PALETTE_SIZE)
            .map(|i| table[table_index(i, len)])
            .collect();
        Ok(Self { colors })
    }

    /// Like [`from_table`](Self::from_table) for `#RRGGBB` strings.
    pub fn from_hex_table<S: AsRef<str>>(table: &[S]) -> crate::Result<Self> {
        let rgb = table
            .iter()
            .map(|s| parse_hex(s.as_ref()))
            .collect::<crate::Result<Vec<_>>>()?;
        Self::from_table(&rgb)
    }

    /// Opaque RGBA colour for a grey index.
    #[inline]
    pub fn color(&self, index: u8) -> [u8; 4] {
        let [r, g, b] = self.colors[index as usize];
        [r, g, b, 255]
    }

    /// Colour for a pixel: black when the point never escaped.
    #[inline]
    pub fn shade(&self, index: u8, escaped: bool) -> [u8; 4] {
        if escaped {
            self.color(index)
        } else {
            BLACK
        }
    }

    pub fn colors(&self) -> &[[u8; 3]] {
        &self.colors
    }
}

impl Default for Palette {
    fn default() -> Self {
        // A single bad entry would shift every sample, so parse all or none.
        let palette = Self::from_hex_table(&DEFAULT_COLOR_TABLE);
        debug_assert!(palette.is_ok(), "built-in colour table must parse");
        palette.unwrap_or_else(|_| Self {
            colors: vec![[255, 255, 255]; PALETTE_SIZE],
        })
    }
}

/// `ceil(i * len / 256)` in integer arithmetic, clamped into the table.
#[inline]
fn table_index(i: usize, len: usize) -> usize {
    let idx = (i * len).div_ceil(PALETTE_SIZE);
    idx.min(len - 1)
}

/// Parse `#RRGGBB` (the `#` is optional).
pub fn parse_hex(s: &str) -> crate::Result<[u8; 3]> {
    let hex = s.trim().trim_start_matches('#');
    let bad = || RenderError::InvalidHexColor(s.to_string());
    if hex.len() != 6 || !hex.is_ascii() {
        return Err(bad());
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).map_err(|_| bad());
    Ok([channel(0..2)?, channel(2..4)?, channel(4..6)?])
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
