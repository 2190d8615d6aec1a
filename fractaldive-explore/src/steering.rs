//! Tile-grid steering.
//!
//! The frame is cut into a grid of equal tiles, every tile is scored with
//! the same [`DetailMeter`] the controller uses for whole frames, and the
//! view drifts a fraction of the way towards the centre of the busiest one.
//! Pixels right of or below the last whole tile are never scored.

use fractaldive_core::Viewport;

use crate::detail::DetailMeter;
use crate::error::ExploreError;

/// The winning tile of one scoring pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BusiestTile {
    pub column: u32,
    pub row: u32,
    pub score: f64,
}

/// A grid of tiles laid over a frame of fixed size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileGrid {
    columns: u32,
    rows: u32,
    tile_width: u32,
    tile_height: u32,
    frame_width: u32,
    frame_height: u32,
    pan_divisor: i64,
}

impl TileGrid {
    /// Tiles are `floor(width / columns)` by `floor(height / rows)` pixels
    /// and must be at least 2×2.
    pub fn new(
        viewport: &Viewport,
        columns: u32,
        rows: u32,
        pan_divisor: u32,
    ) -> crate::Result<Self> {
        if columns == 0 || rows == 0 {
            return Err(ExploreError::InvalidConfig(format!(
                "tile grid must have at least one tile per axis, got {columns}×{rows}"
            )));
        }
        if pan_divisor == 0 {
            return Err(ExploreError::InvalidConfig(
                "pan_divisor must be at least 1".into(),
            ));
        }
        let tile_width = viewport.width() / columns;
        let tile_height = viewport.height() / rows;
        if tile_width < 2 || tile_height < 2 {
            return Err(ExploreError::InvalidConfig(format!(
                "a {}×{} frame is too small for {columns}×{rows} tiles",
                viewport.width(),
                viewport.height()
            )));
        }
        Ok(Self {
            columns,
            rows,
            tile_width,
            tile_height,
            frame_width: viewport.width(),
            frame_height: viewport.height(),
            pan_divisor: i64::from(pan_divisor),
        })
    }

    /// Score every tile in row-major order and return the first one with
    /// the highest score. Tile `(0, 0)` wins when no tile scores above 0.
    ///
    /// `grey` must hold one value per frame pixel, row-major.
    pub fn busiest<M: DetailMeter + ?Sized>(&self, meter: &M, grey: &[u8]) -> BusiestTile {
        let (tw, th) = (self.tile_width as usize, self.tile_height as usize);
        let width = self.frame_width as usize;
        let mut tile = Vec::with_capacity(tw * th);
        let mut best = BusiestTile {
            column: 0,
            row: 0,
            score: 0.0,
        };

        for row in 0..self.rows {
            for column in 0..self.columns {
                tile.clear();
                let left = column as usize * tw;
                for y in 0..th {
                    let start = (row as usize * th + y) * width + left;
                    tile.extend_from_slice(&grey[start..start + tw]);
                }
                let score = meter.measure(&tile);
                if score > best.score {
                    best = BusiestTile { column, row, score };
                }
            }
        }
        best
    }

    /// Pixel at the centre of a tile.
    pub fn center_of(&self, tile: &BusiestTile) -> (u32, u32) {
        (
            tile.column * self.tile_width + self.tile_width / 2,
            tile.row * self.tile_height + self.tile_height / 2,
        )
    }

    /// Pan that moves the view `1 / pan_divisor` of the way from the frame
    /// centre towards the tile centre. Each axis is truncated towards zero.
    pub fn pan_towards(&self, tile: &BusiestTile) -> (f64, f64) {
        let (cx, cy) = self.center_of(tile);
        let dx = (i64::from(cx) - i64::from(self.frame_width / 2)) / self.pan_divisor;
        let dy = (i64::from(cy) - i64::from(self.frame_height / 2)) / self.pan_divisor;
        (dx as f64, dy as f64)
    }
}
