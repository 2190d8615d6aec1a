use std::time::{Duration, Instant};

use rayon::prelude::*;
use tracing::trace;

use fractaldive_core::{FractalParams, Mandelbrot, ViewTransform, Viewport};

use crate::buffer::RenderBuffer;
use crate::grey_buffer::GreyBuffer;
use crate::palette::Palette;

/// What a generation pass writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Grayscale and colour buffers; the frame is ready to present.
    Full,
    /// Grayscale buffer only. Used to score candidate views cheaply.
    GreyOnly,
}

/// Summary of one generation pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameStats {
    pub mode: RenderMode,
    pub escaped: usize,
    pub pixels: usize,
    pub elapsed: Duration,
}

impl FrameStats {
    /// Fraction of pixels whose orbit escaped.
    pub fn escaped_fraction(&self) -> f64 {
        if self.pixels == 0 {
            0.0
        } else {
            self.escaped as f64 / self.pixels as f64
        }
    }
}

/// Sweeps every pixel of the viewport through the escape-time evaluator.
///
/// Owns both output buffers. They are allocated once with exactly
/// `width * height` entries and every pass overwrites all of them, so no
/// per-pixel bounds checks are needed downstream.
#[derive(Debug, Clone)]
pub struct FrameGenerator {
    viewport: Viewport,
    fractal: Mandelbrot,
    palette: Palette,
    grey: GreyBuffer,
    frame: RenderBuffer,
}

impl FrameGenerator {
    pub fn new(viewport: Viewport, params: FractalParams, palette: Palette) -> Self {
        Self {
            viewport,
            fractal: Mandelbrot::new(params),
            palette,
            grey: GreyBuffer::new(&viewport),
            frame: RenderBuffer::new(&viewport),
        }
    }

    /// Render the view. Rows are processed in parallel; the call returns
    /// once the whole frame is written.
    pub fn generate(&mut self, view: &ViewTransform, mode: RenderMode) -> FrameStats {
        let start = Instant::now();
        let width = self.viewport.width() as usize;
        let max_iter = self.fractal.params().max_iterations;
        let fractal = &self.fractal;
        let palette = &self.palette;

        let escaped: usize = match mode {
            RenderMode::GreyOnly => self
                .grey
                .data
                .par_chunks_mut(width)
                .enumerate()
                .map(|(y, row)| {
                    let mut escaped = 0;
                    for (x, g) in row.iter_mut().enumerate() {
                        let r = fractal.escape_time(view, x as u32, y as u32);
                        *g = r.grey_index(max_iter);
                        escaped += r.escaped as usize;
                    }
                    escaped
                })
                .sum(),
            RenderMode::Full => self
                .grey
                .data
                .par_chunks_mut(width)
                .zip(self.frame.pixels.par_chunks_mut(width * 4))
                .enumerate()
                .map(|(y, (row, rgba))| {
                    let mut escaped = 0;
                    for (x, (g, px)) in row.iter_mut().zip(rgba.chunks_exact_mut(4)).enumerate() {
                        let r = fractal.escape_time(view, x as u32, y as u32);
                        let index = r.grey_index(max_iter);
                        *g = index;
                        px.copy_from_slice(&palette.shade(index, r.escaped));
                        escaped += r.escaped as usize;
                    }
                    escaped
                })
                .sum(),
        };

        let stats = FrameStats {
            mode,
            escaped,
            pixels: self.viewport.pixel_count(),
            elapsed: start.elapsed(),
        };
        trace!(
            ?mode,
            escaped,
            zoom = view.zoom(),
            elapsed_us = stats.elapsed.as_micros() as u64,
            "Frame generated"
        );
        stats
    }

    pub fn grey(&self) -> &GreyBuffer {
        &self.grey
    }

    pub fn frame(&self) -> &RenderBuffer {
        &self.frame
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn params(&self) -> &FractalParams {
        self.fractal.params()
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }
}
