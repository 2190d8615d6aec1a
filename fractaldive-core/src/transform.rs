use serde::{Deserialize, Serialize};

use crate::complex::Complex;
use crate::error::CoreError;
use crate::viewport::Viewport;

/// A validated zoom multiplier: finite and strictly positive.
///
/// Zoom operations only accept this type, so a degenerate factor is
/// rejected where it is constructed and `zoom > 0` can never be broken
/// by a zoom step.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
pub struct ZoomFactor(f64);

impl ZoomFactor {
    /// Halves or doubles the scale; used for pointer zoom.
    pub const DOUBLE: Self = Self(2.0);

    pub fn new(factor: f64) -> crate::Result<Self> {
        if factor <= 0.0 || !factor.is_finite() {
            return Err(CoreError::InvalidZoomFactor(factor));
        }
        Ok(Self(factor))
    }

    #[inline]
    pub fn get(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for ZoomFactor {
    type Error = CoreError;

    fn try_from(value: f64) -> crate::Result<Self> {
        Self::new(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoomDirection {
    In,
    Out,
}

/// Pan/zoom state mapping pixels to the fractal plane.
///
/// Pixel `(x, y)` maps to `((x + offset_x + pan_x) / zoom,
/// (y + offset_y + pan_y) / zoom)`. The offsets centre the origin on the
/// middle pixel and never change; pan is measured in zoomed pixels, so
/// `pan / zoom` is the fractal point at the centre of the frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ViewTransform {
    offset_x: f64,
    offset_y: f64,
    pan_x: f64,
    pan_y: f64,
    zoom: f64,
}

impl ViewTransform {
    /// Span of the fractal plane that shows the whole set, with padding.
    const FIT_SPAN_X: f64 = 3.6;
    const FIT_SPAN_Y: f64 = 2.6;

    pub fn new(viewport: &Viewport, pan_x: f64, pan_y: f64, zoom: f64) -> crate::Result<Self> {
        if zoom <= 0.0 || !zoom.is_finite() {
            return Err(CoreError::InvalidZoom(zoom));
        }
        Ok(Self {
            offset_x: -(viewport.width() as f64) / 2.0,
            offset_y: -(viewport.height() as f64) / 2.0,
            pan_x,
            pan_y,
            zoom,
        })
    }

    /// A view whose centre pixel shows `center` at the given zoom.
    pub fn centered(viewport: &Viewport, center: Complex, zoom: f64) -> crate::Result<Self> {
        Self::new(viewport, center.re * zoom, center.im * zoom, zoom)
    }

    /// A view centred on `center`, zoomed so the whole set fits the frame
    /// regardless of aspect ratio.
    pub fn fit(viewport: &Viewport, center: Complex) -> Self {
        let units_per_pixel = (Self::FIT_SPAN_X / viewport.width() as f64)
            .max(Self::FIT_SPAN_Y / viewport.height() as f64);
        let zoom = units_per_pixel.recip();
        Self {
            offset_x: -(viewport.width() as f64) / 2.0,
            offset_y: -(viewport.height() as f64) / 2.0,
            pan_x: center.re * zoom,
            pan_y: center.im * zoom,
            zoom,
        }
    }

    /// Map (possibly fractional) pixel coordinates to the fractal plane.
    #[inline]
    pub fn pixel_to_complex(&self, x: f64, y: f64) -> Complex {
        Complex::new(
            (x + self.offset_x + self.pan_x) / self.zoom,
            (y + self.offset_y + self.pan_y) / self.zoom,
        )
    }

    /// The fractal point under the centre of the frame.
    pub fn center(&self) -> Complex {
        Complex::new(self.pan_x / self.zoom, self.pan_y / self.zoom)
    }

    #[inline]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    #[inline]
    pub fn pan(&self) -> (f64, f64) {
        (self.pan_x, self.pan_y)
    }

    /// Shift the view by `(dx, dy)` zoomed pixels. Unbounded.
    pub fn pan_relative(&mut self, dx: f64, dy: f64) {
        self.pan_x += dx;
        self.pan_y += dy;
    }

    /// A copy of this view shifted by `(dx, dy)`.
    pub fn panned(mut self, dx: f64, dy: f64) -> Self {
        self.pan_relative(dx, dy);
        self
    }

    /// Change the zoom, leaving pan untouched.
    pub fn zoom_at_center(&mut self, factor: ZoomFactor, direction: ZoomDirection) {
        match direction {
            ZoomDirection::In => self.zoom *= factor.get(),
            ZoomDirection::Out => self.zoom /= factor.get(),
        }
    }

    /// Change the zoom so the fractal point under pixel `(x, y)` stays
    /// under that pixel.
    pub fn zoom_at_point(&mut self, x: f64, y: f64, factor: ZoomFactor, direction: ZoomDirection) {
        let anchor = self.pixel_to_complex(x, y);
        self.zoom_at_center(factor, direction);
        self.pan_x = anchor.re * self.zoom - x - self.offset_x;
        self.pan_y = anchor.im * self.zoom - y - self.offset_y;
    }

    /// Pan so the fractal point under pixel `(x, y)` moves to the centre.
    pub fn center_on(&mut self, x: f64, y: f64) {
        self.pan_relative(x + self.offset_x, y + self.offset_y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn vp() -> Viewport {
        Viewport::new(512, 512).unwrap()
    }

    fn assert_close(a: Complex, b: Complex) {
        assert!(
            (a.re - b.re).abs() < EPSILON && (a.im - b.im).abs() < EPSILON,
            "{a} != {b}"
        );
    }

    #[test]
    fn invalid_zoom_rejected() {
        assert!(ViewTransform::new(&vp(), 0.0, 0.0, 0.0).is_err());
        assert!(ViewTransform::new(&vp(), 0.0, 0.0, -3.0).is_err());
        assert!(ViewTransform::new(&vp(), 0.0, 0.0, f64::NAN).is_err());
    }

    #[test]
    fn invalid_zoom_factor_rejected() {
        assert!(ZoomFactor::new(0.0).is_err());
        assert!(ZoomFactor::new(-1.05).is_err());
        assert!(ZoomFactor::new(f64::INFINITY).is_err());
        assert!(ZoomFactor::try_from(1.05).is_ok());
    }

    #[test]
    fn offsets_centre_the_frame() {
        let view = ViewTransform::new(&vp(), 100.0, 182.0, 30.0).unwrap();
        assert_close(view.pixel_to_complex(256.0, 256.0), view.center());
        assert_close(
            view.pixel_to_complex(0.0, 0.0),
            Complex::new(-156.0 / 30.0, -74.0 / 30.0),
        );
    }

    #[test]
    fn centered_puts_point_in_the_middle() {
        let c = Complex::new(-0.743, 0.131);
        let view = ViewTransform::centered(&vp(), c, 4000.0).unwrap();
        assert_close(view.center(), c);
        assert_close(view.pixel_to_complex(256.0, 256.0), c);
    }

    #[test]
    fn fit_shows_whole_set() {
        let v = Viewport::new(800, 600).unwrap();
        let view = ViewTransform::fit(&v, Complex::new(-0.75, 0.0));
        let tl = view.pixel_to_complex(0.0, 0.0);
        let br = view.pixel_to_complex(800.0, 600.0);
        assert!(br.re - tl.re >= 3.5);
        assert!(br.im - tl.im >= 2.5);
    }

    #[test]
    fn pan_round_trip_is_exact_for_integers() {
        let mut view = ViewTransform::new(&vp(), 100.0, 182.0, 30.0).unwrap();
        let before = view.pan();
        view.pan_relative(17.0, -9.0);
        assert_eq!(view.pan(), (117.0, 173.0));
        view.pan_relative(-17.0, 9.0);
        assert_eq!(view.pan(), before);
    }

    #[test]
    fn zoom_at_center_round_trip() {
        let mut view = ViewTransform::new(&vp(), 100.0, 182.0, 30.0).unwrap();
        let f = ZoomFactor::new(1.05).unwrap();
        view.zoom_at_center(f, ZoomDirection::In);
        assert!((view.zoom() - 31.5).abs() < EPSILON);
        assert_eq!(view.pan(), (100.0, 182.0));
        view.zoom_at_center(f, ZoomDirection::Out);
        assert!((view.zoom() - 30.0).abs() < EPSILON);
    }

    #[test]
    fn zoom_at_point_keeps_point_fixed() {
        let mut view = ViewTransform::new(&vp(), 100.0, 182.0, 30.0).unwrap();
        let (x, y) = (40.0, 400.0);
        let before = view.pixel_to_complex(x, y);
        view.zoom_at_point(x, y, ZoomFactor::new(2.0).unwrap(), ZoomDirection::In);
        assert!((view.zoom() - 60.0).abs() < EPSILON);
        assert_close(view.pixel_to_complex(x, y), before);

        view.zoom_at_point(x, y, ZoomFactor::new(4.0).unwrap(), ZoomDirection::Out);
        assert!((view.zoom() - 15.0).abs() < EPSILON);
        assert_close(view.pixel_to_complex(x, y), before);
    }

    #[test]
    fn center_on_moves_point_to_centre() {
        let mut view = ViewTransform::new(&vp(), 100.0, 182.0, 30.0).unwrap();
        let target = view.pixel_to_complex(10.0, 500.0);
        view.center_on(10.0, 500.0);
        assert_close(view.center(), target);
        assert_eq!(view.zoom(), 30.0);
    }

    #[test]
    fn panned_returns_a_shifted_copy() {
        let view = ViewTransform::new(&vp(), 1.0, 2.0, 3.0).unwrap();
        let moved = view.panned(5.0, -5.0);
        assert_eq!(view.pan(), (1.0, 2.0));
        assert_eq!(moved.pan(), (6.0, -3.0));
    }
}
