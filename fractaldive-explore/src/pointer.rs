use fractaldive_core::{ViewTransform, ZoomDirection, ZoomFactor};

/// A click on the frame, in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerClick {
    pub x: f64,
    pub y: f64,
    /// Zoom out instead of in. Ignored for pan-only clicks.
    pub zoom_out: bool,
    /// Recentre on the clicked point without zooming.
    pub pan_only: bool,
}

impl PointerClick {
    pub fn pan_to(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            zoom_out: false,
            pan_only: true,
        }
    }

    pub fn zoom_in_at(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            zoom_out: false,
            pan_only: false,
        }
    }

    pub fn zoom_out_at(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            zoom_out: true,
            pan_only: false,
        }
    }

    pub fn apply(&self, view: &mut ViewTransform) {
        if self.pan_only {
            view.center_on(self.x, self.y);
            return;
        }
        let direction = if self.zoom_out {
            ZoomDirection::Out
        } else {
            ZoomDirection::In
        };
        view.zoom_at_point(self.x, self.y, ZoomFactor::DOUBLE, direction);
    }
}

#[cfg(test)]
mod tests {
    use fractaldive_core::Viewport;

    use super::*;

    #[test]
    fn pan_only_ignores_zoom_flag() {
        let vp = Viewport::new(512, 512).unwrap();
        let mut view = ViewTransform::new(&vp, 100.0, 182.0, 30.0).unwrap();
        let click = PointerClick {
            zoom_out: true,
            ..PointerClick::pan_to(300.0, 200.0)
        };
        click.apply(&mut view);
        assert_eq!(view.zoom(), 30.0);
        assert_eq!(view.pan(), (144.0, 126.0));
    }

    #[test]
    fn zoom_out_halves_scale() {
        let vp = Viewport::new(512, 512).unwrap();
        let mut view = ViewTransform::new(&vp, 0.0, 0.0, 30.0).unwrap();
        PointerClick::zoom_out_at(256.0, 256.0).apply(&mut view);
        assert_eq!(view.zoom(), 15.0);
        assert_eq!(view.pan(), (0.0, 0.0));
    }
}
