use crate::complex::Complex;
use crate::fractal::{FractalParams, IterationResult};
use crate::transform::ViewTransform;

/// The Mandelbrot set: `z_{n+1} = z_n² + c`, starting from `z₀ = 0`.
///
/// This is the escape-time evaluator: a pure function of the point and
/// the iteration parameters.
#[derive(Debug, Clone, Default)]
pub struct Mandelbrot {
    params: FractalParams,
}

impl Mandelbrot {
    pub fn new(params: FractalParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &FractalParams {
        &self.params
    }

    /// Iterate the point under pixel `(px, py)` of the given view.
    #[inline]
    pub fn escape_time(&self, view: &ViewTransform, px: u32, py: u32) -> IterationResult {
        self.iterate(view.pixel_to_complex(px as f64, py as f64))
    }

    /// Iterate a single point of the fractal plane.
    ///
    /// Steps are counted from 1. An orbit that first leaves the radius on
    /// the final permitted step has used up the whole budget and is
    /// reported as interior.
    pub fn iterate(&self, c: Complex) -> IterationResult {
        let max_iter = self.params.max_iterations;

        // Points in these regions never escape; skip the loop.
        if in_cardioid(c.re, c.im) || in_period2_bulb(c.re, c.im) {
            return IterationResult::interior(max_iter);
        }

        let escape_radius_sq = self.params.escape_radius_sq();
        let mut z = Complex::ZERO;
        for n in 1..=max_iter {
            z = z.square_add(c);
            if z.norm_sq() > escape_radius_sq {
                if n < max_iter {
                    return IterationResult::escaped(n);
                }
                break;
            }
        }
        IterationResult::interior(max_iter)
    }
}

/// Returns `true` if `c` lies inside the main cardioid.
#[inline]
fn in_cardioid(re: f64, im: f64) -> bool {
    let im2 = im * im;
    let q = (re - 0.25) * (re - 0.25) + im2;
    q * (q + (re - 0.25)) <= 0.25 * im2
}

/// Returns `true` if `c` lies inside the period-2 bulb.
#[inline]
fn in_period2_bulb(re: f64, im: f64) -> bool {
    (re + 1.0) * (re + 1.0) + im * im <= 0.0625
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewport::Viewport;

    fn mb() -> Mandelbrot {
        Mandelbrot::default()
    }

    #[test]
    fn origin_hits_iteration_cap() {
        let r = mb().iterate(Complex::ZERO);
        assert!(!r.escaped);
        assert_eq!(r.iterations, 250);
    }

    #[test]
    fn far_point_escapes_on_first_step() {
        assert_eq!(mb().iterate(Complex::new(10.0, 0.0)), IterationResult::escaped(1));
    }

    #[test]
    fn known_escape_count() {
        // c = 1: z₁ = 1, z₂ = 2 (|z|² = 4, not > 4), z₃ = 5 → escapes on step 3.
        assert_eq!(mb().iterate(Complex::new(1.0, 0.0)), IterationResult::escaped(3));
    }

    #[test]
    fn period_two_point_is_interior() {
        // c = -1: 0 → -1 → 0 → -1 …
        assert!(!mb().iterate(Complex::new(-1.0, 0.0)).escaped);
    }

    #[test]
    fn point_off_the_closed_form_regions_stays_bounded() {
        // c ≈ -1.7549 is the centre of the period-3 window on the real axis,
        // outside both shortcut regions, so the loop must exhaust the budget.
        assert!(!in_cardioid(-1.7549, 0.0) && !in_period2_bulb(-1.7549, 0.0));
        let r = mb().iterate(Complex::new(-1.7549, 0.0));
        assert_eq!(r, IterationResult::interior(250));
    }

    #[test]
    fn escape_on_final_step_counts_as_interior() {
        // c = 1 escapes on step 3; with a budget of exactly 3 steps the
        // escape coincides with the cap.
        let m = Mandelbrot::new(FractalParams::new(3, 2.0).unwrap());
        assert_eq!(m.iterate(Complex::new(1.0, 0.0)), IterationResult::interior(3));
        let m = Mandelbrot::new(FractalParams::new(4, 2.0).unwrap());
        assert_eq!(m.iterate(Complex::new(1.0, 0.0)), IterationResult::escaped(3));
    }

    #[test]
    fn escape_time_uses_the_view_mapping() {
        let vp = Viewport::new(100, 100).unwrap();
        // Centre pixel maps to pan / zoom = (0, 0).
        let view = ViewTransform::new(&vp, 0.0, 0.0, 50.0).unwrap();
        assert_eq!(mb().escape_time(&view, 50, 50), IterationResult::interior(250));
        // Pixel 0 maps to -50 / 50 = -1 on both axes: |c|² = 2, escapes.
        assert!(mb().escape_time(&view, 0, 0).escaped);
    }

    #[test]
    fn deterministic_results() {
        let m = mb();
        let points = [
            Complex::new(0.0, 0.0),
            Complex::new(-0.75, 0.1),
            Complex::new(0.3, 0.5),
            Complex::new(-2.0, 0.0),
            Complex::new(1.0, 1.0),
        ];
        let run1: Vec<_> = points.iter().map(|&c| m.iterate(c)).collect();
        let run2: Vec<_> = points.iter().map(|&c| m.iterate(c)).collect();
        assert_eq!(run1, run2);
    }
}
