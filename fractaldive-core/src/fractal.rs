use crate::error::CoreError;

/// The result of iterating a single point.
///
/// `iterations` is the step on which the orbit left the escape radius, or
/// `max_iterations` when it never did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IterationResult {
    pub iterations: u32,
    pub escaped: bool,
}

impl IterationResult {
    #[inline]
    pub fn escaped(iterations: u32) -> Self {
        Self {
            iterations,
            escaped: true,
        }
    }

    #[inline]
    pub fn interior(max_iterations: u32) -> Self {
        Self {
            iterations: max_iterations,
            escaped: false,
        }
    }

    /// Grayscale detail value: `floor(iterations / (max - 1) * 255)` for
    /// escaped points, `0` for interior points.
    ///
    /// Escaped points never reach `max_iterations`, so the result always
    /// fits in a byte.
    #[inline]
    pub fn grey_index(&self, max_iterations: u32) -> u8 {
        if !self.escaped {
            return 0;
        }
        let t = self.iterations as f64 / (max_iterations - 1) as f64;
        (t * 255.0).floor().min(255.0) as u8
    }
}

/// Parameters controlling fractal iteration.
///
/// The cached `escape_radius_sq` field is recomputed on deserialization so
/// configuration files only ever carry the radius itself.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct FractalParams {
    /// Maximum number of iterations before declaring a point interior.
    pub max_iterations: u32,

    /// Bailout radius; the loop compares `|z|²` against its square.
    pub escape_radius: f64,

    #[serde(skip)]
    escape_radius_sq: f64,
}

impl<'de> serde::Deserialize<'de> for FractalParams {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        struct Raw {
            max_iterations: u32,
            #[serde(default = "default_radius")]
            escape_radius: f64,
        }
        fn default_radius() -> f64 {
            FractalParams::DEFAULT_ESCAPE_RADIUS
        }
        let raw = Raw::deserialize(deserializer)?;
        FractalParams::new(raw.max_iterations, raw.escape_radius).map_err(serde::de::Error::custom)
    }
}

impl FractalParams {
    pub const DEFAULT_MAX_ITERATIONS: u32 = 250;
    pub const DEFAULT_ESCAPE_RADIUS: f64 = 2.0;

    pub fn new(max_iterations: u32, escape_radius: f64) -> crate::Result<Self> {
        // The grey index divides by `max_iterations - 1`.
        if max_iterations < 2 {
            return Err(CoreError::InvalidMaxIterations(max_iterations));
        }
        if escape_radius <= 0.0 || !escape_radius.is_finite() {
            return Err(CoreError::InvalidEscapeRadius(escape_radius));
        }
        Ok(Self {
            max_iterations,
            escape_radius,
            escape_radius_sq: escape_radius * escape_radius,
        })
    }

    /// Pre-computed squared escape radius for the inner loop.
    #[inline]
    pub fn escape_radius_sq(&self) -> f64 {
        self.escape_radius_sq
    }
}

impl Default for FractalParams {
    fn default() -> Self {
        Self {
            max_iterations: Self::DEFAULT_MAX_ITERATIONS,
            escape_radius: Self::DEFAULT_ESCAPE_RADIUS,
            escape_radius_sq: Self::DEFAULT_ESCAPE_RADIUS * Self::DEFAULT_ESCAPE_RADIUS,
        }
    }
}
