use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use fractaldive_core::{Complex, FractalParams, ViewTransform, Viewport};
use fractaldive_explore::{DetailMetric, ExplorerConfig};
use fractaldive_render::Palette;

use crate::error::{AppError, Result};

// ---------------------------------------------------------------------------
// Home view
// ---------------------------------------------------------------------------

/// Where exploration starts, and where it returns after re-anchoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomeView {
    #[serde(default = "default_center_re")]
    pub center_re: f64,
    #[serde(default)]
    pub center_im: f64,
    /// Pixels per unit of the fractal plane. `None` fits the whole set.
    #[serde(default)]
    pub zoom: Option<f64>,
}

fn default_center_re() -> f64 {
    -0.75
}

impl Default for HomeView {
    fn default() -> Self {
        Self {
            center_re: default_center_re(),
            center_im: 0.0,
            zoom: None,
        }
    }
}

impl HomeView {
    pub fn transform(&self, viewport: &Viewport) -> Result<ViewTransform> {
        let center = Complex::new(self.center_re, self.center_im);
        Ok(match self.zoom {
            Some(zoom) => ViewTransform::centered(viewport, center, zoom)?,
            None => ViewTransform::fit(viewport, center),
        })
    }
}

// ---------------------------------------------------------------------------
// Application config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
    #[serde(default = "default_max_iterations")]
    pub max_iterations: u32,
    #[serde(default)]
    pub home: HomeView,
    /// Seed for probe offsets. Unseeded runs are not reproducible.
    #[serde(default)]
    pub seed: Option<u64>,
    /// `#RRGGBB` entries replacing the built-in colour table.
    #[serde(default)]
    pub palette_table: Option<Vec<String>>,
    /// Detail meter scoring frames, probes and tiles.
    #[serde(default)]
    pub metric: DetailMetric,
    #[serde(default)]
    pub explorer: ExplorerConfig,
}

fn default_width() -> u32 {
    512
}
fn default_height() -> u32 {
    512
}
fn default_max_iterations() -> u32 {
    FractalParams::DEFAULT_MAX_ITERATIONS
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            max_iterations: default_max_iterations(),
            home: HomeView::default(),
            seed: None,
            palette_table: None,
            metric: DetailMetric::default(),
            explorer: ExplorerConfig::default(),
        }
    }
}

impl AppConfig {
    /// Read a JSON config. Missing keys take their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|source| AppError::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        let config = serde_json::from_str::<AppConfig>(&json).map_err(|source| {
            AppError::ParseConfig {
                path: path.to_path_buf(),
                source,
            }
        })?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                debug!("No config file given, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn viewport(&self) -> Result<Viewport> {
        Ok(Viewport::new(self.width, self.height)?)
    }

    pub fn params(&self) -> Result<FractalParams> {
        Ok(FractalParams::new(
            self.max_iterations,
            FractalParams::DEFAULT_ESCAPE_RADIUS,
        )?)
    }

    pub fn metric(&self) -> Result<DetailMetric> {
        self.metric.validate()?;
        Ok(self.metric)
    }

    pub fn palette(&self) -> Result<Palette> {
        match &self.palette_table {
            Some(table) => Ok(Palette::from_hex_table(table.as_slice())?),
            None => Ok(Palette::default()),
        }
    }
}
