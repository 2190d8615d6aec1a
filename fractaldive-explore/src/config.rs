use serde::{Deserialize, Serialize};

use crate::error::ExploreError;

/// Tuning for the exploration controller.
///
/// Every field has a default, so a partial JSON object deserializes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExplorerConfig {
    /// Multiplier applied per zoom step.
    #[serde(default = "default_zoom_factor")]
    pub zoom_factor: f64,
    /// Above this detail score the controller stops panning and zooms.
    #[serde(default = "default_saturation_threshold")]
    pub saturation_threshold: f64,
    /// Largest pan per axis in one tick while committing to an offset.
    #[serde(default = "default_pan_step")]
    pub pan_step: f64,
    #[serde(default = "default_probe_trials")]
    pub probe_trials: u32,
    /// Candidate offsets are drawn from `[-probe_radius, probe_radius]`.
    #[serde(default = "default_probe_radius")]
    pub probe_radius: u32,
    /// How the view picks its next pan when the frame is not saturated.
    #[serde(default)]
    pub steering: Steering,
    /// Detail below this means the view is lost inside the set. 0 disables.
    #[serde(default = "default_reanchor_below")]
    pub reanchor_below: f64,
    /// Zoom beyond which `f64` runs out of precision. `None` disables.
    #[serde(default = "default_max_zoom")]
    pub max_zoom: Option<f64>,
}

/// Pan strategy used between saturation and re-anchor checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Steering {
    /// Try random offsets at the next zoom level and commit to the first
    /// that beats the unpanned frame.
    #[default]
    Probe,
    /// Score a grid of tiles and drift towards the busiest every tick.
    TileGrid {
        #[serde(default = "default_tiles")]
        columns: u32,
        #[serde(default = "default_tiles")]
        rows: u32,
        /// The pan per tick is the distance to the tile centre over this.
        #[serde(default = "default_pan_divisor")]
        pan_divisor: u32,
    },
}

impl Steering {
    /// A 5×5 grid moving a twentieth of the way each tick.
    pub fn tile_grid() -> Self {
        Self::TileGrid {
            columns: default_tiles(),
            rows: default_tiles(),
            pan_divisor: default_pan_divisor(),
        }
    }
}

fn default_tiles() -> u32 {
    5
}
fn default_pan_divisor() -> u32 {
    20
}

fn default_zoom_factor() -> f64 {
    1.05
}
fn default_saturation_threshold() -> f64 {
    0.9
}
fn default_pan_step() -> f64 {
    5.0
}
fn default_probe_trials() -> u32 {
    3
}
fn default_probe_radius() -> u32 {
    20
}
fn default_reanchor_below() -> f64 {
    0.005
}
fn default_max_zoom() -> Option<f64> {
    Some(1e13)
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            zoom_factor: default_zoom_factor(),
            saturation_threshold: default_saturation_threshold(),
            pan_step: default_pan_step(),
            probe_trials: default_probe_trials(),
            probe_radius: default_probe_radius(),
            steering: Steering::default(),
            reanchor_below: default_reanchor_below(),
            max_zoom: default_max_zoom(),
        }
    }
}

pub(crate) fn unit_interval(name: &str, value: f64) -> Result<(), ExploreError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(ExploreError::InvalidConfig(format!(
            "{name} must be within [0, 1], got {value}"
        )));
    }
    Ok(())
}

fn positive(name: &str, value: f64) -> Result<(), ExploreError> {
    if value <= 0.0 || !value.is_finite() {
        return Err(ExploreError::InvalidConfig(format!(
            "{name} must be finite and positive, got {value}"
        )));
    }
    Ok(())
}

impl ExplorerConfig {
    pub fn validate(&self) -> Result<(), ExploreError> {
        positive("zoom_factor", self.zoom_factor)?;
        positive("pan_step", self.pan_step)?;
        unit_interval("saturation_threshold", self.saturation_threshold)?;
        unit_interval("reanchor_below", self.reanchor_below)?;
        if let Steering::TileGrid {
            columns,
            rows,
            pan_divisor,
        } = self.steering
        {
            if columns == 0 || rows == 0 || pan_divisor == 0 {
                return Err(ExploreError::InvalidConfig(format!(
                    "tile grid needs positive columns, rows and pan_divisor, \
                     got {columns}, {rows}, {pan_divisor}"
                )));
            }
        }
        if self.probe_trials == 0 {
            return Err(ExploreError::InvalidConfig(
                "probe_trials must be at least 1".into(),
            ));
        }
        if i32::try_from(self.probe_radius).is_err() {
            return Err(ExploreError::InvalidConfig(format!(
                "probe_radius {} is out of range",
                self.probe_radius
            )));
        }
        if let Some(max_zoom) = self.max_zoom {
            positive("max_zoom", max_zoom)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = ExplorerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.zoom_factor, 1.05);
        assert_eq!(config.saturation_threshold, 0.9);
        assert_eq!(config.pan_step, 5.0);
        assert_eq!(config.probe_trials, 3);
        assert_eq!(config.probe_radius, 20);
        assert_eq!(config.max_zoom, Some(1e13));
        assert_eq!(config.steering, Steering::Probe);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config: ExplorerConfig =
            serde_json::from_str(r#"{"pan_step": 2.5, "steering": {"mode": "tile_grid"}}"#)
                .unwrap();
        assert_eq!(config.pan_step, 2.5);
        assert_eq!(config.steering, Steering::tile_grid());
        assert_eq!(config.zoom_factor, 1.05);
    }

    #[test]
    fn null_max_zoom_disables_limit() {
        let config: ExplorerConfig = serde_json::from_str(r#"{"max_zoom": null}"#).unwrap();
        assert_eq!(config.max_zoom, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn tile_grid_fields_are_optional() {
        let config: ExplorerConfig =
            serde_json::from_str(r#"{"steering": {"mode": "tile_grid", "columns": 8}}"#).unwrap();
        assert_eq!(
            config.steering,
            Steering::TileGrid {
                columns: 8,
                rows: 5,
                pan_divisor: 20,
            }
        );
        let config: ExplorerConfig =
            serde_json::from_str(r#"{"steering": {"mode": "probe"}}"#).unwrap();
        assert_eq!(config.steering, Steering::Probe);
    }

    #[test]
    fn rejects_bad_values() {
        let cases = [
            ExplorerConfig {
                zoom_factor: 0.0,
                ..Default::default()
            },
            ExplorerConfig {
                zoom_factor: f64::NAN,
                ..Default::default()
            },
            ExplorerConfig {
                pan_step: -1.0,
                ..Default::default()
            },
            ExplorerConfig {
                saturation_threshold: 1.5,
                ..Default::default()
            },
            ExplorerConfig {
                probe_trials: 0,
                ..Default::default()
            },
            ExplorerConfig {
                steering: Steering::TileGrid {
                    columns: 5,
                    rows: 5,
                    pan_divisor: 0,
                },
                ..Default::default()
            },
            ExplorerConfig {
                max_zoom: Some(f64::INFINITY),
                ..Default::default()
            },
        ];
        for config in cases {
            assert!(
                matches!(config.validate(), Err(ExploreError::InvalidConfig(_))),
                "{config:?} should be rejected"
            );
        }
    }
}
