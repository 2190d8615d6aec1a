//! The autonomous exploration controller.
//!
//! Each [`Explorer::tick`] looks at the grey buffer left by the previous
//! render. A busy frame is zoomed straight in. Otherwise the view either
//! steps towards a previously chosen pan offset or probes a handful of
//! random offsets at the next zoom level, keeping the first that beats the
//! unpanned frame. Probes render grey-only and are never presented. With
//! [`Steering::TileGrid`] the probe is replaced by a drift towards the
//! busiest tile of the current frame.

use fractaldive_core::{ViewTransform, ZoomDirection, ZoomFactor};
use fractaldive_render::RenderMode;
use tracing::{debug, info, trace};

use crate::config::{ExplorerConfig, Steering};
use crate::detail::DetailMeter;
use crate::offsets::OffsetSource;
use crate::pointer::PointerClick;
use crate::ports::{FrameSink, FrameSource};
use crate::steering::TileGrid;

/// What the most recent tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Zooming,
    Probing,
    CommittingPan,
    Reanchoring,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    /// Detail was above the saturation threshold; zoomed in at the centre.
    Saturated { detail: f64 },
    /// The view was lost or too deep and went back home.
    Reanchored { detail: f64 },
    /// Moved one step towards the pending offset.
    PanStep { dx: f64, dy: f64 },
    /// A probe trial beat the unpanned frame; its offset is now pending.
    ProbeAccepted {
        dx: i32,
        dy: i32,
        initial: f64,
        improved: f64,
        trial: u32,
    },
    /// No trial helped; zoomed in once more instead.
    ProbeExhausted { initial: f64 },
    /// Drifted towards the busiest tile, then zoomed in.
    TileSteer {
        dx: f64,
        dy: f64,
        column: u32,
        row: u32,
    },
}

impl TickOutcome {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Saturated { .. } => "saturated",
            Self::Reanchored { .. } => "reanchored",
            Self::PanStep { .. } => "pan_step",
            Self::ProbeAccepted { .. } => "probe_accepted",
            Self::ProbeExhausted { .. } => "probe_exhausted",
            Self::TileSteer { .. } => "tile_steer",
        }
    }

    /// Whether the tick rendered and presented a full frame.
    pub fn presented(&self) -> bool {
        !matches!(self, Self::ProbeAccepted { .. })
    }
}

pub struct Explorer<S, M, O> {
    config: ExplorerConfig,
    zoom_factor: ZoomFactor,
    probe_radius: i32,
    tiles: Option<TileGrid>,
    home: ViewTransform,
    view: ViewTransform,
    source: S,
    meter: M,
    offsets: O,
    remainder: (f64, f64),
    phase: Phase,
    ticks: u64,
}

impl<S: FrameSource, M: DetailMeter, O: OffsetSource> Explorer<S, M, O> {
    /// Start at `home`. The configuration is validated here; nothing after
    /// construction can fail.
    pub fn new(
        config: ExplorerConfig,
        home: ViewTransform,
        source: S,
        meter: M,
        offsets: O,
    ) -> crate::Result<Self> {
        config.validate()?;
        let zoom_factor = ZoomFactor::new(config.zoom_factor)?;
        let probe_radius = i32::try_from(config.probe_radius).map_err(|_| {
            crate::ExploreError::InvalidConfig("probe_radius is out of range".into())
        })?;
        let tiles = match config.steering {
            Steering::Probe => None,
            Steering::TileGrid {
                columns,
                rows,
                pan_divisor,
            } => Some(TileGrid::new(&source.viewport(), columns, rows, pan_divisor)?),
        };
        Ok(Self {
            config,
            zoom_factor,
            probe_radius,
            tiles,
            home,
            view: home,
            source,
            meter,
            offsets,
            remainder: (0.0, 0.0),
            phase: Phase::default(),
            ticks: 0,
        })
    }

    pub fn config(&self) -> &ExplorerConfig {
        &self.config
    }

    pub fn view(&self) -> &ViewTransform {
        &self.view
    }

    pub fn home(&self) -> &ViewTransform {
        &self.home
    }

    /// Pan still owed to an accepted probe offset.
    pub fn remainder(&self) -> (f64, f64) {
        self.remainder
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Score of the grey buffer from the most recent render.
    pub fn detail(&self) -> f64 {
        self.meter.measure(self.source.grey())
    }

    /// Full render of the current view, presented to `sink`.
    pub fn render_initial<K: FrameSink + ?Sized>(&mut self, sink: &mut K) {
        self.present(sink);
    }

    /// Advance the exploration by one display frame.
    pub fn tick<K: FrameSink + ?Sized>(&mut self, sink: &mut K) -> TickOutcome {
        self.ticks += 1;
        let detail = self.detail();

        let outcome = if detail > self.config.saturation_threshold {
            self.remainder = (0.0, 0.0);
            self.phase = Phase::Zooming;
            self.zoom_in();
            self.present(sink);
            TickOutcome::Saturated { detail }
        } else if self.is_lost(detail) {
            self.reanchor(detail, sink);
            TickOutcome::Reanchored { detail }
        } else if let Some(outcome) = self.steer(sink) {
            outcome
        } else if self.remainder != (0.0, 0.0) {
            self.commit_step(sink)
        } else {
            self.probe(sink)
        };

        debug!(
            tick = self.ticks,
            outcome = outcome.kind(),
            detail,
            zoom = self.view.zoom(),
            remainder_x = self.remainder.0,
            remainder_y = self.remainder.1,
            "Tick"
        );
        outcome
    }

    /// Apply a pointer click and present the result. Drops any pending pan.
    pub fn click<K: FrameSink + ?Sized>(&mut self, click: PointerClick, sink: &mut K) {
        click.apply(&mut self.view);
        self.remainder = (0.0, 0.0);
        debug!(?click, zoom = self.view.zoom(), "Pointer click");
        self.present(sink);
    }

    fn present<K: FrameSink + ?Sized>(&mut self, sink: &mut K) {
        self.source.generate(&self.view, RenderMode::Full);
        sink.present_frame(self.source.frame(), &self.view);
    }

    fn zoom_in(&mut self) {
        self.view.zoom_at_center(self.zoom_factor, ZoomDirection::In);
    }

    fn measure_grey(&mut self, view: &ViewTransform) -> f64 {
        self.source.generate(view, RenderMode::GreyOnly);
        self.meter.measure(self.source.grey())
    }

    fn is_lost(&self, detail: f64) -> bool {
        detail < self.config.reanchor_below
            || self
                .config
                .max_zoom
                .is_some_and(|limit| self.view.zoom() > limit)
    }

    fn reanchor<K: FrameSink + ?Sized>(&mut self, detail: f64, sink: &mut K) {
        info!(
            detail,
            zoom = self.view.zoom(),
            center = %self.view.center(),
            "Re-anchoring to home view"
        );
        self.view = self.home;
        self.remainder = (0.0, 0.0);
        self.phase = Phase::Reanchoring;
        self.present(sink);
    }

    fn commit_step<K: FrameSink + ?Sized>(&mut self, sink: &mut K) -> TickOutcome {
        let limit = self.config.pan_step;
        let dx = self.remainder.0.clamp(-limit, limit);
        let dy = self.remainder.1.clamp(-limit, limit);
        self.remainder.0 -= dx;
        self.remainder.1 -= dy;
        self.view.pan_relative(dx, dy);
        self.phase = Phase::CommittingPan;
        self.present(sink);
        TickOutcome::PanStep { dx, dy }
    }

    /// Tile-grid step. `None` when steering by probes.
    fn steer<K: FrameSink + ?Sized>(&mut self, sink: &mut K) -> Option<TickOutcome> {
        let tiles = self.tiles.as_ref()?;
        let tile = tiles.busiest(&self.meter, self.source.grey());
        let (dx, dy) = tiles.pan_towards(&tile);
        trace!(
            column = tile.column,
            row = tile.row,
            score = tile.score,
            dx,
            dy,
            "Busiest tile"
        );
        self.view.pan_relative(dx, dy);
        self.phase = Phase::Zooming;
        self.zoom_in();
        self.present(sink);
        Some(TickOutcome::TileSteer {
            dx,
            dy,
            column: tile.column,
            row: tile.row,
        })
    }

    fn probe<K: FrameSink + ?Sized>(&mut self, sink: &mut K) -> TickOutcome {
        self.phase = Phase::Probing;
        self.zoom_in();
        let anchor = self.view;
        let initial = self.measure_grey(&anchor);

        let radius = self.probe_radius;
        let mut accepted = None;
        for trial in 1..=self.config.probe_trials {
            let dx = self.offsets.next_in_range(-radius, radius);
            let dy = self.offsets.next_in_range(-radius, radius);
            let candidate = anchor.panned(f64::from(dx), f64::from(dy));
            let detail = self.measure_grey(&candidate);
            trace!(trial, dx, dy, detail, initial, "Probe trial");
            if detail > initial {
                accepted = Some((dx, dy, detail, trial));
                break;
            }
        }
        self.view = anchor;

        match accepted {
            Some((dx, dy, improved, trial)) if (dx, dy) != (0, 0) => {
                self.remainder = (f64::from(dx), f64::from(dy));
                TickOutcome::ProbeAccepted {
                    dx,
                    dy,
                    initial,
                    improved,
                    trial,
                }
            }
            _ => {
                self.phase = Phase::Zooming;
                self.zoom_in();
                self.present(sink);
                TickOutcome::ProbeExhausted { initial }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
