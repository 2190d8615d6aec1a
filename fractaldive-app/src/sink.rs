use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, error};

use fractaldive_core::ViewTransform;
use fractaldive_explore::FrameSink;
use fractaldive_render::{export_png, RenderBuffer, SnapshotMetadata};

use crate::error::{AppError, Result};

/// Writes every `every`-th presented frame to `dir` as a PNG.
///
/// The first presented frame is always written. Export failures are logged
/// and do not stop the run.
pub struct SnapshotSink {
    dir: PathBuf,
    every: u64,
    max_iterations: u32,
    tick: u64,
    presented: u64,
    written: u64,
}

impl SnapshotSink {
    pub fn new(dir: &Path, every: u64, max_iterations: u32) -> Result<Self> {
        fs::create_dir_all(dir).map_err(|source| AppError::SnapshotDir {
            path: dir.to_path_buf(),
            source,
        })?;
        Ok(Self {
            dir: dir.to_path_buf(),
            every: every.max(1),
            max_iterations,
            tick: 0,
            presented: 0,
            written: 0,
        })
    }

    /// Tick number recorded in the metadata of the next snapshots.
    pub fn set_tick(&mut self, tick: u64) {
        self.tick = tick;
    }

    pub fn written(&self) -> u64 {
        self.written
    }

    fn path_for(&self, frame_index: u64) -> PathBuf {
        self.dir.join(format!("frame_{frame_index:06}.png"))
    }
}

impl FrameSink for SnapshotSink {
    fn present_frame(&mut self, frame: &RenderBuffer, view: &ViewTransform) {
        let index = self.presented;
        self.presented += 1;
        if index % self.every != 0 {
            return;
        }

        let path = self.path_for(index);
        let metadata = SnapshotMetadata::from_view(view, self.tick, self.max_iterations);
        match export_png(frame, &path, &metadata) {
            Ok(()) => {
                self.written += 1;
                debug!(tick = self.tick, path = %path.display(), "Snapshot written");
            }
            Err(e) => error!("Failed to write snapshot {}: {e}", path.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use fractaldive_core::Viewport;

    use super::*;

    #[test]
    fn writes_every_nth_frame() {
        let dir = std::env::temp_dir().join(format!("fractaldive_sink_{}", std::process::id()));
        let vp = Viewport::new(8, 8).unwrap();
        let frame = RenderBuffer::new(&vp);
        let view = ViewTransform::new(&vp, 0.0, 0.0, 2.0).unwrap();

        let mut sink = SnapshotSink::new(&dir, 3, 250).unwrap();
        for tick in 0..7 {
            sink.set_tick(tick);
            sink.present_frame(&frame, &view);
        }

        assert_eq!(sink.written(), 3);
        assert!(dir.join("frame_000000.png").exists());
        assert!(dir.join("frame_000003.png").exists());
        assert!(dir.join("frame_000006.png").exists());
        assert!(!dir.join("frame_000001.png").exists());
        fs::remove_dir_all(&dir).ok();
    }
}
