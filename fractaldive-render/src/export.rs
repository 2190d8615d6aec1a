//! PNG snapshots with embedded view metadata (tEXt chunks).

use std::io::BufWriter;
use std::path::Path;

use tracing::debug;

use fractaldive_core::ViewTransform;

use crate::buffer::RenderBuffer;

/// Metadata embedded in a snapshot as tEXt chunks.
#[derive(Debug, Clone, PartialEq)]
pub struct SnapshotMetadata {
    pub tick: u64,
    pub zoom: f64,
    pub pan_x: f64,
    pub pan_y: f64,
    pub center_re: f64,
    pub center_im: f64,
    pub max_iterations: u32,
}

impl SnapshotMetadata {
    pub fn from_view(view: &ViewTransform, tick: u64, max_iterations: u32) -> Self {
        let (pan_x, pan_y) = view.pan();
        let center = view.center();
        Self {
            tick,
            zoom: view.zoom(),
            pan_x,
            pan_y,
            center_re: center.re,
            center_im: center.im,
            max_iterations,
        }
    }
}

/// Write an RGBA frame as a PNG file with embedded view metadata.
pub fn export_png(frame: &RenderBuffer, path: &Path, metadata: &SnapshotMetadata) -> crate::Result<()> {
    let file = std::fs::File::create(path)?;
    let writer = BufWriter::new(file);

    let mut encoder = png::Encoder::new(writer, frame.width, frame.height);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_compression(png::Compression::Default);

    encoder.add_text_chunk("Software".to_string(), "FractalDive".to_string())?;
    encoder.add_text_chunk("Description".to_string(), build_description(metadata))?;
    for (key, value) in build_metadata_pairs(metadata, frame) {
        encoder.add_text_chunk(key, value)?;
    }

    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(&frame.pixels)?;

    debug!(
        width = frame.width,
        height = frame.height,
        path = %path.display(),
        "Exported snapshot"
    );
    Ok(())
}

fn build_description(meta: &SnapshotMetadata) -> String {
    format!(
        "Mandelbrot - Center: {} {}i, Zoom: {}, Tick: {}",
        meta.center_re, meta.center_im, meta.zoom, meta.tick,
    )
}

fn build_metadata_pairs(meta: &SnapshotMetadata, frame: &RenderBuffer) -> Vec<(String, String)> {
    vec![
        ("FractalDive.Tick".into(), meta.tick.to_string()),
        ("FractalDive.Zoom".into(), meta.zoom.to_string()),
        ("FractalDive.PanX".into(), meta.pan_x.to_string()),
        ("FractalDive.PanY".into(), meta.pan_y.to_string()),
        ("FractalDive.CenterRe".into(), meta.center_re.to_string()),
        ("FractalDive.CenterIm".into(), meta.center_im.to_string()),
        ("FractalDive.MaxIterations".into(), meta.max_iterations.to_string()),
        (
            "FractalDive.Resolution".into(),
            format!("{}x{}", frame.width, frame.height),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use fractaldive_core::Viewport;
    use std::io::Read;

    fn sample() -> (RenderBuffer, SnapshotMetadata) {
        let vp = Viewport::new(4, 3).unwrap();
        let view = ViewTransform::new(&vp, 100.0, 182.0, 30.0).unwrap();
        (RenderBuffer::new(&vp), SnapshotMetadata::from_view(&view, 42, 250))
    }

    #[test]
    fn export_creates_valid_png() {
        let (frame, meta) = sample();
        let dir = std::env::temp_dir().join("fractaldive_test_export");
        let _ = std::fs::create_dir_all(&dir);
        let path = dir.join("snapshot.png");
        export_png(&frame, &path, &meta).expect("export should succeed");

        let mut file = std::fs::File::open(&path).expect("file should exist");
        let mut header = [0u8; 8];
        file.read_exact(&mut header).expect("should read header");
        assert_eq!(&header, b"\x89PNG\r\n\x1a\n", "valid PNG signature");

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn export_embeds_text_chunks() {
        let (frame, meta) = sample();
        let dir = std::env::temp_dir().join("fractaldive_test_export_meta");
        let _ = std::fs::create_dir_all(&dir);
        let path = dir.join("snapshot_meta.png");
        export_png(&frame, &path, &meta).expect("export should succeed");

        let decoder = png::Decoder::new(std::fs::File::open(&path).expect("file should exist"));
        let reader = decoder.read_info().expect("should read info");
        let info = reader.info();
        assert_eq!((info.width, info.height), (4, 3));
        let texts: Vec<_> = info.uncompressed_latin1_text.iter().collect();
        assert!(texts
            .iter()
            .any(|t| t.keyword == "Software" && t.text == "FractalDive"));
        assert!(texts
            .iter()
            .any(|t| t.keyword == "FractalDive.Tick" && t.text == "42"));
        assert!(texts
            .iter()
            .any(|t| t.keyword == "FractalDive.Resolution" && t.text == "4x3"));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn metadata_from_view() {
        let (_, meta) = sample();
        assert_eq!(meta.zoom, 30.0);
        assert_eq!((meta.pan_x, meta.pan_y), (100.0, 182.0));
        assert!((meta.center_re - 100.0 / 30.0).abs() < 1e-12);
    }
}
